// Host-side tests for pointer unprojection.

use aurora_core::camera::{pointer_ndc, unproject_to_plane, Camera};
use aurora_core::constants::{CAMERA_FOVY_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Vec2, Vec3};

fn scene_camera(aspect: f32) -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, CAMERA_Z),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect,
        fovy_radians: CAMERA_FOVY_DEG.to_radians(),
        znear: CAMERA_ZNEAR,
        zfar: CAMERA_ZFAR,
    }
}

#[test]
fn ndc_spans_the_viewport_with_y_up() {
    assert!(pointer_ndc(0.0, 0.0, 1280.0, 720.0).distance(Vec2::new(-1.0, 1.0)) < 1e-6);
    assert!(pointer_ndc(1280.0, 720.0, 1280.0, 720.0).distance(Vec2::new(1.0, -1.0)) < 1e-6);
    assert!(pointer_ndc(640.0, 360.0, 1280.0, 720.0).length() < 1e-6);
}

#[test]
fn degenerate_viewport_maps_to_center() {
    assert_eq!(pointer_ndc(100.0, 100.0, 0.0, 0.0), Vec2::ZERO);
}

#[test]
fn center_of_screen_unprojects_to_the_origin() {
    let camera = scene_camera(16.0 / 9.0);
    let hit = unproject_to_plane(&camera, Vec2::ZERO).expect("center ray hits the plane");
    assert!(hit.length() < 1e-4, "expected origin, got {hit:?}");
}

#[test]
fn unprojected_points_land_on_the_z_plane() {
    let camera = scene_camera(1.6);
    for ndc in [
        Vec2::new(0.3, -0.7),
        Vec2::new(-0.9, 0.9),
        Vec2::new(1.0, 1.0),
    ] {
        let hit = unproject_to_plane(&camera, ndc).expect("ray hits the plane");
        assert!(hit.z.abs() < 1e-4);
    }
}

#[test]
fn horizontal_ndc_maps_to_signed_world_x() {
    let camera = scene_camera(16.0 / 9.0);
    let right = unproject_to_plane(&camera, Vec2::new(0.8, 0.0)).unwrap();
    let left = unproject_to_plane(&camera, Vec2::new(-0.8, 0.0)).unwrap();
    assert!(right.x > 0.0 && left.x < 0.0);
    assert!((right.x + left.x).abs() < 1e-4, "projection should be symmetric");
}

#[test]
fn matrices_agree_with_a_manual_transform() {
    let camera = scene_camera(1.0);
    let vp = camera.projection_matrix() * camera.view_matrix();
    // the camera looks down -z, so a point in front of it lands inside clip space
    let clip = vp * Vec3::new(0.0, 0.0, 0.0).extend(1.0);
    let ndc_z = clip.z / clip.w;
    assert!((0.0..=1.0).contains(&ndc_z));
}
