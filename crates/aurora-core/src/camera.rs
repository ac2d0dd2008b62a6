//! Camera description and pointer unprojection shared with the web frontend.
//!
//! These types avoid platform APIs so the projection math can be exercised on
//! the host. The web layer feeds client pixel coordinates through
//! [`pointer_ndc`] and [`unproject_to_plane`] to get the world-space point the
//! tube chains chase.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Client pixel coordinates to normalized device coordinates, y up.
#[inline]
pub fn pointer_ndc(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Vec2 {
    if viewport_w <= 0.0 || viewport_h <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / viewport_w) * 2.0 - 1.0,
        -(client_y / viewport_h) * 2.0 + 1.0,
    )
}

/// World point where the pick ray through `ndc` crosses the z = 0 plane.
///
/// Returns `None` when the ray runs parallel to the plane.
pub fn unproject_to_plane(camera: &Camera, ndc: Vec2) -> Option<Vec3> {
    let inv = (camera.projection_matrix() * camera.view_matrix()).inverse();
    let mid = inv * Vec4::new(ndc.x, ndc.y, 0.5, 1.0);
    if mid.w.abs() < 1e-9 {
        return None;
    }
    let world = mid.truncate() / mid.w;
    let dir = (world - camera.eye).normalize_or_zero();
    if dir.z.abs() < 1e-6 {
        return None;
    }
    let distance = -camera.eye.z / dir.z;
    Some(camera.eye + dir * distance)
}
