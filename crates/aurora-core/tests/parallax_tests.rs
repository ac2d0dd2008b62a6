// Host-side tests for tilt smoothing and float-node layout.

use aurora_core::constants::{
    FLOAT_NODE_BASE_Z_PX, FLOAT_NODE_Z_STEP_PX, NODE_DEPTH_FACTOR, RACK_DEPTH_FACTOR,
    STAGGER_AMPLITUDE,
};
use aurora_core::parallax::{
    content_offset, flight_stagger, float_node_offset, lerp, TiltState,
};
use glam::Vec2;

#[test]
fn lerp_blends_between_endpoints() {
    assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
    assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
    assert!((lerp(2.0, 4.0, 0.5) - 3.0).abs() < 1e-6);
}

#[test]
fn pointer_at_viewport_center_targets_zero() {
    let mut tilt = TiltState::default();
    tilt.set_target_from_pointer(Vec2::new(640.0, 360.0), Vec2::new(1280.0, 720.0));
    assert!(tilt.target.length() < 1e-6);
}

#[test]
fn pointer_at_corners_targets_unit_range() {
    let viewport = Vec2::new(1920.0, 1080.0);
    let mut tilt = TiltState::default();
    tilt.set_target_from_pointer(Vec2::ZERO, viewport);
    assert!((tilt.target - Vec2::new(-1.0, -1.0)).length() < 1e-6);
    tilt.set_target_from_pointer(viewport, viewport);
    assert!((tilt.target - Vec2::new(1.0, 1.0)).length() < 1e-6);
}

#[test]
fn zero_viewport_leaves_target_untouched() {
    let mut tilt = TiltState::default();
    tilt.set_target_from_pointer(Vec2::new(5.0, 5.0), Vec2::ZERO);
    assert_eq!(tilt.target, Vec2::ZERO);
}

#[test]
fn smoothing_converges_monotonically_without_stagger() {
    let mut tilt = TiltState {
        target: Vec2::new(0.8, -0.6),
        current: Vec2::ZERO,
    };
    let mut prev = tilt.current.distance(tilt.target);
    for _ in 0..200 {
        tilt.step(Vec2::ZERO);
        let d = tilt.current.distance(tilt.target);
        assert!(d <= prev + 1e-6, "tilt moved away from its target");
        prev = d;
    }
    assert!(prev < 1e-3);
}

#[test]
fn perspective_origin_is_centered_at_rest() {
    let tilt = TiltState::default();
    assert_eq!(tilt.perspective_origin(), (50.0, 50.0));
}

#[test]
fn stagger_stays_within_amplitude() {
    for i in 0..1000 {
        let s = flight_stagger(i as f32 * 0.031);
        assert!(s.x.abs() <= STAGGER_AMPLITUDE + 1e-6);
        assert!(s.y.abs() <= STAGGER_AMPLITUDE + 1e-6);
    }
}

#[test]
fn float_offsets_alternate_by_parity() {
    let target = Vec2::new(1.0, 1.0);
    let even = float_node_offset(0, false, target);
    let odd = float_node_offset(1, false, target);
    assert!(even.x_px > 0.0 && odd.x_px < 0.0);
    // y sign flips on indices not divisible by three
    assert!(even.y_px > 0.0);
    assert!(float_node_offset(1, false, target).y_px < 0.0);
    assert!(float_node_offset(3, false, target).y_px > 0.0);
}

#[test]
fn racks_ride_a_shallower_depth_layer() {
    let target = Vec2::new(1.0, 0.0);
    let rack = float_node_offset(0, true, target);
    let node = float_node_offset(0, false, target);
    assert!((rack.x_px / node.x_px - RACK_DEPTH_FACTOR / NODE_DEPTH_FACTOR).abs() < 1e-6);
}

#[test]
fn float_z_grows_with_index() {
    for i in 0..6 {
        let off = float_node_offset(i, false, Vec2::ZERO);
        assert_eq!(
            off.z_px,
            FLOAT_NODE_BASE_Z_PX + i as f32 * FLOAT_NODE_Z_STEP_PX
        );
    }
}

#[test]
fn content_offset_is_zero_at_center_and_bounded() {
    assert!(content_offset(Vec2::splat(0.5)).length() < 1e-6);
    let corner = content_offset(Vec2::new(1.0, 0.0));
    assert!((corner.x - 5.0).abs() < 1e-6);
    assert!((corner.y + 5.0).abs() < 1e-6);
}
