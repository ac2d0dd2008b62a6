// Sanity checks on the tuning constants and their relationships.

use aurora_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn interpolation_coefficients_are_valid_blend_weights() {
    assert!(TRAIL_FOLLOW > 0.0 && TRAIL_FOLLOW < 1.0);
    assert!(HEAD_LERP_BASE > 0.0 && HEAD_LERP_BASE < 1.0);
    assert!(HEAD_LERP_STEP > 0.0 && HEAD_LERP_STEP < HEAD_LERP_BASE);
    assert!(HEAD_LERP_MIN > 0.0);
    assert!(TILT_LERP > 0.0 && TILT_LERP < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tube_scene_dimensions_are_sane() {
    assert!(TUBE_COUNT >= 1);
    assert!(TUBE_POINTS >= 2);
    assert!(TUBE_SEGMENTS >= 1);
    assert!(TUBE_RADIAL >= 3, "a ring needs at least a triangle");
    assert!(TUBE_BASE_RADIUS > 0.0);
    assert!(TUBE_RADIUS_STEP >= 0.0);
    // the faintest configured tube is still visible
    assert!(TUBE_BASE_OPACITY - TUBE_OPACITY_STEP * (TUBE_COUNT - 1) as f32 > 0.0);
    assert_eq!(DEFAULT_TUBE_COLORS.len(), TUBE_COUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_planes_are_ordered() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_Z > CAMERA_ZNEAR && CAMERA_Z < CAMERA_ZFAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timers_and_ranges_are_positive() {
    assert!(LOADER_COMPLETE_AFTER_MS > 0.0);
    assert!(LOADER_HIDE_AFTER_MS > 0.0);
    assert!(HUD_TICK_MS > 0);
    assert!(HUD_LOG_TICK_MS > HUD_TICK_MS);
    assert!(GRAPH_TICK_MS > 0);
    assert!(LATENCY_MAX_MS > LATENCY_MIN_MS);
    assert!(NODE_FILL_MAX_PCT > NODE_FILL_MIN_PCT);
    assert!(NODE_FILL_MAX_PCT <= 100);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ambient_clamps_contain_the_initial_range() {
    assert!(GRAPH_CLAMP_MIN_PCT <= GRAPH_HEIGHT_MIN_PCT);
    assert!(GRAPH_CLAMP_MAX_PCT >= GRAPH_HEIGHT_MIN_PCT + GRAPH_HEIGHT_SPAN_PCT);
    assert!(PERTURB_PROBABILITY > 0.0 && PERTURB_PROBABILITY < 1.0);
    assert!(PERTURB_DELTA_PCT > 0.0);
    assert!(!BITSTREAM_GLYPHS.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn viewport_gating_is_consistent() {
    assert!(REVEAL_VIEWPORT_FRACTION > 0.0 && REVEAL_VIEWPORT_FRACTION < 1.0);
    assert!(NARROW_VIEWPORT_MAX_PX > 0.0);
    assert!(RESIZE_DEBOUNCE_MS > 0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}
