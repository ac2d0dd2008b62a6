/// Tuning constants for the effect layer.
///
/// These express intended behavior (lerp coefficients, timer cadences, clamp
/// limits) and keep magic numbers out of the code.

// Cursor tube scene
pub const TUBE_COUNT: usize = 3;
pub const TUBE_POINTS: usize = 20; // control points per trail chain
pub const TUBE_SEGMENTS: usize = 32; // tubular segments per rebuilt mesh
pub const TUBE_RADIAL: usize = 8; // ring resolution (seam vertex duplicated)
pub const TUBE_BASE_RADIUS: f32 = 0.05;
pub const TUBE_RADIUS_STEP: f32 = 0.02; // outer tubes are thicker
pub const TUBE_BASE_OPACITY: f32 = 0.6;
pub const TUBE_OPACITY_STEP: f32 = 0.15; // outer tubes are fainter
pub const HEAD_LERP_BASE: f32 = 0.1;
pub const HEAD_LERP_STEP: f32 = 0.02; // later tubes trail more
pub const HEAD_LERP_MIN: f32 = 0.01;
pub const TRAIL_FOLLOW: f32 = 0.85; // per-frame pull toward the preceding point
pub const EMISSIVE_INTENSITY: f32 = 0.5;
pub const DEFAULT_TUBE_COLORS: [&str; 3] = ["#00f2ff", "#7000ff", "#ff00c1"];

// Tube scene camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Tube shading
pub const AMBIENT_LIGHT: f32 = 0.5;
pub const POINT_LIGHT_POS: [f32; 3] = [2.0, 2.0, 5.0];
pub const POINT_LIGHT_INTENSITY: f32 = 2.0;

// Parallax / tilt smoothing
pub const TILT_LERP: f32 = 0.08; // current -> target blend per frame
pub const STAGGER_AMPLITUDE: f32 = 0.02;
pub const STAGGER_FREQ_X: f32 = 0.5; // rad/sec
pub const STAGGER_FREQ_Y: f32 = 0.3;
pub const PERSPECTIVE_ORIGIN_SPAN: f32 = 4.0; // percent of drift per unit tilt
pub const FLOAT_NODE_SWING_PX: f32 = 30.0;
pub const RACK_DEPTH_FACTOR: f32 = 1.2;
pub const NODE_DEPTH_FACTOR: f32 = 1.8;
pub const FLOAT_NODE_BASE_Z_PX: f32 = 150.0;
pub const FLOAT_NODE_Z_STEP_PX: f32 = 40.0;
pub const CONTENT_SHIFT_PX: f32 = 10.0; // section-content parallax amplitude

// Intro loader
pub const LOADER_COMPLETE_AFTER_MS: f64 = 1500.0;
pub const LOADER_HIDE_AFTER_MS: f64 = 1000.0;

// HUD cadence and value ranges
pub const HUD_TICK_MS: i32 = 1000;
pub const HUD_LOG_TICK_MS: i32 = 2500;
pub const LATENCY_MIN_MS: u32 = 10;
pub const LATENCY_MAX_MS: u32 = 25; // exclusive
pub const NODE_FILL_MIN_PCT: u32 = 50;
pub const NODE_FILL_MAX_PCT: u32 = 80; // exclusive

// Ambient bitstream layers
pub const BITSTREAM_COLUMNS: usize = 20;
pub const BITSTREAM_ROWS: usize = 15;
pub const COLUMN_GLYPHS: usize = 40;
pub const ROW_GLYPHS: usize = 50;
pub const BITSTREAM_GLYPHS: &[u8] = b"01ABCDEF";
pub const COLUMN_DURATION_MIN_S: f32 = 5.0;
pub const COLUMN_DURATION_SPAN_S: f32 = 10.0;
pub const ROW_DURATION_MIN_S: f32 = 8.0;
pub const ROW_DURATION_SPAN_S: f32 = 15.0;
pub const BITSTREAM_DELAY_SPAN_S: f32 = 20.0; // negative delays stagger phases
pub const COLUMN_OPACITY_MIN: f32 = 0.05;
pub const COLUMN_OPACITY_SPAN: f32 = 0.15;
pub const ROW_OPACITY_MIN: f32 = 0.03;
pub const ROW_OPACITY_SPAN: f32 = 0.10;

// Mini-graph bars
pub const GRAPH_BARS: usize = 15;
pub const GRAPH_TICK_MS: i32 = 100;
pub const GRAPH_HEIGHT_MIN_PCT: f32 = 20.0;
pub const GRAPH_HEIGHT_SPAN_PCT: f32 = 60.0;
pub const PERTURB_PROBABILITY: f64 = 0.2;
pub const PERTURB_DELTA_PCT: f32 = 10.0; // +/- swing per perturbation
pub const GRAPH_CLAMP_MIN_PCT: f32 = 10.0;
pub const GRAPH_CLAMP_MAX_PCT: f32 = 100.0;

// Scroll reveal
pub const REVEAL_VIEWPORT_FRACTION: f32 = 0.75;

// Viewport gating for the cursor scene
pub const NARROW_VIEWPORT_MAX_PX: f64 = 1024.0;
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";
pub const RESIZE_DEBOUNCE_MS: i32 = 100;
pub const MAX_PIXEL_RATIO: f64 = 2.0;
