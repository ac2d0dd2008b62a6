/// Element ids, selectors, and class names the page markup provides.
///
/// Timing and interpolation constants live in `aurora_core::constants`; this
/// module only names the DOM surface.

// Intro loader
pub const LOADER_ID: &str = "cosmic-loader";
pub const LOADER_COMPLETE_CLASS: &str = "complete";
pub const BODY_LOADED_CLASS: &str = "loaded";

// HUD
pub const SYS_TIME_ID: &str = "sys-time";
pub const SYS_LATENCY_ID: &str = "sys-latency";
pub const HUD_LOGS_ID: &str = "hud-logs";
pub const DATETIME_ID: &str = "datetime-display";
pub const NODE_FILL_SELECTOR: &str = ".node-fill";

// Ambient layers
pub const BITSTREAM_V_SELECTOR: &str = ".layer-bitstream";
pub const BITSTREAM_H_SELECTOR: &str = ".layer-bitstream-h";
pub const BITSTREAM_COLUMN_CLASS: &str = "bitstream-column";
pub const BITSTREAM_ROW_CLASS: &str = "bitstream-row";
pub const MINI_GRAPH_SELECTOR: &str = ".rack-mini-graph";
pub const GRAPH_BAR_CLASS: &str = "graph-bar";
pub const GRAPH_BAR_SELECTOR: &str = ".graph-bar";

// Theme toggle
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_RIPPLE_CLASS: &str = "theme-ripple";
pub const RIPPLE_ACTIVE_CLASS: &str = "active";
pub const RIPPLE_ACTIVATE_DELAY_MS: i32 = 10;
pub const RIPPLE_REMOVE_MS: i32 = 1200;
pub const LIGHT_THEME_CLASS: &str = "light-theme";

// Scroll reveal / parallax scene
pub const SECTION_SELECTOR: &str = ".scene-section";
pub const SECTION_ACTIVE_CLASS: &str = "active";
pub const CONTENT_SELECTOR: &str = ".section-content";
pub const FLOAT_NODE_SELECTOR: &str =
    ".scene-section.active .float-node, .scene-section.active .server-rack";
pub const RACK_CLASS: &str = "server-rack";
pub const PERSPECTIVE_SELECTOR: &str = ".perspective-container";

// Cursor tube scene
pub const TUBES_CANVAS_ID: &str = "tubes-canvas";
