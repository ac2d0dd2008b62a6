pub mod ambient;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod hud;
pub mod loader;
pub mod parallax;
pub mod reveal;
pub mod theme;
pub mod trail;

pub static TUBE_WGSL: &str = include_str!("../shaders/tube.wgsl");

pub use camera::Camera;
pub use color::Rgb;
pub use config::TubesConfig;
pub use theme::Theme;
pub use trail::TrailChain;
