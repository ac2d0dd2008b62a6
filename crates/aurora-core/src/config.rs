//! Cursor-scene configuration.

use crate::color::Rgb;
use crate::constants::{
    DEFAULT_TUBE_COLORS, TUBE_BASE_OPACITY, TUBE_BASE_RADIUS, TUBE_COUNT, TUBE_OPACITY_STEP,
    TUBE_POINTS, TUBE_RADIUS_STEP,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tube count must be at least 1 (got {0})")]
    NoTubes(usize),
    #[error("each tube needs at least 2 control points (got {0})")]
    TooFewPoints(usize),
    #[error("palette must not be empty")]
    EmptyPalette,
}

#[derive(Clone, Debug)]
pub struct TubesConfig {
    pub tube_count: usize,
    pub points_per_tube: usize,
    pub palette: Vec<Rgb>,
}

impl Default for TubesConfig {
    fn default() -> Self {
        Self {
            tube_count: TUBE_COUNT,
            points_per_tube: TUBE_POINTS,
            palette: DEFAULT_TUBE_COLORS
                .iter()
                .map(|hex| Rgb::from_hex(hex).unwrap_or(Rgb::WHITE))
                .collect(),
        }
    }
}

impl TubesConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tube_count == 0 {
            return Err(ConfigError::NoTubes(self.tube_count));
        }
        if self.points_per_tube < 2 {
            return Err(ConfigError::TooFewPoints(self.points_per_tube));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Outer tubes are thicker.
    #[inline]
    pub fn radius_for(&self, index: usize) -> f32 {
        TUBE_BASE_RADIUS + TUBE_RADIUS_STEP * index as f32
    }

    /// Outer tubes are fainter; floor keeps every tube faintly visible.
    #[inline]
    pub fn opacity_for(&self, index: usize) -> f32 {
        (TUBE_BASE_OPACITY - TUBE_OPACITY_STEP * index as f32).max(0.05)
    }

    /// Palette entry for a tube, cycling when the palette is shorter than the
    /// tube count.
    #[inline]
    pub fn color_for(&self, index: usize) -> Rgb {
        self.palette[index % self.palette.len()]
    }
}
