//! Pointer-driven tilt smoothing and float-node layout.
//!
//! The tilt state is explicit context passed into the per-frame step rather
//! than free variables captured by the frame callback, so the interpolation
//! math is testable in isolation.

use crate::constants::{
    CONTENT_SHIFT_PX, FLOAT_NODE_BASE_Z_PX, FLOAT_NODE_SWING_PX, FLOAT_NODE_Z_STEP_PX,
    NODE_DEPTH_FACTOR, PERSPECTIVE_ORIGIN_SPAN, RACK_DEPTH_FACTOR, STAGGER_AMPLITUDE,
    STAGGER_FREQ_X, STAGGER_FREQ_Y, TILT_LERP,
};
use glam::Vec2;

#[inline]
pub fn lerp(start: f32, end: f32, amt: f32) -> f32 {
    (1.0 - amt) * start + amt * end
}

/// Target and smoothed rotation pair, in [-1, 1] per axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct TiltState {
    pub target: Vec2,
    pub current: Vec2,
}

impl TiltState {
    /// Event-driven retarget from a pointer position.
    pub fn set_target_from_pointer(&mut self, client: Vec2, viewport: Vec2) {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        self.target = client / viewport * 2.0 - Vec2::ONE;
    }

    /// One animation frame of smoothing toward `target + stagger`.
    pub fn step(&mut self, stagger: Vec2) {
        self.current.x = lerp(self.current.x, self.target.x + stagger.x, TILT_LERP);
        self.current.y = lerp(self.current.y, self.target.y + stagger.y, TILT_LERP);
    }

    /// `perspective-origin` percentages derived from the smoothed tilt.
    pub fn perspective_origin(&self) -> (f32, f32) {
        (
            50.0 + self.current.x * PERSPECTIVE_ORIGIN_SPAN,
            50.0 + self.current.y * PERSPECTIVE_ORIGIN_SPAN,
        )
    }
}

/// Slow two-phase oscillation layered onto the tilt target each frame.
#[inline]
pub fn flight_stagger(time_sec: f32) -> Vec2 {
    Vec2::new(
        (time_sec * STAGGER_FREQ_X).sin(),
        (time_sec * STAGGER_FREQ_Y).cos(),
    ) * STAGGER_AMPLITUDE
}

/// Translation applied to one floating node, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatOffset {
    pub x_px: f32,
    pub y_px: f32,
    pub z_px: f32,
}

/// Event-driven float-node reposition from the raw (unsmoothed) tilt target.
///
/// Direction alternates by index parity so neighboring nodes drift apart;
/// racks sit on a shallower depth layer than free-floating nodes.
pub fn float_node_offset(index: usize, is_rack: bool, target: Vec2) -> FloatOffset {
    let depth = if is_rack {
        RACK_DEPTH_FACTOR
    } else {
        NODE_DEPTH_FACTOR
    };
    let swing_x = if index % 2 == 0 {
        FLOAT_NODE_SWING_PX
    } else {
        -FLOAT_NODE_SWING_PX
    };
    let swing_y = if index % 3 == 0 {
        FLOAT_NODE_SWING_PX
    } else {
        -FLOAT_NODE_SWING_PX
    };
    FloatOffset {
        x_px: target.x * swing_x * depth,
        y_px: target.y * swing_y * depth,
        z_px: FLOAT_NODE_BASE_Z_PX + index as f32 * FLOAT_NODE_Z_STEP_PX,
    }
}

/// Section-content shift from the pointer's viewport fraction (0..1 per axis).
#[inline]
pub fn content_offset(pointer_frac: Vec2) -> Vec2 {
    (pointer_frac - Vec2::splat(0.5)) * CONTENT_SHIFT_PX
}
