//! Randomized parameters for the decorative bitstream and mini-graph layers.
//!
//! Every generator takes the RNG as an argument so tests can drive them with
//! a seeded source and assert on exact ranges.

use crate::constants::{
    BITSTREAM_DELAY_SPAN_S, BITSTREAM_GLYPHS, COLUMN_DURATION_MIN_S, COLUMN_DURATION_SPAN_S,
    COLUMN_GLYPHS, COLUMN_OPACITY_MIN, COLUMN_OPACITY_SPAN, GRAPH_CLAMP_MAX_PCT,
    GRAPH_CLAMP_MIN_PCT, GRAPH_HEIGHT_MIN_PCT, GRAPH_HEIGHT_SPAN_PCT, PERTURB_DELTA_PCT,
    PERTURB_PROBABILITY, ROW_DURATION_MIN_S, ROW_DURATION_SPAN_S, ROW_GLYPHS, ROW_OPACITY_MIN,
    ROW_OPACITY_SPAN,
};
use rand::Rng;

/// One vertical scrolling character column.
#[derive(Clone, Debug)]
pub struct BitstreamColumn {
    pub left_pct: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub opacity: f32,
    pub text: String,
}

impl BitstreamColumn {
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            left_pct: rng.gen_range(0.0..100.0),
            duration_sec: COLUMN_DURATION_MIN_S + rng.gen_range(0.0..COLUMN_DURATION_SPAN_S),
            delay_sec: -rng.gen_range(0.0..BITSTREAM_DELAY_SPAN_S),
            opacity: COLUMN_OPACITY_MIN + rng.gen_range(0.0..COLUMN_OPACITY_SPAN),
            text: glyph_lines(rng, COLUMN_GLYPHS),
        }
    }
}

/// One horizontal scrolling character row.
#[derive(Clone, Debug)]
pub struct BitstreamRow {
    pub top_pct: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub opacity: f32,
    pub text: String,
}

impl BitstreamRow {
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            top_pct: rng.gen_range(0.0..100.0),
            duration_sec: ROW_DURATION_MIN_S + rng.gen_range(0.0..ROW_DURATION_SPAN_S),
            delay_sec: -rng.gen_range(0.0..BITSTREAM_DELAY_SPAN_S),
            opacity: ROW_OPACITY_MIN + rng.gen_range(0.0..ROW_OPACITY_SPAN),
            text: glyph_run(rng, ROW_GLYPHS),
        }
    }
}

/// `count` random glyphs, one per line.
fn glyph_lines(rng: &mut impl Rng, count: usize) -> String {
    let mut out = String::with_capacity(count * 2);
    for i in 0..count {
        if i > 0 {
            out.push('\n');
        }
        out.push(random_glyph(rng));
    }
    out
}

/// `count` random glyphs with no separators.
fn glyph_run(rng: &mut impl Rng, count: usize) -> String {
    (0..count).map(|_| random_glyph(rng)).collect()
}

#[inline]
fn random_glyph(rng: &mut impl Rng) -> char {
    BITSTREAM_GLYPHS[rng.gen_range(0..BITSTREAM_GLYPHS.len())] as char
}

/// Initial height for one mini-graph bar, in percent.
pub fn graph_bar_height(rng: &mut impl Rng) -> f32 {
    GRAPH_HEIGHT_MIN_PCT + rng.gen_range(0.0..GRAPH_HEIGHT_SPAN_PCT)
}

/// Occasionally nudge a bar's height.
///
/// Returns the clamped new height for roughly one bar in five per tick,
/// `None` when the bar stays put this tick.
pub fn perturb_height(current_pct: f32, rng: &mut impl Rng) -> Option<f32> {
    if rng.gen::<f64>() >= PERTURB_PROBABILITY {
        return None;
    }
    let delta = rng.gen_range(-PERTURB_DELTA_PCT..PERTURB_DELTA_PCT);
    Some((current_pct + delta).clamp(GRAPH_CLAMP_MIN_PCT, GRAPH_CLAMP_MAX_PCT))
}
