//! Fake-telemetry text for the HUD overlay.

use crate::constants::{LATENCY_MAX_MS, LATENCY_MIN_MS, NODE_FILL_MAX_PCT, NODE_FILL_MIN_PCT};
use rand::Rng;

pub const LOG_LINES: [&str; 8] = [
    "KERNEL_BOOT: SUCCESS",
    "SYNCING_NODE_04...",
    "ENCRYPTING_BUFFER...",
    "DECODING_PHASE_2...",
    "RELIABILITY_CHECK: 100%",
    "IO_LATENCY_STABLE",
    "UPTIME_VERIFIED",
    "CORE_TEMP_OPTIMAL",
];

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn random_log_line(rng: &mut impl Rng) -> &'static str {
    LOG_LINES[rng.gen_range(0..LOG_LINES.len())]
}

/// One tick's worth of randomized telemetry values.
#[derive(Clone, Copy, Debug)]
pub struct HudSample {
    pub latency_ms: u32,
    pub node_fill_pct: u32,
}

impl HudSample {
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            latency_ms: rng.gen_range(LATENCY_MIN_MS..LATENCY_MAX_MS),
            node_fill_pct: rng.gen_range(NODE_FILL_MIN_PCT..NODE_FILL_MAX_PCT),
        }
    }
}

/// `"HH:MM:SS"`, zero-padded, 24-hour.
pub fn format_clock(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// `"Wed, Aug 6, 2026, 14:03:22"` from raw date components.
///
/// `weekday` is 0 = Sunday, `month` is 0-based, both clamped into range so a
/// garbage component can't panic the HUD.
pub fn format_datetime(
    weekday: u32,
    month: u32,
    day: u32,
    year: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
) -> String {
    let wd = WEEKDAYS[(weekday as usize).min(WEEKDAYS.len() - 1)];
    let mo = MONTHS[(month as usize).min(MONTHS.len() - 1)];
    format!(
        "{wd}, {mo} {day}, {year}, {}",
        format_clock(hours, minutes, seconds)
    )
}
