//! Fake-telemetry HUD: clock, latency, node fill, rotating log line.

use crate::constants::{
    DATETIME_ID, HUD_LOGS_ID, NODE_FILL_SELECTOR, SYS_LATENCY_ID, SYS_TIME_ID,
};
use crate::dom;
use aurora_core::constants::{HUD_LOG_TICK_MS, HUD_TICK_MS};
use aurora_core::hud::{self, HudSample};
use js_sys::Date;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

pub fn init(window: &web::Window, document: &web::Document) {
    let sys_time = dom::element_by_id(document, SYS_TIME_ID);
    let sys_latency = dom::element_by_id(document, SYS_LATENCY_ID);
    let node_fill = dom::query_first(document, NODE_FILL_SELECTOR);

    let mut rng = StdRng::from_entropy();
    dom::set_interval(window, HUD_TICK_MS, move || {
        let now = Date::new_0();
        if let Some(el) = &sys_time {
            el.set_inner_text(&hud::format_clock(
                now.get_hours(),
                now.get_minutes(),
                now.get_seconds(),
            ));
        }
        let sample = HudSample::generate(&mut rng);
        if let Some(el) = &sys_latency {
            el.set_inner_text(&format!("{}ms", sample.latency_ms));
        }
        if let Some(el) = &node_fill {
            let _ = el
                .style()
                .set_property("width", &format!("{}%", sample.node_fill_pct));
        }
    });

    let hud_logs = dom::element_by_id(document, HUD_LOGS_ID);
    let mut log_rng = StdRng::from_entropy();
    dom::set_interval(window, HUD_LOG_TICK_MS, move || {
        if let Some(el) = &hud_logs {
            el.set_inner_html(&format!(
                "<span class=\"text-accent\">&gt;</span> {}",
                hud::random_log_line(&mut log_rng)
            ));
        }
    });

    // full datetime line: once now, then every second
    let datetime = dom::element_by_id(document, DATETIME_ID);
    update_datetime(&datetime);
    dom::set_interval(window, HUD_TICK_MS, move || update_datetime(&datetime));
}

fn update_datetime(el: &Option<web::HtmlElement>) {
    let Some(el) = el else { return };
    let now = Date::new_0();
    el.set_inner_text(&hud::format_datetime(
        now.get_day(),
        now.get_month(),
        now.get_date(),
        now.get_full_year(),
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds(),
    ));
}
