//! Decorative bitstream layers and rack mini-graphs.
//!
//! All randomized parameters come from `aurora_core::ambient`; this module
//! only materializes them as styled divs and keeps the 100 ms perturbation
//! timer running.

use crate::constants::{
    BITSTREAM_COLUMN_CLASS, BITSTREAM_H_SELECTOR, BITSTREAM_ROW_CLASS, BITSTREAM_V_SELECTOR,
    GRAPH_BAR_CLASS, GRAPH_BAR_SELECTOR, MINI_GRAPH_SELECTOR,
};
use crate::dom;
use aurora_core::ambient::{self, BitstreamColumn, BitstreamRow};
use aurora_core::constants::{BITSTREAM_COLUMNS, BITSTREAM_ROWS, GRAPH_BARS, GRAPH_TICK_MS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

pub fn init(window: &web::Window, document: &web::Document) {
    let mut rng = StdRng::from_entropy();

    if let Some(container) = dom::query_first(document, BITSTREAM_V_SELECTOR) {
        for _ in 0..BITSTREAM_COLUMNS {
            let params = BitstreamColumn::generate(&mut rng);
            if let Some(col) = dom::create_div(document, BITSTREAM_COLUMN_CLASS) {
                let style = col.style();
                let _ = style.set_property("left", &format!("{:.4}%", params.left_pct));
                let _ = style.set_property(
                    "animation-duration",
                    &format!("{:.3}s", params.duration_sec),
                );
                let _ =
                    style.set_property("animation-delay", &format!("{:.3}s", params.delay_sec));
                let _ = style.set_property("opacity", &format!("{:.3}", params.opacity));
                col.set_inner_text(&params.text);
                let _ = container.append_child(&col);
            }
        }
    }

    if let Some(container) = dom::query_first(document, BITSTREAM_H_SELECTOR) {
        for _ in 0..BITSTREAM_ROWS {
            let params = BitstreamRow::generate(&mut rng);
            if let Some(row) = dom::create_div(document, BITSTREAM_ROW_CLASS) {
                let style = row.style();
                let _ = style.set_property("top", &format!("{:.4}%", params.top_pct));
                let _ = style.set_property(
                    "animation-duration",
                    &format!("{:.3}s", params.duration_sec),
                );
                let _ =
                    style.set_property("animation-delay", &format!("{:.3}s", params.delay_sec));
                let _ = style.set_property("opacity", &format!("{:.3}", params.opacity));
                row.set_inner_text(&params.text);
                let _ = container.append_child(&row);
            }
        }
    }

    for graph in dom::query_all(document, MINI_GRAPH_SELECTOR) {
        for _ in 0..GRAPH_BARS {
            if let Some(bar) = dom::create_div(document, GRAPH_BAR_CLASS) {
                let height = ambient::graph_bar_height(&mut rng);
                let _ = bar.style().set_property("height", &format!("{height:.1}%"));
                let _ = graph.append_child(&bar);
            }
        }
    }

    let document_tick = document.clone();
    let mut tick_rng = StdRng::from_entropy();
    dom::set_interval(window, GRAPH_TICK_MS, move || {
        for bar in dom::query_all(&document_tick, GRAPH_BAR_SELECTOR) {
            let style = bar.style();
            let Some(current) = style
                .get_property_value("height")
                .ok()
                .and_then(parse_percent)
            else {
                continue;
            };
            if let Some(next) = ambient::perturb_height(current, &mut tick_rng) {
                let _ = style.set_property("height", &format!("{next:.1}%"));
            }
        }
    });
}

fn parse_percent(value: String) -> Option<f32> {
    value.trim().strip_suffix('%')?.parse().ok()
}
