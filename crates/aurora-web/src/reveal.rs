//! One-way scroll reveal for scene sections.
//!
//! The active class is only ever added; sections stay revealed once seen.

use crate::constants::{SECTION_ACTIVE_CLASS, SECTION_SELECTOR};
use crate::dom;
use aurora_core::reveal::is_revealed;
use web_sys as web;

pub fn init(window: &web::Window, document: &web::Document) {
    let run = {
        let window = window.clone();
        let document = document.clone();
        move || {
            let (_, viewport_h) = dom::viewport_size(&window);
            for section in dom::query_all(&document, SECTION_SELECTOR) {
                let rect = section.get_bounding_client_rect();
                if is_revealed(rect.top() as f32, rect.bottom() as f32, viewport_h) {
                    let _ = section.class_list().add_1(SECTION_ACTIVE_CLASS);
                }
            }
        }
    };

    run();
    dom::add_event_listener(window, "scroll", run);
}
