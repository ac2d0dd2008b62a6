//! Intro overlay: a fixed 1.5 s hold, then a 1 s completion fade.
//!
//! The timing contract lives in `aurora_core::loader`; here it is realized
//! with two chained one-shot timers against the overlay element.

use crate::constants::{BODY_LOADED_CLASS, LOADER_COMPLETE_CLASS, LOADER_ID};
use crate::dom;
use aurora_core::constants::{LOADER_COMPLETE_AFTER_MS, LOADER_HIDE_AFTER_MS};
use web_sys as web;

pub fn init(window: &web::Window, document: &web::Document) {
    let Some(overlay) = dom::element_by_id(document, LOADER_ID) else {
        log::warn!("loader: #{LOADER_ID} missing, skipping");
        return;
    };

    let window_hide = window.clone();
    let document_hide = document.clone();
    dom::set_timeout(window, LOADER_COMPLETE_AFTER_MS as i32, move || {
        let _ = overlay.class_list().add_1(LOADER_COMPLETE_CLASS);
        dom::set_timeout(&window_hide, LOADER_HIDE_AFTER_MS as i32, move || {
            let _ = overlay.style().set_property("display", "none");
            if let Some(body) = document_hide.body() {
                let _ = body.class_list().add_1(BODY_LOADED_CLASS);
            }
        });
    });
}
