//! Theme toggle with a transient ripple, persisted to localStorage.

use crate::constants::{
    LIGHT_THEME_CLASS, RIPPLE_ACTIVATE_DELAY_MS, RIPPLE_ACTIVE_CLASS, RIPPLE_REMOVE_MS,
    THEME_RIPPLE_CLASS, THEME_TOGGLE_ID,
};
use crate::dom;
use aurora_core::theme::{Theme, THEME_STORAGE_KEY};
use web_sys as web;

pub fn init(window: &web::Window, document: &web::Document) {
    // apply the saved preference before anything is visible
    let storage = window.local_storage().ok().flatten();
    let saved = storage
        .as_ref()
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    if Theme::from_saved(saved.as_deref()).is_light() {
        if let Some(body) = document.body() {
            let _ = body.class_list().add_1(LIGHT_THEME_CLASS);
        }
    }

    let Some(toggle) = dom::element_by_id(document, THEME_TOGGLE_ID) else {
        log::warn!("theme: #{THEME_TOGGLE_ID} missing, skipping");
        return;
    };

    let window = window.clone();
    let document = document.clone();
    let toggle_for_rect = toggle.clone();
    dom::add_click_listener(&toggle, move |_ev| {
        spawn_ripple(&window, &document, &toggle_for_rect);

        let Some(body) = document.body() else { return };
        let is_light = body.class_list().toggle(LIGHT_THEME_CLASS).unwrap_or(false);
        let theme = if is_light { Theme::Light } else { Theme::Dark };
        if let Some(storage) = &storage {
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
    });
}

/// Expanding ripple anchored at the toggle button's center.
fn spawn_ripple(window: &web::Window, document: &web::Document, toggle: &web::HtmlElement) {
    let Some(ripple) = dom::create_div(document, THEME_RIPPLE_CLASS) else {
        return;
    };
    let rect = toggle.get_bounding_client_rect();
    let x = rect.left() + rect.width() / 2.0;
    let y = rect.top() + rect.height() / 2.0;
    let style = ripple.style();
    let _ = style.set_property("--ripple-x", &format!("{x:.1}px"));
    let _ = style.set_property("--ripple-y", &format!("{y:.1}px"));

    let Some(body) = document.body() else { return };
    let _ = body.append_child(&ripple);

    let ripple_activate = ripple.clone();
    dom::set_timeout(window, RIPPLE_ACTIVATE_DELAY_MS, move || {
        let _ = ripple_activate.class_list().add_1(RIPPLE_ACTIVE_CLASS);
    });
    dom::set_timeout(window, RIPPLE_REMOVE_MS, move || {
        ripple.remove();
    });
}
