//! Pointer-driven tilt and float-node parallax.
//!
//! Two independent update paths share one `TiltState`:
//! - `mousemove` retargets the tilt and immediately repositions the
//!   section-content blocks and the floating nodes of active sections;
//! - an animation-frame loop (never cancelled) smooths the tilt and writes
//!   the perspective-origin drift every frame.

use crate::constants::{
    CONTENT_SELECTOR, FLOAT_NODE_SELECTOR, PERSPECTIVE_SELECTOR, RACK_CLASS,
};
use crate::dom;
use crate::raf;
use aurora_core::parallax::{self, TiltState};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn init(window: &web::Window, document: &web::Document) {
    let tilt = Rc::new(RefCell::new(TiltState::default()));

    // event-driven path
    {
        let tilt = tilt.clone();
        let window = window.clone();
        let document_move = document.clone();
        dom::add_mouse_listener(document, "mousemove", move |ev| {
            let (vw, vh) = dom::viewport_size(&window);
            if vw <= 0.0 || vh <= 0.0 {
                return;
            }
            let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let viewport = Vec2::new(vw, vh);
            tilt.borrow_mut().set_target_from_pointer(client, viewport);

            let shift = parallax::content_offset(client / viewport);
            for el in dom::query_all(&document_move, CONTENT_SELECTOR) {
                let _ = el.style().set_property(
                    "transform",
                    &format!("translate({:.2}px, {:.2}px)", shift.x, shift.y),
                );
            }

            let target = tilt.borrow().target;
            for (i, node) in dom::query_all(&document_move, FLOAT_NODE_SELECTOR)
                .iter()
                .enumerate()
            {
                let is_rack = node.class_list().contains(RACK_CLASS);
                let off = parallax::float_node_offset(i, is_rack, target);
                let _ = node.style().set_property(
                    "transform",
                    &format!(
                        "translateZ({:.0}px) translateX({:.2}px) translateY({:.2}px)",
                        off.z_px, off.x_px, off.y_px
                    ),
                );
            }
        });
    }

    // frame-driven smoothing path
    let perspective = dom::query_first(document, PERSPECTIVE_SELECTOR);
    let started = Instant::now();
    let _endless = raf::start_loop(window, move || {
        let elapsed = started.elapsed().as_secs_f32();
        let mut state = tilt.borrow_mut();
        state.step(parallax::flight_stagger(elapsed));
        if let Some(el) = &perspective {
            let (ox, oy) = state.perspective_origin();
            let _ = el
                .style()
                .set_property("perspective-origin", &format!("{ox:.2}% {oy:.2}%"));
        }
    });
}
