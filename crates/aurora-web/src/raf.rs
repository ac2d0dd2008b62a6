//! requestAnimationFrame plumbing shared by the tilt and tube loops.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handle to a running animation-frame loop.
///
/// Dropping the handle does NOT stop the loop (the callback keeps itself
/// alive through the scheduling cycle); call [`RafLoop::cancel`] to stop it.
pub struct RafLoop {
    window: web::Window,
    raf_id: Rc<Cell<i32>>,
    alive: Rc<Cell<bool>>,
    slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

/// Schedule `tick` once per animation frame until cancelled.
pub fn start_loop(window: &web::Window, mut tick: impl FnMut() + 'static) -> RafLoop {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(0));
    let alive = Rc::new(Cell::new(true));

    let slot_tick = slot.clone();
    let raf_id_tick = raf_id.clone();
    let alive_tick = alive.clone();
    let window_tick = window.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive_tick.get() {
            return;
        }
        tick();
        if let Some(cb) = slot_tick.borrow().as_ref() {
            if let Ok(id) = window_tick.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_id_tick.set(id);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = slot.borrow().as_ref() {
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            raf_id.set(id);
        }
    }

    RafLoop {
        window: window.clone(),
        raf_id,
        alive,
        slot,
    }
}

impl RafLoop {
    /// Stop scheduling frames and release the callback.
    ///
    /// Must be called from outside the callback itself (event handlers and
    /// exported teardown functions qualify).
    pub fn cancel(&self) {
        self.alive.set(false);
        let _ = self.window.cancel_animation_frame(self.raf_id.get());
        self.slot.borrow_mut().take();
    }
}
