#![cfg(target_arch = "wasm32")]
//! Browser front end: wires the page's DOM to the core effect logic.
//!
//! Every component initializes independently on startup; a missing element
//! disables only that component, never the page.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod ambient;
mod constants;
mod cursor;
mod dom;
mod hud;
mod loader;
mod parallax;
mod raf;
mod render;
mod reveal;
mod theme;

thread_local! {
    static CURSOR_SCENE: RefCell<Option<cursor::CursorScene>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("aurora-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {e:?}");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    loader::init(&window, &document);
    ambient::init(&window, &document);
    hud::init(&window, &document);
    theme::init(&window, &document);
    reveal::init(&window, &document);
    parallax::init(&window, &document);

    if let Some(scene) = cursor::init(&window, &document).await {
        CURSOR_SCENE.with(|slot| *slot.borrow_mut() = Some(scene));
    }

    Ok(())
}

/// Tear down the cursor tube scene: cancels its frame loop, removes its
/// listeners, and releases the GPU resources. A no-op when the scene never
/// initialized or was already destroyed.
#[wasm_bindgen]
pub fn destroy_cursor() {
    CURSOR_SCENE.with(|slot| {
        if let Some(scene) = slot.borrow_mut().take() {
            scene.destroy();
        }
    });
}
