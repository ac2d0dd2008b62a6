//! Cursor-trailing tube scene.
//!
//! Lifecycle: uninitialized → active → destroyed, or straight to disabled on
//! a coarse-pointer / narrow viewport. The disabled path hides the canvas and
//! waits for a desktop-sized viewport, at which point it forces a full page
//! reload rather than re-initializing in place. The active path owns its
//! event listeners (they are stored, not forgotten, so teardown can remove
//! them), the animation-frame loop, and every GPU resource.

use crate::constants::TUBES_CANVAS_ID;
use crate::dom;
use crate::raf::{self, RafLoop};
use crate::render::TubeGpu;
use aurora_core::camera::{pointer_ndc, unproject_to_plane, Camera};
use aurora_core::color::random_rgb;
use aurora_core::config::TubesConfig;
use aurora_core::constants::{
    CAMERA_FOVY_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR, COARSE_POINTER_QUERY,
    NARROW_VIEWPORT_MAX_PX, RESIZE_DEBOUNCE_MS, TUBE_RADIAL, TUBE_SEGMENTS,
};
use aurora_core::geometry::sweep_vertices;
use aurora_core::trail::TrailChain;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that can actually be removed again.
struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    fn add(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }

    fn remove(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

struct SceneShared {
    config: TubesConfig,
    camera: Camera,
    pointer_world: Vec3,
    chains: Vec<TrailChain>,
    gpu: TubeGpu<'static>,
    rng: StdRng,
}

pub struct ActiveScene {
    listeners: Vec<Listener>,
    loop_handle: RafLoop,
}

pub enum CursorScene {
    /// Canvas hidden; one resize listener waits for a desktop viewport.
    Disabled { viewport_listener: Listener },
    Active(ActiveScene),
}

impl CursorScene {
    /// Release whatever this scene registered. Consuming `self` makes a
    /// second teardown unrepresentable.
    pub fn destroy(self) {
        match self {
            CursorScene::Disabled { viewport_listener } => viewport_listener.remove(),
            CursorScene::Active(scene) => scene.destroy(),
        }
    }
}

impl ActiveScene {
    fn destroy(self) {
        self.loop_handle.cancel();
        for listener in &self.listeners {
            listener.remove();
        }
        // dropping the listeners and the cancelled frame callback releases
        // the last clones of the shared state, and with it the GPU resources
    }
}

fn is_mobile_or_tablet(window: &web::Window) -> bool {
    let narrow = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|w| w <= NARROW_VIEWPORT_MAX_PX)
        .unwrap_or(false);
    let coarse = window
        .match_media(COARSE_POINTER_QUERY)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false);
    narrow || coarse
}

pub async fn init(window: &web::Window, document: &web::Document) -> Option<CursorScene> {
    let Some(canvas) = document
        .get_element_by_id(TUBES_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::warn!("cursor: #{TUBES_CANVAS_ID} missing, skipping");
        return None;
    };

    if is_mobile_or_tablet(window) {
        log::info!("cursor: disabled on coarse-pointer/narrow viewport");
        let _ = canvas.style().set_property("display", "none");
        let window_resize = window.clone();
        let viewport_listener = Listener::add(window, "resize", move |_| {
            // back on a desktop-sized viewport: reload to initialize afresh
            if !is_mobile_or_tablet(&window_resize) {
                let _ = window_resize.location().reload();
            }
        });
        return Some(CursorScene::Disabled { viewport_listener });
    }

    let config = TubesConfig::default();
    if let Err(e) = config.validate() {
        log::error!("cursor: bad tube config: {e}");
        return None;
    }

    dom::sync_canvas_backing_size(&canvas, window);

    // the surface wants a 'static canvas reference; leak one clone for the
    // lifetime of the page, as the scene is only ever built once per load
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = match TubeGpu::new(leaked_canvas, &config).await {
        Ok(g) => g,
        Err(e) => {
            log::error!("cursor: WebGPU init failed, scene disabled: {e:?}");
            return None;
        }
    };

    let (vw, vh) = dom::viewport_size(window);
    let camera = Camera {
        eye: Vec3::new(0.0, 0.0, CAMERA_Z),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: if vh > 0.0 { vw / vh } else { 1.0 },
        fovy_radians: CAMERA_FOVY_DEG.to_radians(),
        znear: CAMERA_ZNEAR,
        zfar: CAMERA_ZFAR,
    };
    let chains = (0..config.tube_count)
        .map(|i| TrailChain::new(config.points_per_tube, TrailChain::head_lerp_for(i)))
        .collect();
    let shared = Rc::new(RefCell::new(SceneShared {
        config,
        camera,
        pointer_world: Vec3::ZERO,
        chains,
        gpu,
        rng: StdRng::from_entropy(),
    }));

    let mut listeners = Vec::new();

    // mousemove: project the pointer onto the z = 0 plane the chains live on
    {
        let shared = shared.clone();
        let window_move = window.clone();
        listeners.push(Listener::add(window, "mousemove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let (vw, vh) = dom::viewport_size(&window_move);
            let mut state = shared.borrow_mut();
            let ndc = pointer_ndc(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
            if let Some(hit) = unproject_to_plane(&state.camera, ndc) {
                state.pointer_world = hit;
            }
        }));
    }

    // mousedown: every tube picks a fresh random color
    {
        let shared = shared.clone();
        listeners.push(Listener::add(window, "mousedown", move |_| {
            let mut state = shared.borrow_mut();
            let state = &mut *state;
            for i in 0..state.gpu.tube_count() {
                let color = random_rgb(&mut state.rng);
                state.gpu.set_tube_color(i, color);
            }
        }));
    }

    // debounced resize: retune the camera aspect and the surface size
    {
        let shared = shared.clone();
        let window_resize = window.clone();
        let canvas_resize = canvas.clone();
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        listeners.push(Listener::add(window, "resize", move |_| {
            if let Some(id) = pending.take() {
                window_resize.clear_timeout_with_handle(id);
            }
            let shared = shared.clone();
            let window_apply = window_resize.clone();
            let canvas_apply = canvas_resize.clone();
            let pending_apply = pending.clone();
            let id = dom::set_timeout(&window_resize, RESIZE_DEBOUNCE_MS, move || {
                pending_apply.set(None);
                dom::sync_canvas_backing_size(&canvas_apply, &window_apply);
                let (vw, vh) = dom::viewport_size(&window_apply);
                let mut state = shared.borrow_mut();
                if vh > 0.0 {
                    state.camera.aspect = vw / vh;
                }
                let (bw, bh) = (canvas_apply.width(), canvas_apply.height());
                state.gpu.resize_if_needed(bw, bh);
            });
            pending.set(id);
        }));
    }

    // per frame: chase, re-sweep, draw
    let loop_handle = {
        let shared = shared.clone();
        raf::start_loop(window, move || {
            let mut state = shared.borrow_mut();
            let state = &mut *state;
            for (i, chain) in state.chains.iter_mut().enumerate() {
                chain.step(state.pointer_world);
                let vertices = sweep_vertices(
                    chain.points(),
                    TUBE_SEGMENTS,
                    state.config.radius_for(i),
                    TUBE_RADIAL,
                );
                state.gpu.replace_tube_mesh(i, &vertices);
            }
            if let Err(e) = state.gpu.render(&state.camera) {
                log::error!("cursor: render error: {e:?}");
            }
        })
    };

    Some(CursorScene::Active(ActiveScene {
        listeners,
        loop_handle,
    }))
}
