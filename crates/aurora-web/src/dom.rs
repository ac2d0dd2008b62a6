use aurora_core::constants::MAX_PIXEL_RATIO;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn query_first(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list
                .item(i)
                .and_then(|node| node.dyn_into::<web::HtmlElement>().ok())
            {
                out.push(el);
            }
        }
    }
    out
}

pub fn create_div(document: &web::Document, class_name: &str) -> Option<web::HtmlElement> {
    let el = document.create_element("div").ok()?;
    el.set_class_name(class_name);
    el.dyn_into::<web::HtmlElement>().ok()
}

/// Permanently wire a click handler; the closure is handed to the JS side for
/// the page's lifetime.
pub fn add_click_listener(
    target: &web::EventTarget,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev))
        as Box<dyn FnMut(web::MouseEvent)>);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Permanently wire a mouse-event handler for `kind` (`mousemove`, ...).
pub fn add_mouse_listener(
    target: &web::EventTarget,
    kind: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev))
        as Box<dyn FnMut(web::MouseEvent)>);
    let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Permanently wire an argument-less handler for `kind` (`scroll`, ...).
pub fn add_event_listener(
    target: &web::EventTarget,
    kind: &str,
    mut handler: impl FnMut() + 'static,
) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Recurring timer; the callback lives for the page's lifetime.
pub fn set_interval(window: &web::Window, ms: i32, f: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    if window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )
        .is_ok()
    {
        closure.forget();
    }
}

/// One-shot timer. Returns the timeout handle when scheduling succeeded.
pub fn set_timeout(window: &web::Window, ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref::<js_sys::Function>(),
            ms,
        )
        .ok()
}

pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Size the canvas backing store to the viewport, device-pixel-ratio capped.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, window: &web::Window) {
    let dpr = window.device_pixel_ratio().min(MAX_PIXEL_RATIO);
    let (w, h) = viewport_size(window);
    canvas.set_width(((w as f64 * dpr) as u32).max(1));
    canvas.set_height(((h as f64 * dpr) as u32).max(1));
}
