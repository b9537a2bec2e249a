use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(width as f32, height as f32)
}

/// Center of an element's bounding rect in viewport px.
#[inline]
pub fn element_center(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        (rect.left() + rect.width() / 2.0) as f32,
        (rect.top() + rect.height() / 2.0) as f32,
    )
}

/// Attach a listener for `event` on every element matching `selector`,
/// passing the element and its index within the selection.
pub fn listen_each(
    document: &web::Document,
    selector: &str,
    event: &str,
    handler: impl Fn(&web::Element, usize, &web::MouseEvent) + Clone + 'static,
) {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        let Ok(el) = node.dyn_into::<web::Element>() else {
            continue;
        };
        let handler = handler.clone();
        let el_for_closure = el.clone();
        let index = i as usize;
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            handler(&el_for_closure, index, &ev);
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attach a mouse-event listener on the document itself.
pub fn listen_document(
    document: &web::Document,
    event: &str,
    mut handler: impl FnMut(&web::MouseEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        handler(&ev);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach a bare (no-argument) listener on the document (visibilitychange).
pub fn listen_document_bare(
    document: &web::Document,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach a bare (no-argument) listener on the window.
pub fn listen_window(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Run `f` once after `delay_ms`. The closure leaks, like every other
/// fire-and-forget handler here; particles are small and finite.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else { return };
    let mut f = Some(f);
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Some(f) = f.take() {
            f();
        }
    }) as Box<dyn FnMut()>);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    closure.forget();
}

/// Run `f` every `interval_ms` until the page goes away.
pub fn set_interval(interval_ms: i32, mut f: impl FnMut() + 'static) {
    let Some(window) = web::window() else { return };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || f()) as Box<dyn FnMut()>);
    _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        interval_ms,
    );
    closure.forget();
}

/// Parent for spawned particles: the requested container if present,
/// otherwise `<body>`.
pub fn container_or_body(
    document: &web::Document,
    container_id: Option<&str>,
) -> Option<web::Element> {
    if let Some(id) = container_id {
        if let Some(el) = document.get_element_by_id(id) {
            return Some(el);
        }
    }
    document.body().map(|b| b.into())
}

/// Per-element parallax speed from `data-speed`, with the page default.
pub fn data_speed(el: &web::Element, default: f32) -> f32 {
    el.get_attribute("data-speed")
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(default)
}

#[inline]
pub fn set_translate(el: &web::Element, offset: Vec2) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html
            .style()
            .set_property("transform", &format!("translate({}px, {}px)", offset.x, offset.y));
    }
}
