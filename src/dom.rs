use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Create `tag` and set each `(name, value)` attribute on it.
pub fn create_with_attrs(
    document: &web::Document,
    tag: &str,
    attrs: &[(&str, &str)],
) -> Option<web::Element> {
    let el = document.create_element(tag).ok()?;
    for (name, value) in attrs {
        _ = el.set_attribute(name, value);
    }
    Some(el)
}

/// Set inline CSS properties on an element that is an `HtmlElement`.
pub fn set_styles(el: &web::Element, props: &[(&str, &str)]) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let style = html.style();
        for (name, value) in props {
            _ = style.set_property(name, value);
        }
    }
}

/// Run `f` once after `delay_ms`; returns the timer handle.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let cb = wasm_bindgen::closure::Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
        .ok()
}

pub fn clear_timeout(handle: i32) {
    if let Some(w) = web::window() {
        w.clear_timeout_with_handle(handle);
    }
}

/// Remove `el` from the page after `delay_ms`.
pub fn remove_later(el: web::Element, delay_ms: i32) {
    _ = set_timeout(delay_ms, move || el.remove());
}

#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
