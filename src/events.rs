use crate::app::SharedApp;
use crate::constants::{GRAVESTONE_SELECTOR, MODAL_SELECTOR};
use crate::input;
use cemetery_core::HitTarget;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod form;
pub mod keyboard;
pub mod pointer;
pub mod touch;

/// Listen for `kind` on `target`, handing each event to `handler` with the app.
pub(crate) fn listen<E>(
    target: &web::EventTarget,
    kind: &str,
    app: &SharedApp,
    passive: bool,
    mut handler: impl FnMut(&SharedApp, E) + 'static,
) where
    E: JsCast + 'static,
{
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| match ev.dyn_into::<E>() {
        Ok(ev) => handler(&app, ev),
        Err(_) => log::warn!("unexpected event type"),
    }) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

#[inline]
pub(crate) fn hit(ev: &web::Event) -> HitTarget {
    input::hit_target(ev.target(), MODAL_SELECTOR, GRAVESTONE_SELECTOR)
}

/// Wire every page listener; `surface` receives drags and touches.
pub fn wire_all(app: &SharedApp, window: &web::Window, surface: &web::Element) {
    let document = app.borrow().document.clone();
    pointer::wire(app, window, &document, surface);
    touch::wire(app, surface);
    keyboard::wire(app, window);
    form::wire(app, &document);
    log::info!("[scene] input handlers wired");
}
