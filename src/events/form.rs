use super::listen;
use crate::app::SharedApp;
use crate::constants::{FORM_ID, MODAL_CLOSE_ID, MODAL_ID};
use crate::{dom, effects, modal};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(app: &SharedApp, document: &web::Document) {
    if let Some(form) = document.get_element_by_id(FORM_ID) {
        listen(&form, "submit", app, false, |app, ev: web::Event| {
            ev.prevent_default();
            let fx = {
                let mut a = app.borrow_mut();
                let entry = modal::read_form(&a.document);
                a.cemetery.submit_inscription(entry, dom::now_ms())
            };
            effects::apply(app, fx);
        });
    } else {
        log::warn!("[modal] missing #{}", FORM_ID);
    }

    let close_app = app.clone();
    dom::add_click_listener(document, MODAL_CLOSE_ID, move || {
        let fx = close_app.borrow_mut().cemetery.close_modal();
        effects::apply(&close_app, fx);
    });

    // clicking the dimmed backdrop (the modal element itself) also closes it
    if let Some(modal_el) = document.get_element_by_id(MODAL_ID) {
        let backdrop = modal_el.clone();
        listen(&modal_el, "click", app, true, move |app, ev: web::MouseEvent| {
            let on_backdrop = ev
                .target()
                .map(|t| backdrop.is_same_node(t.dyn_ref::<web::Node>()))
                .unwrap_or(false);
            if on_backdrop {
                let fx = app.borrow_mut().cemetery.close_modal();
                effects::apply(app, fx);
            }
        });
    }
}
