use super::{hit, listen};
use crate::app::SharedApp;
use crate::effects;
use crate::input;
use cemetery_core::HitTarget;
use web_sys as web;

pub fn wire(app: &SharedApp, window: &web::Window, document: &web::Document, surface: &web::Element) {
    wire_mousedown(app, surface);
    // move/up on the window so a drag that leaves the surface still ends
    listen(window, "mousemove", app, true, |app, ev: web::MouseEvent| {
        let fx = app.borrow_mut().cemetery.pointer_move(input::client_pos(&ev));
        effects::apply(app, fx);
    });
    listen(window, "mouseup", app, true, |app, ev: web::MouseEvent| {
        let fx = app.borrow_mut().cemetery.pointer_up(input::client_pos(&ev));
        effects::apply(app, fx);
    });
    wire_click(app, document);
    wire_contextmenu(app, document);
}

fn wire_mousedown(app: &SharedApp, surface: &web::Element) {
    let surface_rect = surface.clone();
    listen(surface, "mousedown", app, false, move |app, ev: web::MouseEvent| {
        if !input::is_primary_button(ev.button()) {
            return;
        }
        let target = hit(&ev);
        if target != HitTarget::Surface {
            return;
        }
        ev.prevent_default();
        let fx = {
            let mut a = app.borrow_mut();
            a.cemetery.set_container(input::container_rect(&surface_rect));
            a.cemetery.pointer_down(input::client_pos(&ev), &target)
        };
        effects::apply(app, fx);
    });
}

fn wire_click(app: &SharedApp, document: &web::Document) {
    listen(document, "click", app, true, |app, ev: web::MouseEvent| {
        if let HitTarget::Gravestone(id) = hit(&ev) {
            ev.stop_propagation();
            let fx = app.borrow_mut().cemetery.click_gravestone(&id);
            effects::apply(app, fx);
        }
    });
}

fn wire_contextmenu(app: &SharedApp, document: &web::Document) {
    listen(document, "contextmenu", app, false, |app, ev: web::MouseEvent| {
        let target = hit(&ev);
        if !matches!(target, HitTarget::Gravestone(_)) {
            return;
        }
        let fx = app.borrow_mut().cemetery.context_menu(&target);
        if !fx.is_empty() {
            ev.prevent_default();
            log::info!("[drag] deleted via context menu");
        }
        effects::apply(app, fx);
    });
}
