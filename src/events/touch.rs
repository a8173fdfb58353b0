//! Touch input. Listeners are non-passive so the page does not scroll or
//! synthesize mouse events while placing stones.

use super::{hit, listen};
use crate::app::SharedApp;
use crate::{dom, effects, input};
use cemetery_core::HitTarget;
use web_sys as web;

pub fn wire(app: &SharedApp, surface: &web::Element) {
    let surface_rect = surface.clone();
    listen(surface, "touchstart", app, false, move |app, ev: web::TouchEvent| {
        let target = hit(&ev);
        if target == HitTarget::Modal {
            return;
        }
        let Some(pos) = input::touch_pos(&ev) else {
            return;
        };
        ev.prevent_default();
        let fx = {
            let mut a = app.borrow_mut();
            a.cemetery.set_container(input::container_rect(&surface_rect));
            a.cemetery.touch_start(pos, &target, dom::now_ms())
        };
        effects::apply(app, fx);
    });
    listen(surface, "touchmove", app, false, |app, ev: web::TouchEvent| {
        let Some(pos) = input::touch_pos(&ev) else {
            return;
        };
        ev.prevent_default();
        let fx = app.borrow_mut().cemetery.touch_move(pos);
        effects::apply(app, fx);
    });
    listen(surface, "touchend", app, false, |app, ev: web::TouchEvent| {
        let Some(pos) = input::touch_pos(&ev) else {
            return;
        };
        if hit(&ev) == HitTarget::Modal {
            return;
        }
        ev.prevent_default();
        let fx = app.borrow_mut().cemetery.touch_end(pos);
        effects::apply(app, fx);
    });
    listen(surface, "touchcancel", app, true, |app, _ev: web::TouchEvent| {
        log::debug!("[touch] cancelled");
        let fx = app.borrow_mut().cemetery.touch_cancel();
        effects::apply(app, fx);
    });
}
