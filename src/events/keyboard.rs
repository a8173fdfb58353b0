use super::listen;
use crate::app::SharedApp;
use crate::effects;
use web_sys as web;

#[inline]
pub fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

pub fn wire(app: &SharedApp, window: &web::Window) {
    listen(window, "keydown", app, true, |app, ev: web::KeyboardEvent| {
        if !is_escape(&ev.key()) {
            return;
        }
        let fx = app.borrow_mut().cemetery.escape();
        effects::apply(app, fx);
    });
}
