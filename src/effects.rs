//! Applies controller effects to the page.

use crate::app::SharedApp;
use crate::constants::{
    ACTIVE_CLASS, DRAG_INDICATOR_ID, MARKED_CLASS, PRESSING_CLASS, TAP_PULSE_MS,
};
use crate::{dom, modal};
use cemetery_core::{DragRect, Effect, Effects, GravestoneRecord, Placement};
use glam::Vec2;
use web_sys as web;

/// Loudness hint for the chime, 1.0 for the nearest stones.
fn nearness(record: &GravestoneRecord) -> f32 {
    match &record.placement {
        Placement::World(p) => p.base_scale / 2.0,
        Placement::Screen(p) => p.scale,
    }
}

fn show_drag_rect(document: &web::Document, rect: &DragRect) {
    let Some(el) = document.get_element_by_id(DRAG_INDICATOR_ID) else {
        return;
    };
    dom::set_styles(
        &el,
        &[
            ("left", format!("{}px", rect.origin.x).as_str()),
            ("top", format!("{}px", rect.origin.y).as_str()),
            ("width", format!("{}px", rect.width()).as_str()),
            ("height", format!("{}px", rect.height()).as_str()),
        ],
    );
    _ = el.class_list().add_1(ACTIVE_CLASS);
}

fn hide_drag_rect(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(DRAG_INDICATOR_ID) {
        _ = el.class_list().remove_1(ACTIVE_CLASS);
    }
}

fn tap_pulse(document: &web::Document, pos: Vec2) {
    let Some(body) = document.body() else {
        return;
    };
    let Some(pulse) = dom::create_with_attrs(document, "div", &[("class", "tap-pulse")]) else {
        return;
    };
    dom::set_styles(
        &pulse,
        &[
            ("left", format!("{}px", pos.x).as_str()),
            ("top", format!("{}px", pos.y).as_str()),
        ],
    );
    _ = body.append_child(&pulse);
    dom::remove_later(pulse, TAP_PULSE_MS);
}

fn vibrate(ms: u32) {
    if let Some(w) = web::window() {
        // unsupported devices just return false
        _ = w.navigator().vibrate_with_duration(ms);
    }
}

pub fn apply(app: &SharedApp, effects: Effects) {
    if effects.is_empty() {
        return;
    }
    let mut guard = app.borrow_mut();
    let a = &mut *guard;
    let doc = a.document.clone();
    for effect in effects {
        match effect {
            Effect::DragRect(rect) => show_drag_rect(&doc, &rect),
            Effect::DragCleared => hide_drag_rect(&doc),
            Effect::Restored { id, record } => a.view.add(&doc, &id, &record, false),
            Effect::Created { id, record } => {
                a.view.add(&doc, &id, &record, true);
                a.chime.ring(nearness(&record));
            }
            Effect::Inscribed { id, record } => a.view.set_text(&doc, &id, &record),
            Effect::Removed { id } => {
                a.clear_long_press_timer();
                a.view.remove(&doc, &id);
            }
            Effect::ModalOpened { .. } => modal::show(&doc, a.cemetery.profile().inscription),
            Effect::ModalClosed => modal::hide(&doc),
            Effect::LongPressArmed { id, delay_ms } => {
                a.clear_long_press_timer();
                a.view.set_class(&doc, &id, PRESSING_CLASS, true);
                let app_timer = app.clone();
                a.long_press_timer = dom::set_timeout(delay_ms as i32, move || {
                    app_timer.borrow_mut().long_press_timer = None;
                    let fx = app_timer.borrow_mut().cemetery.long_press_elapsed(&id);
                    apply(&app_timer, fx);
                });
            }
            Effect::LongPressCancelled { id } => {
                a.clear_long_press_timer();
                a.view.set_class(&doc, &id, PRESSING_CLASS, false);
                a.view.set_class(&doc, &id, MARKED_CLASS, false);
            }
            Effect::MarkedForDeletion { id } => {
                a.view.set_class(&doc, &id, PRESSING_CLASS, false);
                a.view.set_class(&doc, &id, MARKED_CLASS, true);
                log::info!("[touch] {} marked for deletion", id);
            }
            Effect::TapPulse(pos) => tap_pulse(&doc, pos),
            Effect::Vibrate(ms) => vibrate(ms),
            Effect::Burst { id } => {
                if let Some(record) = a.cemetery.registry().get(&id).cloned() {
                    a.view.burst(&doc, &record, &mut a.rng);
                }
            }
        }
    }
}
