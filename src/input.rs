use cemetery_core::{ContainerRect, HitTarget};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Position of the touch that changed in this event (the lifted finger on
/// `touchend`, the new one on `touchstart`).
#[inline]
pub fn touch_pos(ev: &web::TouchEvent) -> Option<Vec2> {
    let t = ev.changed_touches().get(0)?;
    Some(Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

#[inline]
pub fn container_rect(el: &web::Element) -> ContainerRect {
    let r = el.get_bounding_client_rect();
    ContainerRect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

// ---------------- Hit testing ----------------
/// Resolve what an event landed on by walking up from its target.
pub fn hit_target(
    target: Option<web::EventTarget>,
    modal_selector: &str,
    stone_selector: &str,
) -> HitTarget {
    let Some(el) = target.and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return HitTarget::Surface;
    };
    let in_modal = matches!(el.closest(modal_selector), Ok(Some(_)));
    let stone_id = el
        .closest(stone_selector)
        .ok()
        .flatten()
        .map(|s| s.id())
        .filter(|id| !id.is_empty());
    classify_hit(in_modal, stone_id)
}

/// The modal sits above everything, so it wins over a stone behind it.
#[inline]
pub fn classify_hit(in_modal: bool, stone_id: Option<String>) -> HitTarget {
    match (in_modal, stone_id) {
        (true, _) => HitTarget::Modal,
        (false, Some(id)) => HitTarget::Gravestone(id),
        (false, None) => HitTarget::Surface,
    }
}

/// Left button only; other buttons never start a drag.
#[inline]
pub fn is_primary_button(button: i16) -> bool {
    button == 0
}
