// Host-side tests for page constants and the pure render helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod helpers {
    include!("../src/render/helpers.rs");
}

use constants::*;
use glam::Vec3;
use helpers::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(STONE_RISE_MS > 0);
    assert!(TAP_PULSE_MS > 0);
    assert!(PARTICLE_LIFETIME_MS > TAP_PULSE_MS);
    assert!(SCENE_WIRE_DELAY_MS > 0);
    assert!(CHIME_DURATION_SEC > 0.0);
    assert!(CHIME_VELOCITY > 0.0 && CHIME_VELOCITY <= 1.0);
}

#[test]
fn element_ids_are_unique() {
    let ids = [
        TERRAIN_ID,
        TREES_ID,
        FLOWERS_ID,
        CLOUDS_ID,
        GRAVESTONES_3D_ID,
        SURFACE_2D_ID,
        DRAG_INDICATOR_ID,
        MODAL_ID,
        FORM_ID,
        MODAL_CLOSE_ID,
        NAME_INPUT_ID,
        BIRTH_YEAR_ID,
        DEATH_YEAR_ID,
        EPITAPH_INPUT_ID,
        FREE_TEXT_ID,
        STRUCTURED_FIELDS_ID,
        FREE_TEXT_FIELDS_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn gravestone_selector_covers_both_views() {
    assert!(GRAVESTONE_SELECTOR.contains(".gravestone-3d"));
    assert!(GRAVESTONE_SELECTOR.contains(".tombstone"));
}

#[test]
fn vec3_attr_is_space_separated() {
    assert_eq!(vec3_attr(Vec3::new(1.0, -2.5, 0.0)), "1 -2.5 0");
}

#[test]
fn animation_attr_omits_zero_delay() {
    assert_eq!(
        animation_attr("scale", "1 1 1", 800, 0, "easeOutBack"),
        "property: scale; to: 1 1 1; dur: 800; easing: easeOutBack"
    );
    assert!(animation_attr("scale", "1 1 1", 500, 150, "linear").ends_with("; delay: 150"));
}

#[test]
fn drift_attr_loops() {
    let s = drift_attr(Vec3::new(150.0, 20.0, -30.0), 90_000);
    assert!(s.contains("to: 150 20 -30"));
    assert!(s.contains("loop: true"));
    assert!(s.contains("dur: 90000"));
}

#[test]
fn inscribed_text_wraps_wider() {
    assert_eq!(text_wrap_count(false, WRAP_PLACEHOLDER, WRAP_INSCRIBED), WRAP_PLACEHOLDER);
    assert_eq!(text_wrap_count(true, WRAP_PLACEHOLDER, WRAP_INSCRIBED), WRAP_INSCRIBED);
    assert!(WRAP_INSCRIBED > WRAP_PLACEHOLDER);
}

#[test]
fn lower_stones_draw_on_top() {
    assert!(depth_z_index(90.0) > depth_z_index(55.0));
    assert_eq!(depth_z_index(62.5), 625);
}

#[test]
fn haze_dims_far_stones() {
    assert!((haze_brightness(1.0) - 1.0).abs() < 1e-6);
    assert!((haze_brightness(0.4) - 0.82).abs() < 1e-6);
    assert_eq!(haze_brightness(5.0), haze_brightness(1.0));
}
