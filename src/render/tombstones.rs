//! Absolutely positioned DOM tombstones for the 2D surfaces.

use super::helpers::{depth_z_index, haze_brightness};
use crate::constants::{
    PARTICLE_COUNT, PARTICLE_LIFETIME_MS, PARTICLE_RADIUS_PX, RISING_CLASS, STONE_RISE_MS,
    SURFACE_2D_ID,
};
use crate::dom;
use cemetery_core::scenery::FLOWER_PALETTE;
use cemetery_core::ScreenPlacement;
use rand::Rng;
use web_sys as web;

/// Add a tombstone to the surface. `grounded` stones hang from their anchor
/// (bottom-centre), others are centred on it.
pub fn add(
    document: &web::Document,
    id: &str,
    p: &ScreenPlacement,
    text: &str,
    grounded: bool,
    animate: bool,
) {
    let Some(surface) = document.get_element_by_id(SURFACE_2D_ID) else {
        log::warn!("[scene] missing #{}", SURFACE_2D_ID);
        return;
    };
    let Some(stone) =
        dom::create_with_attrs(document, "div", &[("id", id), ("class", "tombstone")])
    else {
        return;
    };
    let translate = if grounded {
        "translate(-50%, -100%)"
    } else {
        "translate(-50%, -50%)"
    };
    dom::set_styles(
        &stone,
        &[
            ("left", format!("{}%", p.x).as_str()),
            ("top", format!("{}%", p.y).as_str()),
            ("width", format!("{}px", p.width).as_str()),
            ("height", format!("{}px", p.height).as_str()),
            ("transform", translate),
            ("z-index", depth_z_index(p.y).to_string().as_str()),
            ("filter", format!("brightness({:.2})", haze_brightness(p.scale)).as_str()),
        ],
    );

    if let Some(label) = dom::create_with_attrs(document, "div", &[("class", "tombstone-text")]) {
        label.set_text_content(Some(text));
        _ = stone.append_child(&label);
    }

    if animate {
        _ = stone.class_list().add_1(RISING_CLASS);
        let rising = stone.clone();
        _ = dom::set_timeout(STONE_RISE_MS as i32, move || {
            _ = rising.class_list().remove_1(RISING_CLASS);
        });
    }
    _ = surface.append_child(&stone);
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    let Some(stone) = document.get_element_by_id(id) else {
        return;
    };
    if let Ok(Some(label)) = stone.query_selector(".tombstone-text") {
        label.set_text_content(Some(text));
    }
}

/// Scatter short-lived flower particles around the stone's anchor.
pub fn particle_burst<R: Rng>(document: &web::Document, p: &ScreenPlacement, rng: &mut R) {
    let Some(surface) = document.get_element_by_id(SURFACE_2D_ID) else {
        return;
    };
    for i in 0..PARTICLE_COUNT {
        let angle = std::f32::consts::TAU * i as f32 / PARTICLE_COUNT as f32;
        let dx = angle.cos() * PARTICLE_RADIUS_PX * p.scale;
        let dy = angle.sin() * PARTICLE_RADIUS_PX * p.scale;
        let color = FLOWER_PALETTE[rng.gen_range(0..FLOWER_PALETTE.len())];
        let Some(particle) = dom::create_with_attrs(document, "span", &[("class", "particle")])
        else {
            continue;
        };
        dom::set_styles(
            &particle,
            &[
                ("left", format!("{}%", p.x).as_str()),
                ("top", format!("{}%", p.y).as_str()),
                ("background", color.hex().as_str()),
                ("--dx", format!("{dx:.1}px").as_str()),
                ("--dy", format!("{dy:.1}px").as_str()),
                ("animation-delay", format!("{}ms", i * 50).as_str()),
            ],
        );
        _ = surface.append_child(&particle);
        dom::remove_later(particle, PARTICLE_LIFETIME_MS);
    }
}
