//! A-Frame entity builders for the blocky 3D cemetery.

use super::helpers::{animation_attr, drift_attr, text_wrap_count, vec3_attr};
use crate::constants::{
    CLOUDS_ID, FLOWERS_ID, GRAVESTONES_3D_ID, STONE_RISE_DEPTH, STONE_RISE_MS, TERRAIN_ID,
    TEXT_COLOR, TREES_ID, WRAP_INSCRIBED, WRAP_PLACEHOLDER,
};
use crate::dom;
use cemetery_core::atmosphere;
use cemetery_core::height::distance_from_camera;
use cemetery_core::scenery::{self, Block, Prop, Scenery};
use cemetery_core::WorldPlacement;
use glam::Vec3;
use rand::Rng;
use web_sys as web;

const STONE_SHADOW: &str = "cast: true; receive: true";

fn box_element(document: &web::Document, block: &Block, shadow: Option<&str>) -> Option<web::Element> {
    let el = document.create_element("a-box").ok()?;
    _ = el.set_attribute("position", &vec3_attr(block.position));
    _ = el.set_attribute("width", &block.size.x.to_string());
    _ = el.set_attribute("height", &block.size.y.to_string());
    _ = el.set_attribute("depth", &block.size.z.to_string());
    _ = el.set_attribute("color", &block.color.hex());
    if block.opacity < 1.0 {
        _ = el.set_attribute("opacity", &block.opacity.to_string());
    }
    if let Some(s) = shadow {
        _ = el.set_attribute("shadow", s);
    }
    Some(el)
}

fn grow_in(el: &web::Element, delay_ms: u32) {
    _ = el.set_attribute("scale", "0 0 0");
    _ = el.set_attribute(
        "animation__scale",
        &animation_attr("scale", "1 1 1", 500, delay_ms, "easeOutBack"),
    );
}

fn prop_element(document: &web::Document, prop: &Prop) -> Option<web::Element> {
    let group = document.create_element("a-entity").ok()?;
    for block in &prop.blocks {
        if let Some(el) = box_element(document, block, None) {
            _ = group.append_child(&el);
        }
    }
    if let Some(drift) = &prop.drift {
        _ = group.set_attribute("animation", &drift_attr(drift.to, drift.duration_ms));
    }
    Some(group)
}

fn append_props(document: &web::Document, container_id: &str, props: &[Prop]) {
    let Some(container) = document.get_element_by_id(container_id) else {
        log::warn!("[scene] missing #{}", container_id);
        return;
    };
    for prop in props {
        if let Some(el) = prop_element(document, prop) {
            _ = container.append_child(&el);
        }
    }
}

/// Append the generated landscape to the scenery containers.
pub fn populate(document: &web::Document, scenery: &Scenery) {
    if let Some(terrain) = document.get_element_by_id(TERRAIN_ID) {
        for block in &scenery.terrain {
            if let Some(el) = box_element(document, block, Some("receive: true")) {
                _ = terrain.append_child(&el);
            }
        }
    }
    append_props(document, TREES_ID, &scenery.trees);
    append_props(document, FLOWERS_ID, &scenery.flowers);
    append_props(document, CLOUDS_ID, &scenery.clouds);
    log::info!("[scene] scenery ready, {} blocks", scenery.block_count());
}

/// Build the base/slab/cap stone with its text and add it to the scene.
///
/// With `animate`, the stone rises out of the ground while scaling up.
pub fn add_gravestone(
    document: &web::Document,
    id: &str,
    p: &WorldPlacement,
    text: &str,
    inscribed: bool,
    animate: bool,
) {
    let Some(container) = document.get_element_by_id(GRAVESTONES_3D_ID) else {
        log::warn!("[scene] missing #{}", GRAVESTONES_3D_ID);
        return;
    };
    let Some(stone) = dom::create_with_attrs(
        document,
        "a-entity",
        &[("id", id), ("class", "gravestone-3d clickable")],
    ) else {
        return;
    };
    let position = p.position();
    _ = stone.set_attribute("position", &vec3_attr(position));

    let color = atmosphere::stone_color(distance_from_camera(p.z));
    let b = p.base_scale;
    let parts = [
        Block {
            position: Vec3::ZERO,
            size: Vec3::new(p.scale, b * 0.2, b * 0.5),
            color,
            opacity: 1.0,
            delay_ms: 0,
        },
        Block {
            position: Vec3::new(0.0, p.height / 2.0 + b * 0.1, 0.0),
            size: Vec3::new(p.scale * 0.8, p.height, b * 0.3),
            color,
            opacity: 1.0,
            delay_ms: 0,
        },
        Block {
            position: Vec3::new(0.0, p.height + b * 0.3, 0.0),
            size: Vec3::new(p.scale * 0.6, b * 0.4, b * 0.3),
            color,
            opacity: 1.0,
            delay_ms: 0,
        },
    ];
    for part in &parts {
        if let Some(el) = box_element(document, part, Some(STONE_SHADOW)) {
            _ = stone.append_child(&el);
        }
    }

    if let Ok(label) = document.create_element("a-text") {
        _ = label.set_attribute("value", text);
        _ = label.set_attribute(
            "position",
            &vec3_attr(Vec3::new(0.0, p.height / 2.0 + b * 0.1, b * 0.16)),
        );
        _ = label.set_attribute("align", "center");
        _ = label.set_attribute("color", TEXT_COLOR);
        _ = label.set_attribute("width", &(4.0 * b).max(2.0).to_string());
        let wrap = text_wrap_count(inscribed, WRAP_PLACEHOLDER, WRAP_INSCRIBED);
        _ = label.set_attribute("wrap-count", &wrap.to_string());
        _ = stone.append_child(&label);
    }

    if animate {
        let start = position - Vec3::new(0.0, STONE_RISE_DEPTH, 0.0);
        _ = stone.set_attribute("position", &vec3_attr(start));
        _ = stone.set_attribute("scale", "0 0 0");
        _ = stone.set_attribute(
            "animation__position",
            &animation_attr("position", &vec3_attr(position), STONE_RISE_MS, 0, "easeOutBack"),
        );
        _ = stone.set_attribute(
            "animation__scale",
            &animation_attr("scale", "1 1 1", STONE_RISE_MS, 0, "easeOutBack"),
        );
    }
    _ = container.append_child(&stone);
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    let Some(stone) = document.get_element_by_id(id) else {
        return;
    };
    if let Ok(Some(label)) = stone.query_selector("a-text") {
        _ = label.set_attribute("value", text);
        _ = label.set_attribute("wrap-count", &WRAP_INSCRIBED.to_string());
    }
}

/// Pop a ring of flowers around the stone.
pub fn flower_burst<R: Rng>(document: &web::Document, p: &WorldPlacement, rng: &mut R) {
    let Some(flowers) = document.get_element_by_id(FLOWERS_ID) else {
        return;
    };
    for block in scenery::flower_burst(p.position(), rng) {
        if let Some(el) = box_element(document, &block, None) {
            grow_in(&el, block.delay_ms);
            _ = flowers.append_child(&el);
        }
    }
}
