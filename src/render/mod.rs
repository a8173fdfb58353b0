use cemetery_core::profile::Projection;
use cemetery_core::scenery::Scenery;
use cemetery_core::{GravestoneRecord, Placement, Profile};
use rand::Rng;
use web_sys as web;

pub mod helpers;
mod scene;
mod tombstones;

/// Which presentation layer stones are drawn into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Scene3d,
    /// DOM surface; `grounded` stones stand on their anchor point.
    Surface2d { grounded: bool },
}

impl View {
    pub fn for_profile(profile: &Profile) -> Self {
        match profile.projection {
            Projection::World => View::Scene3d,
            Projection::Flat => View::Surface2d { grounded: false },
            Projection::Perspective { .. } => View::Surface2d { grounded: true },
        }
    }

    /// Procedural landscape; the 2D surfaces paint theirs in CSS.
    pub fn populate_scenery<R: Rng>(&self, document: &web::Document, rng: &mut R) {
        if let View::Scene3d = self {
            scene::populate(document, &Scenery::generate(rng));
        }
    }

    pub fn add(&self, document: &web::Document, id: &str, record: &GravestoneRecord, animate: bool) {
        let text = record.display_text();
        match (self, &record.placement) {
            (View::Scene3d, Placement::World(p)) => {
                scene::add_gravestone(document, id, p, &text, record.is_inscribed(), animate)
            }
            (View::Surface2d { grounded }, Placement::Screen(p)) => {
                tombstones::add(document, id, p, &text, *grounded, animate)
            }
            _ => log::warn!("[scene] {} has a placement this view cannot draw", id),
        }
    }

    pub fn set_text(&self, document: &web::Document, id: &str, record: &GravestoneRecord) {
        let text = record.display_text();
        match self {
            View::Scene3d => scene::set_text(document, id, &text),
            View::Surface2d { .. } => tombstones::set_text(document, id, &text),
        }
    }

    pub fn remove(&self, document: &web::Document, id: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.remove();
        }
    }

    pub fn burst<R: Rng>(&self, document: &web::Document, record: &GravestoneRecord, rng: &mut R) {
        match &record.placement {
            Placement::World(p) => scene::flower_burst(document, p, rng),
            Placement::Screen(p) => tombstones::particle_burst(document, p, rng),
        }
    }

    pub fn set_class(&self, document: &web::Document, id: &str, class: &str, on: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let cl = el.class_list();
            _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
        }
    }
}
