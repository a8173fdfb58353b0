use crate::constants::PLACEHOLDER_TEXT;
use crate::inscription::Inscription;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Where and how large a stone is in the 3D scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldPlacement {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Base width after perspective and drag scaling.
    pub scale: f32,
    /// Height of the main slab.
    pub height: f32,
    /// Perspective scale at the stone's depth; drives depths and trims.
    pub base_scale: f32,
}

impl WorldPlacement {
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Where and how large a tombstone is on a 2D surface.
///
/// `x`/`y` are percentages of the container; `width`/`height` are CSS pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenPlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default = "unit_scale")]
    pub scale: f32,
}

fn unit_scale() -> f32 {
    1.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Placement {
    World(WorldPlacement),
    Screen(ScreenPlacement),
}

/// One placed gravestone and its optional inscription.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GravestoneRecord {
    #[serde(flatten)]
    pub placement: Placement,
    #[serde(default)]
    pub inscription: Option<Inscription>,
}

impl GravestoneRecord {
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            inscription: None,
        }
    }

    pub fn display_text(&self) -> String {
        self.inscription
            .as_ref()
            .map(Inscription::display_text)
            .unwrap_or_else(|| PLACEHOLDER_TEXT.to_string())
    }

    pub fn is_inscribed(&self) -> bool {
        self.inscription.is_some()
    }
}

/// Numeric counter of an id such as `grave_12`.
pub fn id_suffix(id: &str) -> Option<u64> {
    id.rsplit_once('_').and_then(|(_, n)| n.parse().ok())
}
