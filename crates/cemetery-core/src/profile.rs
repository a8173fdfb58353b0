//! Per-variant tuning: storage key, drag thresholds, size map and gestures.

use crate::constants::DOUBLE_TAP_SIZE;
use crate::inscription::InscriptionKind;
use crate::mapping::{self, Anchor, ContainerRect, DragRect, SizeMap};
use crate::record::Placement;
use glam::Vec2;

/// How drag rectangles become placements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// Blocky 3D scene; height field supplies elevation.
    World,
    /// Flat DOM surface, percentages only.
    Flat,
    /// Fake-depth DOM surface with a sky band where nothing may stand.
    Perspective { sky_cutoff: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureFeatures {
    pub double_tap: bool,
    pub long_press: bool,
    /// Right click deletes a stone.
    pub context_delete: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub storage_key: &'static str,
    pub id_prefix: &'static str,
    /// Drag must be strictly larger than this on both axes.
    pub min_drag: Vec2,
    pub size: SizeMap,
    pub anchor: Anchor,
    pub projection: Projection,
    pub inscription: InscriptionKind,
    pub gestures: GestureFeatures,
}

impl Profile {
    pub fn blocky_3d() -> Self {
        Self {
            name: "blocky3d",
            storage_key: "dramatic_gravestones",
            id_prefix: "grave",
            min_drag: Vec2::new(20.0, 20.0),
            size: mapping::WORLD_STONE_SIZE,
            anchor: Anchor::Center,
            projection: Projection::World,
            inscription: InscriptionKind::Structured,
            gestures: GestureFeatures {
                double_tap: false,
                long_press: false,
                context_delete: false,
            },
        }
    }

    pub fn flat_2d() -> Self {
        Self {
            name: "flat2d",
            storage_key: "flat_tombstones",
            id_prefix: "tomb",
            min_drag: Vec2::new(30.0, 40.0),
            size: SizeMap::new(Vec2::ONE, Vec2::new(60.0, 80.0), Vec2::new(200.0, 260.0)),
            anchor: Anchor::Center,
            projection: Projection::Flat,
            inscription: InscriptionKind::FreeText,
            gestures: GestureFeatures {
                double_tap: false,
                long_press: false,
                context_delete: false,
            },
        }
    }

    pub fn perspective_2d() -> Self {
        Self {
            name: "perspective2d",
            storage_key: "perspective_tombstones",
            id_prefix: "tomb",
            min_drag: Vec2::new(50.0, 50.0),
            size: SizeMap::new(Vec2::ONE, Vec2::new(30.0, 40.0), Vec2::new(200.0, 260.0)),
            anchor: Anchor::BaseCenter,
            projection: Projection::Perspective { sky_cutoff: 50.0 },
            inscription: InscriptionKind::FreeText,
            gestures: GestureFeatures {
                double_tap: true,
                long_press: true,
                context_delete: true,
            },
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "blocky3d" => Some(Self::blocky_3d()),
            "flat2d" => Some(Self::flat_2d()),
            "perspective2d" => Some(Self::perspective_2d()),
            _ => None,
        }
    }

    pub fn is_world(&self) -> bool {
        matches!(self.projection, Projection::World)
    }

    fn sky_cutoff(&self) -> Option<f32> {
        match self.projection {
            Projection::Perspective { sky_cutoff } => Some(sky_cutoff),
            _ => None,
        }
    }

    /// Placement for a committed drag, or `None` when it lands in the sky.
    pub fn place(&self, rect: &DragRect, container: &ContainerRect) -> Option<Placement> {
        let anchor = self.anchor.point(rect);
        match self.projection {
            Projection::World => Some(Placement::World(mapping::world_placement(
                anchor, rect.size, container,
            ))),
            _ => mapping::screen_placement(anchor, rect.size, container, &self.size, self.sky_cutoff())
                .map(Placement::Screen),
        }
    }

    /// Placement for a double tap: fixed size, anchored at the tap point.
    pub fn place_tap(&self, point: Vec2, container: &ContainerRect) -> Option<Placement> {
        let size = Vec2::from(DOUBLE_TAP_SIZE);
        match self.projection {
            Projection::World => Some(Placement::World(mapping::world_placement(
                point, size, container,
            ))),
            _ => {
                let fixed = SizeMap::new(Vec2::ONE, size, size);
                mapping::screen_placement(point, size, container, &fixed, self.sky_cutoff())
                    .map(Placement::Screen)
            }
        }
    }
}
