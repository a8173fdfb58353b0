//! Screen-space to scene-space mapping for placed stones.

use crate::atmosphere::{self, Rgb};
use crate::constants::{
    STONE_DISTANCE_FALLOFF, STONE_MIN_SCALE, WORLD_SPAN_X, WORLD_SPAN_Z, WORLD_Z_SHIFT,
};
use crate::height::{distance_factor, distance_from_camera, terrain_height};
use crate::record::{ScreenPlacement, WorldPlacement};
use glam::{Vec2, Vec3};

/// Bounding box of the interactive surface in client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Normalized device coordinates: x right, y up, both in [-1, 1].
    pub fn to_ndc(&self, screen: Vec2) -> Vec2 {
        if self.is_degenerate() {
            return Vec2::ZERO;
        }
        Vec2::new(
            (screen.x - self.left) / self.width * 2.0 - 1.0,
            -((screen.y - self.top) / self.height) * 2.0 + 1.0,
        )
    }

    /// Position as a percentage of the container, y growing downward.
    pub fn to_percent(&self, screen: Vec2) -> Vec2 {
        if self.is_degenerate() {
            return Vec2::splat(50.0);
        }
        Vec2::new(
            (screen.x - self.left) / self.width * 100.0,
            (screen.y - self.top) / self.height * 100.0,
        )
    }
}

/// The live selection box between the gesture anchor and the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRect {
    /// Top-left corner.
    pub origin: Vec2,
    pub size: Vec2,
}

impl DragRect {
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        Self {
            origin: a.min(b),
            size: (a - b).abs(),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Middle of the bottom edge, where a stone meets the ground.
    pub fn base_center(&self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y)
    }

    /// Strictly larger than `min` on both axes.
    pub fn exceeds(&self, min: Vec2) -> bool {
        self.size.x > min.x && self.size.y > min.y
    }
}

/// Which point of the drag rectangle a stone is anchored at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Center,
    BaseCenter,
}

impl Anchor {
    pub fn point(&self, rect: &DragRect) -> Vec2 {
        match self {
            Anchor::Center => rect.center(),
            Anchor::BaseCenter => rect.base_center(),
        }
    }
}

/// Clamped linear map from drag dimensions to stone dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeMap {
    pub factor: Vec2,
    pub min: Vec2,
    pub max: Vec2,
}

impl SizeMap {
    pub const fn new(factor: Vec2, min: Vec2, max: Vec2) -> Self {
        Self { factor, min, max }
    }

    pub fn apply(&self, drag: Vec2) -> Vec2 {
        (drag * self.factor).clamp(self.min, self.max)
    }
}

/// Drag size to (width, slab height) multipliers of the perspective scale.
pub const WORLD_STONE_SIZE: SizeMap = SizeMap::new(
    Vec2::new(1.0 / 80.0, 1.0 / 40.0),
    Vec2::new(0.5, 1.0),
    Vec2::new(2.0, 4.0),
);

/// A point on the ground plane under a screen position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundPoint {
    /// Ground position, y already on the terrain surface.
    pub position: Vec3,
    /// Simulated distance from the viewer.
    pub distance: f32,
    /// Perspective scale in `[STONE_MIN_SCALE, 2)`.
    pub scale: f32,
}

impl GroundPoint {
    pub fn tint(&self) -> Rgb {
        atmosphere::stone_color(self.distance)
    }
}

/// Project a screen position onto the 3D ground plane.
pub fn screen_to_world(screen: Vec2, rect: &ContainerRect) -> GroundPoint {
    let ndc = rect.to_ndc(screen);
    let x = ndc.x * WORLD_SPAN_X;
    let z = ndc.y * WORLD_SPAN_Z + WORLD_Z_SHIFT;
    let distance = distance_from_camera(z);
    let scale = (2.0 * distance_factor(distance, STONE_DISTANCE_FALLOFF)).max(STONE_MIN_SCALE);
    GroundPoint {
        position: Vec3::new(x, terrain_height(x, z), z),
        distance,
        scale,
    }
}

/// Full 3D placement for a stone centred at `screen` drawn with `drag` size.
pub fn world_placement(screen: Vec2, drag: Vec2, rect: &ContainerRect) -> WorldPlacement {
    let ground = screen_to_world(screen, rect);
    let size = WORLD_STONE_SIZE.apply(drag) * ground.scale;
    WorldPlacement {
        x: ground.position.x,
        // the base block sits one scale unit above the surface
        y: ground.position.y + ground.scale,
        z: ground.position.z,
        scale: size.x,
        height: size.y,
        base_scale: ground.scale,
    }
}

/// Size multiplier for a 2D stone: 0.4 at the horizon, 1.0 at the bottom edge.
pub fn perspective_scale(y_percent: f32, horizon_percent: f32) -> f32 {
    let span = (100.0 - horizon_percent).max(f32::EPSILON);
    let depth = ((y_percent - horizon_percent) / span).clamp(0.0, 1.0);
    0.4 + 0.6 * depth
}

/// Map a screen anchor to a 2D placement.
///
/// With a `sky_cutoff`, anchors above that percentage are rejected and the
/// stone is shrunk by [`perspective_scale`].
pub fn screen_placement(
    anchor: Vec2,
    drag: Vec2,
    rect: &ContainerRect,
    size: &SizeMap,
    sky_cutoff: Option<f32>,
) -> Option<ScreenPlacement> {
    let percent = rect.to_percent(anchor);
    let scale = match sky_cutoff {
        Some(cutoff) if percent.y < cutoff => return None,
        Some(cutoff) => perspective_scale(percent.y, cutoff),
        None => 1.0,
    };
    let dims = size.apply(drag * scale);
    Some(ScreenPlacement {
        x: percent.x,
        y: percent.y,
        width: dims.x,
        height: dims.y,
        scale,
    })
}
