//! Atmospheric perspective: colors drift toward a hazy blue-grey with distance.

use crate::constants::STONE_TINT_PER_UNIT;

const TERRAIN_HAZE_PER_UNIT: f32 = 0.008;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build from float channels, truncating like `Math.floor` and saturating at 255.
    #[inline]
    pub fn from_f32(r: f32, g: f32, b: f32) -> Self {
        let ch = |v: f32| v.clamp(0.0, 255.0) as u8;
        Rgb(ch(r), ch(g), ch(b))
    }

    /// `#rrggbb`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// `rgb(r, g, b)`
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

#[inline]
fn haze(distance: f32, per_unit: f32) -> f32 {
    (distance * per_unit).min(1.0)
}

/// Ground blocks: saturated green up close, bluer toward the horizon.
pub fn terrain_color(distance: f32) -> Rgb {
    let blue = haze(distance, TERRAIN_HAZE_PER_UNIT);
    let green = (1.0 - blue * 0.6).max(0.4);
    Rgb::from_f32(
        120.0 * blue + 70.0 * green,
        240.0 * green + 120.0 * blue,
        20.0 * green + 160.0 * blue,
    )
}

pub fn trunk_color(distance: f32) -> Rgb {
    let a = haze(distance, TERRAIN_HAZE_PER_UNIT);
    let brown = 1.0 - a * 0.5;
    Rgb::from_f32(
        139.0 * brown + 100.0 * a,
        69.0 * brown + 100.0 * a,
        19.0 * brown + 150.0 * a,
    )
}

pub fn leaf_color(distance: f32) -> Rgb {
    let a = haze(distance, TERRAIN_HAZE_PER_UNIT);
    let green = 1.0 - a * 0.4;
    Rgb::from_f32(
        34.0 * green + 120.0 * a,
        139.0 * green + 140.0 * a,
        34.0 * green + 160.0 * a,
    )
}

/// Light grey granite that whitens slightly into the distance.
pub fn stone_color(distance: f32) -> Rgb {
    let a = haze(distance, STONE_TINT_PER_UNIT);
    Rgb::from_f32(192.0 + 50.0 * a, 192.0 + 50.0 * a, 192.0 + 60.0 * a)
}
