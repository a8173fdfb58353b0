//! Terrain height field shared by scenery and gravestone placement.
//!
//! Everything that sits on the ground asks [`terrain_height`] for its base
//! elevation, so blocks, trees and stones stay flush with each other.

use crate::constants::{CAMERA_Z, HILL_LAYER, MICRO_LAYER, ROLLING_LAYER, TERRAIN_DISTANCE_FALLOFF};

/// Distance along the view axis from the camera to world depth `z`, offset by
/// one so it never reaches zero.
#[inline]
pub fn distance_from_camera(z: f32) -> f32 {
    (z - CAMERA_Z).abs() + 1.0
}

/// Falloff in `(0, 1]` that shrinks blocks and flattens hills with distance.
#[inline]
pub fn distance_factor(distance: f32, falloff: f32) -> f32 {
    1.0 / (distance * falloff + 1.0)
}

/// Elevation of the ground at `(x, z)`.
///
/// Three sinusoid layers at different frequencies approximate rolling hills;
/// the sum is damped with distance so the horizon reads as flat.
pub fn terrain_height(x: f32, z: f32) -> f32 {
    let damp = distance_factor(distance_from_camera(z), TERRAIN_DISTANCE_FALLOFF);
    let hills = (x * HILL_LAYER.0).sin() * (z * HILL_LAYER.0).cos() * HILL_LAYER.1;
    let rolling = (x * ROLLING_LAYER.0).sin() * (z * ROLLING_LAYER.0).sin() * ROLLING_LAYER.1;
    let micro = (x * MICRO_LAYER.0).sin() * (z * MICRO_LAYER.0).cos() * MICRO_LAYER.1;
    (hills + rolling + micro) * damp
}
