//! Procedural decorative scenery for the blocky 3D cemetery.
//!
//! Generators here are render-agnostic: they return plain [`Block`] lists that
//! the front-end turns into scene entities. All randomness comes from the
//! caller's RNG so a fixed seed reproduces the same landscape.

use crate::atmosphere::{self, Rgb};
use crate::constants::{BURST_FLOWERS, BURST_STAGGER_MS};
use crate::height::{distance_factor, distance_from_camera, terrain_height};
use glam::Vec3;
use rand::Rng;
use smallvec::SmallVec;

// Terrain grid extents (world units)
const TERRAIN_Z_NEAR: f32 = 15.0;
const TERRAIN_Z_STEP: f32 = 0.4;
const TERRAIN_Z_STEPS: usize = 237; // 15 down to about -80
const TERRAIN_X_LEFT: f32 = -50.0;
const TERRAIN_X_STEP: f32 = 0.6;
const TERRAIN_X_STEPS: usize = 166; // -50 up to about 50

pub const TREE_COUNT: usize = 25;
pub const FLOWER_COUNT: usize = 35;
pub const CLOUD_COUNT: usize = 8;

const STEM_GREEN: Rgb = Rgb(0x22, 0x8b, 0x22);
const CLOUD_WHITE: Rgb = Rgb(0xff, 0xff, 0xff);

pub const FLOWER_PALETTE: [Rgb; 8] = [
    Rgb(0xff, 0xd7, 0x00), // gold
    Rgb(0xff, 0x69, 0xb4), // hot pink
    Rgb(0xdd, 0xa0, 0xdd), // plum
    Rgb(0x87, 0xce, 0xeb), // sky blue
    Rgb(0xff, 0xa5, 0x00), // orange
    Rgb(0xff, 0x14, 0x93), // deep pink
    Rgb(0xba, 0x55, 0xd3), // orchid
    Rgb(0xf0, 0xe6, 0x8c), // khaki
];

/// Crown layout in units of the tree scale, relative to the trunk top.
const LEAF_OFFSETS: [[f32; 3]; 11] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
    [0.0, 1.0, 0.0],
    [0.5, 1.0, 0.0],
    [-0.5, 1.0, 0.0],
    [0.0, 1.0, 0.5],
    [0.0, 1.0, -0.5],
    [0.0, 2.0, 0.0],
];

const CLOUD_OFFSETS: [[f32; 3]; 12] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
    [2.0, 0.0, 0.0],
    [-2.0, 0.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 0.0],
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
];

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub position: Vec3,
    pub size: Vec3,
    pub color: Rgb,
    pub opacity: f32,
    /// Grow-in delay for staggered appearance; zero for static scenery.
    pub delay_ms: u32,
}

impl Block {
    fn cube(position: Vec3, edge: f32, color: Rgb) -> Self {
        Self {
            position,
            size: Vec3::splat(edge),
            color,
            opacity: 1.0,
            delay_ms: 0,
        }
    }
}

/// Linear looping movement applied to a whole prop.
#[derive(Clone, Debug, PartialEq)]
pub struct Drift {
    pub to: Vec3,
    pub duration_ms: u32,
}

/// A group of blocks rendered as one entity (a tree, a flower, a cloud).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Prop {
    pub blocks: SmallVec<[Block; 16]>,
    pub drift: Option<Drift>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scenery {
    pub terrain: Vec<Block>,
    pub trees: Vec<Prop>,
    pub flowers: Vec<Prop>,
    pub clouds: Vec<Prop>,
}

impl Scenery {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self {
            terrain: terrain(rng),
            trees: trees(rng, TREE_COUNT),
            flowers: flowers(rng, FLOWER_COUNT),
            clouds: clouds(rng, CLOUD_COUNT),
        }
    }

    pub fn block_count(&self) -> usize {
        let props = |v: &[Prop]| v.iter().map(|p| p.blocks.len()).sum::<usize>();
        self.terrain.len() + props(&self.trees) + props(&self.flowers) + props(&self.clouds)
    }
}

/// Ground blocks from the viewer out to the horizon, larger up close.
///
/// Far rows are thinned randomly to keep the entity count manageable.
pub fn terrain<R: Rng>(rng: &mut R) -> Vec<Block> {
    let mut blocks = Vec::new();
    for zi in 0..=TERRAIN_Z_STEPS {
        let z = TERRAIN_Z_NEAR - zi as f32 * TERRAIN_Z_STEP;
        let distance = distance_from_camera(z);
        let factor = distance_factor(distance, 0.03);
        let edge = (2.0 * factor).max(0.2);
        let color = atmosphere::terrain_color(distance);
        for xi in 0..=TERRAIN_X_STEPS {
            let x = TERRAIN_X_LEFT + xi as f32 * TERRAIN_X_STEP;
            if rng.gen::<f32>() > 0.4 + factor * 0.3 {
                continue;
            }
            let y = terrain_height(x, z);
            blocks.push(Block::cube(Vec3::new(x, y, z), edge, color));
        }
    }
    blocks
}

pub fn trees<R: Rng>(rng: &mut R, count: usize) -> Vec<Prop> {
    (0..count)
        .map(|_| {
            let x = (rng.gen::<f32>() - 0.5) * 80.0;
            let z = rng.gen::<f32>() * -70.0 - 5.0;
            let distance = distance_from_camera(z);
            let scale = distance_factor(distance, 0.025).max(0.2);
            let y = terrain_height(x, z) + scale;
            let trunk_height = (4.0 * scale).max(1.0);

            let mut prop = Prop::default();
            let trunk = atmosphere::trunk_color(distance);
            for j in 0..(trunk_height.floor() as usize).max(1) {
                let pos = Vec3::new(x, y + j as f32 * scale, z);
                prop.blocks.push(Block::cube(pos, scale, trunk));
            }

            let leaf = atmosphere::leaf_color(distance);
            for [lx, ly, lz] in LEAF_OFFSETS {
                if rng.gen::<f32>() <= 0.3 {
                    continue;
                }
                let pos = Vec3::new(x + lx * scale, y + trunk_height + ly * scale, z + lz * scale);
                let mut block = Block::cube(pos, scale * 0.8, leaf);
                block.opacity = 0.9;
                prop.blocks.push(block);
            }
            prop
        })
        .collect()
}

pub fn flowers<R: Rng>(rng: &mut R, count: usize) -> Vec<Prop> {
    (0..count)
        .map(|_| {
            let x = (rng.gen::<f32>() - 0.5) * 70.0;
            let z = rng.gen::<f32>() * -50.0 - 5.0;
            let scale = distance_factor(distance_from_camera(z), 0.03).max(0.1);
            let y = terrain_height(x, z) + scale * 0.5;

            let mut prop = Prop::default();
            prop.blocks.push(Block {
                position: Vec3::new(x, y, z),
                size: Vec3::new(scale * 0.1, scale * 0.8, scale * 0.1),
                color: STEM_GREEN,
                opacity: 1.0,
                delay_ms: 0,
            });

            let color = FLOWER_PALETTE[rng.gen_range(0..FLOWER_PALETTE.len())];
            let petals = ((8.0 * scale).floor() as usize).max(4);
            for p in 0..petals {
                let angle = std::f32::consts::TAU * p as f32 / petals as f32;
                let pos = Vec3::new(
                    x + angle.cos() * scale * 0.3,
                    y + scale * 0.8,
                    z + angle.sin() * scale * 0.3,
                );
                prop.blocks.push(Block::cube(pos, scale * 0.4, color));
            }
            prop
        })
        .collect()
}

/// Layered clouds drifting slowly to the right on a loop.
pub fn clouds<R: Rng>(rng: &mut R, count: usize) -> Vec<Prop> {
    (0..count)
        .map(|i| {
            let x = (rng.gen::<f32>() - 0.5) * 120.0;
            let y = 12.0 + rng.gen::<f32>() * 15.0 + i as f32 * 2.0;
            let z = rng.gen::<f32>() * -40.0 - 20.0;
            let distance = z.abs() + 20.0;
            let scale = (8.0 / (distance * 0.05 + 1.0)).max(0.3);
            let opacity = (0.9 - distance * 0.01).max(0.4);

            let mut prop = Prop::default();
            for [cx, cy, cz] in CLOUD_OFFSETS {
                if rng.gen::<f32>() <= 0.2 {
                    continue;
                }
                prop.blocks.push(Block {
                    position: Vec3::new(x + cx * scale, y + cy * scale, z + cz * scale),
                    size: Vec3::new(scale * 2.0, scale * 1.5, scale * 2.0),
                    color: CLOUD_WHITE,
                    opacity,
                    delay_ms: 0,
                });
            }
            prop.drift = Some(Drift {
                to: Vec3::new(x + 150.0, y, z),
                duration_ms: (60_000.0 + rng.gen::<f32>() * 60_000.0) as u32,
            });
            prop
        })
        .collect()
}

/// Ring of flowers popping up around a freshly inscribed gravestone.
pub fn flower_burst<R: Rng>(center: Vec3, rng: &mut R) -> Vec<Block> {
    let scale = distance_factor(distance_from_camera(center.z), 0.025).max(0.1);
    let radius = 2.0 * scale;
    (0..BURST_FLOWERS)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / BURST_FLOWERS as f32;
            let x = center.x + angle.cos() * radius;
            let z = center.z + angle.sin() * radius;
            let y = terrain_height(x, z) + scale * 0.5;
            let color = FLOWER_PALETTE[rng.gen_range(0..5)];
            let mut block = Block::cube(Vec3::new(x, y, z), scale * 0.4, color);
            block.delay_ms = i as u32 * BURST_STAGGER_MS;
            block
        })
        .collect()
}
