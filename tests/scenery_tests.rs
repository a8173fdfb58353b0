// Host-side tests for procedural scenery and atmospheric tints.

use cemetery_core::atmosphere::{stone_color, terrain_color, Rgb};
use cemetery_core::height::terrain_height;
use cemetery_core::scenery::{
    self, Scenery, CLOUD_COUNT, FLOWER_COUNT, FLOWER_PALETTE, TREE_COUNT,
};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn same_seed_same_landscape() {
    let a = Scenery::generate(&mut StdRng::seed_from_u64(7));
    let b = Scenery::generate(&mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
    let c = Scenery::generate(&mut StdRng::seed_from_u64(8));
    assert_ne!(a, c);
}

#[test]
fn generates_expected_prop_counts() {
    let s = Scenery::generate(&mut StdRng::seed_from_u64(1));
    assert_eq!(s.trees.len(), TREE_COUNT);
    assert_eq!(s.flowers.len(), FLOWER_COUNT);
    assert_eq!(s.clouds.len(), CLOUD_COUNT);
    assert!(!s.terrain.is_empty());
    assert!(s.block_count() > s.terrain.len());
}

#[test]
fn terrain_blocks_sit_on_the_height_field() {
    let blocks = scenery::terrain(&mut StdRng::seed_from_u64(3));
    for b in blocks.iter().step_by(97) {
        assert_eq!(b.position.y, terrain_height(b.position.x, b.position.z));
        assert!(b.size.x >= 0.2);
    }
}

#[test]
fn every_tree_has_a_trunk() {
    for tree in scenery::trees(&mut StdRng::seed_from_u64(4), 10) {
        let base = tree.blocks[0].position;
        assert!(base.y > terrain_height(base.x, base.z));
        assert!(tree.drift.is_none());
    }
}

#[test]
fn flowers_use_the_palette() {
    for flower in scenery::flowers(&mut StdRng::seed_from_u64(5), 12) {
        assert!(flower.blocks.len() >= 5);
        assert!(flower.blocks[1..]
            .iter()
            .all(|b| FLOWER_PALETTE.contains(&b.color)));
    }
}

#[test]
fn clouds_drift_to_the_right() {
    for cloud in scenery::clouds(&mut StdRng::seed_from_u64(6), CLOUD_COUNT) {
        let drift = cloud.drift.expect("clouds always drift");
        assert!(drift.duration_ms >= 60_000 && drift.duration_ms <= 120_000);
        assert!(cloud.blocks.iter().all(|b| b.opacity >= 0.4 && b.opacity < 1.0));
        let first = cloud.blocks.first().map(|b| b.position.y).unwrap_or(drift.to.y);
        assert!(first >= 12.0);
    }
}

#[test]
fn burst_is_a_staggered_ring() {
    let centre = Vec3::new(2.0, 0.0, -10.0);
    let burst = scenery::flower_burst(centre, &mut StdRng::seed_from_u64(9));
    assert_eq!(burst.len(), 8);
    for (i, b) in burst.iter().enumerate() {
        assert_eq!(b.delay_ms, i as u32 * 50);
        let flat = Vec3::new(b.position.x - centre.x, 0.0, b.position.z - centre.z);
        let radius = flat.length();
        assert!((radius - (burst[0].position.x - centre.x).abs()).abs() < 1e-3);
    }
}

#[test]
fn haze_increases_with_distance() {
    assert_eq!(stone_color(0.0), Rgb(192, 192, 192));
    assert_eq!(stone_color(1_000.0), Rgb(242, 242, 252));
    let near = terrain_color(1.0);
    let far = terrain_color(90.0);
    assert!(far.2 > near.2);
    assert!(far.1 < near.1);
}

#[test]
fn rgb_formats() {
    let c = Rgb(255, 105, 180);
    assert_eq!(c.hex(), "#ff69b4");
    assert_eq!(c.css(), "rgb(255, 105, 180)");
    assert_eq!(Rgb::from_f32(300.0, -4.0, 12.9), Rgb(255, 0, 12));
}
