// Host-side tests for the height field and screen-to-scene mapping.

use cemetery_core::atmosphere::stone_color;
use cemetery_core::height::{distance_factor, distance_from_camera, terrain_height};
use cemetery_core::mapping::{
    perspective_scale, screen_placement, screen_to_world, world_placement, Anchor, SizeMap,
    WORLD_STONE_SIZE,
};
use cemetery_core::{ContainerRect, DragRect, Placement, Profile};
use glam::Vec2;

fn container() -> ContainerRect {
    ContainerRect::new(0.0, 0.0, 1000.0, 800.0)
}

#[test]
fn terrain_height_is_deterministic() {
    for &(x, z) in &[(0.0, 0.0), (3.5, -20.0), (-42.0, -75.0), (17.0, 14.0)] {
        assert_eq!(terrain_height(x, z), terrain_height(x, z));
    }
}

#[test]
fn terrain_height_is_flat_at_origin_axis() {
    // every layer multiplies by sin(x * f)
    assert_eq!(terrain_height(0.0, -30.0), 0.0);
}

#[test]
fn terrain_flattens_with_distance() {
    let amplitude = 2.0 + 6.0 + 0.3;
    for i in 0..50 {
        let x = -50.0 + i as f32 * 2.0;
        for &z in &[10.0, -20.0, -80.0] {
            let damp = distance_factor(distance_from_camera(z), 0.03);
            assert!(terrain_height(x, z).abs() <= amplitude * damp + 1e-5);
        }
    }
}

#[test]
fn distance_never_reaches_zero() {
    assert_eq!(distance_from_camera(15.0), 1.0);
    assert_eq!(distance_from_camera(5.0), 11.0);
    assert_eq!(distance_from_camera(25.0), 11.0);
}

#[test]
fn ndc_covers_the_container() {
    let rect = ContainerRect::new(100.0, 50.0, 800.0, 600.0);
    assert_eq!(rect.to_ndc(Vec2::new(100.0, 50.0)), Vec2::new(-1.0, 1.0));
    assert_eq!(rect.to_ndc(Vec2::new(900.0, 650.0)), Vec2::new(1.0, -1.0));
    assert_eq!(rect.to_ndc(Vec2::new(500.0, 350.0)), Vec2::ZERO);
}

#[test]
fn degenerate_container_maps_to_centre() {
    let rect = ContainerRect::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(rect.to_ndc(Vec2::new(10.0, 10.0)), Vec2::ZERO);
    assert_eq!(rect.to_percent(Vec2::new(10.0, 10.0)), Vec2::splat(50.0));
}

#[test]
fn screen_centre_lands_ahead_of_camera() {
    let ground = screen_to_world(Vec2::new(500.0, 400.0), &container());
    assert_eq!(ground.position.x, 0.0);
    assert_eq!(ground.position.z, -10.0);
    assert_eq!(ground.position.y, terrain_height(0.0, -10.0));
    assert_eq!(ground.distance, 26.0);
}

#[test]
fn stones_shrink_with_distance_but_stay_bounded() {
    let upper = screen_to_world(Vec2::new(500.0, 0.0), &container());
    let lower = screen_to_world(Vec2::new(500.0, 800.0), &container());
    assert_eq!(upper.position.z, 30.0);
    assert_eq!(lower.position.z, -50.0);
    assert!(lower.distance > upper.distance);
    assert!(lower.scale < upper.scale);
    assert!(lower.scale >= 0.4);
}

#[test]
fn world_placement_sits_on_the_ground() {
    let screen = Vec2::new(300.0, 500.0);
    let p = world_placement(screen, Vec2::new(80.0, 120.0), &container());
    let ground = screen_to_world(screen, &container());
    assert_eq!(p.base_scale, ground.scale);
    assert_eq!(ground.tint(), stone_color(ground.distance));
    assert!((p.y - (ground.position.y + ground.scale)).abs() < 1e-5);
    assert!((p.scale - 1.0 * ground.scale).abs() < 1e-5);
    assert!((p.height - 3.0 * ground.scale).abs() < 1e-5);
}

#[test]
fn world_stone_size_is_clamped() {
    assert_eq!(WORLD_STONE_SIZE.apply(Vec2::new(1.0, 1.0)), Vec2::new(0.5, 1.0));
    assert_eq!(WORLD_STONE_SIZE.apply(Vec2::new(1e4, 1e4)), Vec2::new(2.0, 4.0));
}

#[test]
fn drag_rect_anchors() {
    let r = DragRect::from_points(Vec2::new(250.0, 300.0), Vec2::new(100.0, 100.0));
    assert_eq!(r.origin, Vec2::new(100.0, 100.0));
    assert_eq!(Anchor::Center.point(&r), Vec2::new(175.0, 200.0));
    assert_eq!(Anchor::BaseCenter.point(&r), Vec2::new(175.0, 300.0));
}

#[test]
fn perspective_scale_grows_toward_viewer() {
    assert_eq!(perspective_scale(50.0, 50.0), 0.4);
    assert!((perspective_scale(100.0, 50.0) - 1.0).abs() < 1e-6);
    assert!(perspective_scale(60.0, 50.0) < perspective_scale(90.0, 50.0));
}

#[test]
fn sky_cutoff_rejects_upper_half() {
    let size = SizeMap::new(Vec2::ONE, Vec2::ZERO, Vec2::splat(1e4));
    let above = screen_placement(Vec2::new(500.0, 399.0), Vec2::splat(100.0), &container(), &size, Some(50.0));
    assert!(above.is_none());
    let at = screen_placement(Vec2::new(500.0, 400.0), Vec2::splat(100.0), &container(), &size, Some(50.0));
    assert!(at.is_some());
}

#[test]
fn worked_perspective_example() {
    let profile = Profile::perspective_2d();
    let sky = DragRect::from_points(Vec2::new(100.0, 100.0), Vec2::new(250.0, 300.0));
    assert!(profile.place(&sky, &container()).is_none());

    let ground = DragRect::from_points(Vec2::new(100.0, 100.0), Vec2::new(250.0, 500.0));
    match profile.place(&ground, &container()) {
        Some(Placement::Screen(p)) => {
            assert!((p.x - 17.5).abs() < 1e-4);
            assert!((p.y - 62.5).abs() < 1e-4);
        }
        other => panic!("expected a screen placement, got {:?}", other),
    }
}

#[test]
fn profiles_by_name() {
    assert_eq!(Profile::from_name("blocky3d"), Some(Profile::blocky_3d()));
    assert_eq!(Profile::from_name("flat2d"), Some(Profile::flat_2d()));
    assert_eq!(Profile::from_name("perspective2d"), Some(Profile::perspective_2d()));
    assert_eq!(Profile::from_name("voxel"), None);
    assert!(Profile::blocky_3d().is_world());
    assert!(!Profile::flat_2d().is_world());
}

#[test]
fn storage_keys_are_distinct() {
    let keys = [
        Profile::blocky_3d().storage_key,
        Profile::flat_2d().storage_key,
        Profile::perspective_2d().storage_key,
    ];
    assert_eq!(keys, ["dramatic_gravestones", "flat_tombstones", "perspective_tombstones"]);
}
