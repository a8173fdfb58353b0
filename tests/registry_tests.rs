// Host-side tests for the gravestone registry and its persisted snapshot.
// Storage is an in-memory map; a clone of it stands in for a page reload.

use cemetery_core::{
    GravestoneRecord, Inscription, MemoryStore, Placement, Registry, ScreenPlacement,
    WorldPlacement,
};

const KEY: &str = "flat_tombstones";

fn screen(x: f32, y: f32) -> Placement {
    Placement::Screen(ScreenPlacement {
        x,
        y,
        width: 80.0,
        height: 100.0,
        scale: 1.0,
    })
}

fn world() -> Placement {
    Placement::World(WorldPlacement {
        x: 1.5,
        y: 2.0,
        z: -4.0,
        scale: 0.8,
        height: 1.6,
        base_scale: 1.1,
    })
}

fn registry(store: &MemoryStore) -> Registry<MemoryStore> {
    Registry::new(KEY, "tomb", store.clone())
}

fn free_text(text: &str) -> Inscription {
    serde_json::from_str(&format!(r#"{{"text":"{}","timestamp":1}}"#, text)).unwrap()
}

#[test]
fn create_assigns_sequential_prefixed_ids() {
    let store = MemoryStore::new();
    let mut reg = registry(&store);
    assert_eq!(reg.create(screen(10.0, 60.0)), "tomb_0");
    assert_eq!(reg.create(screen(20.0, 70.0)), "tomb_1");
    assert_eq!(reg.len(), 2);
    assert!(!reg.get("tomb_0").unwrap().is_inscribed());
}

#[test]
fn every_mutation_writes_the_whole_map() {
    let store = MemoryStore::new();
    let mut reg = registry(&store);
    let a = reg.create(screen(10.0, 60.0));
    let b = reg.create(screen(20.0, 70.0));

    let snapshot: serde_json::Value = serde_json::from_str(&store.get(KEY).unwrap()).unwrap();
    assert!(snapshot.get(&a).is_some());
    assert!(snapshot.get(&b).is_some());

    assert!(reg.inscribe(&a, free_text("Rest well")));
    let snapshot: serde_json::Value = serde_json::from_str(&store.get(KEY).unwrap()).unwrap();
    assert_eq!(snapshot[&a]["inscription"]["text"], "Rest well");

    reg.remove(&b);
    let snapshot: serde_json::Value = serde_json::from_str(&store.get(KEY).unwrap()).unwrap();
    assert!(snapshot.get(&b).is_none());
    assert_eq!(snapshot.as_object().unwrap().len(), 1);
}

#[test]
fn reload_restores_identical_records() {
    let store = MemoryStore::new();
    let mut reg = registry(&store);
    let a = reg.create(screen(12.5, 62.5));
    let b = reg.create(screen(40.0, 90.0));
    reg.inscribe(&b, free_text("Beloved"));

    let mut reloaded = registry(&store);
    let ids = reloaded.restore();
    assert_eq!(ids, vec![a.clone(), b.clone()]);
    assert_eq!(reloaded.get(&a), reg.get(&a));
    assert_eq!(reloaded.get(&b), reg.get(&b));
}

#[test]
fn world_records_survive_reload() {
    let store = MemoryStore::new();
    let mut reg = Registry::new("dramatic_gravestones", "grave", store.clone());
    let id = reg.create(world());

    let mut reloaded = Registry::new("dramatic_gravestones", "grave", store.clone());
    reloaded.restore();
    let record = reloaded.get(&id).unwrap();
    assert_eq!(record.placement, world());

    let raw = store.get("dramatic_gravestones").unwrap();
    assert!(raw.contains("\"baseScale\""));
}

#[test]
fn ids_stay_unique_across_reload() {
    let store = MemoryStore::new();
    let mut reg = registry(&store);
    for i in 0..3 {
        reg.create(screen(i as f32 * 10.0, 60.0));
    }

    let mut reloaded = registry(&store);
    reloaded.restore();
    let fresh = reloaded.create(screen(5.0, 55.0));
    assert_eq!(fresh, "tomb_3");
    assert_eq!(reloaded.len(), 4);
}

#[test]
fn deleted_records_are_not_resurrected() {
    let store = MemoryStore::new();
    let mut reg = registry(&store);
    let a = reg.create(screen(10.0, 60.0));
    let b = reg.create(screen(20.0, 70.0));
    reg.remove(&a);

    let mut reloaded = registry(&store);
    assert_eq!(reloaded.restore(), vec![b.clone()]);
    assert!(!reloaded.contains(&a));
}

#[test]
fn inscribe_unknown_id_changes_nothing() {
    let store = MemoryStore::new();
    let mut reg = registry(&store);
    reg.create(screen(10.0, 60.0));
    let before = store.get(KEY);

    assert!(!reg.inscribe("tomb_99", free_text("nobody")));
    assert_eq!(store.get(KEY), before);
    assert_eq!(reg.len(), 1);
}

#[test]
fn missing_storage_restores_nothing() {
    let store = MemoryStore::new();
    let mut reg = registry(&store);
    assert!(reg.restore().is_empty());
    assert!(reg.is_empty());
    assert_eq!(reg.next_id(), 0);
}

#[test]
fn malformed_storage_is_ignored() {
    let store = MemoryStore::new();
    store.set(KEY, "{not json");
    let mut reg = registry(&store);
    assert!(reg.restore().is_empty());
    assert!(reg.is_empty());

    // the next write replaces the garbage
    let id = reg.create(screen(10.0, 60.0));
    let snapshot: serde_json::Value = serde_json::from_str(&store.get(KEY).unwrap()).unwrap();
    assert!(snapshot.get(&id).is_some());
}

#[test]
fn unreadable_records_are_skipped() {
    let store = MemoryStore::new();
    store.set(
        KEY,
        r#"{
            "tomb_3": {"x": 20, "y": 70, "width": 80, "height": 100, "inscription": null},
            "tomb_4": {"x": "left", "y": 70}
        }"#,
    );
    let mut reg = registry(&store);
    assert_eq!(reg.restore(), vec!["tomb_3".to_string()]);
    assert_eq!(reg.next_id(), 4);

    // older records without a scale default to full size
    match &reg.get("tomb_3").unwrap().placement {
        Placement::Screen(p) => assert_eq!(p.scale, 1.0),
        other => panic!("unexpected placement {:?}", other),
    }
}

#[test]
fn restore_orders_by_numeric_suffix() {
    let store = MemoryStore::new();
    let record = GravestoneRecord::new(screen(10.0, 60.0));
    let mut map = serde_json::Map::new();
    for id in ["tomb_10", "tomb_2", "tomb_1"] {
        map.insert(id.to_string(), serde_json::to_value(&record).unwrap());
    }
    store.set(KEY, &serde_json::Value::Object(map).to_string());

    let mut reg = registry(&store);
    assert_eq!(reg.restore(), vec!["tomb_1", "tomb_2", "tomb_10"]);
    assert_eq!(reg.next_id(), 11);
    let order: Vec<&str> = reg.iter_sorted().into_iter().map(|(id, _)| id).collect();
    assert_eq!(order, ["tomb_1", "tomb_2", "tomb_10"]);
    assert_eq!(reg.storage_key(), KEY);
}

#[test]
fn ids_of_deleted_stones_are_never_reissued() {
    let store = MemoryStore::new();
    let mut reg = registry(&store);
    reg.create(screen(10.0, 60.0));
    let newest = reg.create(screen(20.0, 70.0));
    reg.remove(&newest);
    assert_eq!(store.get("flat_tombstones_next_id").as_deref(), Some("2"));

    let mut reloaded = registry(&store);
    reloaded.restore();
    let fresh = reloaded.create(screen(30.0, 80.0));
    assert_ne!(fresh, newest);
    assert_eq!(fresh, "tomb_2");
}

#[test]
fn garbage_counter_falls_back_to_suffixes() {
    let store = MemoryStore::new();
    let mut reg = registry(&store);
    reg.create(screen(10.0, 60.0));
    store.set("flat_tombstones_next_id", "lots");

    let mut reloaded = registry(&store);
    reloaded.restore();
    assert_eq!(reloaded.next_id(), 1);
}

#[test]
fn suffix_at_the_counter_limit_is_skipped() {
    let store = MemoryStore::new();
    let record = serde_json::to_value(GravestoneRecord::new(screen(10.0, 60.0))).unwrap();
    let mut map = serde_json::Map::new();
    map.insert(format!("tomb_{}", u64::MAX), record.clone());
    map.insert("tomb_7".to_string(), record);
    store.set(KEY, &serde_json::Value::Object(map).to_string());

    let mut reg = registry(&store);
    assert_eq!(reg.restore(), vec!["tomb_7".to_string()]);
    assert_eq!(reg.next_id(), 8);
    assert_eq!(reg.create(screen(20.0, 70.0)), "tomb_8");
}

#[test]
fn exhausted_counter_does_not_panic() {
    let store = MemoryStore::new();
    store.set("flat_tombstones_next_id", &u64::MAX.to_string());
    let mut reg = registry(&store);
    reg.restore();
    assert_eq!(reg.next_id(), u64::MAX);

    let id = reg.create(screen(10.0, 60.0));
    assert_eq!(id, format!("tomb_{}", u64::MAX));
    reg.create(screen(20.0, 70.0));
    assert_eq!(reg.next_id(), u64::MAX);
    assert!(reg.contains(&id));
}
