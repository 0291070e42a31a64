use std::collections::HashSet;
use std::thread;

use panorama_rooms::{
    Logger, MemorySink, Position, RegistryConfig, RegistryError, RegistryLoader, Room,
    RoomRegistry, find_room_by_id, list_rooms,
};

#[test]
fn lists_rooms_in_display_order() {
    let ids: Vec<&str> = list_rooms().iter().map(|room| room.id.as_str()).collect();
    assert_eq!(ids, ["living-room", "bed-room", "book-room"]);
}

#[test]
fn every_room_has_unique_id_and_map() {
    let mut ids = HashSet::new();
    for room in list_rooms() {
        assert!(!room.id.is_empty());
        assert!(ids.insert(&room.id));
        assert!(!room.map.is_empty());
    }
}

#[test]
fn bed_room_lookup_matches_table() {
    let room = find_room_by_id("bed-room").expect("bed-room present");
    assert_eq!(room.position, Position::new(-32.0, 0.0, 0.0));
    assert_eq!(room.map, "/images/map/map_bed_room.jpg");
}

#[test]
fn book_room_uses_study_room_image() {
    let room = find_room_by_id("book-room").expect("book-room present");
    assert_eq!(room.name, "书房");
    assert_eq!(room.position, Position::new(32.0, 0.0, 0.0));
    assert_eq!(room.map, "/images/map/map_study_room.jpg");
}

#[test]
fn unknown_room_signals_not_found() {
    match find_room_by_id("nonexistent") {
        Err(RegistryError::RoomNotFound(id)) => assert_eq!(id, "nonexistent"),
        other => panic!("expected RoomNotFound, got {other:?}"),
    }
}

#[test]
fn export_contract_round_trips() {
    let json = RoomRegistry::builtin().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = &value[0];
    assert_eq!(first["id"], "living-room");
    assert_eq!(first["name"], "客厅");
    assert_eq!(first["position"], serde_json::json!({"x": 0.0, "y": 0.0, "z": 0.0}));
    assert_eq!(first["map"], "/images/map/map_living_room.jpg");

    let decoded: Vec<Room> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.as_slice(), list_rooms());
}

#[test]
fn builtin_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| find_room_by_id("living-room").map(|r| r.position)))
        .collect();
    for handle in handles {
        let position = handle.join().unwrap().unwrap();
        assert_eq!(position, Position::ORIGIN);
    }
    assert!(std::ptr::eq(RoomRegistry::builtin(), RoomRegistry::builtin()));
}

#[test]
fn loader_validates_and_logs() {
    let sink = MemorySink::new();
    let loader = RegistryLoader::new().with_logger(Logger::new(sink.clone()));

    let rooms = vec![
        Room::new("hall", "Hall", Position::ORIGIN, "/hall.jpg"),
        Room::new("porch", "Porch", Position::new(0.0, 0.0, 16.0), ""),
    ];
    let err = loader.from_rooms(rooms.clone()).unwrap_err();
    assert!(matches!(err, RegistryError::EmptyMap(ref id) if id == "porch"));

    let registry = RegistryLoader::new()
        .with_config(RegistryConfig::permissive())
        .from_rooms(rooms)
        .unwrap();
    assert_eq!(registry.len(), 2);

    assert_eq!(sink.messages(), ["registry_rejected"]);
}
