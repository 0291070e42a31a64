use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize, Serializer};

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::geometry::Position;

pub type RoomId = String;

/// One navigable panorama location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Localized display label.
    pub name: String,
    pub position: Position,
    /// Path of the panoramic image the viewer loads for this room.
    pub map: String,
}

impl Room {
    pub fn new(
        id: impl Into<RoomId>,
        name: impl Into<String>,
        position: Position,
        map: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            map: map.into(),
        }
    }
}

static BUILTIN: LazyLock<RoomRegistry> = LazyLock::new(|| RoomRegistry::unchecked(builtin_rooms()));

fn builtin_rooms() -> Vec<Room> {
    vec![
        Room::new(
            "living-room",
            "客厅",
            Position::new(0.0, 0.0, 0.0),
            "/images/map/map_living_room.jpg",
        ),
        Room::new(
            "bed-room",
            "卧室",
            Position::new(-32.0, 0.0, 0.0),
            "/images/map/map_bed_room.jpg",
        ),
        Room::new(
            "book-room",
            "书房",
            Position::new(32.0, 0.0, 0.0),
            "/images/map/map_study_room.jpg",
        ),
    ]
}

/// Ordered, immutable collection of rooms. Order is display order.
///
/// Serializes as a bare JSON array of rooms. Deserializing runs the strict
/// [`RegistryConfig`] checks, so a decoded registry always has unique,
/// non-empty ids and non-empty map paths.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Room>")]
pub struct RoomRegistry {
    rooms: Vec<Room>,
    index: HashMap<RoomId, usize>,
}

impl RoomRegistry {
    /// The compiled-in room table shared by the whole process.
    pub fn builtin() -> &'static RoomRegistry {
        &BUILTIN
    }

    /// Builds a registry after validating `rooms` with the default config.
    pub fn from_rooms(rooms: Vec<Room>) -> Result<Self> {
        Self::with_config(rooms, &RegistryConfig::default())
    }

    pub fn with_config(rooms: Vec<Room>, config: &RegistryConfig) -> Result<Self> {
        config.validate(&rooms)?;
        Ok(Self::unchecked(rooms))
    }

    // With duplicate ids allowed, lookups resolve to the first occurrence.
    fn unchecked(rooms: Vec<Room>) -> Self {
        let mut index = HashMap::with_capacity(rooms.len());
        for (pos, room) in rooms.iter().enumerate() {
            index.entry(room.id.clone()).or_insert(pos);
        }
        Self { rooms, index }
    }

    pub fn list_rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn find_room_by_id(&self, id: &str) -> Result<&Room> {
        self.get(id)
            .ok_or_else(|| RegistryError::RoomNotFound(id.to_string()))
    }

    pub fn get(&self, id: &str) -> Option<&Room> {
        self.index_of(id).map(|pos| &self.rooms[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The room a viewer opens on.
    pub fn first(&self) -> Option<&Room> {
        self.rooms.first()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(|room| room.id.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.rooms.iter()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn into_rooms(self) -> Vec<Room> {
        self.rooms
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for RoomRegistry {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.rooms.serialize(serializer)
    }
}

impl TryFrom<Vec<Room>> for RoomRegistry {
    type Error = RegistryError;

    fn try_from(rooms: Vec<Room>) -> Result<Self> {
        Self::from_rooms(rooms)
    }
}

impl<'a> IntoIterator for &'a RoomRegistry {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

/// Rooms of the built-in table in display order.
pub fn list_rooms() -> &'static [Room] {
    RoomRegistry::builtin().list_rooms()
}

/// Looks up a room of the built-in table.
pub fn find_room_by_id(id: &str) -> Result<&'static Room> {
    RoomRegistry::builtin().find_room_by_id(id)
}
