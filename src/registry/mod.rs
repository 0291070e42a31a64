//! Room registry orchestrator.
//!
//! Viewer code imports room types from here while the implementation lives in
//! the private `core` module.

mod core;

pub use self::core::{Room, RoomId, RoomRegistry, find_room_by_id, list_rooms};
