//! Room registry for a panorama viewer.
//!
//! The crate ships a compiled-in, ordered table of room descriptors (id,
//! localized name, viewpoint position, panorama image path) and a loader for
//! room lists in the same JSON export shape. Rendering, camera control and
//! hotspot navigation belong to the viewer and are not modeled here.

pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod registry;

pub use config::{RegistryConfig, RegistryLoader};
pub use error::{RegistryError, Result};
pub use geometry::Position;
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink, NullSink,
};
pub use registry::{Room, RoomId, RoomRegistry, find_room_by_id, list_rooms};
