//! Validation switches and the registry loader.

mod loader;

pub use loader::RegistryLoader;

use std::collections::HashSet;

use crate::error::{RegistryError, Result};
use crate::registry::Room;

/// Load-time checks applied whenever a [`crate::RoomRegistry`] is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    pub require_unique_ids: bool,
    pub require_non_empty_ids: bool,
    pub require_map: bool,
    pub require_finite_position: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            require_unique_ids: true,
            require_non_empty_ids: true,
            require_map: true,
            require_finite_position: true,
        }
    }
}

impl RegistryConfig {
    pub fn permissive() -> Self {
        Self {
            require_unique_ids: false,
            require_non_empty_ids: false,
            require_map: false,
            require_finite_position: false,
        }
    }

    /// Checks rooms in order and reports the first violation.
    pub fn validate(&self, rooms: &[Room]) -> Result<()> {
        let mut seen = HashSet::with_capacity(rooms.len());
        for (index, room) in rooms.iter().enumerate() {
            if self.require_non_empty_ids && room.id.trim().is_empty() {
                return Err(RegistryError::EmptyId { index });
            }
            if self.require_map && room.map.trim().is_empty() {
                return Err(RegistryError::EmptyMap(room.id.clone()));
            }
            if self.require_finite_position && !room.position.is_finite() {
                return Err(RegistryError::NonFinitePosition(room.id.clone()));
            }
            if self.require_unique_ids && !seen.insert(room.id.as_str()) {
                return Err(RegistryError::DuplicateId(room.id.clone()));
            }
        }
        Ok(())
    }
}
