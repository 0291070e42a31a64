use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::logging::{LogLevel, Logger, REGISTRY_TARGET, event_with_fields, json_kv, json_str};
use crate::registry::{Room, RoomRegistry};

/// Builds registries from external room lists in the export format
/// (`[{id, name, position: {x, y, z}, map}, ...]`).
#[derive(Debug, Clone)]
pub struct RegistryLoader {
    config: RegistryConfig,
    logger: Logger,
}

impl Default for RegistryLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryLoader {
    pub fn new() -> Self {
        Self {
            config: RegistryConfig::default(),
            logger: Logger::null(),
        }
    }

    pub fn with_config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn from_rooms(&self, rooms: Vec<Room>) -> Result<RoomRegistry> {
        self.finish("rooms", RoomRegistry::with_config(rooms, &self.config))
    }

    pub fn from_json_str(&self, json: &str) -> Result<RoomRegistry> {
        let parsed = serde_json::from_str::<Vec<Room>>(json)
            .map_err(RegistryError::from)
            .and_then(|rooms| RoomRegistry::with_config(rooms, &self.config));
        self.finish("json", parsed)
    }

    pub fn from_reader<R: Read>(&self, reader: R) -> Result<RoomRegistry> {
        let parsed = serde_json::from_reader::<_, Vec<Room>>(reader)
            .map_err(RegistryError::from)
            .and_then(|rooms| RoomRegistry::with_config(rooms, &self.config));
        self.finish("reader", parsed)
    }

    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<RoomRegistry> {
        let path = path.as_ref();
        let parsed = File::open(path)
            .map_err(RegistryError::from)
            .and_then(|file| {
                serde_json::from_reader::<_, Vec<Room>>(BufReader::new(file))
                    .map_err(RegistryError::from)
            })
            .and_then(|rooms| RoomRegistry::with_config(rooms, &self.config));
        self.finish(&path.display().to_string(), parsed)
    }

    // Logging failures never fail the load.
    fn finish(&self, source: &str, outcome: Result<RoomRegistry>) -> Result<RoomRegistry> {
        let event = match &outcome {
            Ok(registry) => event_with_fields(
                LogLevel::Info,
                REGISTRY_TARGET,
                "registry_loaded",
                [json_str("source", source), json_kv("rooms", registry.len())],
            ),
            Err(err) => event_with_fields(
                LogLevel::Warn,
                REGISTRY_TARGET,
                "registry_rejected",
                [json_str("source", source), json_str("error", err.to_string())],
            ),
        };
        let _ = self.logger.log_event(event);
        outcome
    }
}
