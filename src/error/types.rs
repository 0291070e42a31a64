use thiserror::Error;

/// Unified result type for the room registry crate.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors surfaced while building or querying a room registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("room `{0}` not found")]
    RoomNotFound(String),
    #[error("duplicate room id `{0}`")]
    DuplicateId(String),
    #[error("room at index {index} has an empty id")]
    EmptyId { index: usize },
    #[error("room `{0}` has an empty map path")]
    EmptyMap(String),
    #[error("room `{0}` has a non-finite position")]
    NonFinitePosition(String),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RegistryError {
    /// True when the error came from a lookup of an unknown id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::RoomNotFound(_))
    }
}
