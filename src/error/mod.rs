//! Crate-wide error type. Implementation lives in the private `types` module.

mod types;

pub use types::{RegistryError, Result};
