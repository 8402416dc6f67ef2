//! Error types for optional dependency containers

use crate::container::ContainerKind;
use thiserror::Error;

/// Result type alias for container operations
pub type DiResult<T> = Result<T, DiError>;

/// Errors that can occur while declaring, initializing or validating slots
///
/// Reading a slot never produces one of these; absent slots read as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiError {
    /// A slot has no initializer named after it
    #[error("Invalid optional dependency in {container}: '{property}' has no '{expected}' initializer")]
    InvalidOptionalDependency {
        container: ContainerKind,
        property: String,
        expected: String,
    },

    /// Slot name cannot be turned into an initializer name
    #[error("Invalid slot name: {0:?}")]
    InvalidSlotName(String),

    /// Initializer name does not follow the `init<Name>` convention
    #[error("Invalid initializer name: {0:?}")]
    InvalidInitializerName(String),

    /// Slot declared twice
    #[error("Slot already declared: {0}")]
    DuplicateSlot(String),

    /// Initializer registered twice
    #[error("Initializer already registered: {0}")]
    DuplicateInitializer(String),

    /// Two slots would share one initializer
    #[error("Slots '{existing}' and '{slot}' both map to initializer '{initializer}'")]
    InitializerNameCollision {
        slot: String,
        existing: String,
        initializer: String,
    },

    /// No slot matches the requested name
    #[error("Slot not found: {0}")]
    SlotNotFound(String),

    /// No initializer registered under the requested name
    #[error("Initializer not found: {0}")]
    InitializerNotFound(String),

    /// Configuration error
    #[cfg(feature = "config")]
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DiError {
    /// Name of the offending slot, for validation failures
    pub fn property(&self) -> Option<&str> {
        match self {
            DiError::InvalidOptionalDependency { property, .. } => Some(property),
            _ => None,
        }
    }
}
