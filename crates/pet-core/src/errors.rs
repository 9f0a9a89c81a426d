//! Cross-cutting error types for the pet care tracker.
//!
//! Domain-specific errors (e.g. `StoreError`, `ConfigError`) are defined in
//! their respective crates and wrap `CoreError` where a domain rule fails.

use thiserror::Error;

/// Errors raised by the core entities and registries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Malformed input to a constructor or date operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An entity with the same key already exists in its parent collection.
    #[error("Duplicate key: {entity_type} '{key}' already exists")]
    DuplicateKey { entity_type: String, key: String },

    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound { entity_type: String, id: String },
}

impl CoreError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Build a `NotFound` for a named entity.
    #[must_use]
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

/// Trim `value` and reject it when nothing is left.
pub(crate) fn require_non_empty(value: &str, what: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::invalid(format!("{what} must be a non-empty string")));
    }
    Ok(trimmed.to_string())
}
