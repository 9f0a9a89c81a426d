//! Store error types for pet-store.

use std::path::PathBuf;

use pet_core::errors::CoreError;
use thiserror::Error;

/// Errors from file persistence, import, and export.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document could not be encoded or decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The CSV input could not be read.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The backup path would overwrite the data file itself.
    #[error("backup path {} is the data file itself", .0.display())]
    BackupCollision(PathBuf),

    /// The CSV header lacks required columns.
    #[error("CSV is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A document decoded but violates a domain rule, or a lookup missed.
    #[error(transparent)]
    Core(#[from] CoreError),
}
