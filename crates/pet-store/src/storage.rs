//! Whole-tracker JSON persistence with a single backup generation.
//!
//! Every save copies the current data file to the backup path before
//! overwriting it. Loading falls back to the backup when the data file cannot
//! be read or decoded, and to a fresh tracker when neither can.

use std::fs;
use std::path::{Path, PathBuf};

use pet_config::{PetCareConfig, StorageConfig};
use pet_core::document::TrackerDocument;
use pet_core::tracker::Tracker;
use pet_schema::SchemaRegistry;
use pet_schema::registry::TRACKER_DOCUMENT;

use crate::error::StoreError;

/// Where a loaded tracker came from.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Decoded from the data file.
    Primary(Tracker),
    /// The data file was unusable; decoded from the backup.
    Backup(Tracker),
    /// No usable state on disk.
    Fresh,
}

impl LoadOutcome {
    /// The restored tracker, or `None` when there was no prior state.
    #[must_use]
    pub fn into_tracker(self) -> Option<Tracker> {
        match self {
            Self::Primary(tracker) | Self::Backup(tracker) => Some(tracker),
            Self::Fresh => None,
        }
    }

    #[must_use]
    pub const fn source(&self) -> &'static str {
        match self {
            Self::Primary(_) => "primary",
            Self::Backup(_) => "backup",
            Self::Fresh => "fresh",
        }
    }
}

/// Saves and loads the tracker as a single JSON file.
pub struct Storage {
    data_file: PathBuf,
    backup_file: PathBuf,
    pretty: bool,
    schema: SchemaRegistry,
}

impl Storage {
    /// Create a store for `data_file`, with the backup next to it as `*.bak`.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BackupCollision` for a data file already named
    /// `*.bak`, or `StoreError::Io` if the directory cannot be created.
    pub fn new(data_file: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::with_backup_extension(data_file, "bak")
    }

    /// Create a store using the `[storage]` and `[general]` config sections.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the data directory cannot be created.
    pub fn from_config(config: &PetCareConfig) -> Result<Self, StoreError> {
        let StorageConfig {
            data_file,
            backup_extension,
        } = &config.storage;
        let mut storage = Self::with_backup_extension(data_file, backup_extension)?;
        storage.pretty = config.general.pretty_json;
        Ok(storage)
    }

    /// # Errors
    ///
    /// Returns `StoreError::BackupCollision` if the backup path equals the
    /// data file, or `StoreError::Io` if the data directory cannot be created.
    pub fn with_backup_extension(
        data_file: impl Into<PathBuf>,
        backup_extension: &str,
    ) -> Result<Self, StoreError> {
        let data_file = data_file.into();
        let backup_file = data_file.with_extension(backup_extension.trim_start_matches('.'));
        if backup_file == data_file {
            return Err(StoreError::BackupCollision(backup_file));
        }
        if let Some(parent) = data_file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(Self {
            data_file,
            backup_file,
            pretty: true,
            schema: SchemaRegistry::new(),
        })
    }

    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    #[must_use]
    pub fn backup_file(&self) -> &Path {
        &self.backup_file
    }

    /// Write the whole tracker, backing up the previous data file first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding, the backup copy, or the write fails.
    pub fn save(&self, tracker: &Tracker) -> Result<(), StoreError> {
        let document = TrackerDocument::from(tracker);
        let json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };

        if self.data_file.exists() {
            fs::copy(&self.data_file, &self.backup_file)?;
        }
        fs::write(&self.data_file, json)?;

        tracing::debug!(
            path = %self.data_file.display(),
            owners = tracker.owners().len(),
            "saved tracker"
        );
        Ok(())
    }

    /// Load the tracker, falling back to the backup and then to fresh state.
    ///
    /// Never fails: every problem is logged and degrades to the next source.
    #[must_use]
    pub fn load(&self) -> LoadOutcome {
        if !self.data_file.exists() {
            tracing::info!(path = %self.data_file.display(), "no save file found; starting fresh");
            return LoadOutcome::Fresh;
        }

        match self.read_tracker(&self.data_file) {
            Ok(tracker) => return LoadOutcome::Primary(tracker),
            Err(error) => tracing::warn!(
                %error,
                path = %self.data_file.display(),
                "data file is unreadable; attempting backup recovery"
            ),
        }

        if !self.backup_file.exists() {
            tracing::warn!(path = %self.backup_file.display(), "no backup available");
            return LoadOutcome::Fresh;
        }

        match self.read_tracker(&self.backup_file) {
            Ok(tracker) => {
                tracing::warn!(path = %self.backup_file.display(), "recovered using backup file");
                LoadOutcome::Backup(tracker)
            }
            Err(error) => {
                tracing::warn!(%error, path = %self.backup_file.display(), "backup also unreadable");
                LoadOutcome::Fresh
            }
        }
    }

    /// Shorthand for `load().into_tracker()`.
    #[must_use]
    pub fn load_tracker(&self) -> Option<Tracker> {
        self.load().into_tracker()
    }

    /// Decode one file into a tracker.
    ///
    /// Schema validation is warn-only; the domain constructors have the final
    /// say on whether the document is acceptable.
    fn read_tracker(&self, path: &Path) -> Result<Tracker, StoreError> {
        let raw = fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&raw)?;

        if let Err(error) = self.schema.validate(TRACKER_DOCUMENT, &value) {
            tracing::warn!(%error, path = %path.display(), "document does not match schema");
        }

        let document: TrackerDocument = serde_json::from_value(value)?;
        Ok(Tracker::try_from(document)?)
    }
}
