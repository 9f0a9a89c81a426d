//! Where the tracker keeps its data file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_data_file() -> String {
    "data/data.json".to_string()
}

fn default_backup_extension() -> String {
    "bak".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the JSON data file, relative to the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Extension used for the backup copy written before each save.
    #[serde(default = "default_backup_extension")]
    pub backup_extension: String,
}

impl StorageConfig {
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_file)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty data file path or a
    /// backup extension that would make the backup overwrite the data file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.data_file".into(),
                reason: "must not be empty".into(),
            });
        }
        let backup = self.backup_extension.trim_start_matches('.');
        let data_ext = self
            .data_path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_string);
        if backup.is_empty() || data_ext.as_deref() == Some(backup) {
            return Err(ConfigError::InvalidValue {
                field: "storage.backup_extension".into(),
                reason: format!("'{}' would collide with the data file", self.backup_extension),
            });
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            backup_extension: default_backup_extension(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StorageConfig::default();
        assert_eq!(config.data_file, "data/data.json");
        assert_eq!(config.backup_extension, "bak");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn backup_extension_matching_data_file_is_rejected() {
        let config = StorageConfig {
            backup_extension: ".json".into(),
            ..StorageConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "storage.backup_extension"
        ));
    }
}
