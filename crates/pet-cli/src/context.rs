use anyhow::Context;
use chrono::NaiveDate;
use pet_config::PetCareConfig;
use pet_core::entities::{Owner, Pet};
use pet_core::errors::CoreError;
use pet_core::tracker::Tracker;
use pet_store::{LoadOutcome, Storage};

use crate::cli::GlobalFlags;

/// State shared by every command handler for one invocation.
pub struct AppContext {
    pub tracker: Tracker,
    pub storage: Storage,
    /// Local calendar date used when a command's date argument is omitted.
    pub today: NaiveDate,
}

impl AppContext {
    /// Open the store (honouring `--data-file`) and restore the tracker.
    pub fn init(config: &PetCareConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let mut config = config.clone();
        if let Some(data_file) = &flags.data_file {
            config.storage.data_file.clone_from(data_file);
            config
                .storage
                .validate()
                .with_context(|| format!("invalid --data-file '{data_file}'"))?;
        }

        let storage = Storage::from_config(&config).with_context(|| {
            format!("failed to open data file {}", config.storage.data_file)
        })?;

        let outcome = storage.load();
        if matches!(outcome, LoadOutcome::Backup(_)) && !flags.quiet {
            eprintln!(
                "warning: {} was unreadable; restored from {}",
                storage.data_file().display(),
                storage.backup_file().display()
            );
        }
        tracing::debug!(source = outcome.source(), "tracker loaded");

        Ok(Self {
            tracker: outcome.into_tracker().unwrap_or_default(),
            storage,
            today: chrono::Local::now().date_naive(),
        })
    }

    #[cfg(test)]
    pub fn for_tests(storage: Storage, today: NaiveDate) -> Self {
        Self {
            tracker: Tracker::new(),
            storage,
            today,
        }
    }

    /// Persist the tracker.
    pub fn save(&self) -> anyhow::Result<()> {
        self.storage
            .save(&self.tracker)
            .with_context(|| format!("failed to save {}", self.storage.data_file().display()))
    }

    pub fn owner(&self, name: &str) -> Result<&Owner, CoreError> {
        self.tracker
            .get_owner(name)
            .ok_or_else(|| CoreError::not_found("owner", name))
    }

    pub fn owner_mut(&mut self, name: &str) -> Result<&mut Owner, CoreError> {
        self.tracker
            .get_owner_mut(name)
            .ok_or_else(|| CoreError::not_found("owner", name))
    }

    pub fn pet(&self, owner: &str, pet: &str) -> Result<&Pet, CoreError> {
        self.owner(owner)?
            .get_pet(pet)
            .ok_or_else(|| CoreError::not_found("pet", pet))
    }

    pub fn pet_mut(&mut self, owner: &str, pet: &str) -> Result<&mut Pet, CoreError> {
        self.owner_mut(owner)?
            .get_pet_mut(pet)
            .ok_or_else(|| CoreError::not_found("pet", pet))
    }
}
