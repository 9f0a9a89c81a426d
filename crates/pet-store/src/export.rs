//! Single-pet JSON export.

use std::fs;
use std::path::Path;

use pet_core::document::PetDocument;
use pet_core::errors::CoreError;
use pet_core::tracker::Tracker;

use crate::error::StoreError;

/// Write `owner/pet` as a pretty-printed [`PetDocument`] to `out_path`.
///
/// The exported file has the same shape as a pet entry in the data file, so
/// it can be pasted back into a tracker document.
///
/// # Errors
///
/// Returns `StoreError::Core` with `NotFound` if the owner or pet does not
/// exist, or `StoreError::Io` if the file cannot be written.
pub fn export_pet_summary(
    tracker: &Tracker,
    owner_name: &str,
    pet_name: &str,
    out_path: &Path,
) -> Result<(), StoreError> {
    let owner = tracker
        .get_owner(owner_name)
        .ok_or_else(|| CoreError::not_found("owner", owner_name))?;
    let pet = owner
        .get_pet(pet_name)
        .ok_or_else(|| CoreError::not_found("pet", pet_name))?;

    let summary = serde_json::to_string_pretty(&PetDocument::from(pet))?;
    if let Some(parent) = out_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(out_path, summary)?;

    tracing::info!(owner = owner_name, pet = pet_name, path = %out_path.display(), "exported pet");
    Ok(())
}
