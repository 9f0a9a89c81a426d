//! Bulk task import from CSV.
//!
//! Expected header (column order is free, `notes` is optional):
//!
//! ```text
//! owner,pet,task_label,every_days,start_date,notes
//! Amar,Luna,Feed,1,2025-01-01,Two scoops
//! ```
//!
//! Rows are independent. A row naming an unknown owner or pet, a duplicate
//! label, a malformed cadence or date is skipped and reported; the remaining
//! rows still apply. Surrounding whitespace is ignored on every column except
//! `notes`, which is stored as written.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use pet_core::entities::CareTask;
use pet_core::errors::CoreError;
use pet_core::schedule::Schedule;
use pet_core::tracker::Tracker;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

const REQUIRED_COLUMNS: [&str; 5] = ["owner", "pet", "task_label", "every_days", "start_date"];

#[derive(Debug, Deserialize)]
struct ImportRow {
    owner: String,
    pet: String,
    task_label: String,
    every_days: String,
    start_date: String,
    #[serde(default)]
    notes: Option<String>,
}

impl ImportRow {
    fn schedule(&self) -> Result<Schedule, CoreError> {
        let raw = self.every_days.trim();
        let cadence: u32 = raw.parse().map_err(|_| {
            CoreError::InvalidArgument(format!("every_days '{raw}' is not a whole number of days"))
        })?;
        let raw = self.start_date.trim();
        let start = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|error| {
            CoreError::InvalidArgument(format!("start_date '{raw}' is not YYYY-MM-DD: {error}"))
        })?;
        Schedule::new(cadence, start)
    }
}

/// A row that was not applied.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the CSV input (the header is line 1).
    pub line: u64,
    pub reason: String,
}

/// Outcome of an import run.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ImportReport {
    /// Number of tasks added.
    pub imported: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Import tasks from the CSV file at `path` into `tracker`.
///
/// # Errors
///
/// Returns `StoreError` if the file cannot be opened or its header is
/// unreadable or incomplete. Row-level problems never produce an error.
pub fn import_tasks_csv(tracker: &mut Tracker, path: &Path) -> Result<ImportReport, StoreError> {
    let file = File::open(path)?;
    let report = import_tasks_from_reader(tracker, file)?;
    tracing::info!(
        path = %path.display(),
        imported = report.imported,
        skipped = report.skipped.len(),
        "csv import finished"
    );
    Ok(report)
}

/// Import tasks from any CSV source.
///
/// # Errors
///
/// Returns `StoreError` if the header is unreadable or lacks a required column.
pub fn import_tasks_from_reader<R: Read>(
    tracker: &mut Tracker,
    source: R,
) -> Result<ImportReport, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| (*column).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(StoreError::MissingColumns(missing));
    }

    let mut report = ImportReport::default();
    for result in reader.records() {
        let (line, outcome) = match result {
            Ok(record) => {
                let line = record.position().map_or(0, csv::Position::line);
                let outcome = record
                    .deserialize::<ImportRow>(Some(&headers))
                    .map_err(|error| error.to_string())
                    .and_then(|row| apply_row(tracker, row).map_err(|error| error.to_string()));
                (line, outcome)
            }
            Err(error) => (
                error.position().map_or(0, csv::Position::line),
                Err(error.to_string()),
            ),
        };

        match outcome {
            Ok(()) => report.imported += 1,
            Err(reason) => {
                tracing::warn!(line, %reason, "skipping csv row");
                report.skipped.push(SkippedRow { line, reason });
            }
        }
    }

    Ok(report)
}

fn apply_row(tracker: &mut Tracker, row: ImportRow) -> Result<(), CoreError> {
    let owner = row.owner.trim();
    let pet = row.pet.trim();
    let pet = tracker
        .get_owner_mut(owner)
        .ok_or_else(|| CoreError::not_found("owner", owner))?
        .get_pet_mut(pet)
        .ok_or_else(|| CoreError::not_found("pet", pet))?;

    let schedule = row.schedule()?;
    let task = CareTask::new(&row.task_label, schedule, row.notes.unwrap_or_default())?;
    pet.add_task(task)
}

#[cfg(test)]
mod tests {
    use pet_core::entities::{Owner, Pet, Species};
    use pretty_assertions::assert_eq;

    use super::*;

    fn tracker() -> Tracker {
        let mut owner = Owner::new("Amar", None).unwrap();
        owner
            .add_pet(Pet::new(Species::Dog, "Luna", "Lab", 10.0, 5.0).unwrap())
            .unwrap();
        let mut tracker = Tracker::new();
        tracker.register_owner(owner);
        tracker
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv = "owner,pet,task_label,start_date\nAmar,Luna,Feed,2025-01-01\n";
        let err = import_tasks_from_reader(&mut tracker(), csv.as_bytes()).unwrap_err();
        assert!(
            matches!(err, StoreError::MissingColumns(ref cols) if cols == &["every_days".to_string()])
        );
    }

    #[test]
    fn notes_column_is_optional() {
        let csv = "owner,pet,task_label,every_days,start_date\nAmar,Luna,Feed,1,2025-01-01\n";
        let mut tracker = tracker();

        let report = import_tasks_from_reader(&mut tracker, csv.as_bytes()).unwrap();

        assert_eq!(report.imported, 1);
        let task = tracker.get_owner("Amar").unwrap().get_pet("Luna").unwrap().task("Feed");
        assert_eq!(task.unwrap().notes(), "");
    }

    #[test]
    fn skipped_row_reports_line_number() {
        let csv = "owner,pet,task_label,every_days,start_date,notes\n\
                   Amar,Luna,Feed,1,2025-01-01,\n\
                   Amar,Ghost,Walk,1,2025-01-01,\n";

        let report = import_tasks_from_reader(&mut tracker(), csv.as_bytes()).unwrap();

        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 3);
        assert!(report.skipped[0].reason.contains("Ghost"));
    }
}
