use std::fmt;

use chrono::NaiveDate;

use crate::errors::{CoreError, require_non_empty};
use crate::registry::Keyed;
use crate::schedule::Schedule;

/// A named, schedulable unit of care ("Feed", "Walk", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareTask {
    label: String,
    notes: String,
    schedule: Schedule,
}

impl CareTask {
    /// Create a task. The label is stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if `label` is empty or whitespace.
    pub fn new(
        label: &str,
        schedule: Schedule,
        notes: impl Into<String>,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            label: require_non_empty(label, "Task label")?,
            notes: notes.into(),
            schedule,
        })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Mark the task completed on `on`.
    pub const fn complete(&mut self, on: NaiveDate) {
        self.schedule.mark_completed(on);
    }

    #[must_use]
    pub fn is_due(&self, on: NaiveDate) -> bool {
        self.schedule.is_due(on)
    }

    #[must_use]
    pub fn next_due_date(&self) -> NaiveDate {
        self.schedule.next_due_date()
    }
}

impl Keyed for CareTask {
    const ENTITY: &'static str = "task";

    fn key(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for CareTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - next due {}", self.label, self.next_due_date())
    }
}
