//! Fixed-interval recurrence for a single care task.
//!
//! A schedule is due on its start date until the first completion is recorded.
//! After that it is due `cadence_days` after the most recent completion.
//!
//! ```text
//! never completed:  next_due = start_date
//! completed on D:   next_due = D + cadence_days
//! is_due(on):       on >= next_due
//! ```
//!
//! There is no catch-up: a task that is several cadences overdue still reports
//! the same `next_due_date` until it is completed again.

use std::fmt;

use chrono::{Days, NaiveDate};

use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    cadence_days: u32,
    start_date: NaiveDate,
    last_completed: Option<NaiveDate>,
}

impl Schedule {
    /// Create a schedule that has never been completed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if `cadence_days` is zero.
    pub fn new(cadence_days: u32, start_date: NaiveDate) -> Result<Self, CoreError> {
        Self::with_last_completed(cadence_days, start_date, None)
    }

    /// Create a schedule with a known completion, as restored from storage.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if `cadence_days` is zero.
    pub fn with_last_completed(
        cadence_days: u32,
        start_date: NaiveDate,
        last_completed: Option<NaiveDate>,
    ) -> Result<Self, CoreError> {
        if cadence_days < 1 {
            return Err(CoreError::invalid("Recurrence must be at least 1 day"));
        }
        Ok(Self {
            cadence_days,
            start_date,
            last_completed,
        })
    }

    #[must_use]
    pub const fn cadence_days(&self) -> u32 {
        self.cadence_days
    }

    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub const fn last_completed(&self) -> Option<NaiveDate> {
        self.last_completed
    }

    /// Record a completion on `on`.
    ///
    /// The date is not checked against today or against the previous
    /// completion; completing on an earlier date moves the due date backwards.
    pub const fn mark_completed(&mut self, on: NaiveDate) {
        self.last_completed = Some(on);
    }

    /// The earliest date on which the task is outstanding.
    ///
    /// Saturates at [`NaiveDate::MAX`] when the cadence would step past the
    /// representable calendar range.
    #[must_use]
    pub fn next_due_date(&self) -> NaiveDate {
        match self.last_completed {
            None => self.start_date,
            Some(last) => last
                .checked_add_days(Days::new(u64::from(self.cadence_days)))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    /// Whether the task is outstanding on `on`.
    ///
    /// Any `NaiveDate` is a valid calendar date, so the invalid-date case that
    /// a loosely typed caller could hit cannot occur here.
    #[must_use]
    pub fn is_due(&self, on: NaiveDate) -> bool {
        on >= self.next_due_date()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last_completed {
            Some(last) => write!(
                f,
                "every {} day(s), last completed {last}",
                self.cadence_days
            ),
            None => write!(
                f,
                "every {} day(s), starting {}",
                self.cadence_days, self.start_date
            ),
        }
    }
}
