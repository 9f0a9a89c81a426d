//! # pet-store
//!
//! File-backed persistence for the pet care tracker.
//!
//! - [`Storage`]: saves the whole tracker as one JSON document, keeping a
//!   backup of the previous file, and loads it back with backup fallback.
//! - [`import`]: bulk task import from CSV with per-row skip-and-continue.
//! - [`export`]: writes a single pet as a standalone JSON document.

pub mod error;
pub mod export;
pub mod import;
mod storage;

pub use error::StoreError;
pub use export::export_pet_summary;
pub use import::{ImportReport, SkippedRow, import_tasks_csv};
pub use storage::{LoadOutcome, Storage};
