//! # pet-core
//!
//! Core types for the pet care tracker.
//!
//! This crate provides the foundational types shared across all crates:
//! - The recurrence [`schedule::Schedule`] that decides when a care task is due
//! - Entity structs for care tasks, pets, vet records, and owners
//! - The insertion-ordered [`registry::Registry`] backing every keyed collection
//! - The root [`tracker::Tracker`] and its cross-cutting due-task query
//! - Cross-cutting error types
//! - The serializable document model used for persistence and export
//! - CLI response types

pub mod document;
pub mod entities;
pub mod errors;
pub mod registry;
pub mod responses;
pub mod schedule;
pub mod tracker;
