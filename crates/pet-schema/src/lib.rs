//! # pet-schema
//!
//! JSON Schema generation and validation for the pet care tracker.
//!
//! Document and response types are defined in `pet-core` with
//! `#[derive(JsonSchema)]`. This crate collects their schemas into a
//! [`SchemaRegistry`] used to validate saved files and to print schemas from
//! `petcare schema`.

mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
