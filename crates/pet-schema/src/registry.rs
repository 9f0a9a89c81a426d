//! Central schema registry for persisted documents and CLI responses.

use std::collections::BTreeMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Name of the schema describing the whole persisted data file.
pub const TRACKER_DOCUMENT: &str = "tracker_document";

/// Name of the schema describing a single exported pet.
pub const PET_DOCUMENT: &str = "pet_document";

/// All JSON Schemas known to the tracker, keyed by name.
pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a registry containing all document and response schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on a `schemars`-generated
    /// schema, which does not happen for derived schemas.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = BTreeMap::new();

        // --- Persisted documents (6) ---
        register!(schemas, TRACKER_DOCUMENT, pet_core::document::TrackerDocument);
        register!(schemas, "owner_document", pet_core::document::OwnerDocument);
        register!(schemas, PET_DOCUMENT, pet_core::document::PetDocument);
        register!(schemas, "task_document", pet_core::document::TaskDocument);
        register!(
            schemas,
            "schedule_document",
            pet_core::document::ScheduleDocument
        );
        register!(
            schemas,
            "vet_record_document",
            pet_core::document::VetRecordDocument
        );

        // --- CLI responses (5) ---
        register!(schemas, "due_task", pet_core::responses::DueTask);
        register!(schemas, "owner_summary", pet_core::responses::OwnerSummary);
        register!(schemas, "pet_summary", pet_core::responses::PetSummary);
        register!(schemas, "pet_info", pet_core::responses::PetInfo);
        register!(schemas, "task_view", pet_core::responses::TaskView);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// All registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        self.schemas.keys().copied().collect()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
