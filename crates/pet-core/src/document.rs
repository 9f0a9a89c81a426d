//! Serializable document model for persistence and export.
//!
//! The document mirrors the entity tree field for field:
//!
//! ```text
//! TrackerDocument { owners: [OwnerDocument { pets: [PetDocument {
//!     tasks: [TaskDocument { schedule: ScheduleDocument }],
//!     vet_record: VetRecordDocument }] }] }
//! ```
//!
//! Encoding is infallible. Decoding replays every entity constructor, so a
//! document carrying an invalid value (zero cadence, unknown pet type,
//! duplicate task label) fails with a [`CoreError`] instead of producing an
//! invalid tree. Optional fields default when missing: `email` and
//! `last_completed` to absent, `notes` to empty, collections to empty.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CareTask, Owner, Pet, Species, VetRecord};
use crate::errors::CoreError;
use crate::schedule::Schedule;
use crate::tracker::Tracker;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrackerDocument {
    #[serde(default)]
    pub owners: Vec<OwnerDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OwnerDocument {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub pets: Vec<PetDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PetDocument {
    /// Species tag: `Dog`, `Cat`, or `Bird`.
    #[serde(rename = "type")]
    pub pet_type: String,
    pub name: String,
    pub breed: String,
    pub weight_kg: f64,
    pub age: f64,
    #[serde(default)]
    pub tasks: Vec<TaskDocument>,
    #[serde(default)]
    pub vet_record: VetRecordDocument,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskDocument {
    pub label: String,
    #[serde(default)]
    pub notes: String,
    pub schedule: ScheduleDocument,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScheduleDocument {
    pub every_days: u32,
    pub start: NaiveDate,
    #[serde(default)]
    pub last_completed: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VetRecordDocument {
    #[serde(default)]
    pub vaccinations: Vec<String>,
    #[serde(default)]
    pub appointments: Vec<String>,
}

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

impl From<&Schedule> for ScheduleDocument {
    fn from(schedule: &Schedule) -> Self {
        Self {
            every_days: schedule.cadence_days(),
            start: schedule.start_date(),
            last_completed: schedule.last_completed(),
        }
    }
}

impl From<&CareTask> for TaskDocument {
    fn from(task: &CareTask) -> Self {
        Self {
            label: task.label().to_string(),
            notes: task.notes().to_string(),
            schedule: task.schedule().into(),
        }
    }
}

impl From<&VetRecord> for VetRecordDocument {
    fn from(record: &VetRecord) -> Self {
        Self {
            vaccinations: record.vaccinations().to_vec(),
            appointments: record.appointments().to_vec(),
        }
    }
}

impl From<&Pet> for PetDocument {
    fn from(pet: &Pet) -> Self {
        Self {
            pet_type: pet.species().as_str().to_string(),
            name: pet.name().to_string(),
            breed: pet.breed().to_string(),
            weight_kg: pet.weight_kg(),
            age: pet.age(),
            tasks: pet.all_tasks().iter().map(TaskDocument::from).collect(),
            vet_record: pet.vet_record().into(),
        }
    }
}

impl From<&Owner> for OwnerDocument {
    fn from(owner: &Owner) -> Self {
        Self {
            name: owner.name().to_string(),
            email: owner.email().map(str::to_string),
            pets: owner.pets().iter().map(PetDocument::from).collect(),
        }
    }
}

impl From<&Tracker> for TrackerDocument {
    fn from(tracker: &Tracker) -> Self {
        Self {
            owners: tracker.owners().iter().map(OwnerDocument::from).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

impl TryFrom<ScheduleDocument> for Schedule {
    type Error = CoreError;

    fn try_from(doc: ScheduleDocument) -> Result<Self, Self::Error> {
        Self::with_last_completed(doc.every_days, doc.start, doc.last_completed)
    }
}

impl TryFrom<TaskDocument> for CareTask {
    type Error = CoreError;

    fn try_from(doc: TaskDocument) -> Result<Self, Self::Error> {
        let schedule = Schedule::try_from(doc.schedule)?;
        Self::new(&doc.label, schedule, doc.notes)
    }
}

impl From<VetRecordDocument> for VetRecord {
    fn from(doc: VetRecordDocument) -> Self {
        Self::new(doc.vaccinations, doc.appointments)
    }
}

impl TryFrom<PetDocument> for Pet {
    type Error = CoreError;

    fn try_from(doc: PetDocument) -> Result<Self, Self::Error> {
        let species = Species::from_tag(&doc.pet_type)?;
        let mut pet = Self::new(species, &doc.name, doc.breed, doc.weight_kg, doc.age)?;
        for task in doc.tasks {
            pet.add_task(CareTask::try_from(task)?)?;
        }
        pet.set_vet_record(doc.vet_record.into());
        Ok(pet)
    }
}

impl TryFrom<OwnerDocument> for Owner {
    type Error = CoreError;

    fn try_from(doc: OwnerDocument) -> Result<Self, Self::Error> {
        let mut owner = Self::new(&doc.name, doc.email)?;
        for pet in doc.pets {
            owner.add_pet(Pet::try_from(pet)?)?;
        }
        Ok(owner)
    }
}

impl TryFrom<TrackerDocument> for Tracker {
    type Error = CoreError;

    /// Owners are registered in document order; a repeated owner name
    /// replaces the earlier entry, as [`Tracker::register_owner`] does.
    fn try_from(doc: TrackerDocument) -> Result<Self, Self::Error> {
        let mut tracker = Self::new();
        for owner in doc.owners {
            tracker.register_owner(Owner::try_from(owner)?);
        }
        Ok(tracker)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_optional_fields_take_defaults() {
        let doc: TrackerDocument = serde_json::from_value(json!({
            "owners": [{
                "name": "Amar",
                "pets": [{
                    "type": "Dog",
                    "name": "Luna",
                    "breed": "Lab",
                    "weight_kg": 10.0,
                    "age": 5.0,
                    "tasks": [{
                        "label": "Feed",
                        "schedule": { "every_days": 1, "start": "2025-01-01" }
                    }]
                }]
            }]
        }))
        .unwrap();

        let tracker = Tracker::try_from(doc).unwrap();
        let owner = tracker.get_owner("Amar").unwrap();
        assert_eq!(owner.email(), None);
        let pet = owner.get_pet("Luna").unwrap();
        assert_eq!(pet.vet_record(), &VetRecord::default());
        let task = pet.task("Feed").unwrap();
        assert_eq!(task.notes(), "");
        assert_eq!(task.schedule().last_completed(), None);
    }

    #[test]
    fn empty_document_decodes_to_empty_tracker() {
        let doc: TrackerDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(Tracker::try_from(doc).unwrap(), Tracker::new());
    }

    #[test]
    fn unknown_pet_type_is_invalid_argument() {
        let doc = PetDocument {
            pet_type: "Hamster".into(),
            name: "Nibbles".into(),
            breed: "Syrian".into(),
            weight_kg: 0.1,
            age: 1.0,
            tasks: Vec::new(),
            vet_record: VetRecordDocument::default(),
        };
        let err = Pet::try_from(doc).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(msg) if msg.contains("Hamster")));
    }

    #[test]
    fn lowercase_pet_type_fails_decode() {
        let doc = PetDocument {
            pet_type: "dog".into(),
            name: "Luna".into(),
            breed: "Lab".into(),
            weight_kg: 10.0,
            age: 5.0,
            tasks: Vec::new(),
            vet_record: VetRecordDocument::default(),
        };
        let err = Pet::try_from(doc).unwrap_err();
        assert_eq!(err, CoreError::InvalidArgument("Unknown pet type: dog".into()));
    }

    #[test]
    fn zero_cadence_fails_decode() {
        let doc = ScheduleDocument {
            every_days: 0,
            start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            last_completed: None,
        };
        assert!(matches!(
            Schedule::try_from(doc),
            Err(CoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn schedule_serializes_dates_as_iso_strings() {
        let mut schedule = Schedule::new(3, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).unwrap();
        schedule.mark_completed(NaiveDate::from_ymd_opt(2025, 1, 4).unwrap());
        let value = serde_json::to_value(ScheduleDocument::from(&schedule)).unwrap();
        assert_eq!(
            value,
            json!({ "every_days": 3, "start": "2025-01-01", "last_completed": "2025-01-04" })
        );
    }
}
