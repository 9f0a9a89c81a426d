//! Response types returned as JSON by `petcare` commands.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CareTask, Owner, Pet};

/// One outstanding task found by [`Tracker::all_due`](crate::tracker::Tracker::all_due).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DueTask {
    pub owner: String,
    pub pet: String,
    pub task: String,
    pub next_due: NaiveDate,
}

impl DueTask {
    /// The `(owner, pet, task)` triple identifying the task.
    #[must_use]
    pub fn key(&self) -> (&str, &str, &str) {
        (&self.owner, &self.pet, &self.task)
    }
}

/// Row for `petcare owner list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OwnerSummary {
    pub name: String,
    pub email: Option<String>,
    pub pets: usize,
}

impl From<&Owner> for OwnerSummary {
    fn from(owner: &Owner) -> Self {
        Self {
            name: owner.name().to_string(),
            email: owner.email().map(str::to_string),
            pets: owner.pets().len(),
        }
    }
}

/// Row for `petcare task list` and the task section of `petcare pet info`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskView {
    pub label: String,
    pub notes: String,
    pub every_days: u32,
    pub start: NaiveDate,
    pub last_completed: Option<NaiveDate>,
    pub next_due: NaiveDate,
}

impl From<&CareTask> for TaskView {
    fn from(task: &CareTask) -> Self {
        let schedule = task.schedule();
        Self {
            label: task.label().to_string(),
            notes: task.notes().to_string(),
            every_days: schedule.cadence_days(),
            start: schedule.start_date(),
            last_completed: schedule.last_completed(),
            next_due: schedule.next_due_date(),
        }
    }
}

/// Row for `petcare pet list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PetSummary {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub weight_kg: f64,
    pub age: f64,
    pub tasks: usize,
}

impl From<&Pet> for PetSummary {
    fn from(pet: &Pet) -> Self {
        Self {
            name: pet.name().to_string(),
            species: pet.species().to_string(),
            breed: pet.breed().to_string(),
            weight_kg: pet.weight_kg(),
            age: pet.age(),
            tasks: pet.all_tasks().len(),
        }
    }
}

/// Response from `petcare pet info`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PetInfo {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub weight_kg: f64,
    pub age: f64,
    pub daily_food_grams: f64,
    pub daily_exercise_minutes: u32,
    pub sound: String,
    pub vaccinations: Vec<String>,
    pub appointments: Vec<String>,
    pub tasks: Vec<TaskView>,
}

impl From<&Pet> for PetInfo {
    fn from(pet: &Pet) -> Self {
        Self {
            name: pet.name().to_string(),
            species: pet.species().to_string(),
            breed: pet.breed().to_string(),
            weight_kg: pet.weight_kg(),
            age: pet.age(),
            daily_food_grams: pet.daily_food_amount(),
            daily_exercise_minutes: pet.daily_exercise_minutes(),
            sound: pet.sound().to_string(),
            vaccinations: pet.vet_record().vaccinations().to_vec(),
            appointments: pet.vet_record().appointments().to_vec(),
            tasks: pet.all_tasks().iter().map(TaskView::from).collect(),
        }
    }
}
