use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::entities::{CareTask, VetRecord};
use crate::errors::{CoreError, require_non_empty};
use crate::registry::{Keyed, Registry};

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// The closed set of supported species.
///
/// Species only contribute constants; scheduling is identical for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Dog,
    Cat,
    Bird,
}

impl Species {
    pub const ALL: [Self; 3] = [Self::Dog, Self::Cat, Self::Bird];

    /// Type tag used in persisted documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Bird => "Bird",
        }
    }

    /// Resolve a persisted type tag. Unlike [`FromStr`], the match is exact.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] for anything but `Dog`, `Cat`
    /// or `Bird`.
    pub fn from_tag(tag: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|species| species.as_str() == tag)
            .ok_or_else(|| CoreError::InvalidArgument(format!("Unknown pet type: {tag}")))
    }

    /// Grams of food per kilogram of body weight per day.
    #[must_use]
    pub const fn food_multiplier(self) -> f64 {
        match self {
            Self::Dog => 40.0,
            Self::Cat => 30.0,
            Self::Bird => 20.0,
        }
    }

    #[must_use]
    pub const fn exercise_minutes(self) -> u32 {
        match self {
            Self::Dog => 60,
            Self::Cat => 20,
            Self::Bird => 10,
        }
    }

    #[must_use]
    pub const fn sound(self) -> &'static str {
        match self {
            Self::Dog => "Woof!",
            Self::Cat => "Meow!",
            Self::Bird => "Chirp!",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = CoreError;

    /// Parse a species tag, ignoring ASCII case.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|species| species.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| CoreError::InvalidArgument(format!("Unknown pet type: {raw}")))
    }
}

// ---------------------------------------------------------------------------
// Pet
// ---------------------------------------------------------------------------

/// A pet with its care tasks and vet record.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    species: Species,
    name: String,
    breed: String,
    weight_kg: f64,
    age: f64,
    tasks: Registry<CareTask>,
    vet_record: VetRecord,
}

impl Pet {
    /// Create a pet with no tasks and an empty vet record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if the name is blank, the weight
    /// is not a positive number, or the age is negative.
    pub fn new(
        species: Species,
        name: &str,
        breed: impl Into<String>,
        weight_kg: f64,
        age: f64,
    ) -> Result<Self, CoreError> {
        let name = require_non_empty(name, "Pet name")?;
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(CoreError::invalid("Weight must be positive"));
        }
        if !age.is_finite() || age < 0.0 {
            return Err(CoreError::invalid("Age cannot be negative"));
        }
        Ok(Self {
            species,
            name,
            breed: breed.into(),
            weight_kg,
            age,
            tasks: Registry::new(),
            vet_record: VetRecord::default(),
        })
    }

    #[must_use]
    pub const fn species(&self) -> Species {
        self.species
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn breed(&self) -> &str {
        &self.breed
    }

    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    #[must_use]
    pub const fn age(&self) -> f64 {
        self.age
    }

    // -- tasks --------------------------------------------------------------

    /// Assign a task to this pet.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateKey`] if a task with the same label
    /// already exists. The pet is unchanged on failure.
    pub fn add_task(&mut self, task: CareTask) -> Result<(), CoreError> {
        self.tasks.insert(task)
    }

    /// Delete a task by label. Unknown labels are a no-op.
    pub fn remove_task(&mut self, label: &str) -> Option<CareTask> {
        self.tasks.remove(label)
    }

    #[must_use]
    pub fn task(&self, label: &str) -> Option<&CareTask> {
        self.tasks.get(label)
    }

    pub fn task_mut(&mut self, label: &str) -> Option<&mut CareTask> {
        self.tasks.get_mut(label)
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn all_tasks(&self) -> &[CareTask] {
        self.tasks.as_slice()
    }

    /// Tasks outstanding on `on`, in insertion order.
    #[must_use]
    pub fn due_tasks(&self, on: NaiveDate) -> Vec<&CareTask> {
        self.tasks.iter().filter(|task| task.is_due(on)).collect()
    }

    // -- vet record ---------------------------------------------------------

    #[must_use]
    pub const fn vet_record(&self) -> &VetRecord {
        &self.vet_record
    }

    pub const fn vet_record_mut(&mut self) -> &mut VetRecord {
        &mut self.vet_record
    }

    pub(crate) fn set_vet_record(&mut self, record: VetRecord) {
        self.vet_record = record;
    }

    // -- species constants --------------------------------------------------

    /// Daily food in grams.
    #[must_use]
    pub fn daily_food_amount(&self) -> f64 {
        self.species.food_multiplier() * self.weight_kg
    }

    #[must_use]
    pub const fn daily_exercise_minutes(&self) -> u32 {
        self.species.exercise_minutes()
    }

    #[must_use]
    pub const fn sound(&self) -> &'static str {
        self.species.sound()
    }
}

impl Keyed for Pet {
    const ENTITY: &'static str = "pet";

    fn key(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} the {} ({})", self.name, self.breed, self.species)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::schedule::Schedule;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(label: &str, cadence: u32, start: NaiveDate) -> CareTask {
        CareTask::new(label, Schedule::new(cadence, start).unwrap(), "").unwrap()
    }

    #[rstest]
    #[case(Species::Dog, 10.0, 400.0, 60, "Woof!")]
    #[case(Species::Cat, 4.0, 120.0, 20, "Meow!")]
    #[case(Species::Bird, 1.0, 20.0, 10, "Chirp!")]
    fn species_constants(
        #[case] species: Species,
        #[case] weight: f64,
        #[case] food: f64,
        #[case] minutes: u32,
        #[case] sound: &str,
    ) {
        let pet = Pet::new(species, "Buddy", "Mixed", weight, 3.0).unwrap();
        assert!((pet.daily_food_amount() - food).abs() < f64::EPSILON);
        assert_eq!(pet.daily_exercise_minutes(), minutes);
        assert_eq!(pet.sound(), sound);
    }

    #[rstest]
    #[case("", 10.0, 1.0)]
    #[case("Rex", 0.0, 1.0)]
    #[case("Rex", -2.0, 1.0)]
    #[case("Rex", f64::NAN, 1.0)]
    #[case("Rex", 10.0, -0.5)]
    fn invalid_construction_is_rejected(
        #[case] name: &str,
        #[case] weight: f64,
        #[case] age: f64,
    ) {
        let err = Pet::new(Species::Dog, name, "Lab", weight, age).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }

    #[test]
    fn zero_age_is_allowed() {
        assert!(Pet::new(Species::Cat, "Kit", "Tabby", 0.5, 0.0).is_ok());
    }

    #[test]
    fn duplicate_task_label_is_rejected_without_mutation() {
        let mut pet = Pet::new(Species::Dog, "Buddy", "Lab", 10.0, 5.0).unwrap();
        pet.add_task(task("Feed", 1, date(2025, 1, 1))).unwrap();

        let err = pet.add_task(task("Feed", 3, date(2026, 1, 1))).unwrap_err();

        assert!(matches!(err, CoreError::DuplicateKey { .. }));
        assert_eq!(pet.all_tasks().len(), 1);
        assert_eq!(pet.task("Feed").unwrap().schedule().cadence_days(), 1);
    }

    #[test]
    fn due_tasks_keep_insertion_order() {
        let mut pet = Pet::new(Species::Dog, "Buddy", "Lab", 10.0, 5.0).unwrap();
        pet.add_task(task("Walk", 1, date(2025, 1, 1))).unwrap();
        pet.add_task(task("Groom", 7, date(2025, 2, 1))).unwrap();
        pet.add_task(task("Feed", 1, date(2024, 12, 1))).unwrap();

        let due: Vec<&str> = pet
            .due_tasks(date(2025, 1, 15))
            .into_iter()
            .map(CareTask::label)
            .collect();

        assert_eq!(due, vec!["Walk", "Feed"]);
    }

    #[test]
    fn remove_task_is_noop_for_unknown_label() {
        let mut pet = Pet::new(Species::Bird, "Tweety", "Canary", 0.1, 1.0).unwrap();
        pet.add_task(task("Seed", 1, date(2025, 1, 1))).unwrap();
        assert!(pet.remove_task("Water").is_none());
        assert!(pet.remove_task("Seed").is_some());
        assert!(pet.all_tasks().is_empty());
    }

    #[rstest]
    #[case("Dog", Species::Dog)]
    #[case("cat", Species::Cat)]
    #[case(" BIRD ", Species::Bird)]
    fn species_parses_case_insensitively(#[case] raw: &str, #[case] expected: Species) {
        assert_eq!(raw.parse::<Species>().unwrap(), expected);
    }

    #[rstest]
    #[case("dog")]
    #[case("CAT")]
    #[case(" Bird")]
    #[case("Hamster")]
    fn persisted_tag_must_match_exactly(#[case] tag: &str) {
        assert!(matches!(Species::from_tag(tag), Err(CoreError::InvalidArgument(_))));
    }

    #[test]
    fn persisted_tags_resolve() {
        for species in Species::ALL {
            assert_eq!(Species::from_tag(species.as_str()).unwrap(), species);
        }
    }

    #[test]
    fn unknown_species_is_invalid_argument() {
        let err = "Hamster".parse::<Species>().unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidArgument("Unknown pet type: Hamster".into())
        );
    }

    #[test]
    fn display_names_species() {
        let pet = Pet::new(Species::Cat, "Kitty", "Tabby", 4.0, 3.0).unwrap();
        assert_eq!(pet.to_string(), "Kitty the Tabby (Cat)");
    }
}
