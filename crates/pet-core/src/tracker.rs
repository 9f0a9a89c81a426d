//! The root registry of owners and the cross-cutting due-task query.

use std::fmt;

use chrono::NaiveDate;

use crate::entities::{Owner, Pet};
use crate::registry::Registry;
use crate::responses::DueTask;

/// Single source of truth for all owners, pets, and tasks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tracker {
    owners: Registry<Owner>,
}

impl Tracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an owner, silently replacing one with the same name.
    ///
    /// Unlike pets and tasks there is no duplicate check. A replaced owner
    /// keeps its original registration position.
    pub fn register_owner(&mut self, owner: Owner) -> Option<Owner> {
        self.owners.upsert(owner)
    }

    /// Remove an owner by name. Unknown names are a no-op.
    pub fn remove_owner(&mut self, name: &str) -> Option<Owner> {
        self.owners.remove(name)
    }

    #[must_use]
    pub fn get_owner(&self, name: &str) -> Option<&Owner> {
        self.owners.get(name)
    }

    pub fn get_owner_mut(&mut self, name: &str) -> Option<&mut Owner> {
        self.owners.get_mut(name)
    }

    /// Owners in registration order.
    #[must_use]
    pub fn owners(&self) -> &[Owner] {
        self.owners.as_slice()
    }

    /// Resolve `owner/pet` for mutation.
    pub fn find_pet_mut(&mut self, owner: &str, pet: &str) -> Option<&mut Pet> {
        self.get_owner_mut(owner)?.get_pet_mut(pet)
    }

    /// Every task outstanding on `on`.
    ///
    /// Ordered by owner registration, then pet insertion, then task insertion.
    /// Recomputed on every call.
    #[must_use]
    pub fn all_due(&self, on: NaiveDate) -> Vec<DueTask> {
        self.owners
            .iter()
            .flat_map(|owner| {
                owner.pets().iter().flat_map(move |pet| {
                    pet.due_tasks(on).into_iter().map(move |task| DueTask {
                        owner: owner.name().to_string(),
                        pet: pet.name().to_string(),
                        task: task.label().to_string(),
                        next_due: task.next_due_date(),
                    })
                })
            })
            .collect()
    }
}

impl fmt::Display for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracker with {} owner(s)", self.owners.len())
    }
}
