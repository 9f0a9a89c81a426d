use std::fmt;

use crate::entities::Pet;
use crate::errors::{CoreError, require_non_empty};
use crate::registry::{Keyed, Registry};

/// A pet owner and their uniquely named pets.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    name: String,
    email: Option<String>,
    pets: Registry<Pet>,
}

impl Owner {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if `name` is blank.
    pub fn new(name: &str, email: Option<String>) -> Result<Self, CoreError> {
        Ok(Self {
            name: require_non_empty(name, "Owner name")?,
            email,
            pets: Registry::new(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateKey`] if a pet with the same name exists.
    pub fn add_pet(&mut self, pet: Pet) -> Result<(), CoreError> {
        self.pets.insert(pet)
    }

    /// Remove a pet by name. Unknown names are a no-op.
    pub fn remove_pet(&mut self, name: &str) -> Option<Pet> {
        self.pets.remove(name)
    }

    #[must_use]
    pub fn get_pet(&self, name: &str) -> Option<&Pet> {
        self.pets.get(name)
    }

    pub fn get_pet_mut(&mut self, name: &str) -> Option<&mut Pet> {
        self.pets.get_mut(name)
    }

    /// Pets in insertion order.
    #[must_use]
    pub fn pets(&self) -> &[Pet] {
        self.pets.as_slice()
    }
}

impl Keyed for Owner {
    const ENTITY: &'static str = "owner";

    fn key(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} pet(s)", self.name, self.pets.len())
    }
}
