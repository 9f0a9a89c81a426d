use crate::errors::{CoreError, require_non_empty};

/// Vaccination and appointment history for a pet.
///
/// Not consulted by scheduling; carried along for persistence and export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VetRecord {
    vaccinations: Vec<String>,
    appointments: Vec<String>,
}

impl VetRecord {
    #[must_use]
    pub const fn new(vaccinations: Vec<String>, appointments: Vec<String>) -> Self {
        Self {
            vaccinations,
            appointments,
        }
    }

    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if `name` is blank.
    pub fn add_vaccination(&mut self, name: &str) -> Result<(), CoreError> {
        self.vaccinations
            .push(require_non_empty(name, "Vaccination name")?);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if `note` is blank.
    pub fn add_appointment(&mut self, note: &str) -> Result<(), CoreError> {
        self.appointments
            .push(require_non_empty(note, "Appointment note")?);
        Ok(())
    }

    #[must_use]
    pub fn vaccinations(&self) -> &[String] {
        &self.vaccinations
    }

    #[must_use]
    pub fn appointments(&self) -> &[String] {
        &self.appointments
    }
}
