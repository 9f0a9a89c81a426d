//! Entity structs for the pet care domain.
//!
//! Ownership is a strict tree: an [`Owner`] owns [`Pet`]s, a pet owns
//! [`CareTask`]s and a [`VetRecord`], and every task owns its
//! [`Schedule`](crate::schedule::Schedule).

mod owner;
mod pet;
mod task;
mod vet_record;

pub use owner::Owner;
pub use pet::{Pet, Species};
pub use task::CareTask;
pub use vet_record::VetRecord;
