mod owner;
mod pet;
mod task;
mod vet;

pub use owner::OwnerCommands;
pub use pet::PetCommands;
pub use task::TaskCommands;
pub use vet::VetCommands;
