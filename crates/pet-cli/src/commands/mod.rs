pub mod dispatch;
pub mod due;
pub mod export;
pub mod import;
pub mod owner;
pub mod pet;
pub mod schema;
pub mod shared;
pub mod task;
pub mod vet;
