// Fleet state management module
// Owns the moto collection and its JSON blob persistence

pub mod models;
pub mod storage;
pub mod store;

pub use models::{FleetSummary, Moto, MotoPatch, STATUS_OPTIONS};
pub use storage::{default_fleet_path, StorageError};
pub use store::{FleetStore, StoreError};
