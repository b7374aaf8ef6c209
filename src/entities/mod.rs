//! Entity module - Contains the SeaORM entity definitions for the database.
//! The record store keeps all of its state in a single key-value table, so
//! there is exactly one entity here.

pub mod storage_entry;

// Re-export specific types to avoid conflicts
pub use storage_entry::{
    Column as StorageEntryColumn, Entity as StorageEntry, Model as StorageEntryModel,
};
