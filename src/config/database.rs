//! Database configuration module for `WanderGuide`.
//!
//! This module handles `SQLite` database connection and table creation using
//! `SeaORM`. The schema is generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the database always matches the Rust
//! struct definitions without any manual SQL.

use crate::entities::StorageEntry;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the environment or returns the default
/// `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a local `SQLite` file (created on demand) if not found.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://wanderguide.sqlite?mode=rwc".to_string())
}

/// Establishes a connection to the `SQLite` database.
///
/// Uses the `DATABASE_URL` environment variable when set, otherwise a default
/// local `SQLite` file. Connection errors surface as `Error::Database`.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates the storage table using `SeaORM`'s schema generation from the
/// entity definition.
///
/// Safe to call on every start: the statement carries `IF NOT EXISTS`, so an
/// existing table (and its data) is left untouched.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut storage_table = schema.create_table_from_entity(StorageEntry);
    storage_table.if_not_exists();
    db.execute(builder.build(&storage_table)).await?;

    Ok(())
}
