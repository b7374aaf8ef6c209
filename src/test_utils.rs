//! Shared test utilities for in-memory store setup.
//!
//! Every test gets its own `SQLite` in-memory database, so tests never share
//! state and need no cleanup.

use crate::config::database::create_tables;
use crate::config::seed::SeedData;
use crate::errors::Result;
use crate::models::{Itinerary, ItineraryStatus};
use crate::store::Store;
use sea_orm::{Database, DatabaseConnection};

/// Creates a fresh in-memory database with the storage table created.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    create_tables(&db).await?;
    Ok(db)
}

/// A store over a fresh database with no documents written.
pub async fn setup_test_store() -> Result<Store> {
    Ok(Store::new(setup_test_db().await?))
}

/// A store over a fresh database, initialized with the embedded seed data.
pub async fn setup_seeded_store() -> Result<Store> {
    let store = setup_test_store().await?;
    store.initialize(&SeedData::embedded()?).await?;
    Ok(store)
}

/// A minimal draft itinerary for tests that only care about ownership and
/// status transitions.
#[must_use]
pub fn test_itinerary(id: &str, user_id: &str, destination: &str) -> Itinerary {
    Itinerary {
        id: id.to_string(),
        user_id: user_id.to_string(),
        destination: destination.to_string(),
        hero_image: "https://example.com/hero.jpg".to_string(),
        start_date: "2025-06-01".to_string(),
        end_date: "2025-06-10".to_string(),
        status: ItineraryStatus::Draft,
        price: None,
        days: Vec::new(),
    }
}
