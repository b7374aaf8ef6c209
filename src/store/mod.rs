//! Record store - versioned JSON documents in a single key-value table.
//!
//! Every collection lives as one JSON document under a versioned key. Bumping
//! a key's version abandons the old document and reseeds the collection on the
//! next [`Store::initialize`], which is how breaking shape changes roll out.
//!
//! The store is a plain service object: construct one per database connection
//! and call its async methods. All operations load the whole document, work on
//! it in memory and write it back, which is the intended scale for this layer.

use crate::config::seed::SeedData;
use crate::entities::{storage_entry, StorageEntry};
use crate::errors::Result;
use crate::models::Passport;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};

mod community;
mod destinations;
mod itineraries;
mod passport;
mod requests;

pub use requests::NewRequest;

/// Destination catalogue document key
pub const DESTINATIONS_KEY: &str = "wg_destinations_v9";
/// Itinerary collection document key
pub const ITINERARIES_KEY: &str = "wg_itineraries_v12";
/// Request collection document key
pub const REQUESTS_KEY: &str = "wg_requests_v9";
/// Community feed document key
pub const COMMUNITY_POSTS_KEY: &str = "wg_community_posts_v3";
/// Passport map document key
pub const PASSPORTS_KEY: &str = "wg_passports_v7";
/// Session user record key
pub const SESSION_KEY: &str = "wg_user";

/// The user id whose seeded itineraries are shown to everyone.
pub const DEFAULT_DEMO_USER_ID: &str = "user-1";

/// Tuning knobs for a [`Store`].
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Artificial delay applied before each operation, to mimic a remote
    /// backend in demos. Zero disables the delay entirely.
    pub latency: Duration,
    /// When set, itinerary listings for any user also include this user's
    /// itineraries, so fresh accounts see example trips. `None` turns the
    /// union off.
    pub demo_user_id: Option<String>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            latency: Duration::ZERO,
            demo_user_id: Some(DEFAULT_DEMO_USER_ID.to_string()),
        }
    }
}

/// Handle to the persisted record collections.
#[derive(Debug, Clone)]
pub struct Store {
    db: DatabaseConnection,
    options: StoreOptions,
}

impl Store {
    /// Creates a store with default options (no latency, demo union on).
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_options(db, StoreOptions::default())
    }

    /// Creates a store with explicit options.
    #[must_use]
    pub fn with_options(db: DatabaseConnection, options: StoreOptions) -> Self {
        Self { db, options }
    }

    /// Writes the seed collections for every versioned key that has no
    /// document yet. Keys that already hold a document are left untouched, so
    /// calling this on every start is safe and user mutations survive.
    pub async fn initialize(&self, seed: &SeedData) -> Result<()> {
        self.seed_if_absent(DESTINATIONS_KEY, &seed.destinations)
            .await?;
        self.seed_if_absent(ITINERARIES_KEY, &seed.itineraries)
            .await?;
        self.seed_if_absent(REQUESTS_KEY, &seed.requests).await?;
        self.seed_if_absent(COMMUNITY_POSTS_KEY, &seed.community_posts)
            .await?;
        info!("Record store initialized");
        Ok(())
    }

    async fn seed_if_absent<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        if self.read_raw(key).await?.is_none() {
            debug!(key, count = items.len(), "Seeding collection");
            self.write_raw(key, serde_json::to_string(items)?).await?;
        }
        Ok(())
    }

    /// Sleeps for the configured latency, if any. Called at the top of every
    /// public operation.
    pub(crate) async fn pause(&self) {
        if !self.options.latency.is_zero() {
            tokio::time::sleep(self.options.latency).await;
        }
    }

    pub(crate) fn demo_user_id(&self) -> Option<&str> {
        self.options.demo_user_id.as_deref()
    }

    /// Reads the raw JSON document stored under `key`, if any.
    pub(crate) async fn read_raw(&self, key: &str) -> Result<Option<String>> {
        let entry = StorageEntry::find_by_id(key).one(&self.db).await?;
        Ok(entry.map(|model| model.value))
    }

    /// Writes `value` under `key`, replacing any previous document.
    pub(crate) async fn write_raw(&self, key: &str, value: String) -> Result<()> {
        let now = Utc::now().naive_utc();
        match StorageEntry::find_by_id(key).one(&self.db).await? {
            Some(model) => {
                let mut active: storage_entry::ActiveModel = model.into();
                active.value = Set(value);
                active.updated_at = Set(now);
                active.update(&self.db).await?;
            }
            None => {
                let active = storage_entry::ActiveModel {
                    key: Set(key.to_string()),
                    value: Set(value),
                    updated_at: Set(now),
                };
                active.insert(&self.db).await?;
            }
        }
        Ok(())
    }

    /// Removes the document stored under `key`. Missing keys are a no-op.
    pub(crate) async fn delete_raw(&self, key: &str) -> Result<()> {
        StorageEntry::delete_by_id(key).exec(&self.db).await?;
        Ok(())
    }

    /// Loads a collection document as a vector. A missing key yields an empty
    /// vector. A document that no longer parses is discarded so the next
    /// [`Store::initialize`] can reseed the key.
    pub(crate) async fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.read_raw(key).await? {
            None => Ok(Vec::new()),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => Ok(items),
                Err(err) => {
                    warn!(key, error = %err, "Discarding corrupt stored document");
                    self.delete_raw(key).await?;
                    Ok(Vec::new())
                }
            },
        }
    }

    pub(crate) async fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        self.write_raw(key, serde_json::to_string(items)?).await
    }

    /// Loads the persisted passport map. Same recovery behavior as
    /// [`Store::load_collection`], except passports reseed lazily on the next
    /// fetch rather than from seed data.
    pub(crate) async fn load_passports(&self) -> Result<HashMap<String, Passport>> {
        match self.read_raw(PASSPORTS_KEY).await? {
            None => Ok(HashMap::new()),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(map) => Ok(map),
                Err(err) => {
                    warn!(key = PASSPORTS_KEY, error = %err, "Discarding corrupt passport map");
                    self.delete_raw(PASSPORTS_KEY).await?;
                    Ok(HashMap::new())
                }
            },
        }
    }

    pub(crate) async fn save_passports(&self, passports: &HashMap<String, Passport>) -> Result<()> {
        self.write_raw(PASSPORTS_KEY, serde_json::to_string(passports)?)
            .await
    }
}
