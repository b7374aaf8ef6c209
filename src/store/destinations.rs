//! Destination catalogue reads.
//!
//! The catalogue is reference data: seeded once and never mutated, so this
//! module only exposes lookups.

use super::{Store, DESTINATIONS_KEY};
use crate::errors::Result;
use crate::models::Destination;

impl Store {
    /// Returns the full destination catalogue.
    pub async fn get_destinations(&self) -> Result<Vec<Destination>> {
        self.pause().await;
        self.load_collection(DESTINATIONS_KEY).await
    }

    /// Returns a single destination by catalogue id, or `None` if the id is
    /// not in the catalogue.
    pub async fn get_destination(&self, id: i64) -> Result<Option<Destination>> {
        self.pause().await;
        let destinations: Vec<Destination> = self.load_collection(DESTINATIONS_KEY).await?;
        Ok(destinations.into_iter().find(|d| d.id == id))
    }
}
