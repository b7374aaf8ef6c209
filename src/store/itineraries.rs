//! Itinerary collection operations.
//!
//! Listings union the caller's itineraries with the demo user's so new
//! accounts see example trips. Writes always target the full collection
//! document; `save_itineraries` upserts by id so callers can persist freshly
//! generated plans and edits with one call.

use super::{Store, ITINERARIES_KEY};
use crate::errors::Result;
use crate::models::{Itinerary, ItineraryStatus};

impl Store {
    /// Returns the itineraries visible to `user_id`: the user's own, plus the
    /// demo user's when the demo union is enabled. Overlapping ids are
    /// returned once.
    pub async fn get_itineraries(&self, user_id: &str) -> Result<Vec<Itinerary>> {
        self.pause().await;
        self.visible_itineraries(user_id).await
    }

    /// The union listing without the latency pause. Also feeds passport
    /// derivation, which must see the same trips the user sees.
    ///
    /// The user's own itineraries come first, then the demo block.
    pub(crate) async fn visible_itineraries(&self, user_id: &str) -> Result<Vec<Itinerary>> {
        let all: Vec<Itinerary> = self.load_collection(ITINERARIES_KEY).await?;

        let demo = self
            .demo_user_id()
            .filter(|demo| *demo != user_id)
            .map(str::to_string);
        let (mut visible, rest): (Vec<_>, Vec<_>) =
            all.into_iter().partition(|it| it.user_id == user_id);
        if let Some(demo) = demo {
            visible.extend(rest.into_iter().filter(|it| it.user_id == demo));
        }
        Ok(visible)
    }

    /// Returns a single itinerary by id regardless of owner, or `None`.
    pub async fn get_itinerary(&self, id: &str) -> Result<Option<Itinerary>> {
        self.pause().await;
        let all: Vec<Itinerary> = self.load_collection(ITINERARIES_KEY).await?;
        Ok(all.into_iter().find(|it| it.id == id))
    }

    /// Upserts the given itineraries into the collection by id. Existing
    /// records with matching ids are replaced in place; new ids are appended
    /// in the order given. Records not mentioned are untouched.
    pub async fn save_itineraries(&self, itineraries: &[Itinerary]) -> Result<()> {
        self.pause().await;
        let mut all: Vec<Itinerary> = self.load_collection(ITINERARIES_KEY).await?;

        for incoming in itineraries {
            match all.iter_mut().find(|it| it.id == incoming.id) {
                Some(existing) => *existing = incoming.clone(),
                None => all.push(incoming.clone()),
            }
        }

        self.save_collection(ITINERARIES_KEY, &all).await
    }

    /// Sets the status of one itinerary. Returns `true` if the id existed and
    /// was updated, `false` if no such itinerary is stored.
    pub async fn update_itinerary_status(
        &self,
        id: &str,
        status: ItineraryStatus,
    ) -> Result<bool> {
        self.pause().await;
        let mut all: Vec<Itinerary> = self.load_collection(ITINERARIES_KEY).await?;

        let Some(itinerary) = all.iter_mut().find(|it| it.id == id) else {
            return Ok(false);
        };
        itinerary.status = status;

        self.save_collection(ITINERARIES_KEY, &all).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use crate::errors::Result;
    use crate::models::ItineraryStatus;
    use crate::store::{Store, StoreOptions};
    use crate::test_utils::{setup_seeded_store, setup_test_db, test_itinerary};

    #[tokio::test]
    async fn test_get_itineraries_unions_demo_trips() -> Result<()> {
        let store = setup_seeded_store().await?;
        let own = test_itinerary("mine-1", "user-42", "Lisbon, Portugal");
        store.save_itineraries(&[own]).await?;

        let visible = store.get_itineraries("user-42").await?;
        assert!(visible.iter().any(|it| it.id == "mine-1"));
        // Demo history rides along for every user.
        assert!(visible.iter().any(|it| it.user_id == "user-1"));
        Ok(())
    }

    #[tokio::test]
    async fn test_listing_puts_own_trips_before_demo_block() -> Result<()> {
        let store = setup_seeded_store().await?;
        // Stored after the demo records, but listed first.
        store
            .save_itineraries(&[test_itinerary("mine-1", "user-42", "Lisbon, Portugal")])
            .await?;

        let visible = store.get_itineraries("user-42").await?;
        assert_eq!(visible[0].id, "mine-1");
        assert!(visible[1..].iter().all(|it| it.user_id == "user-1"));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_itineraries_without_demo_union() -> Result<()> {
        let db = setup_test_db().await?;
        let store = Store::with_options(
            db,
            StoreOptions {
                demo_user_id: None,
                ..StoreOptions::default()
            },
        );
        let seed = crate::config::seed::SeedData::embedded()?;
        store.initialize(&seed).await?;

        let visible = store.get_itineraries("user-42").await?;
        assert!(visible.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_save_itineraries_upserts_by_id() -> Result<()> {
        let store = setup_seeded_store().await?;
        let before = store.get_itineraries("user-1").await?.len();

        // Replacing an existing id must not duplicate the record.
        let mut paris = store.get_itinerary("1").await?.unwrap();
        paris.status = ItineraryStatus::Draft;
        store.save_itineraries(&[paris]).await?;

        let after = store.get_itineraries("user-1").await?;
        assert_eq!(after.len(), before);
        assert_eq!(
            after.iter().filter(|it| it.destination == "Paris, France").count(),
            1
        );
        assert_eq!(
            store.get_itinerary("1").await?.unwrap().status,
            ItineraryStatus::Draft
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_update_itinerary_status() -> Result<()> {
        let store = setup_seeded_store().await?;
        store
            .save_itineraries(&[test_itinerary("new-1", "user-42", "Lisbon, Portugal")])
            .await?;

        assert!(
            store
                .update_itinerary_status("new-1", ItineraryStatus::Confirmed)
                .await?
        );
        assert_eq!(
            store.get_itinerary("new-1").await?.unwrap().status,
            ItineraryStatus::Confirmed
        );

        assert!(
            !store
                .update_itinerary_status("no-such-id", ItineraryStatus::Confirmed)
                .await?
        );
        Ok(())
    }
}
