//! Travel passport derivation.
//!
//! A passport is derived state: every fetch reconciles the stored passport
//! against the user's visible itineraries, then persists the result. Stamps
//! only ever accumulate and upgrade; removing an itinerary never removes the
//! stamp it minted.

use super::Store;
use crate::errors::Result;
use crate::models::{Badge, ItineraryStatus, Passport, Stamp, StampStatus};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Nationality printed in every passport.
const NATIONALITY: &str = "Global Citizen";
/// Icon used for newly minted stamps.
const DEFAULT_STAMP_ICON: &str = "✈️";

/// Passport numbers look like `WG-3F9A1C`.
fn generate_passport_number() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("WG-{}", id[..6].to_uppercase())
}

/// Stamps are keyed by the city part of the destination: everything before
/// the first comma.
fn stamp_key(destination: &str) -> &str {
    destination.split(',').next().unwrap_or(destination).trim()
}

/// Recomputes the badge list from the stamp count. Unlock times carry over
/// from `previous` so a badge's date does not drift on later fetches.
fn badges_for(stamp_count: usize, previous: &[Badge], now: DateTime<Utc>) -> Vec<Badge> {
    let unlocked_at = |id: &str| {
        previous
            .iter()
            .find(|b| b.id == id)
            .and_then(|b| b.unlocked_at)
            .or(Some(now))
    };

    let mut badges = Vec::new();
    if stamp_count >= 1 {
        badges.push(Badge {
            id: "badge-first-trip".to_string(),
            name: "First Steps".to_string(),
            description: "Booked your first trip with WanderGuide.".to_string(),
            icon: "🌍".to_string(),
            unlocked_at: unlocked_at("badge-first-trip"),
        });
    }
    if stamp_count >= 3 {
        badges.push(Badge {
            id: "badge-explorer".to_string(),
            name: "Explorer".to_string(),
            description: "Collected 3+ destination stamps.".to_string(),
            icon: "compass".to_string(),
            unlocked_at: unlocked_at("badge-explorer"),
        });
    }
    badges
}

impl Store {
    /// Returns `user_id`'s passport, creating it on first access and folding
    /// in stamps for every confirmed or completed itinerary the user can see.
    ///
    /// Stamp upgrades are monotonic: a `completed` stamp never drops back to
    /// `planned`, even if its itinerary later leaves the completed status.
    pub async fn get_passport(&self, user_id: &str) -> Result<Passport> {
        self.pause().await;

        let now = Utc::now();
        let mut passports = self.load_passports().await?;
        let mut passport = passports.remove(user_id).unwrap_or_else(|| Passport {
            user_id: user_id.to_string(),
            passport_number: generate_passport_number(),
            nationality: NATIONALITY.to_string(),
            issued_date: now,
            stamps: Vec::new(),
            badges: Vec::new(),
        });

        for itinerary in self.visible_itineraries(user_id).await? {
            let stamp_status = match itinerary.status {
                ItineraryStatus::Completed => StampStatus::Completed,
                ItineraryStatus::Confirmed => StampStatus::Planned,
                ItineraryStatus::Draft | ItineraryStatus::Pending => continue,
            };

            let city = stamp_key(&itinerary.destination);
            match passport.stamps.iter_mut().find(|s| s.destination_name == city) {
                Some(stamp) => {
                    if stamp.status == StampStatus::Planned && stamp_status == StampStatus::Completed
                    {
                        stamp.status = StampStatus::Completed;
                    }
                }
                None => passport.stamps.push(Stamp {
                    id: Uuid::new_v4().to_string(),
                    destination_name: city.to_string(),
                    date: itinerary.end_date.clone(),
                    icon: DEFAULT_STAMP_ICON.to_string(),
                    status: stamp_status,
                }),
            }
        }

        passport.badges = badges_for(passport.stamps.len(), &passport.badges, now);

        passports.insert(user_id.to_string(), passport.clone());
        self.save_passports(&passports).await?;
        Ok(passport)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::seed::SeedData;
    use crate::store::{Store, StoreOptions};
    use crate::test_utils::{setup_seeded_store, setup_test_db, test_itinerary};

    /// Seeded store with the demo union disabled, so each test user starts
    /// from zero stamps.
    async fn isolated_store() -> Result<Store> {
        let db = setup_test_db().await?;
        let store = Store::with_options(
            db,
            StoreOptions {
                demo_user_id: None,
                ..StoreOptions::default()
            },
        );
        store.initialize(&SeedData::embedded()?).await?;
        Ok(store)
    }

    #[test]
    fn test_stamp_key_truncates_at_first_comma() {
        assert_eq!(stamp_key("Paris, France"), "Paris");
        assert_eq!(stamp_key("Maldives"), "Maldives");
        assert_eq!(stamp_key("Washington, D.C., USA"), "Washington");
    }

    #[test]
    fn test_passport_number_shape() {
        let number = generate_passport_number();
        assert!(number.starts_with("WG-"));
        assert_eq!(number.len(), 9);
        assert_eq!(number[3..].to_uppercase(), number[3..]);
    }

    #[tokio::test]
    async fn test_passport_created_once_and_persisted() -> Result<()> {
        let store = isolated_store().await?;

        let first = store.get_passport("user-42").await?;
        assert_eq!(first.nationality, "Global Citizen");
        assert!(first.stamps.is_empty());
        assert!(first.badges.is_empty());

        let second = store.get_passport("user-42").await?;
        assert_eq!(first.passport_number, second.passport_number);
        assert_eq!(first.issued_date, second.issued_date);
        Ok(())
    }

    #[tokio::test]
    async fn test_demo_user_stamps_and_badges() -> Result<()> {
        let store = setup_seeded_store().await?;

        // Seven seeded completed trips, all distinct cities.
        let passport = store.get_passport("user-1").await?;
        assert_eq!(passport.stamps.len(), 7);
        assert!(passport
            .stamps
            .iter()
            .all(|s| s.status == StampStatus::Completed));
        assert!(passport
            .stamps
            .iter()
            .any(|s| s.destination_name == "Paris"));

        let badge_ids: Vec<&str> = passport.badges.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(badge_ids, vec!["badge-first-trip", "badge-explorer"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_one_stamp_per_city() -> Result<()> {
        let store = isolated_store().await?;
        // Distinct suffixes collapse to one stamp: keying stops at the comma.
        let mut france = test_itinerary("p-1", "user-42", "Paris, France");
        france.status = ItineraryStatus::Completed;
        let mut texas = test_itinerary("p-2", "user-42", "Paris, Texas");
        texas.status = ItineraryStatus::Completed;
        store.save_itineraries(&[france, texas]).await?;

        let passport = store.get_passport("user-42").await?;
        assert_eq!(passport.stamps.len(), 1);
        assert_eq!(passport.stamps[0].destination_name, "Paris");
        Ok(())
    }

    #[tokio::test]
    async fn test_stamp_keeps_its_original_date_across_upgrade() -> Result<()> {
        let store = isolated_store().await?;
        let mut planned = test_itinerary("d-1", "user-42", "Paris, France");
        planned.status = ItineraryStatus::Confirmed;
        planned.end_date = "2025-01-01".to_string();
        store.save_itineraries(&[planned]).await?;

        let passport = store.get_passport("user-42").await?;
        assert_eq!(passport.stamps[0].date, "2025-01-01");

        let mut completing = test_itinerary("d-2", "user-42", "Paris, France");
        completing.status = ItineraryStatus::Completed;
        completing.end_date = "2026-12-31".to_string();
        store.save_itineraries(&[completing]).await?;

        // The upgrade changes only the status; the minting date sticks.
        let passport = store.get_passport("user-42").await?;
        assert_eq!(passport.stamps[0].status, StampStatus::Completed);
        assert_eq!(passport.stamps[0].date, "2025-01-01");
        Ok(())
    }

    #[tokio::test]
    async fn test_stamp_status_is_monotonic() -> Result<()> {
        let store = isolated_store().await?;
        let mut trip = test_itinerary("t-1", "user-42", "Kyoto, Japan");
        trip.status = ItineraryStatus::Confirmed;
        store.save_itineraries(&[trip]).await?;

        let passport = store.get_passport("user-42").await?;
        assert_eq!(passport.stamps[0].status, StampStatus::Planned);

        store
            .update_itinerary_status("t-1", ItineraryStatus::Completed)
            .await?;
        let passport = store.get_passport("user-42").await?;
        assert_eq!(passport.stamps[0].status, StampStatus::Completed);

        // Moving the itinerary back does not demote the stamp.
        store
            .update_itinerary_status("t-1", ItineraryStatus::Confirmed)
            .await?;
        let passport = store.get_passport("user-42").await?;
        assert_eq!(passport.stamps[0].status, StampStatus::Completed);
        Ok(())
    }

    #[tokio::test]
    async fn test_draft_and_pending_mint_no_stamps() -> Result<()> {
        let store = isolated_store().await?;
        let mut draft = test_itinerary("d-1", "user-42", "Goa, India");
        draft.status = ItineraryStatus::Draft;
        let mut pending = test_itinerary("d-2", "user-42", "Pune, India");
        pending.status = ItineraryStatus::Pending;
        store.save_itineraries(&[draft, pending]).await?;

        let passport = store.get_passport("user-42").await?;
        assert!(passport.stamps.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_badge_thresholds() -> Result<()> {
        let store = isolated_store().await?;
        let mut trip = test_itinerary("b-1", "user-42", "Goa, India");
        trip.status = ItineraryStatus::Completed;
        store.save_itineraries(&[trip]).await?;

        let passport = store.get_passport("user-42").await?;
        assert_eq!(passport.stamps.len(), 1);
        assert_eq!(passport.badges.len(), 1);
        assert_eq!(passport.badges[0].id, "badge-first-trip");
        let first_unlock = passport.badges[0].unlocked_at;

        let mut kyoto = test_itinerary("b-2", "user-42", "Kyoto, Japan");
        kyoto.status = ItineraryStatus::Completed;
        let mut pune = test_itinerary("b-3", "user-42", "Pune, India");
        pune.status = ItineraryStatus::Completed;
        store.save_itineraries(&[kyoto, pune]).await?;

        let passport = store.get_passport("user-42").await?;
        assert_eq!(passport.badges.len(), 2);
        assert_eq!(passport.badges[1].id, "badge-explorer");
        // The first badge keeps its original unlock time.
        assert_eq!(passport.badges[0].unlocked_at, first_unlock);
        Ok(())
    }

    #[tokio::test]
    async fn test_stamps_survive_itinerary_removal() -> Result<()> {
        let store = isolated_store().await?;
        let mut trip = test_itinerary("s-1", "user-42", "Goa, India");
        trip.status = ItineraryStatus::Completed;
        store.save_itineraries(&[trip]).await?;
        store.get_passport("user-42").await?;

        // Wipe the itinerary collection entirely.
        store
            .save_collection(crate::store::ITINERARIES_KEY, &Vec::<crate::models::Itinerary>::new())
            .await?;

        let passport = store.get_passport("user-42").await?;
        assert_eq!(passport.stamps.len(), 1);
        assert_eq!(passport.stamps[0].destination_name, "Goa");
        Ok(())
    }
}
