//! Domain model types for the `WanderGuide` data layer.
//!
//! These structs describe the shapes persisted as JSON payloads in the record
//! store. Field names serialize in camelCase so the stored documents match the
//! layout the original web client wrote, and enum values serialize as the
//! lowercase/kebab-case strings the client used for statuses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A curated travel destination. Reference data: seeded once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Unique identifier within the destination catalogue
    pub id: i64,
    /// Display name, usually "City, Country"
    pub name: String,
    /// Hero image URL
    pub image: String,
    /// Average review rating
    pub rating: f64,
    /// Number of reviews behind the rating
    pub reviews: i64,
    /// Display price label (currency formatting varies by market)
    pub price: String,
    /// Catalogue category (e.g. "Beach", "Cultural")
    pub category: String,
    /// Free-form tags shown as chips
    pub tags: Vec<String>,
    /// Optional marketing blurb
    pub description: Option<String>,
    /// International vs. domestic grouping
    pub location_type: Option<LocationType>,
    /// Optional sample multi-day plan
    pub days: Option<Vec<ItineraryDay>>,
}

/// Whether a destination is international or domestic relative to the
/// product's home market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    International,
    National,
}

/// One day of an itinerary or sample plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    /// 1-based day number, sequential within the plan
    pub day: u32,
    /// Display label ("Day 1", "December 15", ...)
    pub date: String,
    pub title: String,
    pub activities: Vec<ItineraryActivity>,
}

/// A single scheduled activity within a day. Leaf value object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryActivity {
    /// Time-of-day label: "Morning", "Afternoon" or "Evening"
    pub time: String,
    /// Icon tag rendered by the client
    pub icon: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub location: Option<String>,
    pub tips: Option<String>,
}

/// Workflow status of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItineraryStatus {
    Draft,
    Pending,
    Confirmed,
    Completed,
}

/// A generated day-by-day trip plan owned by a user.
///
/// `destination` is free text, not a foreign key into the destination
/// catalogue. Start and end dates are stored as strings and are not validated
/// as calendar dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// Destination as free text, e.g. "Paris, France"
    pub destination: String,
    pub hero_image: String,
    pub start_date: String,
    pub end_date: String,
    pub status: ItineraryStatus,
    pub price: Option<f64>,
    #[serde(default)]
    pub days: Vec<ItineraryDay>,
}

/// Contact snapshot embedded in a request at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestContact {
    pub name: String,
    pub email: String,
}

/// Triage priority assigned to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// Processing status of a request. Mutated by an administrative actor;
/// request history is append-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// A user-submitted custom itinerary request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// Contact snapshot taken at submission time
    pub user: RequestContact,
    pub destination: String,
    pub start_date: String,
    /// Requested trip length in days
    pub days: u32,
    /// Budget as entered by the user, e.g. "$5000"
    pub budget: String,
    pub mobile: String,
    pub is_whatsapp: bool,
    /// Set once an itinerary has been generated for this request
    pub generated_itinerary_id: Option<String>,
    pub priority: RequestPriority,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

/// A comment on a community post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A post in the community feed. Posts are never edited or deleted; likes,
/// saves and comments are appended over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: String,
    pub user_id: String,
    /// Author snapshot taken at posting time
    pub user_name: String,
    pub user_avatar: Option<String>,
    /// Destination this post is about, as a plain tag
    pub destination_tag: String,
    pub content: String,
    pub image: Option<String>,
    /// Ids of users who liked the post
    #[serde(default)]
    pub likes: Vec<String>,
    /// Ids of users who saved the post
    #[serde(default)]
    pub saved_by: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

/// Status of a passport stamp, mirroring the most-advanced itinerary status
/// observed for the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StampStatus {
    Planned,
    Completed,
}

/// A passport entry for one visited or planned destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stamp {
    pub id: String,
    /// Itinerary destination truncated at the first comma
    pub destination_name: String,
    /// Stamp date, equal to the originating itinerary's end date
    pub date: String,
    pub icon: String,
    pub status: StampStatus,
}

/// An achievement unlocked purely by stamp count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// A user's travel passport. Derived from itinerary state on every fetch and
/// persisted as a cache; stamps survive even if their itineraries disappear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passport {
    pub user_id: String,
    /// Generated once, on first access
    pub passport_number: String,
    pub nationality: String,
    pub issued_date: DateTime<Utc>,
    #[serde(default)]
    pub stamps: Vec<Stamp>,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

/// Display currency for prices and budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    USD,
    INR,
    EUR,
}

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
}

/// Notification channel opt-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub whatsapp: bool,
    pub marketing: bool,
}

/// How the user prefers to travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelStyle {
    Relaxed,
    Adventure,
    Balanced,
}

/// Self-reported travel frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelFrequency {
    Occasional,
    Frequent,
}

/// Trip-related preferences collected in settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPreferences {
    #[serde(default)]
    pub dietary: Vec<String>,
    pub travel_style: TravelStyle,
    pub frequency: Option<TravelFrequency>,
}

/// User preferences edited through the settings form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub currency: Currency,
    pub language: Language,
    pub notifications: NotificationSettings,
    pub travel: TravelPreferences,
}

/// The session user record. Created at login, updated via the settings and
/// profile forms, cleared from the session at logout (the persisted mirror is
/// removed, owned records remain).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Always "user" in this demo; kept for parity with the admin surface
    pub role: String,
    pub avatar: Option<String>,
    /// Favorite destination ids
    #[serde(default)]
    pub favorites: Vec<i64>,
    pub preferences: Option<UserPreferences>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ItineraryStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
        assert_eq!(
            serde_json::to_string(&RequestStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::to_string(&StampStatus::Planned).unwrap(),
            "\"planned\""
        );
        assert_eq!(
            serde_json::from_str::<RequestPriority>("\"high\"").unwrap(),
            RequestPriority::High
        );
    }

    #[test]
    fn test_itinerary_wire_format_is_camel_case() {
        let itinerary = Itinerary {
            id: "1".to_string(),
            user_id: "user-1".to_string(),
            destination: "Paris, France".to_string(),
            hero_image: "https://example.com/paris.jpg".to_string(),
            start_date: "2024-03-10".to_string(),
            end_date: "2024-03-15".to_string(),
            status: ItineraryStatus::Completed,
            price: Some(25000.0),
            days: vec![],
        };

        let json = serde_json::to_string(&itinerary).unwrap();
        assert!(json.contains("\"userId\":\"user-1\""));
        assert!(json.contains("\"heroImage\""));
        assert!(json.contains("\"startDate\":\"2024-03-10\""));
        assert!(json.contains("\"status\":\"completed\""));
    }

    #[test]
    fn test_post_tolerates_missing_collections() {
        // Older stored posts may predate the comments/savedBy fields.
        let json = r#"{
            "id": "post-1",
            "userId": "user-sarah",
            "userName": "Sarah Mitchell",
            "userAvatar": null,
            "destinationTag": "Santorini",
            "content": "Sunset in Oia!",
            "image": null,
            "likes": ["user-1"],
            "createdAt": "2024-12-15T18:30:00Z"
        }"#;

        let post: CommunityPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.likes, vec!["user-1".to_string()]);
        assert!(post.saved_by.is_empty());
        assert!(post.comments.is_empty());
    }
}
