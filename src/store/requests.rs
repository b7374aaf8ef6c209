//! Custom itinerary request operations.
//!
//! Requests are append-only: users submit them, an administrative surface
//! advances their status. Ids and timestamps are assigned here, never by the
//! caller.

use super::{Store, REQUESTS_KEY};
use crate::errors::{Error, Result};
use crate::models::{Request, RequestContact, RequestPriority, RequestStatus};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// Caller-supplied fields for a new request. The store fills in the id,
/// status and creation time.
#[derive(Debug, Clone)]
pub struct NewRequest {
    pub user_id: String,
    pub user: RequestContact,
    pub destination: String,
    pub start_date: String,
    pub days: u32,
    pub budget: String,
    pub mobile: String,
    pub is_whatsapp: bool,
    pub priority: RequestPriority,
}

impl Store {
    /// Returns every stored request, oldest first.
    pub async fn get_requests(&self) -> Result<Vec<Request>> {
        self.pause().await;
        self.load_collection(REQUESTS_KEY).await
    }

    /// Returns the requests submitted by `user_id`, oldest first.
    pub async fn get_requests_for_user(&self, user_id: &str) -> Result<Vec<Request>> {
        self.pause().await;
        let all: Vec<Request> = self.load_collection(REQUESTS_KEY).await?;
        Ok(all.into_iter().filter(|r| r.user_id == user_id).collect())
    }

    /// Appends a new request with a generated id, `Pending` status and the
    /// current time. Returns the stored record.
    pub async fn create_request(&self, new: NewRequest) -> Result<Request> {
        self.pause().await;

        if new.destination.trim().is_empty() {
            return Err(Error::Validation {
                message: "Request destination must not be empty".to_string(),
            });
        }
        if new.days == 0 {
            return Err(Error::Validation {
                message: "Request must cover at least one day".to_string(),
            });
        }

        let request = Request {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            user: new.user,
            destination: new.destination,
            start_date: new.start_date,
            days: new.days,
            budget: new.budget,
            mobile: new.mobile,
            is_whatsapp: new.is_whatsapp,
            generated_itinerary_id: None,
            priority: new.priority,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        };

        let mut all: Vec<Request> = self.load_collection(REQUESTS_KEY).await?;
        all.push(request.clone());
        self.save_collection(REQUESTS_KEY, &all).await?;

        info!(
            request_id = %request.id,
            destination = %request.destination,
            "Created itinerary request"
        );
        Ok(request)
    }

    /// Sets the status of one request, optionally linking the itinerary
    /// generated for it. Returns `true` if the id existed.
    pub async fn update_request_status(
        &self,
        id: &str,
        status: RequestStatus,
        generated_itinerary_id: Option<String>,
    ) -> Result<bool> {
        self.pause().await;
        let mut all: Vec<Request> = self.load_collection(REQUESTS_KEY).await?;

        let Some(request) = all.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };
        request.status = status;
        if generated_itinerary_id.is_some() {
            request.generated_itinerary_id = generated_itinerary_id;
        }

        self.save_collection(REQUESTS_KEY, &all).await?;
        Ok(true)
    }
}
