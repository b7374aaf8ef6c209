//! Session and identity holder.
//!
//! A [`Session`] wraps a [`Store`] and mirrors the logged-in user record
//! under its own storage key. Login always mints a fresh identity (this is a
//! demo: there is no credential check and no account lookup), logout removes
//! only the session record, so everything the user created stays in place for
//! the next login.

use crate::errors::{Error, Result};
use crate::models::User;
use crate::store::{Store, SESSION_KEY};
use tracing::{info, warn};
use uuid::Uuid;

/// The active session over a record store.
#[derive(Debug)]
pub struct Session {
    store: Store,
    user: Option<User>,
}

impl Session {
    /// Restores the session from storage. A stored record that no longer
    /// parses is removed and the session starts unauthenticated.
    pub async fn load(store: Store) -> Result<Self> {
        let user = match store.read_raw(SESSION_KEY).await? {
            None => None,
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    warn!(error = %err, "Discarding corrupt session record");
                    store.delete_raw(SESSION_KEY).await?;
                    None
                }
            },
        };
        Ok(Self { store, user })
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Logs in as a brand-new user with the given name and email. Any
    /// previous session record is replaced; records owned by earlier
    /// identities are untouched.
    pub async fn login(&mut self, name: &str, email: &str) -> Result<User> {
        self.store.pause().await;

        let user = User {
            id: format!("user-{}", Uuid::new_v4()),
            name: name.to_string(),
            email: email.to_string(),
            role: "user".to_string(),
            avatar: None,
            favorites: Vec::new(),
            preferences: None,
            bio: None,
            location: None,
        };

        self.persist(&user).await?;
        info!(user_id = %user.id, "Logged in");
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Clears the session record. The user's itineraries, requests, posts and
    /// passport all remain in storage.
    pub async fn logout(&mut self) -> Result<()> {
        self.store.delete_raw(SESSION_KEY).await?;
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "Logged out");
        }
        Ok(())
    }

    /// Toggles a destination in the user's favorites list and persists the
    /// updated record. Returns the record after the toggle.
    pub async fn toggle_favorite(&mut self, destination_id: i64) -> Result<User> {
        self.store.pause().await;
        let Some(user) = self.user.as_mut() else {
            return Err(Error::NotAuthenticated);
        };

        if let Some(pos) = user.favorites.iter().position(|&id| id == destination_id) {
            user.favorites.remove(pos);
        } else {
            user.favorites.push(destination_id);
        }

        let snapshot = user.clone();
        self.persist(&snapshot).await?;
        Ok(snapshot)
    }

    /// Applies profile or preference edits to the user record and persists
    /// it. The user id is fixed for the lifetime of the session and survives
    /// any edit the closure makes.
    pub async fn update_user<F>(&mut self, apply: F) -> Result<User>
    where
        F: FnOnce(&mut User),
    {
        self.store.pause().await;
        let Some(user) = self.user.as_mut() else {
            return Err(Error::NotAuthenticated);
        };

        let id = user.id.clone();
        apply(user);
        user.id = id;

        let snapshot = user.clone();
        self.persist(&snapshot).await?;
        Ok(snapshot)
    }

    async fn persist(&self, user: &User) -> Result<()> {
        self.store
            .write_raw(SESSION_KEY, serde_json::to_string(user)?)
            .await
    }
}
