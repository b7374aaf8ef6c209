//! Unified error types and result handling for the `WanderGuide` data layer.

use thiserror::Error;

/// All errors the store and session layers can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or seed data could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// A store or session operation received invalid input
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of the rejected input
        message: String,
    },

    /// A mutation was attempted without an active session
    #[error("No user is logged in")]
    NotAuthenticated,

    /// Underlying storage failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A payload could not be serialized for storage
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
