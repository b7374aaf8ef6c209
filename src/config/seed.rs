//! Seed data loading from seed.toml
//!
//! This module provides the fixed record sets that the store writes to
//! persistent storage on first run. The canonical copy ships as `seed.toml`
//! at the repository root and is also baked into the binary, so library
//! consumers and tests never depend on the working directory.

use crate::errors::{Error, Result};
use crate::models::{CommunityPost, Destination, Itinerary, Request};
use serde::Deserialize;
use std::path::Path;

/// The fixed initial record sets written to storage on first run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    /// Destination catalogue (immutable reference data)
    pub destinations: Vec<Destination>,
    /// Demo itinerary history, owned by the demo user
    pub itineraries: Vec<Itinerary>,
    /// Pre-existing itinerary requests
    pub requests: Vec<Request>,
    /// Community feed starter posts
    pub community_posts: Vec<CommunityPost>,
}

impl SeedData {
    /// Loads seed data from a TOML file.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML syntax is invalid
    /// - Required fields are missing
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
            message: format!("Failed to read seed file: {e}"),
        })?;

        toml::from_str(&contents).map_err(|e| Error::Config {
            message: format!("Failed to parse seed file: {e}"),
        })
    }

    /// Returns the seed data compiled into the binary.
    ///
    /// # Errors
    /// Returns `Error::Config` if the embedded copy fails to parse, which
    /// indicates a build-time defect rather than a runtime condition.
    pub fn embedded() -> Result<Self> {
        toml::from_str(include_str!("../../seed.toml")).map_err(|e| Error::Config {
            message: format!("Failed to parse embedded seed data: {e}"),
        })
    }
}
