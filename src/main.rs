//! Demo entry point: open the database, seed the record store and print a
//! short summary of what it holds.

use dotenvy::dotenv;
use std::path::Path;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wanderguide::config::database::{create_connection, create_tables};
use wanderguide::config::seed::SeedData;
use wanderguide::errors::Result;
use wanderguide::store::{Store, StoreOptions, DEFAULT_DEMO_USER_ID};

const SEED_FILE: &str = "seed.toml";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal if absent
    dotenv().ok();

    // 3. Load seed data: local seed.toml if present, otherwise the embedded copy
    let seed = if Path::new(SEED_FILE).exists() {
        info!(file = SEED_FILE, "Loading seed data from file");
        SeedData::from_file(SEED_FILE)?
    } else {
        SeedData::embedded()?
    };

    // 4. Open the database and make sure the storage table exists
    let db = create_connection().await?;
    create_tables(&db).await?;
    info!("Database initialized successfully");

    // 5. Build the store with demo-like latency and seed missing collections
    let store = Store::with_options(
        db,
        StoreOptions {
            latency: Duration::from_millis(300),
            ..StoreOptions::default()
        },
    );
    store.initialize(&seed).await?;

    // 6. Print a summary for the demo user
    let destinations = store.get_destinations().await?;
    let itineraries = store.get_itineraries(DEFAULT_DEMO_USER_ID).await?;
    let posts = store.get_community_posts().await?;
    let passport = store.get_passport(DEFAULT_DEMO_USER_ID).await?;

    info!(
        destinations = destinations.len(),
        itineraries = itineraries.len(),
        posts = posts.len(),
        "Store contents"
    );
    info!(
        passport_number = %passport.passport_number,
        stamps = passport.stamps.len(),
        badges = passport.badges.len(),
        "Demo user passport"
    );

    Ok(())
}
