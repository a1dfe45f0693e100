//! Team Matching Engine demo binary.
//!
//! Builds a session from the environment, runs a default search and prints the session
//! snapshot as JSON.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use teammatch::config::Config;
use teammatch::search::{aggregate_by, Dimension, SearchFilters};
use teammatch::store;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting Team Matching Engine");
    tracing::info!("Sample size: {}", config.sample_size);
    tracing::info!("Sample seed: {:?}", config.sample_seed);
    tracing::info!("Display offset: {}", config.display_offset);

    let session = store::init_session(&config)?;

    let matches = session.search(&SearchFilters::default(), false);
    tracing::info!(
        "{} of {} profiles are discoverable",
        matches.len(),
        session.roster().len()
    );

    for (college, count) in aggregate_by(matches.iter().copied(), Dimension::College) {
        tracing::info!("{}: {}", college, count);
    }
    for (interest, count) in aggregate_by(matches.iter().copied(), Dimension::Interest) {
        tracing::info!("{}: {}", interest, count);
    }

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);

    Ok(())
}
