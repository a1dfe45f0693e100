//! Configuration module for the matching engine binary.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

use chrono::FixedOffset;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of the human-readable format
    pub log_json: bool,
    /// Number of sample profiles generated at startup
    pub sample_size: usize,
    /// Seed for the sample generator; random when absent
    pub sample_seed: Option<u64>,
    /// Fixed offset used to stamp messages and listings
    pub display_offset: FixedOffset,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let log_level = env::var("TEAMMATCH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = match env::var("TEAMMATCH_LOG_JSON") {
            Ok(raw) => parse_var::<bool>("TEAMMATCH_LOG_JSON", &raw)?,
            Err(_) => false,
        };

        let sample_size = match env::var("TEAMMATCH_SAMPLE_SIZE") {
            Ok(raw) => parse_var::<usize>("TEAMMATCH_SAMPLE_SIZE", &raw)?,
            Err(_) => 25,
        };

        let sample_seed = match env::var("TEAMMATCH_SAMPLE_SEED") {
            Ok(raw) => Some(parse_var::<u64>("TEAMMATCH_SAMPLE_SEED", &raw)?),
            Err(_) => None,
        };

        let offset_hours = match env::var("TEAMMATCH_UTC_OFFSET_HOURS") {
            Ok(raw) => parse_var::<i32>("TEAMMATCH_UTC_OFFSET_HOURS", &raw)?,
            Err(_) => 9,
        };
        let display_offset = offset_from_hours(offset_hours)?;

        Ok(Self {
            log_level,
            log_json,
            sample_size,
            sample_seed,
            display_offset,
        })
    }
}

/// Build a fixed UTC offset from whole hours.
pub fn offset_from_hours(hours: i32) -> Result<FixedOffset, AppError> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| AppError::Config(format!("UTC offset out of range: {} hours", hours)))
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Config(format!("Invalid {} value: {}", name, raw)))
}
