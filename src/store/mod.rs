//! In-memory session store.
//!
//! The session is the single owner of all state; nothing outlives it.

mod session;

pub use session::*;

use crate::config::Config;
use crate::errors::AppError;

/// Build a session and seed its roster with the configured number of sample profiles.
pub fn init_session(config: &Config) -> Result<Session, AppError> {
    let mut session = Session::new(config.display_offset);

    if config.sample_size > 0 {
        session.generate_sample_data(config.sample_size, config.sample_seed)?;
    }

    Ok(session)
}
