//! Tracing subscriber setup
//!
//! Logs go to stderr. Filtering follows RUST_LOG, defaulting to `info`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::{Error, Result};

/// Default filter when RUST_LOG is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Build the env filter from RUST_LOG, falling back to [`DEFAULT_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Fails if one is already set.
pub fn init() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter())
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
