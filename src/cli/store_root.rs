//! Storage root resolution
//!
//! Priority:
//! 1. --store <path> flag (highest priority)
//! 2. $FSCRUD_STORE env var
//! 3. /tmp/fscrud (default)

use fscrud_api::DEFAULT_STORE;
use std::path::PathBuf;

/// Environment variable consulted when `--store` is not given
pub const STORE_ENV: &str = "FSCRUD_STORE";

/// Resolve the storage root from the flag and the process environment
pub fn resolve_store_root(explicit: Option<PathBuf>) -> PathBuf {
    resolve_store_root_from(explicit, std::env::var(STORE_ENV).ok())
}

/// Resolve the storage root from an explicit flag value and an env value
///
/// An empty env value counts as unset. The directory does not have to exist;
/// the server creates it on startup.
pub fn resolve_store_root_from(explicit: Option<PathBuf>, env: Option<String>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    match env {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_STORE),
    }
}
