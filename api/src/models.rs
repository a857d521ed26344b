//! API Models Module
//!
//! Configuration for the HTTP server.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 1234;
pub const DEFAULT_STORE: &str = "/tmp/fscrud";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Storage root directory
    pub store: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            store: PathBuf::from(DEFAULT_STORE),
        }
    }
}
