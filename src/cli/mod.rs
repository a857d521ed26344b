//! CLI module
//!
//! Provides:
//! - Argument parsing (`--store`, `--port`, `--host`)
//! - Storage root resolution (flag → env → default)
//! - Logging initialization

pub mod args;
pub mod logging;
pub mod store_root;

// Re-exports
pub use args::{parse_args, Args};
pub use store_root::{resolve_store_root, STORE_ENV};

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Args(#[from] clap::Error),

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Exit codes (deterministic)
pub const EXIT_FAILURE: i32 = 1;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
