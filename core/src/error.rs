//! Storage errors
//!
//! Every variant renders as the plain-text body the API returns to clients,
//! so display strings are part of the wire format.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("create: file already exists: {0}")]
    AlreadyExists(String),

    #[error("invalid UTF-8 in file: {0}")]
    InvalidUtf8(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Classify an I/O error raised while operating on `path`.
    ///
    /// `NotFound` and `AlreadyExists` kinds become the named variants so
    /// callers can match on them; everything else stays `Io`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(path.display().to_string()),
            io::ErrorKind::AlreadyExists => {
                StoreError::AlreadyExists(path.display().to_string())
            }
            _ => StoreError::Io(err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, StoreError::AlreadyExists(_))
    }
}
