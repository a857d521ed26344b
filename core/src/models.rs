//! Response models shared by the store and the HTTP layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::Metadata;
use std::path::Path;

use crate::error::StoreResult;

/// Plain-text confirmation returned after a successful delete
pub const DELETE_MESSAGE: &str = "delete: successfully removed file";

/// JSON representation of a stored file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileResponse {
    /// Name and extension, as given in the request path
    pub name: String,
    /// Text content
    pub content: String,
    /// Absolute path on disk
    pub path: String,
    /// Length in bytes
    pub size: u64,
    /// Modification time
    pub time: DateTime<Utc>,
}

impl FileResponse {
    /// Build a response from metadata observed for the file at `path`.
    pub fn from_metadata(
        name: &str,
        content: String,
        path: &Path,
        metadata: &Metadata,
    ) -> StoreResult<Self> {
        let modified = metadata.modified()?;
        Ok(Self {
            name: name.to_string(),
            content,
            path: path.display().to_string(),
            size: metadata.len(),
            time: DateTime::<Utc>::from(modified),
        })
    }
}
