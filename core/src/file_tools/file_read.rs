//! file_read: Read entire file into memory
//!
//! Reads file as UTF-8 string. Returns error if file does not exist.

use std::fs::Metadata;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::error::{StoreError, StoreResult};

/// Read entire file into a UTF-8 string
///
/// Content and metadata come from the same open handle.
pub async fn file_read(path: &Path) -> StoreResult<(String, Metadata)> {
    let mut file = File::open(path)
        .await
        .map_err(|e| StoreError::from_io(path, e))?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).await?;
    let metadata = file.metadata().await?;

    let content = String::from_utf8(bytes)
        .map_err(|_| StoreError::InvalidUtf8(path.display().to_string()))?;

    Ok((content, metadata))
}
