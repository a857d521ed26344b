//! file_create: Create file if not exists
//!
//! Fails if file already exists (no overwrite). The existence check and the
//! create happen in a single open call.

use std::fs::Metadata;
use std::io;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error::{StoreError, StoreResult};

/// Create a new file with content
///
/// # Returns
/// * `Ok(Metadata)` - Metadata of the file just written
/// * `Err(StoreError::AlreadyExists)` - A file is already present at `path`
/// * `Err(StoreError::Io)` - Anything else, including a missing parent directory
pub async fn file_create(path: &Path, content: &[u8]) -> StoreResult<Metadata> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
        .map_err(|e| match e.kind() {
            // ENOENT here means the parent is missing, not the file
            io::ErrorKind::NotFound => StoreError::Io(e),
            _ => StoreError::from_io(path, e),
        })?;

    file.write_all(content).await?;
    file.flush().await?;

    Ok(file.metadata().await?)
}
