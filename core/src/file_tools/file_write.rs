//! file_write: Overwrite an existing file
//!
//! Never creates: a missing file is reported as `NotFound`.

use std::fs::Metadata;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error::{StoreError, StoreResult};

/// Replace the content of an existing file
///
/// # Returns
/// * `Ok(Metadata)` - Metadata of the file after the overwrite
/// * `Err(StoreError::NotFound)` - No file at `path`
pub async fn file_write(path: &Path, content: &[u8]) -> StoreResult<Metadata> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .await
        .map_err(|e| StoreError::from_io(path, e))?;

    file.write_all(content).await?;
    file.flush().await?;

    Ok(file.metadata().await?)
}
