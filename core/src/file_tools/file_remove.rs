//! file_remove: Delete a single file

use std::path::Path;

use crate::error::{StoreError, StoreResult};

/// Remove the file at `path`
pub async fn file_remove(path: &Path) -> StoreResult<()> {
    tokio::fs::remove_file(path)
        .await
        .map_err(|e| StoreError::from_io(path, e))
}
