//! File store
//!
//! Maps resource names onto files under a storage root. A name is joined
//! verbatim onto the root; there is no traversal protection beyond that.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::StoreResult;
use crate::file_tools::{file_create, file_read, file_remove, file_write};
use crate::models::FileResponse;

/// Flat file store rooted at a single directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store over `root`. Nothing is touched on disk until `init`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage root as configured
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensure the storage root exists
    ///
    /// An existing root is left as is.
    pub async fn init(&self) -> StoreResult<()> {
        if tokio::fs::try_exists(&self.root).await? {
            debug!("Storage root already exists: {}", self.root.display());
            return Ok(());
        }

        tokio::fs::create_dir_all(&self.root).await?;
        info!("Created storage root: {}", self.root.display());
        Ok(())
    }

    /// Absolute path for a resource name
    pub fn resolve(&self, name: &str) -> StoreResult<PathBuf> {
        Ok(std::path::absolute(self.root.join(name))?)
    }

    /// Create a new file; fails if one already exists under `name`
    pub async fn create(&self, name: &str, content: &str) -> StoreResult<FileResponse> {
        debug!("Creating file: {}", name);
        let path = self.resolve(name)?;

        let metadata = file_create(&path, content.as_bytes())
            .await
            .inspect_err(|e| warn!("Failed to create file {}: {}", name, e))?;

        FileResponse::from_metadata(name, content.to_string(), &path, &metadata)
    }

    /// Read a file's content and metadata
    pub async fn read(&self, name: &str) -> StoreResult<FileResponse> {
        debug!("Reading file: {}", name);
        let path = self.resolve(name)?;

        let (content, metadata) = file_read(&path)
            .await
            .inspect_err(|e| warn!("Failed to read file {}: {}", name, e))?;

        FileResponse::from_metadata(name, content, &path, &metadata)
    }

    /// Overwrite an existing file; fails if there is nothing to update
    pub async fn update(&self, name: &str, content: &str) -> StoreResult<FileResponse> {
        debug!("Updating file: {}", name);
        let path = self.resolve(name)?;

        let metadata = file_write(&path, content.as_bytes())
            .await
            .inspect_err(|e| warn!("Failed to update file {}: {}", name, e))?;

        FileResponse::from_metadata(name, content.to_string(), &path, &metadata)
    }

    /// Remove a file
    pub async fn delete(&self, name: &str) -> StoreResult<()> {
        debug!("Deleting file: {}", name);
        let path = self.resolve(name)?;

        file_remove(&path)
            .await
            .inspect_err(|e| warn!("Failed to delete file {}: {}", name, e))
    }
}
