//! fscrud Core Module
//!
//! Storage layer for the fscrud file service. Resolves resource names against
//! a storage root and performs the create/read/update/delete operations on the
//! real filesystem.

pub mod error;
pub mod file_tools;
pub mod models;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::{FileResponse, DELETE_MESSAGE};
pub use store::FileStore;
