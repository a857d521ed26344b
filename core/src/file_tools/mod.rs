//! File tools: one filesystem operation per function
//!
//! All operations use the REAL filesystem — no mocks, no in-memory FS.
//! Paths are expected to be already resolved against the storage root.

mod file_create;
mod file_read;
mod file_remove;
mod file_write;

pub use file_create::file_create;
pub use file_read::file_read;
pub use file_remove::file_remove;
pub use file_write::file_write;
