//! fscrud: text files over HTTP
//!
//! The binary wires CLI flags into an [`fscrud_api::ApiConfig`] and runs the
//! API server. Storage lives in `fscrud-core`, routing in `fscrud-api`.

pub mod cli;

pub use fscrud_api::{ApiConfig, ApiServer};
pub use fscrud_core::{FileResponse, FileStore, StoreError};
