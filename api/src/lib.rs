//! fscrud API Module
//!
//! HTTP endpoints for the fscrud file service: one route per CRUD operation,
//! all keyed by the file name in the request path.

pub mod handlers;
pub mod models;
pub mod server;

pub use handlers::*;
pub use models::*;
pub use server::*;
