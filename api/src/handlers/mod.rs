//! API Handlers Module
//!
//! This module contains the request handlers for the API system.
//! Every store failure is answered with `400 Bad Request` and the error text
//! as a plain-text body.

use axum::{
    debug_handler,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use fscrud_core::{FileResponse, FileStore, StoreError, DELETE_MESSAGE};

/// Represents the state of the API server
pub struct ApiState {
    /// File store all handlers operate on
    pub store: FileStore,
}

/// Store failure rendered as an HTTP response
#[derive(Debug)]
pub struct ApiError(pub StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
    }
}

/// Create a file from the request body
#[debug_handler]
pub async fn create_file(
    State(state): State<Arc<ApiState>>,
    Path(name): Path<String>,
    body: String,
) -> Result<Json<FileResponse>, ApiError> {
    tracing::debug!("Create request: {}", name);
    Ok(Json(state.store.create(&name, &body).await?))
}

/// Read a file
#[debug_handler]
pub async fn read_file(
    State(state): State<Arc<ApiState>>,
    Path(name): Path<String>,
) -> Result<Json<FileResponse>, ApiError> {
    tracing::debug!("Read request: {}", name);
    Ok(Json(state.store.read(&name).await?))
}

/// Overwrite an existing file with the request body
#[debug_handler]
pub async fn update_file(
    State(state): State<Arc<ApiState>>,
    Path(name): Path<String>,
    body: String,
) -> Result<Json<FileResponse>, ApiError> {
    tracing::debug!("Update request: {}", name);
    Ok(Json(state.store.update(&name, &body).await?))
}

/// Delete a file
#[debug_handler]
pub async fn delete_file(
    State(state): State<Arc<ApiState>>,
    Path(name): Path<String>,
) -> Result<&'static str, ApiError> {
    tracing::debug!("Delete request: {}", name);
    state.store.delete(&name).await?;
    Ok(DELETE_MESSAGE)
}
