//! API Server Module
//!
//! This module contains the server setup functionality for the API system.

use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use fscrud_core::FileStore;

use crate::handlers::{create_file, delete_file, read_file, update_file, ApiState};
use crate::models::ApiConfig;

/// Build the CRUD router over the given state
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/:name",
            post(create_file)
                .get(read_file)
                .put(update_file)
                .delete(delete_file),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Main API server
pub struct ApiServer {
    /// Server configuration
    config: ApiConfig,
    /// Shared state
    state: Arc<ApiState>,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(config: ApiConfig) -> Self {
        let state = Arc::new(ApiState {
            store: FileStore::new(config.store.clone()),
        });

        Self { config, state }
    }

    /// Prepare the storage root, bind, and serve until shutdown
    pub async fn start(&self) -> Result<()> {
        info!(
            "Starting fscrud API server on {}:{}",
            self.config.host, self.config.port
        );

        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .with_context(|| {
                format!(
                    "Failed to bind {}:{}",
                    self.config.host, self.config.port
                )
            })?;

        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(&self, listener: TcpListener) -> Result<()> {
        self.state.store.init().await.with_context(|| {
            format!(
                "Failed to prepare storage root {}",
                self.config.store.display()
            )
        })?;

        let addr = listener.local_addr()?;
        info!(
            "fscrud API server listening on {}, storing files in {}",
            addr,
            self.config.store.display()
        );

        let app = build_router(self.state.clone());
        axum::serve(listener, app)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to start API server: {}", e))?;

        Ok(())
    }
}
