// ABOUTME: HTTP server assembly: router construction, middleware layering, and serving
// ABOUTME: Binds the listener and runs axum with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP server assembly
//!
//! Combines the route groups, applies the middleware stack (trace, CORS,
//! boundary timeout), and serves the router until shutdown.

use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::constants::defaults;
use crate::middleware::cors::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, UserRoutes};

/// HTTP server for the exercise tracker API
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a new server over the given resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete application router
    ///
    /// Exposed separately from [`Self::run`] so tests can drive the router
    /// without binding a socket.
    #[must_use]
    pub fn router(&self) -> Router {
        let cors = setup_cors(&self.resources.config);

        Router::new()
            .merge(UserRoutes::routes(self.resources.clone()))
            .merge(HealthRoutes::routes())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(TimeoutLayer::new(Duration::from_secs(
                defaults::REQUEST_TIMEOUT_SECS,
            )))
    }

    /// Bind and serve until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server fails
    /// while running.
    pub async fn run(&self, port: u16) -> Result<()> {
        let app = self.router();

        let listener = TcpListener::bind(format!("127.0.0.1:{port}")).await?;
        info!("HTTP server listening on http://127.0.0.1:{port}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Resolve when the process receives ctrl-c
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, stopping HTTP server"),
        Err(e) => error!("Failed to listen for shutdown signal: {e}"),
    }
}
