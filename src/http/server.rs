//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the generate-image route
//! - Wire up middleware (tracing, request ID)
//! - Build the shared upstream clients from configuration
//! - Serve with graceful shutdown

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::{RenderConfig, ServiceConfig};
use crate::http::handlers;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::upstream::{AssetClient, HistoryClient};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub history: HistoryClient,
    pub assets: AssetClient,
    pub render: RenderConfig,
}

/// HTTP server for the image service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let http = reqwest::Client::new();
        let state = AppState {
            history: HistoryClient::new(http.clone(), config.upstream.history_base_url),
            assets: AssetClient::new(http, config.upstream.assets_base_url),
            render: config.render,
        };

        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route(
                "/generate-image/{session_id}/{round_id}/{game_name}/img.png",
                get(handlers::generate_image),
            )
            .with_state(state)
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID.clone(), MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    } else {
        tracing::info!("Shutdown signal received");
    }
}
