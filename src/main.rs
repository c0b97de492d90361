//! Round-Outcome Image Service
//!
//! A single-endpoint service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                  REELSHOT                     │
//!                  │                                               │
//!  GET /generate-  │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!  image/...  ─────┼─▶│  http   │──▶│ upstream │──▶│  render   │  │
//!                  │  │ server  │   │ history  │   │ transpose │  │
//!                  │  └─────────┘   └──────────┘   │ plan      │  │
//!                  │       │             ▲         │ composite │  │
//!                  │       │             │         └─────┬─────┘  │
//!  200 image/png   │       │        ┌──────────┐         │        │
//!  ◀───────────────┼───────┴────────│ upstream │◀────────┘        │
//!                  │                │  assets  │  (one GET/cell)  │
//!                  │                └──────────┘                  │
//!                  │                                               │
//!                  │  Cross-cutting: config, observability         │
//!                  └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelshot::config::{self, ServiceConfig};
use reelshot::http::HttpServer;

#[derive(Debug, Parser)]
#[command(name = "reelshot", about = "Round-outcome image service")]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => ServiceConfig::default(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "reelshot={},tower_http=debug",
                    config.observability.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("reelshot v0.1.0 starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        history_base_url = %config.upstream.history_base_url,
        assets_base_url = %config.upstream.assets_base_url,
        cell_size = config.render.cell_size,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => reelshot::observability::metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
