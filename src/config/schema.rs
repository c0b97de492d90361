//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files, and
//! every section has defaults that reproduce the built-in upstream hosts and
//! rendering parameters, so the service runs without any config file at all.

use serde::{Deserialize, Serialize};

/// Root configuration for the image service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream host configuration (history API, asset host).
    pub upstream: UpstreamConfig,

    /// Rendering parameters for the composite image.
    pub render: RenderConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream host configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the round-history API.
    pub history_base_url: String,

    /// Base URL of the per-game sprite asset host.
    pub assets_base_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            history_base_url: "https://rat.kajotgames.dev".to_string(),
            assets_base_url: "https://games.kajotgames.dev".to_string(),
        }
    }
}

/// Rendering parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Width and height of one symbol tile in pixels.
    pub cell_size: u32,

    /// Gaussian blur sigma applied to the symbol layer.
    pub blur_sigma: f32,

    /// Pixel height of the win-amount caption.
    pub caption_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: 100,
            blur_sigma: 5.0,
            caption_height: 80,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level filter (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
