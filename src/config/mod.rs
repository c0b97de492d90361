//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → semantic checks (URLs parse, cell size non-zero)
//!     → ServiceConfig (validated, immutable)
//!     → handed to the HTTP server and upstream clients at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no runtime reload
//! - All fields have defaults reproducing the built-in hosts and
//!   rendering parameters, so the service runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, RenderConfig, ServiceConfig, UpstreamConfig};
