//! Round-outcome image service.
//!
//! Fetches a round's outcome from the history API, fetches each symbol's
//! sprite from the asset host, and composites them into a blurred grid
//! with a gradient-styled win-amount caption.

pub mod config;
pub mod http;
pub mod observability;
pub mod render;
pub mod upstream;

pub use config::ServiceConfig;
pub use http::HttpServer;
