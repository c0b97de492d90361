//! Upstream collaborator clients.
//!
//! # Data Flow
//! ```text
//! handler
//!     → history.rs (round outcome for session + round)
//!     → assets.rs (sprite bytes per symbol, one GET per matrix cell)
//! ```
//!
//! # Design Decisions
//! - Both clients share one `reqwest::Client`; no pooling policy of our own
//! - No retry, no backoff, no per-request timeout (a hanging upstream
//!   hangs that request)
//! - The asset client sits behind the `SymbolSource` trait so rendering
//!   can be exercised without a network

pub mod assets;
pub mod history;
pub mod types;

pub use assets::{AssetClient, SymbolSource};
pub use history::HistoryClient;
pub use types::{MathResult, RoundOutcome, UpstreamError};
