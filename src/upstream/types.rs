//! Payload and error definitions for the upstream collaborators.

use serde::Deserialize;
use thiserror::Error;

/// Round outcome payload returned by the history API.
///
/// Only the fields the compositor consumes are modelled; everything else in
/// the response body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RoundOutcome {
    /// Payout amount for the round.
    #[serde(default)]
    pub win: f64,

    /// Math engine output for the round, if any.
    #[serde(default)]
    pub math_result: Option<MathResult>,
}

/// Math engine output. `reel_matrix` is an outer sequence of spin results,
/// each a 2D grid of symbol identifiers; only the first spin is used.
#[derive(Debug, Clone, Deserialize)]
pub struct MathResult {
    #[serde(rename = "reelMatrix", default)]
    pub reel_matrix: Vec<Vec<Vec<i64>>>,
}

impl RoundOutcome {
    /// Grid of the first spin result, if the payload carries one.
    pub fn first_spin(&self) -> Option<&Vec<Vec<i64>>> {
        self.math_result.as_ref()?.reel_matrix.first()
    }
}

/// Errors from the round-history API or the asset host.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Non-success status from the history API.
    #[error("Failed to fetch round info: {status}")]
    RoundStatus { status: reqwest::StatusCode },

    /// Non-success status from the asset host.
    #[error("Failed to fetch symbol image for ID {symbol_id}: {status}")]
    SymbolStatus {
        symbol_id: i64,
        status: reqwest::StatusCode,
    },

    /// Network-level failure (DNS, connect, read).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// History API replied with a body that is not a round outcome.
    #[error("Failed to decode round info: {0}")]
    Decode(#[from] serde_json::Error),
}
