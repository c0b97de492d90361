//! Round-history API client.
//!
//! # Responsibilities
//! - Resolve a (session, round) pair to a round outcome record
//! - Surface non-success statuses and decode failures as typed errors
//!
//! No retry and no request timeout: the first failure propagates to the
//! handler, which reports it to the caller.

use crate::upstream::types::{RoundOutcome, UpstreamError};

/// Client for the round-history API.
#[derive(Debug, Clone)]
pub struct HistoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl HistoryClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    /// Fetch the outcome record for one round.
    pub async fn fetch_round(
        &self,
        session_id: &str,
        round_id: &str,
    ) -> Result<RoundOutcome, UpstreamError> {
        tracing::debug!(session_id, round_id, "Fetching round info");

        let url = format!(
            "{}/api/history/v3/casinos/1/sessions/{}/rounds/{}",
            self.base_url, session_id, round_id
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::RoundStatus { status });
        }

        let body = response.bytes().await?;
        let outcome: RoundOutcome = serde_json::from_slice(&body)?;

        if let Some(math) = &outcome.math_result {
            tracing::debug!(reel_matrix = ?math.reel_matrix, "Round info fetched");
        }

        Ok(outcome)
    }
}
