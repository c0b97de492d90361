//! Sprite asset host client.
//!
//! Resolves a `(game_name, symbol_id)` pair to raw image bytes via the
//! asset host's naming convention. No caching: the same identifier is
//! refetched every time it appears, even within one matrix.

use std::future::Future;

use crate::upstream::types::UpstreamError;

/// Source of per-symbol sprite bytes.
///
/// The compositor's draw plan consumes this trait rather than a concrete
/// client, so the per-cell fallback policy is testable without a network.
pub trait SymbolSource {
    fn fetch_symbol(
        &self,
        game_name: &str,
        symbol_id: i64,
    ) -> impl Future<Output = Result<Vec<u8>, UpstreamError>> + Send;
}

/// Client for the per-game sprite asset host.
#[derive(Debug, Clone)]
pub struct AssetClient {
    http: reqwest::Client,
    base_url: String,
}

impl AssetClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }
}

impl SymbolSource for AssetClient {
    fn fetch_symbol(
        &self,
        game_name: &str,
        symbol_id: i64,
    ) -> impl Future<Output = Result<Vec<u8>, UpstreamError>> + Send {
        let url = format!(
            "{}/{}/expose/assets/img/{}.png",
            self.base_url, game_name, symbol_id
        );
        let http = self.http.clone();

        async move {
            let response = http.get(&url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(UpstreamError::SymbolStatus { symbol_id, status });
            }
            Ok(response.bytes().await?.to_vec())
        }
    }
}
