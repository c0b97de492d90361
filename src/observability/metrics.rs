//! Metrics collection and exposition.
//!
//! # Metrics
//! - `reelshot_requests_total` (counter): requests by status code
//! - `reelshot_request_duration_seconds` (histogram): latency distribution
//! - `reelshot_symbol_fetch_failures_total` (counter): placeholder tiles drawn
//!
//! # Design Decisions
//! - Low-overhead updates (atomic operations in the recorder)
//! - Prometheus exposition on a dedicated address, off by default

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with an HTTP scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics endpoint listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one handled request.
pub fn record_request(status: u16, start: Instant) {
    metrics::counter!("reelshot_requests_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("reelshot_request_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}

/// Record one symbol fetch that fell back to a placeholder tile.
pub fn record_symbol_failure() {
    metrics::counter!("reelshot_symbol_fetch_failures_total").increment(1);
}
