//! The generate-image request handler.
//!
//! # Pipeline
//! ```text
//! validate path params
//!     → fetch round outcome (history API)
//!     → transpose reelMatrix[0]
//!     → format win amount as the caption
//!     → build draw plan (one asset fetch per cell, sequential)
//!     → composite → PNG response
//! ```
//!
//! Missing parameters and a missing reel matrix are the caller's fault
//! (400); every other failure is reported as a 500 with the raw error
//! message in the body. Per-cell symbol failures never reach here.

use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::render;

/// `GET /generate-image/{sessionId}/{roundId}/{gameName}/img.png`
pub async fn generate_image(
    State(state): State<AppState>,
    Path((session_id, round_id, game_name)): Path<(String, String, String)>,
) -> Response {
    let start = Instant::now();

    if [&session_id, &round_id, &game_name]
        .iter()
        .any(|p| p.trim().is_empty())
    {
        return respond(
            start,
            StatusCode::BAD_REQUEST,
            "Missing required parameters: sessionId, roundId, gameName".to_string(),
        );
    }

    tracing::debug!(%session_id, %round_id, %game_name, "Generating round image");

    let outcome = match state.history.fetch_round(&session_id, &round_id).await {
        Ok(outcome) => outcome,
        Err(e) => return failure(start, &e),
    };

    let Some(spin) = outcome.first_spin() else {
        return respond(
            start,
            StatusCode::BAD_REQUEST,
            "Round data does not contain a reelMatrix".to_string(),
        );
    };

    let matrix = render::transpose(spin);
    let caption = format_win(outcome.win);

    let plan = render::build_plan(&state.assets, &game_name, &matrix).await;
    let png = match render::compose(&plan, &caption, &state.render) {
        Ok(png) => png,
        Err(e) => return failure(start, &e),
    };

    metrics::record_request(200, start);
    ([(header::CONTENT_TYPE, "image/png")], png).into_response()
}

fn respond(start: Instant, status: StatusCode, body: String) -> Response {
    metrics::record_request(status.as_u16(), start);
    (status, body).into_response()
}

fn failure(start: Instant, error: &dyn std::error::Error) -> Response {
    tracing::error!(%error, "Error generating image");
    respond(
        start,
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Error generating image: {}", error),
    )
}

/// Format a win amount with English digit grouping: `1234.5` → `"1,234.5"`.
///
/// The fractional part is carried verbatim from the shortest decimal
/// representation of the value; integers get no decimal point.
fn format_win(win: f64) -> String {
    let raw = win.to_string();
    let (number, fraction) = match raw.split_once('.') {
        Some((int, frac)) => (int.to_string(), Some(frac.to_string())),
        None => (raw, None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
