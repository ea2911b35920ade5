//! Not-found page, used for unknown links and unmatched routes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Fallback handler for every route that matches nothing.
pub async fn not_found_handler(State(state): State<AppState>) -> Response {
    not_found_response(&state).await
}

/// Serves `not-found.html` with status 404.
///
/// Falls back to a plain-text body when the page cannot be read.
pub async fn not_found_response(state: &AppState) -> Response {
    let path = state.not_found_page();

    match tokio::fs::read(&path).await {
        Ok(page) => (StatusCode::NOT_FOUND, Html(page)).into_response(),
        Err(e) => {
            debug!(error = %e, path = %path.display(), "Not-found page unavailable");
            (StatusCode::NOT_FOUND, "Link not found").into_response()
        }
    }
}

/// Fallback for unknown paths under the admin API prefix.
pub async fn api_not_found_handler() -> AppError {
    AppError::not_found("Route not found", json!({}))
}
