//! Handler for short link redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::handlers::not_found::not_found_response;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::redirect_location;

/// Redirects a short id to its target URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Responses
///
/// - **302 Found** with `Location: <targetUrl>` when the link exists. Target
///   URLs that are not plain visible ASCII are percent-encoded first.
/// - **404 Not Found** with the not-found page otherwise
/// - **500** on store errors
pub async fn redirect_handler(Path(id): Path<String>, State(state): State<AppState>) -> Response {
    let link = match state.link_service.get_link(&id).await {
        Ok(link) => link,
        Err(AppError::NotFound { .. }) => return not_found_response(&state).await,
        Err(e) => return e.into_response(),
    };

    let Some(location) = redirect_location(&link.target_url)
        .and_then(|location| HeaderValue::from_str(&location).ok())
    else {
        tracing::error!(id = %link.id, "Stored target URL is not a valid Location header");
        return AppError::internal("Invalid target URL", json!({ "id": link.id })).into_response();
    };

    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
