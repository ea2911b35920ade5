//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{id}`          - Short link redirect (public)
//! - `/_oein/*`            - Static admin UI (Basic auth)
//! - `/api/_oein/*`        - Admin REST API (Basic auth, whole prefix)
//! - anything else         - Not-found page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - HTTP Basic against `ADMIN_PASSWORD`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{not_found_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the application router without path normalization.
pub fn router(state: AppState) -> Router {
    // Covers the API fallback too: every path under the prefix needs credentials.
    let admin_api = api::routes::admin_routes().layer(middleware::from_fn_with_state(
        state.clone(),
        auth::layer,
    ));

    let admin_ui = middleware::from_fn_with_state(state.clone(), auth::layer)
        .layer(ServeDir::new(state.admin_ui_dir()));

    Router::new()
        .route("/{id}", get(redirect_handler))
        .nest("/api/_oein", admin_api)
        .nest_service("/_oein", admin_ui)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/abc/` redirects like `/abc`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
