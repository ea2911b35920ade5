//! Admin API route configuration.
//!
//! Routes are mounted under `/api/_oein` and protected by
//! [`crate::api::middleware::auth`] in [`crate::routes::router`].

use crate::api::handlers::{
    api_not_found_handler, create_link_handler, delete_link_handler, list_links_handler,
    update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch},
};

/// Admin API routes.
///
/// # Endpoints
///
/// - `GET    /links`       - List links (paginated)
/// - `POST   /links`       - Create a link (custom or random id)
/// - `PATCH  /links/{id}`  - Rename and/or retarget a link
/// - `DELETE /links/{id}`  - Delete a link
///
/// Any other path under the prefix answers with a JSON `404`.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{id}",
            patch(update_link_handler).delete(delete_link_handler),
        )
        .fallback(api_not_found_handler)
}
