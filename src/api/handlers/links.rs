//! Handlers for the admin link endpoints (list, create, update, delete).

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::link::{
    CreateLinkRequest, CreateMode, LinkEnvelope, ListLinksResponse, UpdateLinkRequest,
};
use crate::api::dto::pagination::PaginationParams;
use crate::error::AppError;
use crate::state::AppState;

/// Lists links, newest first.
///
/// # Endpoint
///
/// `GET /api/_oein/links?page=1&pageSize=50`
///
/// `page` defaults to 1, `pageSize` to 50 (clamped to 1-200). A page past the
/// end returns the last page instead of an empty one.
///
/// # Response
///
/// ```json
/// { "links": [ ... ], "page": 1, "pageSize": 50, "total": 3, "totalPages": 1 }
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListLinksResponse>, AppError> {
    let page = state
        .link_service
        .list_links(params.page(), params.page_size())
        .await?;

    Ok(Json(page.into()))
}

/// Creates a link with a custom or random id.
///
/// # Endpoint
///
/// `POST /api/_oein/links`
///
/// # Errors
///
/// - 400 if `targetUrl` is not an absolute http(s) URL, `id` is unsafe, or
///   custom mode lacks an `id`
/// - 409 if the custom id already exists
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkEnvelope>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = match payload.mode {
        CreateMode::Random => {
            state
                .link_service
                .create_random_link(payload.target_url)
                .await?
        }
        CreateMode::Custom => {
            let Some(id) = payload.id else {
                return Err(AppError::bad_request(
                    "id is required for custom mode",
                    json!({ "field": "id" }),
                ));
            };

            state
                .link_service
                .create_custom_link(id, payload.target_url)
                .await?
        }
    };

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Renames and/or retargets a link.
///
/// # Endpoint
///
/// `PATCH /api/_oein/links/{id}`
///
/// ```json
/// { "newId": "spring-sale", "targetUrl": "https://example.com/sale" }
/// ```
///
/// # Errors
///
/// - 400 if a field is invalid or neither field is given
/// - 404 if the link doesn't exist
/// - 409 if `newId` is taken
pub async fn update_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateLinkRequest>, JsonRejection>,
) -> Result<Json<LinkEnvelope>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state.link_service.update_link(&id, payload.into()).await?;

    Ok(Json(link.into()))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/_oein/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn delete_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
