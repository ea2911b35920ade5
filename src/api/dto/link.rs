//! DTOs for the admin link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::LinkPage;
use crate::domain::entities::{Link, LinkPatch};
use crate::utils::code_generator::validate_short_id;
use crate::utils::url_validator::validate_target_url;

/// How the id of a new link is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateMode {
    /// The caller supplies `id`.
    #[default]
    Custom,
    /// The server generates a short random id.
    Random,
}

/// Request body for `POST /api/_oein/links`.
///
/// ```json
/// { "mode": "custom", "id": "promo", "targetUrl": "https://example.com" }
/// { "mode": "random", "targetUrl": "https://example.com" }
/// ```
///
/// `id` is only read in custom mode, where it is required.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub mode: CreateMode,

    #[serde(default)]
    #[validate(custom(function = "validate_short_id"))]
    pub id: Option<String>,

    #[validate(custom(function = "validate_target_url"))]
    pub target_url: String,
}

/// Request body for `PATCH /api/_oein/links/{id}`.
///
/// Both fields are optional but at least one must be present.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    /// Renames the link.
    #[serde(default)]
    #[validate(custom(function = "validate_short_id"))]
    pub new_id: Option<String>,

    /// Points the link at a new destination.
    #[serde(default)]
    #[validate(custom(function = "validate_target_url"))]
    pub target_url: Option<String>,
}

impl From<UpdateLinkRequest> for LinkPatch {
    fn from(request: UpdateLinkRequest) -> Self {
        LinkPatch {
            id: request.new_id,
            target_url: request.target_url,
        }
    }
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            target_url: link.target_url,
            created_at: link.created_at,
        }
    }
}

/// `{ "link": { ... } }` wrapper returned by create and update.
#[derive(Debug, Serialize)]
pub struct LinkEnvelope {
    pub link: LinkResponse,
}

impl From<Link> for LinkEnvelope {
    fn from(link: Link) -> Self {
        Self { link: link.into() }
    }
}

/// Response of `GET /api/_oein/links`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLinksResponse {
    pub links: Vec<LinkResponse>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl From<LinkPage> for ListLinksResponse {
    fn from(page: LinkPage) -> Self {
        Self {
            links: page.links.into_iter().map(LinkResponse::from).collect(),
            page: page.page,
            page_size: page.page_size,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}
