//! HTTP Basic authentication middleware for the admin surface.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticates admin requests using HTTP Basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(username:password)
/// ```
///
/// The decoded value is split on the first colon, so passwords may contain
/// colons. The username is ignored.
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Basic realm="Admin"` if
/// the header is missing, malformed, or carries the wrong password.
///
/// Returns `500 Internal Server Error` if no admin password is configured.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let admin = Router::new()
///     .route("/links", get(list_links_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let password = match AuthBasic::from_request_parts(&mut parts, &()).await {
        Ok(AuthBasic((_, password))) => password,
        Err(_) => None,
    };

    if let Err(e) = st.auth_service.authenticate(password.as_deref()) {
        match &e {
            AppError::Unauthorized { .. } => {
                tracing::warn!(path = %parts.uri.path(), "Admin authentication failed");
            }
            _ => {
                tracing::error!(path = %parts.uri.path(), "Admin request refused: {}", e);
            }
        }
        return Err(e);
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
