#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::Request;
use axum::response::Response;
use axum_test::TestServer;
use base64::Engine as _;
use chrono::Utc;
use link_shorten::application::services::{AllocatorSettings, AuthService, LinkService};
use link_shorten::domain::entities::{Link, LinkPatch, NewLink};
use link_shorten::domain::repositories::LinkRepository;
use link_shorten::error::AppError;
use link_shorten::routes::{app_router, router};
use link_shorten::state::AppState;
use serde_json::json;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

pub const ADMIN_PASSWORD: &str = "test-password";

/// In-memory link store with the same uniqueness semantics as PostgreSQL.
///
/// Links are kept in insertion order; `seq` breaks ties between equal
/// `created_at` values so listing is deterministic.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<(u64, Link)>>,
    next_seq: Mutex<u64>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn conflict(id: &str) -> AppError {
        AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": "links_pkey", "id": id }),
        )
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();
        if links.iter().any(|(_, l)| l.id == new_link.id) {
            return Err(Self::conflict(&new_link.id));
        }

        let mut seq = self.next_seq.lock().unwrap();
        *seq += 1;

        let link = Link::new(new_link.id, new_link.target_url, Utc::now());
        links.push((*seq, link.clone()));

        Ok(link)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.lock().unwrap();
        Ok(links.iter().find(|(_, l)| l.id == id).map(|(_, l)| l.clone()))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Link>, AppError> {
        let mut links = self.links.lock().unwrap().clone();
        links.sort_by(|(sa, a), (sb, b)| b.created_at.cmp(&a.created_at).then(sb.cmp(sa)));

        Ok(links
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|(_, l)| l)
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.lock().unwrap().len() as i64)
    }

    async fn count_by_id_length(&self, length: usize) -> Result<i64, AppError> {
        let links = self.links.lock().unwrap();
        Ok(links
            .iter()
            .filter(|(_, l)| l.id.chars().count() == length)
            .count() as i64)
    }

    async fn update(&self, id: &str, patch: LinkPatch) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();

        if let Some(new_id) = &patch.id
            && new_id != id
            && links.iter().any(|(_, l)| &l.id == new_id)
        {
            return Err(Self::conflict(new_id));
        }

        let Some((_, link)) = links.iter_mut().find(|(_, l)| l.id == id) else {
            return Err(AppError::not_found("Link not found", json!({ "id": id })));
        };

        if let Some(new_id) = patch.id {
            link.id = new_id;
        }
        if let Some(target_url) = patch.target_url {
            link.target_url = target_url;
        }

        Ok(link.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|(_, l)| l.id != id);
        Ok(links.len() != before)
    }
}

/// Directory with the bundled `not-found.html` and admin UI.
pub fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

pub fn create_test_state_with(
    repository: Arc<InMemoryLinkRepository>,
    admin_password: Option<&str>,
    public_dir: PathBuf,
) -> AppState {
    let repository: Arc<dyn LinkRepository> = repository;
    let link_service = Arc::new(LinkService::new(repository, AllocatorSettings::default()));
    let auth_service = Arc::new(AuthService::new(admin_password.map(str::to_string)));

    AppState::new(link_service, auth_service, public_dir)
}

pub fn create_test_state(repository: Arc<InMemoryLinkRepository>) -> AppState {
    create_test_state_with(repository, Some(ADMIN_PASSWORD), public_dir())
}

/// Test server over the full router plus a handle on its store.
pub fn make_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let state = create_test_state(repository.clone());
    let server = TestServer::new(router(state)).unwrap();

    (server, repository)
}

/// The production service, including trailing-slash normalization.
pub fn make_app() -> (NormalizePath<Router>, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let state = create_test_state(repository.clone());

    (app_router(state), repository)
}

/// Sends a GET through `app`, optionally with admin credentials.
pub async fn get(app: &NormalizePath<Router>, uri: &str, authorized: bool) -> Response {
    let mut request = Request::get(uri);
    if authorized {
        request = request.header("Authorization", admin_auth());
    }

    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn basic_auth(username: &str, password: &str) -> String {
    let encoded =
        base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {encoded}")
}

/// `Authorization` header value with the correct admin password.
pub fn admin_auth() -> String {
    basic_auth("admin", ADMIN_PASSWORD)
}

pub async fn create_test_link(repository: &InMemoryLinkRepository, id: &str, url: &str) {
    repository
        .create(NewLink {
            id: id.to_string(),
            target_url: url.to_string(),
        })
        .await
        .unwrap();
}
