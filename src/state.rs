use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::domain::repositories::LinkRepository;

/// Shared, immutable application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub auth_service: Arc<AuthService>,
    /// Root of the static files: `not-found.html` and the `_oein/` admin UI.
    pub public_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<dyn LinkRepository>>,
        auth_service: Arc<AuthService>,
        public_dir: PathBuf,
    ) -> Self {
        Self {
            link_service,
            auth_service,
            public_dir: Arc::new(public_dir),
        }
    }

    /// Path of the page served for unknown links and routes.
    pub fn not_found_page(&self) -> PathBuf {
        self.public_dir.join("not-found.html")
    }

    /// Directory served under `/_oein`.
    pub fn admin_ui_dir(&self) -> PathBuf {
        self.public_dir.join("_oein")
    }
}
