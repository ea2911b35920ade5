//! Link entity representing a short id to target URL mapping.

use chrono::{DateTime, Utc};

/// A persisted short link.
///
/// `created_at` is assigned by the store and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    pub fn new(id: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            target_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub id: String,
    pub target_url: String,
}

/// Partial update for an existing link.
///
/// `None` fields are left unchanged. Setting `id` renames the link.
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub id: Option<String>,
    pub target_url: Option<String>,
}

impl LinkPatch {
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.target_url.is_none()
    }
}
