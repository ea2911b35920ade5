//! Link creation, lookup, listing, update and deletion.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::application::services::id_allocator::{AllocatorSettings, IdAllocator};
use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Largest page size accepted by [`LinkService::list_links`].
pub const MAX_PAGE_SIZE: i64 = 200;

/// One page of links, newest first.
#[derive(Debug, Clone)]
pub struct LinkPage {
    pub links: Vec<Link>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Service for managing short links.
///
/// Ids and target URLs arrive already checked by the request DTOs
/// (`validator` rules in [`crate::api::dto::link`]); the service enforces the
/// rules that depend on the store: uniqueness, existence and a non-empty patch.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    allocator: IdAllocator<L>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, allocator_settings: AllocatorSettings) -> Self {
        Self {
            allocator: IdAllocator::new(link_repository.clone(), allocator_settings),
            link_repository,
        }
    }

    /// Creates a link under a generated id.
    ///
    /// # Errors
    ///
    /// Forwards allocator errors.
    pub async fn create_random_link(&self, target_url: String) -> Result<Link, AppError> {
        let link = self.allocator.allocate(&target_url).await?;
        info!(id = %link.id, "Created random link");

        Ok(link)
    }

    /// Creates a link under a caller-supplied id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id already exists.
    pub async fn create_custom_link(
        &self,
        id: String,
        target_url: String,
    ) -> Result<Link, AppError> {
        let new_link = NewLink {
            id: id.clone(),
            target_url,
        };

        let link = self.link_repository.create(new_link).await.map_err(|e| {
            if e.is_conflict() {
                AppError::conflict("id already exists", json!({ "id": id }))
            } else {
                e
            }
        })?;
        info!(id = %link.id, "Created custom link");

        Ok(link)
    }

    /// Retrieves a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn get_link(&self, id: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))
    }

    /// Returns one page of links ordered by creation time, newest first.
    ///
    /// `page` is raised to 1 and `page_size` clamped to `1..=200`. A page past
    /// the end is clamped to the last page.
    pub async fn list_links(&self, page: i64, page_size: i64) -> Result<LinkPage, AppError> {
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        let total = self.link_repository.count().await?;
        let total_pages = total_pages(total, page_size);
        let page = page.clamp(1, total_pages);

        let links = self
            .link_repository
            .list((page - 1) * page_size, page_size)
            .await?;

        Ok(LinkPage {
            links,
            page,
            page_size,
            total,
            total_pages,
        })
    }

    /// Renames and/or retargets the link stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the patch is empty,
    /// [`AppError::NotFound`] if `id` does not exist, and
    /// [`AppError::Conflict`] if the new id is taken.
    pub async fn update_link(&self, id: &str, patch: LinkPatch) -> Result<Link, AppError> {
        if patch.is_empty() {
            return Err(AppError::bad_request("nothing to update", json!({})));
        }

        let new_id = patch.id.clone();
        let link = self
            .link_repository
            .update(id, patch)
            .await
            .map_err(|e| {
                if e.is_conflict() {
                    AppError::conflict("newId already exists", json!({ "newId": new_id }))
                } else {
                    e
                }
            })?;
        info!(from = %id, to = %link.id, "Updated link");

        Ok(link)
    }

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn delete_link(&self, id: &str) -> Result<(), AppError> {
        if !self.link_repository.delete(id).await? {
            return Err(AppError::not_found("Link not found", json!({ "id": id })));
        }
        info!(id, "Deleted link");

        Ok(())
    }
}

/// Number of pages for `total` items; an empty table still has one page.
fn total_pages(total: i64, page_size: i64) -> i64 {
    ((total + page_size - 1) / page_size).max(1)
}
