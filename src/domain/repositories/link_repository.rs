//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// The store owns the uniqueness constraint on `id`. Any write that would
/// produce a duplicate id fails with [`AppError::Conflict`], which callers use
/// to tell collisions apart from other failures.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new link. `created_at` is assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError>;

    /// Lists links ordered by creation time, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Link>, AppError>;

    /// Counts all links.
    async fn count(&self) -> Result<i64, AppError>;

    /// Counts links whose id is exactly `length` characters long.
    async fn count_by_id_length(&self, length: usize) -> Result<i64, AppError>;

    /// Applies a partial update to the link currently stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Conflict`] if `patch.id` is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: &str, patch: LinkPatch) -> Result<Link, AppError>;

    /// Deletes a link.
    ///
    /// Returns `Ok(true)` if the link existed, `Ok(false)` otherwise.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
