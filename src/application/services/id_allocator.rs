//! Random short id allocation with adaptive length growth.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{MAX_ID_LENGTH, capacity_for_length, generate_id};

/// Tuning knobs for [`IdAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocatorSettings {
    /// Length of the first ids tried.
    pub start_length: usize,
    /// Create attempts per length before moving on to the next length.
    pub max_attempts: usize,
}

impl Default for AllocatorSettings {
    fn default() -> Self {
        Self {
            start_length: 3,
            max_attempts: 80,
        }
    }
}

/// Allocates fresh random ids by inserting until the store accepts one.
///
/// # Algorithm
///
/// Starting at `start_length`:
///
/// 1. Count stored ids of the current length. If that count reaches the
///    capacity of the alphabet at this length, move to the next length.
/// 2. Otherwise try up to `max_attempts` random ids. A uniqueness conflict is
///    a collision and is retried; any other error is returned as is.
/// 3. If every attempt collided, move to the next length.
///
/// There is no reservation table. Concurrent allocators simply collide and
/// retry, and a stale utilization count only costs an extra length step.
pub struct IdAllocator<L: LinkRepository + ?Sized> {
    repository: Arc<L>,
    settings: AllocatorSettings,
}

impl<L: LinkRepository + ?Sized> IdAllocator<L> {
    pub fn new(repository: Arc<L>, settings: AllocatorSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    pub fn settings(&self) -> AllocatorSettings {
        self.settings
    }

    /// Creates a link for `target_url` under a newly generated id.
    ///
    /// `target_url` must already be validated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors other than collisions, or
    /// if the id length would exceed the maximum id length.
    pub async fn allocate(&self, target_url: &str) -> Result<Link, AppError> {
        let mut length = self.settings.start_length.max(1);

        loop {
            if length > MAX_ID_LENGTH {
                return Err(AppError::internal(
                    "Failed to allocate a short id",
                    json!({ "reason": "Id space exhausted" }),
                ));
            }

            if self.is_exhausted(length).await? {
                debug!(length, "Id length exhausted, growing");
                length += 1;
                continue;
            }

            for attempt in 1..=self.settings.max_attempts {
                let new_link = NewLink {
                    id: generate_id(length),
                    target_url: target_url.to_string(),
                };

                match self.repository.create(new_link).await {
                    Ok(link) => return Ok(link),
                    Err(e) if e.is_conflict() => {
                        debug!(length, attempt, "Short id collision");
                    }
                    Err(e) => return Err(e),
                }
            }

            warn!(
                length,
                attempts = self.settings.max_attempts,
                "All attempts collided, growing id length"
            );
            length += 1;
        }
    }

    async fn is_exhausted(&self, length: usize) -> Result<bool, AppError> {
        let Some(capacity) = capacity_for_length(length) else {
            return Ok(false);
        };

        let used = self.repository.count_by_id_length(length).await?;

        Ok(u128::try_from(used).unwrap_or(0) >= capacity)
    }
}
