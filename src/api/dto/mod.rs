//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde with camelCase field names and `validator` for input
//! validation.

pub mod link;
pub mod pagination;
