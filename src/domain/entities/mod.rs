//! Core domain entities.
//!
//! The service has a single entity, [`Link`], a mapping from a short id to a
//! target URL. Creation and partial updates use dedicated input types:
//!
//! - [`NewLink`] - For creating new records
//! - [`LinkPatch`] - For partial updates (rename and/or retarget)

pub mod link;

pub use link::{Link, LinkPatch, NewLink};
