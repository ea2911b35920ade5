//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod links;
pub mod not_found;
pub mod redirect;

pub use links::{create_link_handler, delete_link_handler, list_links_handler, update_link_handler};
pub use not_found::{api_not_found_handler, not_found_handler};
pub use redirect::redirect_handler;
