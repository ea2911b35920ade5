//! HTTP layer: request/response translation for the public redirect and the
//! admin API.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Basic authentication and request tracing
//! - [`routes`] - Admin API route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
