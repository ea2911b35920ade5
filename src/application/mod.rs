//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers.
//!
//! - [`services::link_service::LinkService`] - Link CRUD and validation
//! - [`services::id_allocator::IdAllocator`] - Random short id allocation
//! - [`services::auth_service::AuthService`] - Admin password checks

pub mod services;
