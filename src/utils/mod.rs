//! Helper functions shared across layers.
//!
//! - [`code_generator`] - Short id alphabet, random generation and validation
//! - [`url_validator`] - Target URL validation

pub mod code_generator;
pub mod url_validator;
