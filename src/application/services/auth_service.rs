//! Authentication service for the admin surface.

use hmac::{Hmac, Mac};
use rand::RngCore;
use serde_json::json;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Checks admin passwords against the single configured secret.
///
/// Passwords are never compared directly. Both the configured secret and each
/// candidate are run through HMAC-SHA256 under a key generated at startup, and
/// the fixed-size digests are compared in constant time. Neither the content
/// nor the length of the secret shows up in response timing.
pub struct AuthService {
    key: [u8; 32],
    expected: Option<Vec<u8>>,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// An empty password is treated the same as no password: every admin
    /// request is refused with an internal error.
    pub fn new(admin_password: Option<String>) -> Self {
        let mut key = [0u8; 32];
        rand::rng().fill_bytes(&mut key);

        let mut service = Self {
            key,
            expected: None,
        };
        service.expected = admin_password
            .filter(|p| !p.is_empty())
            .map(|p| service.digest(&p));

        service
    }

    /// Returns whether an admin password is configured.
    pub fn is_configured(&self) -> bool {
        self.expected.is_some()
    }

    fn digest(&self, value: &str) -> Vec<u8> {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC accepts any key length");
        mac.update(value.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }

    /// Authenticates the password taken from a Basic `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no admin password is configured.
    /// Returns [`AppError::Unauthorized`] if `password` is missing or wrong.
    pub fn authenticate(&self, password: Option<&str>) -> Result<(), AppError> {
        let Some(expected) = &self.expected else {
            return Err(AppError::internal(
                "ADMIN_PASSWORD is not configured",
                json!({}),
            ));
        };

        let Some(password) = password else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Missing credentials" }),
            ));
        };

        if bool::from(self.digest(password).ct_eq(expected)) {
            return Ok(());
        }

        Err(AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "Invalid credentials" }),
        ))
    }
}
