//! Short id generation and validation utilities.
//!
//! Random ids are drawn from a 31-character alphabet without visually
//! ambiguous glyphs (`0`, `1`, `o`, `i`, `l`, ...). Custom ids supplied by an
//! administrator only have to be safe to use as a single path segment.

use rand::Rng;
use validator::ValidationError;

/// Alphabet for generated ids.
pub const ALPHABET: &[u8] = b"qwertyupasdfghjkzxcvbnm23456789";

/// Maximum length of any short id, custom or generated.
pub const MAX_ID_LENGTH: usize = 128;

/// Generates a random id of `length` characters.
///
/// Each character is an independent uniform draw from [`ALPHABET`] using the
/// thread-local CSPRNG. `random_range` samples without modulo bias.
pub fn generate_id(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Number of distinct ids of `length` characters.
///
/// Returns `None` when the value does not fit in a `u128`; callers treat that
/// as "never exhausted".
pub fn capacity_for_length(length: usize) -> Option<u128> {
    let exponent = u32::try_from(length).ok()?;
    (ALPHABET.len() as u128).checked_pow(exponent)
}

/// Returns true if `id` can be stored and used as a redirect path segment.
///
/// # Rules
///
/// - 1 to 128 characters
/// - No `/` or `\`
/// - No whitespace
pub fn is_safe_short_id(id: &str) -> bool {
    let length = id.chars().count();

    (1..=MAX_ID_LENGTH).contains(&length)
        && !id.chars().any(|c| c == '/' || c == '\\' || c.is_whitespace())
}

/// `validator` adapter for [`is_safe_short_id`].
pub fn validate_short_id(id: &str) -> Result<(), ValidationError> {
    if is_safe_short_id(id) {
        return Ok(());
    }

    Err(ValidationError::new("short_id").with_message(
        "id must be 1-128 characters without slashes, backslashes or whitespace".into(),
    ))
}
