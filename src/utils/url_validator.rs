//! Target URL validation.

use url::Url;
use validator::ValidationError;

/// Returns true if `value` parses as an absolute `http` or `https` URL.
pub fn is_valid_target_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// `validator` adapter for [`is_valid_target_url`].
pub fn validate_target_url(value: &str) -> Result<(), ValidationError> {
    if is_valid_target_url(value) {
        return Ok(());
    }

    Err(ValidationError::new("target_url")
        .with_message("targetUrl must be a valid http(s) URL".into()))
}

/// Serializes a stored target URL for the `Location` header.
///
/// URLs made only of visible ASCII are sent unchanged. Anything else goes
/// through the URL serializer, which drops tabs and newlines and
/// percent-encodes non-ASCII characters. Returns `None` if `value` does not
/// parse.
pub fn redirect_location(value: &str) -> Option<String> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_graphic()) {
        return Some(value.to_string());
    }

    Url::parse(value).ok().map(String::from)
}
