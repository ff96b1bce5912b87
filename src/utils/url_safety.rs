//! Path-safety validation for endpoint urls.
//!
//! An endpoint url must survive a trip through percent escape/unescape
//! unchanged, so that lookups by url never depend on the client's escaping
//! behavior.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use validator::ValidationError;

/// Bytes escaped in a path segment: everything outside the RFC 3986
/// unreserved set.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Returns true when escaping and unescaping `url` as a path segment are
/// both no-ops.
///
/// # Examples
///
/// ```
/// use endpoint_service::utils::url_safety::is_url_path_safe;
///
/// assert!(is_url_path_safe("testendpoint"));
/// assert!(is_url_path_safe("v1.prices_2024"));
/// assert!(!is_url_path_safe(" some uns@fe url chars"));
/// assert!(!is_url_path_safe("a/b"));
/// ```
pub fn is_url_path_safe(url: &str) -> bool {
    let escaped = utf8_percent_encode(url, PATH_SEGMENT).to_string();

    match percent_decode_str(url).decode_utf8() {
        Ok(unescaped) => escaped == url && unescaped == url,
        Err(_) => false,
    }
}

/// Validator hook for request DTOs carrying an endpoint url.
pub fn validate_url_path_safe(url: &str) -> Result<(), ValidationError> {
    if is_url_path_safe(url) {
        Ok(())
    } else {
        let mut err = ValidationError::new("url_path_safe");
        err.message = Some("URL must contain only URL-path-safe characters".into());
        Err(err)
    }
}
