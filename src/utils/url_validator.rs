//! Syntactic validation for long URLs.
//!
//! The stored long URL stays byte-for-byte what the caller sent — uniqueness
//! and alias derivation both key on the exact string — so this module only
//! checks, it never rewrites.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Checks that the input is a syntactically valid absolute http(s) URL.
///
/// Rejects dangerous schemes like `javascript:`, `data:` and `file:`.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for empty or blank input.
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_long_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https() {
        assert!(validate_long_url("https://example.com/path?q=1").is_ok());
    }

    #[test]
    fn test_accepts_http() {
        assert!(validate_long_url("http://example.com").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            validate_long_url(""),
            Err(UrlValidationError::Empty)
        ));
    }

    #[test]
    fn test_rejects_blank() {
        assert!(matches!(
            validate_long_url("  "),
            Err(UrlValidationError::Empty)
        ));
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            validate_long_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_javascript_scheme() {
        assert!(matches!(
            validate_long_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_rejects_file_scheme() {
        assert!(matches!(
            validate_long_url("file:///etc/passwd"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }
}
