//! Deterministic short alias derivation.
//!
//! The alias is a pure function of the long URL string: hashing the URL and
//! encoding a fixed-length prefix of the digest. Identical input always
//! yields an identical alias — no randomness, no sequence numbers, no
//! timestamps.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;
use sha2::{Digest, Sha256};

/// Number of digest bytes encoded into the alias.
const CODE_LENGTH_BYTES: usize = 9;

/// Derives the short alias for a long URL.
///
/// Takes the SHA-256 digest of the URL string and encodes the first 9 bytes
/// as URL-safe base64 without padding, producing a 12-character alias.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the input is empty or blank.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code("https://example.com")?;
/// assert_eq!(code.len(), 12);
/// assert_eq!(code, generate_code("https://example.com")?);
/// ```
pub fn generate_code(long_url: &str) -> Result<String, AppError> {
    if long_url.trim().is_empty() {
        return Err(AppError::bad_request(
            "Long URL must not be empty",
            json!({ "long_url": long_url }),
        ));
    }

    let digest = Sha256::digest(long_url.as_bytes());

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&digest[..CODE_LENGTH_BYTES]))
}
