//! JWT decoding logic.
//!
//! Handles splitting a raw JWT string into its three parts (header,
//! payload, signature), base64url-decoding the header and payload
//! segments, and parsing them as JSON values. The signature segment
//! is never decoded here.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

use crate::error::JwtCheckerError;

/// The decoded parts of a JWT.
///
/// Implements a custom `Debug` that redacts `payload` to prevent
/// accidental leakage of sensitive claim data.
pub struct DecodedToken {
    /// The parsed JWT header (typically contains `alg` and `typ`).
    pub header: Value,
    /// The parsed JWT payload (claims).
    pub payload: Value,
}

/// Custom `Debug` that redacts the payload to prevent accidental
/// leakage through debug formatting or error chains.
impl fmt::Debug for DecodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedToken")
            .field("header", &self.header)
            .field("payload", &"[REDACTED]")
            .finish()
    }
}

/// Decode a raw JWT string into its header and payload.
///
/// Splits the token on `.` separators, then base64url-decodes the
/// header and payload segments and parses them as JSON. The segment
/// count is checked before any decoding is attempted.
///
/// # Errors
///
/// Returns an error if the token doesn't have exactly three parts,
/// if base64url decoding fails, or if JSON parsing fails.
pub fn decode_token(token: &str) -> Result<DecodedToken, JwtCheckerError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(JwtCheckerError::MalformedToken);
    }

    let header = decode_segment(parts[0], "header")?;
    let payload = decode_segment(parts[1], "payload")?;

    Ok(DecodedToken { header, payload })
}

/// Base64url-decode a segment and parse it as JSON.
fn decode_segment(encoded: &str, segment_name: &str) -> Result<Value, JwtCheckerError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|_| JwtCheckerError::Base64Decode {
            segment: segment_name.to_string(),
        })?;

    serde_json::from_slice(&bytes).map_err(|e| JwtCheckerError::JsonParse {
        segment: segment_name.to_string(),
        reason: e.to_string(),
    })
}
