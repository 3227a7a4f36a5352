//! Domain error types for jwt-checker.
//!
//! All decode-path errors are defined here using `thiserror` and are
//! converted to a single printed line at the CLI boundary. A failed
//! signature verification is not an error (see `core::verifier`).

use thiserror::Error;

/// Errors that can occur while decoding a token.
#[derive(Debug, Error)]
pub enum JwtCheckerError {
    /// The provided token does not have the expected three-part structure.
    #[error("Invalid JWT. Must have 3 parts.")]
    MalformedToken,

    /// Failed to decode a base64url-encoded token segment.
    #[error("Failed to decode: {segment} is not valid base64url")]
    Base64Decode {
        /// Which segment failed to decode (e.g., "header", "payload").
        segment: String,
    },

    /// Failed to parse decoded segment bytes as JSON.
    #[error("Failed to decode: {segment} is not valid JSON: {reason}")]
    JsonParse {
        /// Which segment failed to parse (e.g., "header", "payload").
        segment: String,
        /// The underlying parse error text.
        reason: String,
    },
}
