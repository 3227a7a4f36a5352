//! JWT signature verification logic.
//!
//! Delegates all cryptography to the `jsonwebtoken` crate: the
//! algorithm is read from the token header, the signature is recomputed
//! over the header and payload segments, and temporal claims (`exp`)
//! are enforced when present. Nothing is reimplemented here.

use std::collections::HashSet;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use serde_json::Value;

/// The result of a signature verification attempt.
///
/// An invalid signature is a normal, reportable outcome, not a program
/// fault, so this is returned infallibly rather than as an error.
#[derive(Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The signature is cryptographically valid.
    Valid,
    /// The signature does not match, or verification could not run.
    Invalid {
        /// Human-readable reason for the failure.
        reason: String,
    },
}

/// Verify a JWT's signature using the provided secret or key material.
///
/// Reads the algorithm from the token header and builds the matching
/// decoding key: HMAC secret bytes for HS*, a PEM-encoded public key
/// for the asymmetric families. The outcome depends only on the raw
/// token string and the secret.
pub fn verify_token(token: &str, secret: &str) -> VerificationOutcome {
    let header = match decode_header(token) {
        Ok(header) => header,
        Err(e) => {
            return VerificationOutcome::Invalid {
                reason: describe_error(&e),
            };
        }
    };

    let decoding_key = match decoding_key_for(header.alg, secret) {
        Ok(key) => key,
        Err(reason) => return VerificationOutcome::Invalid { reason },
    };

    let mut validation = Validation::new(header.alg);
    // Absent temporal claims are fine; present ones are still enforced.
    validation.required_spec_claims = HashSet::new();
    // No expected audience is configured, so don't reject tokens that
    // carry an `aud` claim.
    validation.validate_aud = false;

    match decode::<Value>(token, &decoding_key, &validation) {
        Ok(_) => VerificationOutcome::Valid,
        Err(e) => VerificationOutcome::Invalid {
            reason: describe_error(&e),
        },
    }
}

/// Build a [`DecodingKey`] from textual key material for the given
/// algorithm family.
fn decoding_key_for(alg: Algorithm, secret: &str) -> Result<DecodingKey, String> {
    match alg {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
            Ok(DecodingKey::from_secret(secret.as_bytes()))
        }
        Algorithm::RS256
        | Algorithm::RS384
        | Algorithm::RS512
        | Algorithm::PS256
        | Algorithm::PS384
        | Algorithm::PS512 => DecodingKey::from_rsa_pem(secret.as_bytes())
            .map_err(|_| "secret is not a valid PEM-encoded RSA public key".to_string()),
        Algorithm::ES256 | Algorithm::ES384 => DecodingKey::from_ec_pem(secret.as_bytes())
            .map_err(|_| "secret is not a valid PEM-encoded EC public key".to_string()),
        Algorithm::EdDSA => DecodingKey::from_ed_pem(secret.as_bytes())
            .map_err(|_| "secret is not a valid PEM-encoded Ed25519 public key".to_string()),
    }
}

/// Map a `jsonwebtoken` error to a user-friendly reason string.
///
/// Common failure modes get stable, readable messages; anything else
/// falls back to the library's own description.
fn describe_error(e: &jsonwebtoken::errors::Error) -> String {
    match e.kind() {
        ErrorKind::InvalidSignature => "signature does not match".to_string(),
        ErrorKind::ExpiredSignature => "token has expired".to_string(),
        ErrorKind::ImmatureSignature => "token is not yet valid".to_string(),
        ErrorKind::InvalidAlgorithm => "algorithm mismatch between token and key".to_string(),
        ErrorKind::InvalidToken => "token is malformed".to_string(),
        _ => e.to_string(),
    }
}
