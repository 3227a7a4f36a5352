//! CLI argument definitions for jwt-checker.
//!
//! Uses `clap` derive macros to define the command-line interface. The
//! parsed `Cli` struct is the immutable configuration for a single run
//! and is passed into the check command as-is.
//!
//! # Security
//!
//! `Cli` implements a custom `Debug` that redacts the token and secret
//! to prevent accidental leakage through debug formatting, error
//! chains, or logging.

use std::fmt;

use clap::Parser;
use zeroize::Zeroizing;

/// Decode and optionally verify a JWT token (like jwt.io), entirely
/// offline.
#[derive(Parser)]
#[command(name = "jwt-checker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The JWT token to decode. Pass the literal `help` for usage examples.
    #[arg(short = 't', long, value_name = "JWT")]
    pub token: String,

    /// Secret (HMAC) or PEM-encoded public key to verify the signature.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in
    /// shell history.
    #[arg(short = 's', long, value_name = "KEY", value_parser = parse_zeroizing_string)]
    pub secret: Option<Zeroizing<String>>,
}

impl Cli {
    /// The secret to verify with, if one was actually supplied.
    ///
    /// An empty `--secret` value is treated as absent, matching the
    /// decode-only behavior of running without the flag.
    pub fn verification_secret(&self) -> Option<&str> {
        self.secret
            .as_deref()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Parse a string into a `Zeroizing<String>` for secure CLI arguments.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}

/// Custom `Debug` that redacts token and secret fields to prevent
/// accidental leakage through debug formatting or error chains.
impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("token", &"[REDACTED]")
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
