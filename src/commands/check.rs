//! The check command: decode a JWT and optionally verify its signature.
//!
//! Implements the full run: the `help`-token shortcut, decoding,
//! printing header and payload, and the optional verification step.
//! Decode failures propagate to `main` and exit non-zero; a failed
//! verification is reported but still exits zero, since decoding
//! itself succeeded.

use std::process::ExitCode;

use anyhow::Result;

use crate::cli::Cli;
use crate::core::decoder;
use crate::core::verifier::{self, VerificationOutcome};
use crate::display::json_printer;

/// Custom usage text shown when the token value is the literal `help`.
///
/// This is a separate path from clap's `--help` flag: it is triggered
/// by a token VALUE and shows worked examples rather than flag docs.
const USAGE: &str = "\
Usage:
  jwt-checker --token <JWT> [--secret <key>]

Examples:
  jwt-checker --token eyJhbGciOi...                    # Decode only
  jwt-checker --token eyJhbGciOi... --secret mysecret  # Decode + verify signature

Tip:
  You can copy a token from jwt.io and inspect it here.
  No secret = decoding only, like the jwt.io UI.
";

/// Execute the check with the given configuration.
pub fn execute(cli: &Cli) -> Result<ExitCode> {
    if cli.token.eq_ignore_ascii_case("help") {
        print!("{USAGE}");
        return Ok(ExitCode::SUCCESS);
    }

    let decoded = decoder::decode_token(&cli.token)?;

    json_printer::print_section("Header", &decoded.header)?;
    json_printer::print_section("Payload", &decoded.payload)?;

    match cli.verification_secret() {
        Some(secret) => match verifier::verify_token(&cli.token, secret) {
            VerificationOutcome::Valid => println!("\nSignature is valid."),
            VerificationOutcome::Invalid { reason } => {
                eprintln!("\nSignature invalid: {reason}");
            }
        },
        None => println!("\nNo secret provided, skipping signature verification."),
    }

    Ok(ExitCode::SUCCESS)
}
