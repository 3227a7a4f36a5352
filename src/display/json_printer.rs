//! JSON pretty-printing for terminal output.

use serde_json::Value;

/// Print a titled section followed by the value as pretty JSON.
///
/// Renders the value with 2-space indentation, matching the jwt.io
/// presentation of header and payload.
pub fn print_section(title: &str, value: &Value) -> serde_json::Result<()> {
    println!("\n{title}:\n{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
