//! Formatted output helpers for CLI commands.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Serializes `value` as JSON indented with four spaces.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn to_indented_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Writes command output to stdout, ending it with a newline.
///
/// Empty output prints nothing.
#[allow(clippy::print_stdout)]
pub fn emit(text: &str) {
    if text.is_empty() {
        return;
    }
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}
