//! JSON text rendering with a caller-chosen indent width.

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Render `value` as JSON text.
///
/// `indent <= 0` yields compact output with no inserted whitespace. A positive
/// `indent` pretty-prints with `indent` spaces per nesting level. String
/// contents are emitted verbatim, so runs of spaces inside values survive
/// untouched.
pub fn render<T: Serialize + ?Sized>(value: &T, indent: i32) -> serde_json::Result<String> {
    let Ok(width) = usize::try_from(indent) else {
        return serde_json::to_string(value);
    };
    if width == 0 {
        return serde_json::to_string(value);
    }

    let unit = " ".repeat(width);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(unit.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}
