//! tagtree-json - text codec for the tagtree value tree
//!
//! - [`JsonWriter`]: pretty printer (`{`/`[` on their own lines, configurable
//!   indent and float precision)
//! - [`JsonReader`]: error-tolerant reader that always returns what it could
//!   recover together with a list of [`ParseError`]s
//!
//! # Example
//!
//! ```
//! use tagtree_json::{parse, to_string};
//! use tagtree_value::Object;
//!
//! let mut doc = Object::new();
//! doc.set("name", "probe");
//! doc.set("ratio", 0.5f32);
//!
//! let text = to_string(&doc);
//! assert_eq!(text, "{\n    \"name\": \"probe\",\n    \"ratio\": 0.500000\n}");
//!
//! let parsed = parse(&text);
//! assert!(parsed.is_clean());
//! assert_eq!(parsed.object, doc);
//! ```

mod error;
mod options;
mod reader;
mod writer;

use std::path::Path;

use tagtree_value::{Object, Value};

pub use error::{JsonError, ParseError, ParseErrorKind};
pub use options::{ReaderOptions, WriterOptions};
pub use reader::{parse, parse_strict, parse_value, JsonReader, Parsed, ParsedValue};
pub use writer::JsonWriter;

/// Serializes `object` with default options.
pub fn to_string(object: &Object) -> String {
    JsonWriter::new().encode(object)
}

pub fn to_string_with(object: &Object, options: &WriterOptions) -> String {
    JsonWriter::with_options(options.clone()).encode(object)
}

/// Serializes any value with default options.
pub fn value_to_string(value: &Value) -> String {
    JsonWriter::new().encode_value(value)
}

/// Reads and parses a document from disk. Parse problems are reported in the
/// returned [`Parsed`]; only I/O failures are errors.
pub fn read_file(path: impl AsRef<Path>, options: &ReaderOptions) -> Result<Parsed, JsonError> {
    let text = tagtree_util::read_text(path)?;
    Ok(JsonReader::with_options(options.clone()).parse(&text))
}

/// Serializes `object` to `path`, replacing the file.
pub fn write_file(
    path: impl AsRef<Path>,
    object: &Object,
    options: &WriterOptions,
) -> Result<(), JsonError> {
    let text = to_string_with(object, options);
    tagtree_util::write_text(path, &text)?;
    Ok(())
}
