//! `JsonWriter`: indentation-aware pretty printer.
//!
//! Layout for a container at depth `d` (the root object is depth 1):
//!
//! ```text
//! {
//!     "key": value,
//!     "last": value
//! }
//! ```
//!
//! Every entry sits on its own line indented `d` levels; the closing bracket
//! is indented `d - 1` levels. An empty container still spans two lines.

use std::fmt::Write as _;

use tagtree_buffers::Writer;
use tagtree_util::escape;
use tagtree_value::{Array, Object, Value};

use crate::WriterOptions;

pub struct JsonWriter {
    pub writer: Writer,
    options: WriterOptions,
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonWriter {
    pub fn new() -> Self {
        Self::with_options(WriterOptions::default())
    }

    pub fn with_options(options: WriterOptions) -> Self {
        Self {
            writer: Writer::new(),
            options,
        }
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Serializes a document rooted at `object`.
    pub fn encode(&mut self, object: &Object) -> String {
        self.writer.reset();
        self.write_obj(object, 1);
        self.writer.flush_text()
    }

    /// Serializes any value; containers are laid out as a root.
    pub fn encode_value(&mut self, value: &Value) -> String {
        self.writer.reset();
        self.write_any(value, 1);
        self.writer.flush_text()
    }

    pub fn write_any(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.write_null(),
            Value::Bool(b) => self.write_boolean(*b),
            Value::Integer(i) => self.write_integer(*i),
            Value::Float(f) => self.write_float(*f),
            Value::String(s) => self.write_str(s),
            Value::Array(arr) => self.write_arr(arr, depth),
            Value::Object(obj) => self.write_obj(obj, depth),
        }
    }

    pub fn write_null(&mut self) {
        self.writer.buf(b"null");
    }

    pub fn write_boolean(&mut self, b: bool) {
        if b {
            self.writer.buf(b"true");
        } else {
            self.writer.buf(b"false");
        }
    }

    pub fn write_integer(&mut self, i: i64) {
        // Writer's fmt::Write never fails.
        let _ = write!(self.writer, "{i}");
    }

    pub fn write_float(&mut self, f: f32) {
        if !f.is_finite() {
            tracing::warn!(value = %f, "non-finite float written as null");
            self.write_null();
            return;
        }
        let precision = self.options.float_precision.max(1);
        let _ = write!(self.writer, "{f:.precision$}");
    }

    pub fn write_str(&mut self, s: &str) {
        self.writer.u8(b'"');
        self.writer.utf8(&escape(s));
        self.writer.u8(b'"');
    }

    pub fn write_arr(&mut self, arr: &Array, depth: usize) {
        self.writer.buf(b"[\n");
        let last = arr.len().saturating_sub(1);
        for (i, item) in arr.iter().enumerate() {
            self.write_indent(depth);
            self.write_any(item, depth + 1);
            if i < last {
                self.writer.u8(b',');
            }
            self.writer.u8(b'\n');
        }
        self.write_indent(depth.saturating_sub(1));
        self.writer.u8(b']');
    }

    pub fn write_obj(&mut self, obj: &Object, depth: usize) {
        self.writer.buf(b"{\n");
        let last = obj.len().saturating_sub(1);
        for (i, (key, value)) in obj.iter().enumerate() {
            self.write_indent(depth);
            self.write_str(key);
            self.writer.buf(b": ");
            self.write_any(value, depth + 1);
            if i < last {
                self.writer.u8(b',');
            }
            self.writer.u8(b'\n');
        }
        self.write_indent(depth.saturating_sub(1));
        self.writer.u8(b'}');
    }

    fn write_indent(&mut self, levels: usize) {
        self.writer.repeat(&self.options.indent, levels);
    }
}
