//! tagtree - owned value trees, sorted containers and a tolerant JSON codec
//!
//! This crate re-exports the workspace members under one roof:
//!
//! - [`buffers`]: `GrowableBuffer` and the text `Writer`
//! - [`collections`]: `SortedSet` and `HashIndex`
//! - [`value`]: `Value`, `Object`, `Array`
//! - [`json`]: `JsonWriter`, `JsonReader` and their options
//! - [`util`]: file I/O, digests, string helpers, `Timer`
//!
//! # Example
//!
//! ```
//! use tagtree::{parse, to_string, Object};
//!
//! let mut doc = Object::new();
//! doc.set("answer", 42);
//! let parsed = parse(&to_string(&doc));
//! assert_eq!(parsed.object, doc);
//! ```

pub mod fmt_cli;

pub use tagtree_buffers as buffers;
pub use tagtree_collections as collections;
pub use tagtree_json as json;
pub use tagtree_util as util;
pub use tagtree_value as value;

pub use tagtree_buffers::GrowableBuffer;
pub use tagtree_collections::{HashIndex, SortedSet};
pub use tagtree_json::{
    parse, parse_strict, parse_value, to_string, value_to_string, JsonError, JsonReader,
    JsonWriter, ParseError, ParseErrorKind, Parsed, ReaderOptions, WriterOptions,
};
pub use tagtree_value::{Array, Object, Value, ValueKind};
