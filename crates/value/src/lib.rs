//! tagtree-value - the in-memory document tree
//!
//! A document is an [`Object`] at the root. Every node is a [`Value`]:
//! strings, 64-bit integers, 32-bit floats, booleans, null, or a nested
//! [`Array`] / [`Object`]. Containers own their children outright, so cloning
//! a container copies the whole subtree and cycles cannot be built.
//!
//! # Example
//!
//! ```
//! use tagtree_value::{Array, Object, Value};
//!
//! let mut tags = Array::new();
//! tags.push("fast");
//! tags.push(3);
//!
//! let mut doc = Object::new();
//! doc.set("name", "probe");
//! doc.set("tags", tags);
//! doc.set_null("owner");
//!
//! assert_eq!(doc.get("name").and_then(Value::as_str), Some("probe"));
//! assert_eq!(doc.get("owner"), Some(&Value::Null));
//! assert_eq!(doc.get("missing"), None);
//! ```

mod array;
mod equal;
mod json_interop;
mod object;
mod value;

pub use array::Array;
pub use equal::approx_eq;
pub use object::Object;
pub use value::{Value, ValueKind};
