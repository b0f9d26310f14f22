//! String utilities.
//!
//! Provides JSON string escaping and the byte-text helpers used around the
//! value tree.

mod escape;
mod text;

pub use escape::escape;
pub use text::{
    append_fmt, decode, encode, find, replace, split, strip_chars, substring, tokenize, trim_chars,
};
