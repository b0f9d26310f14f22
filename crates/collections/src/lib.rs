//! Ordered containers over [`tagtree_buffers::GrowableBuffer`].
//!
//! - [`SortedSet`]: dense ascending array with a pluggable comparator
//! - [`HashIndex`]: string-keyed map that keeps its hashes in a `SortedSet`

mod hash_index;
mod sorted_set;

pub use hash_index::{DefaultKeyHasher, HashIndex, KeyHasher};
pub use sorted_set::SortedSet;
