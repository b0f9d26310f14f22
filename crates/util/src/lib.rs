//! tagtree-util - collaborators of the tagtree containers
//!
//! Small, stateless helpers that the value tree and its tooling lean on:
//! string escaping and byte-text operations, whole-file I/O, digests, and a
//! stopwatch.

pub mod digest;
pub mod fs;
pub mod strings;
pub mod timer;

// Re-exports for convenience
pub use digest::{hash64, md5, sha256, to_hex};
pub use fs::{append_text, read_binary, read_text, write_binary, write_text, FsError};
pub use strings::escape;
pub use timer::Timer;
