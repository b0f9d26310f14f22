//! Buffers shared by every tagtree container.
//!
//! - [`GrowableBuffer`]: typed element storage with a doubling capacity policy
//! - [`Writer`]: auto-growing text output used by the JSON serializer

mod buffer;
mod writer;

pub use buffer::GrowableBuffer;
pub use writer::Writer;
