//! Text output buffer with auto-growing capacity.

use std::fmt;

/// A UTF-8 text writer that grows automatically as needed.
///
/// The serializer writes through this type instead of concatenating many
/// small `String`s.
///
/// # Example
///
/// ```
/// use tagtree_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(b'[');
/// writer.utf8("1, 2");
/// writer.u8(b']');
/// assert_eq!(writer.flush_text(), "[1, 2]");
/// ```
pub struct Writer {
    /// Bytes written since the last flush.
    buf: Vec<u8>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with a 4KB initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(4 * 1024)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Discards anything written since the last flush.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Number of bytes written since the last flush.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    /// Returns the written bytes. The allocation is kept for reuse.
    pub fn flush(&mut self) -> Vec<u8> {
        self.buf.drain(..).collect()
    }

    /// Returns the written text.
    ///
    /// Only `&str` data and ASCII bytes are ever written by the serializer,
    /// so the lossy conversion never replaces anything in practice.
    pub fn flush_text(&mut self) -> String {
        let bytes = self.flush();
        match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }

    /// Writes a single byte.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.buf.push(val);
    }

    /// Writes a byte slice.
    #[inline]
    pub fn buf(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a UTF-8 string. Returns the number of bytes written.
    pub fn utf8(&mut self, s: &str) -> usize {
        let bytes = s.as_bytes();
        self.buf(bytes);
        bytes.len()
    }

    /// Writes `unit` `count` times (indentation).
    pub fn repeat(&mut self, unit: &str, count: usize) {
        self.buf.reserve(unit.len() * count);
        for _ in 0..count {
            self.utf8(unit);
        }
    }
}

impl fmt::Write for Writer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.utf8(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;

    #[test]
    fn test_u8() {
        let mut writer = Writer::new();
        writer.u8(b'a');
        writer.u8(b'b');
        assert_eq!(writer.flush(), b"ab");
    }

    #[test]
    fn test_utf8() {
        let mut writer = Writer::new();
        let n = writer.utf8("café");
        let data = writer.flush();
        assert_eq!(n, data.len());
        assert_eq!(std::str::from_utf8(&data).unwrap(), "café");
    }

    #[test]
    fn test_flush_multiple() {
        let mut writer = Writer::new();
        writer.u8(b'1');
        assert_eq!(writer.flush_text(), "1");
        writer.u8(b'2');
        assert_eq!(writer.flush_text(), "2");
    }

    #[test]
    fn test_grows_past_initial_capacity() {
        let mut writer = Writer::with_capacity(4);
        writer.utf8("hello, world");
        writer.utf8("!");
        assert_eq!(writer.flush_text(), "hello, world!");
    }

    #[test]
    fn test_repeat() {
        let mut writer = Writer::new();
        writer.repeat("  ", 3);
        writer.u8(b'x');
        assert_eq!(writer.flush_text(), "      x");
    }

    #[test]
    fn test_fmt_write() {
        let mut writer = Writer::new();
        write!(writer, "{:.6}", 1.5f32).unwrap();
        assert_eq!(writer.pending(), 8);
        assert_eq!(writer.flush_text(), "1.500000");
    }

    #[test]
    fn test_reuse_after_flush() {
        let mut writer = Writer::with_capacity(16);
        for round in 0..3 {
            write!(writer, "round {round}").unwrap();
            assert_eq!(writer.pending(), 7);
            assert_eq!(writer.flush_text(), format!("round {round}"));
            assert_eq!(writer.pending(), 0);
        }
    }

    #[test]
    fn test_reset_discards_pending() {
        let mut writer = Writer::new();
        writer.utf8("junk");
        writer.reset();
        writer.utf8("ok");
        assert_eq!(writer.flush_text(), "ok");
    }
}
