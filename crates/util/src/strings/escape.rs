use std::borrow::Cow;

/// Escape a string for the body of a JSON string literal.
///
/// This function escapes:
/// - Backslash (0x5C)
/// - Double quote (0x22)
/// - Newline (0x0A) and tab (0x09)
///
/// Any other control byte (below 0x20) is passed through unescaped and
/// reported with a warning. The input is borrowed back untouched when nothing
/// needs escaping.
///
/// # Examples
///
/// ```
/// use tagtree_util::strings::escape;
///
/// assert_eq!(escape("hello"), "hello");
/// assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(escape("line1\nline2"), "line1\\nline2");
/// ```
pub fn escape(s: &str) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    if !bytes.iter().any(|&b| b < 0x20 || b == b'"' || b == b'\\') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    let mut last = 0;

    for (i, &b) in bytes.iter().enumerate() {
        let escaped = match b {
            b'"' => "\\\"",
            b'\\' => "\\\\",
            b'\n' => "\\n",
            b'\t' => "\\t",
            b if b < 0x20 => {
                tracing::warn!(byte = b, offset = i, "unescaped control character in string");
                continue;
            }
            _ => continue,
        };
        // Every escaped byte is ASCII, so `i` is always a char boundary.
        result.push_str(&s[last..i]);
        result.push_str(escaped);
        last = i + 1;
    }

    result.push_str(&s[last..]);
    Cow::Owned(result)
}
