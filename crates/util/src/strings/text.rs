//! Byte-text helpers: substring, search, trimming, splitting, and the
//! reversible placeholder cipher.
//!
//! Offsets are byte offsets. Functions that take a range clamp it to the
//! string and to the nearest char boundary instead of panicking.

use std::fmt;

fn floor_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Returns `s[from..to]`.
///
/// A `to` of zero, past the end, or before `from` means "to the end".
///
/// ```
/// use tagtree_util::strings::substring;
///
/// assert_eq!(substring("hello world", 6, 0), "world");
/// assert_eq!(substring("hello world", 0, 5), "hello");
/// assert_eq!(substring("hello", 2, 99), "llo");
/// ```
pub fn substring(s: &str, from: usize, to: usize) -> &str {
    let to = if to == 0 || to > s.len() || to < from {
        s.len()
    } else {
        to
    };
    let from = floor_boundary(s, from.min(to));
    let to = floor_boundary(s, to);
    &s[from..to]
}

/// Finds the first occurrence of `what` within `s[start..end]`, returning its
/// absolute byte offset. An `end` of zero means "to the end".
///
/// ```
/// use tagtree_util::strings::find;
///
/// assert_eq!(find("a,b,c", ",", 0, 0), Some(1));
/// assert_eq!(find("a,b,c", ",", 2, 0), Some(3));
/// assert_eq!(find("a,b,c", ";", 0, 0), None);
/// ```
pub fn find(s: &str, what: &str, start: usize, end: usize) -> Option<usize> {
    if what.is_empty() {
        return None;
    }
    let end = if end == 0 || end > s.len() { s.len() } else { end };
    let start = floor_boundary(s, start);
    let end = floor_boundary(s, end);
    if start >= end {
        return None;
    }
    s[start..end].find(what).map(|i| start + i)
}

/// Removes every occurrence of the listed characters, wherever they are.
///
/// ```
/// use tagtree_util::strings::strip_chars;
///
/// assert_eq!(strip_chars(" a b\tc ", " \t"), "abc");
/// ```
pub fn strip_chars(s: &str, list: &str) -> String {
    s.chars().filter(|c| !list.contains(*c)).collect()
}

/// Removes the listed characters from both ends only.
///
/// ```
/// use tagtree_util::strings::trim_chars;
///
/// assert_eq!(trim_chars("--a-b--", "-"), "a-b");
/// ```
pub fn trim_chars<'a>(s: &'a str, list: &str) -> &'a str {
    s.trim_matches(|c: char| list.contains(c))
}

/// Splits on a delimiter string, dropping empty pieces.
///
/// ```
/// use tagtree_util::strings::split;
///
/// assert_eq!(split("a::b::::c", "::"), vec!["a", "b", "c"]);
/// assert_eq!(split("abc", ""), vec!["abc"]);
/// ```
pub fn split(s: &str, delim: &str) -> Vec<String> {
    if delim.is_empty() {
        return if s.is_empty() {
            Vec::new()
        } else {
            vec![s.to_string()]
        };
    }
    s.split(delim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits on any of the delimiter characters, dropping empty pieces.
///
/// ```
/// use tagtree_util::strings::tokenize;
///
/// assert_eq!(tokenize("a b,,c", " ,"), vec!["a", "b", "c"]);
/// ```
pub fn tokenize(s: &str, delims: &str) -> Vec<String> {
    s.split(|c: char| delims.contains(c))
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replaces the first (or every) occurrence of `from` with `to`.
///
/// ```
/// use tagtree_util::strings::replace;
///
/// assert_eq!(replace("a.b.c", ".", "/", false), "a/b.c");
/// assert_eq!(replace("a.b.c", ".", "/", true), "a/b/c");
/// ```
pub fn replace(s: &str, from: &str, to: &str, all: bool) -> String {
    if from.is_empty() {
        return s.to_string();
    }
    if all {
        s.replace(from, to)
    } else {
        s.replacen(from, to, 1)
    }
}

/// Appends formatted text.
///
/// ```
/// use tagtree_util::strings::append_fmt;
///
/// let mut s = String::from("n=");
/// append_fmt(&mut s, format_args!("{}", 42));
/// assert_eq!(s, "n=42");
/// ```
pub fn append_fmt(s: &mut String, args: fmt::Arguments<'_>) {
    // Writing into a String cannot fail.
    let _ = fmt::Write::write_fmt(s, args);
}

/// Obfuscates `bytes` in place by adding the password bytes cyclically.
///
/// Not cryptographically secure. An empty password leaves the data as is.
pub fn encode(bytes: &mut [u8], password: &[u8]) {
    if password.is_empty() {
        return;
    }
    for (b, p) in bytes.iter_mut().zip(password.iter().cycle()) {
        *b = b.wrapping_add(*p);
    }
}

/// Reverses [`encode`].
pub fn decode(bytes: &mut [u8], password: &[u8]) {
    if password.is_empty() {
        return;
    }
    for (b, p) in bytes.iter_mut().zip(password.iter().cycle()) {
        *b = b.wrapping_sub(*p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_clamps_to_char_boundary() {
        assert_eq!(substring("añb", 1, 2), "");
        assert_eq!(substring("añb", 1, 3), "ñ");
    }

    #[test]
    fn test_find_respects_end() {
        assert_eq!(find("abcabc", "c", 0, 2), None);
        assert_eq!(find("abcabc", "c", 3, 6), Some(5));
        assert_eq!(find("abc", "", 0, 0), None);
    }

    #[test]
    fn test_split_edge_cases() {
        assert!(split("", ",").is_empty());
        assert!(split(",,", ",").is_empty());
        assert_eq!(split("x", ","), vec!["x"]);
    }

    #[test]
    fn test_encode_decode_reverses() {
        let original = b"The quick brown fox".to_vec();
        let mut data = original.clone();
        encode(&mut data, b"secret");
        assert_ne!(data, original);
        decode(&mut data, b"secret");
        assert_eq!(data, original);
    }

    #[test]
    fn test_encode_empty_password_is_identity() {
        let mut data = b"abc".to_vec();
        encode(&mut data, b"");
        assert_eq!(data, b"abc");
    }
}
