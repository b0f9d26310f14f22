//! `JsonReader`: single-pass, error-tolerant reader producing a value tree.
//!
//! Containers are located first by matching their closing delimiter (depth
//! counting that skips string contents), then their body is read as a byte
//! range. Problems are recorded as [`ParseError`]s and the offending token is
//! skipped, so a damaged document still yields everything that could be read.
//!
//! Leniencies:
//! - a document without an opening `{` is read as an object body
//! - stray commas are ignored
//! - a missing `:` after a key is reported, and the value is still read
//! - a key whose value is missing is not inserted

use std::borrow::Cow;

use tagtree_value::{Array, Object, Value};

use crate::{JsonError, ParseError, ParseErrorKind, ReaderOptions};

/// Result of reading a document: whatever was recovered plus every problem
/// met along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub object: Object,
    pub errors: Vec<ParseError>,
}

impl Parsed {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// The object, or the first error if there was any.
    pub fn into_result(self) -> Result<Object, JsonError> {
        match self.errors.into_iter().next() {
            Some(first) => Err(JsonError::Parse(first)),
            None => Ok(self.object),
        }
    }
}

/// Like [`Parsed`] for a document whose root may be any value.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedValue {
    /// `Null` when nothing could be read.
    pub value: Value,
    pub errors: Vec<ParseError>,
}

impl ParsedValue {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct JsonReader {
    options: ReaderOptions,
}

impl JsonReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Reads a document whose root is an object.
    pub fn parse(&self, text: &str) -> Parsed {
        let mut cursor = Cursor::new(text.as_bytes(), self.options.max_depth);
        let end = cursor.data.len();
        cursor.skip_whitespace(end);

        let object = if cursor.x >= end {
            Object::new()
        } else if cursor.data[cursor.x] == b'{' {
            let open = cursor.x;
            match cursor.find_close(b'{', b'}', open, end) {
                Some(close) => {
                    let object = cursor.read_obj_body(open + 1, close, 1);
                    cursor.x = close + 1;
                    object
                }
                None => {
                    cursor.error(ParseErrorKind::UnmatchedBrace, open);
                    cursor.read_obj_body(open + 1, end, 1)
                }
            }
        } else {
            let start = cursor.x;
            cursor.read_obj_body(start, end, 1)
        };

        cursor.check_trailing(end);
        Parsed {
            object,
            errors: cursor.errors,
        }
    }

    /// Reads a document whose root may be any value.
    pub fn parse_value(&self, text: &str) -> ParsedValue {
        let mut cursor = Cursor::new(text.as_bytes(), self.options.max_depth);
        let end = cursor.data.len();
        cursor.skip_whitespace(end);

        let value = if cursor.x >= end {
            cursor.error(ParseErrorKind::MissingValue, cursor.x);
            None
        } else {
            cursor.read_value(end, 0)
        };

        cursor.check_trailing(end);
        ParsedValue {
            value: value.unwrap_or(Value::Null),
            errors: cursor.errors,
        }
    }

    /// Reads a document, failing on the first problem.
    pub fn parse_strict(&self, text: &str) -> Result<Object, JsonError> {
        self.parse(text).into_result()
    }
}

/// Reads `text` with default options.
///
/// ```
/// use tagtree_json::parse;
/// use tagtree_value::Value;
///
/// let parsed = parse(r#"{"a": 1, "b": }"#);
/// assert_eq!(parsed.error_count(), 1);
/// assert_eq!(parsed.object.get("a"), Some(&Value::Integer(1)));
/// assert_eq!(parsed.object.get("b"), None);
/// ```
pub fn parse(text: &str) -> Parsed {
    JsonReader::new().parse(text)
}

pub fn parse_value(text: &str) -> ParsedValue {
    JsonReader::new().parse_value(text)
}

pub fn parse_strict(text: &str) -> Result<Object, JsonError> {
    JsonReader::new().parse_strict(text)
}

// ── Cursor ──────────────────────────────────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    x: usize,
    max_depth: usize,
    errors: Vec<ParseError>,
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

#[inline]
fn is_delimiter(b: u8) -> bool {
    is_whitespace(b) || matches!(b, b',' | b':' | b'{' | b'}' | b'[' | b']' | b'"')
}

/// First complete UTF-8 character of `bytes`.
fn leading_char(bytes: &[u8]) -> Option<char> {
    let window = &bytes[..bytes.len().min(4)];
    let valid = match std::str::from_utf8(window) {
        Ok(s) => s,
        Err(err) => std::str::from_utf8(&window[..err.valid_up_to()]).ok()?,
    };
    valid.chars().next()
}

#[inline]
fn is_number_byte(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.' | b'e' | b'E')
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8], max_depth: usize) -> Self {
        Self {
            data,
            x: 0,
            max_depth,
            errors: Vec::new(),
        }
    }

    fn error(&mut self, kind: ParseErrorKind, offset: usize) {
        let err = ParseError::at(kind, self.data, offset);
        tracing::warn!(
            kind = %err.kind,
            offset = err.offset,
            line = err.line,
            column = err.column,
            "json parse error"
        );
        self.errors.push(err);
    }

    fn skip_whitespace(&mut self, end: usize) {
        while self.x < end && is_whitespace(self.data[self.x]) {
            self.x += 1;
        }
    }

    fn skip_separators(&mut self, end: usize) {
        while self.x < end && (is_whitespace(self.data[self.x]) || self.data[self.x] == b',') {
            self.x += 1;
        }
    }

    fn check_trailing(&mut self, end: usize) {
        self.skip_whitespace(end);
        if self.x < end {
            self.error(ParseErrorKind::TrailingCharacters, self.x);
            self.x = end;
        }
    }

    /// Position of the quote closing the string opened at `open`.
    fn find_string_end(&self, open: usize, end: usize) -> Option<usize> {
        let mut x = open + 1;
        while x < end {
            match self.data[x] {
                b'\\' => x += 2,
                b'"' => return Some(x),
                _ => x += 1,
            }
        }
        None
    }

    /// Position of the `close` byte matching the `open` byte at `from`.
    fn find_close(&self, open: u8, close: u8, from: usize, end: usize) -> Option<usize> {
        let mut depth = 0usize;
        let mut x = from;
        while x < end {
            let b = self.data[x];
            if b == b'"' {
                x = self.find_string_end(x, end)?;
            } else if b == open {
                depth += 1;
            } else if b == close {
                depth -= 1;
                if depth == 0 {
                    return Some(x);
                }
            }
            x += 1;
        }
        None
    }

    /// Skips one unusable token, always advancing at least one byte.
    fn skip_token(&mut self, end: usize) {
        let start = self.x;
        let b = self.data[start];
        self.x = match b {
            b'{' => self.find_close(b'{', b'}', start, end).map_or(end, |c| c + 1),
            b'[' => self.find_close(b'[', b']', start, end).map_or(end, |c| c + 1),
            b'"' => self.find_string_end(start, end).map_or(end, |c| c + 1),
            _ => {
                let mut x = start + 1;
                while x < end && !is_delimiter(self.data[x]) {
                    x += 1;
                }
                x
            }
        };
    }

    // ── Containers ──

    fn read_obj_body(&mut self, start: usize, end: usize, depth: usize) -> Object {
        let mut obj = Object::new();
        self.x = start;
        loop {
            self.skip_separators(end);
            if self.x >= end {
                break;
            }
            let key = match self.data[self.x] {
                b'"' => match self.read_str(end) {
                    Some(key) => key,
                    None => continue,
                },
                b'}' => {
                    self.error(ParseErrorKind::UnmatchedBrace, self.x);
                    self.x += 1;
                    continue;
                }
                b']' => {
                    self.error(ParseErrorKind::UnmatchedBracket, self.x);
                    self.x += 1;
                    continue;
                }
                _ => {
                    // Drop the whole pair up to the next separator.
                    self.error(ParseErrorKind::ExpectedKey, self.x);
                    while self.x < end && self.data[self.x] != b',' {
                        self.skip_token(end);
                    }
                    continue;
                }
            };

            self.skip_whitespace(end);
            if self.x < end && self.data[self.x] == b':' {
                self.x += 1;
            } else {
                self.error(ParseErrorKind::MissingColon, self.x);
            }
            self.skip_whitespace(end);

            if self.x >= end || matches!(self.data[self.x], b',' | b'}' | b']') {
                self.error(ParseErrorKind::MissingValue, self.x);
                continue;
            }
            if let Some(value) = self.read_value(end, depth) {
                obj.set(key, value);
            }
        }
        self.x = end;
        obj
    }

    fn read_arr_body(&mut self, start: usize, end: usize, depth: usize) -> Array {
        let mut arr = Array::new();
        self.x = start;
        loop {
            self.skip_separators(end);
            if self.x >= end {
                break;
            }
            match self.data[self.x] {
                b']' => {
                    self.error(ParseErrorKind::UnmatchedBracket, self.x);
                    self.x += 1;
                }
                b'}' => {
                    self.error(ParseErrorKind::UnmatchedBrace, self.x);
                    self.x += 1;
                }
                _ => {
                    if let Some(value) = self.read_value(end, depth) {
                        arr.push(value);
                    }
                }
            }
        }
        self.x = end;
        arr
    }

    /// Reads one value starting at the cursor. `depth` is the nesting level
    /// of the container holding it.
    fn read_value(&mut self, end: usize, depth: usize) -> Option<Value> {
        let start = self.x;
        match self.data[start] {
            b'{' => self.read_container(end, depth, b'{', b'}'),
            b'[' => self.read_container(end, depth, b'[', b']'),
            b'"' => self.read_str(end).map(Value::String),
            b't' => self.read_literal(end, b"true", Value::Bool(true)),
            b'f' => self.read_literal(end, b"false", Value::Bool(false)),
            b'n' => self.read_literal(end, b"null", Value::Null),
            b if b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.') => self.read_num(end),
            _ => {
                self.error(ParseErrorKind::InvalidLiteral, start);
                self.skip_token(end);
                None
            }
        }
    }

    fn read_container(&mut self, end: usize, depth: usize, open: u8, close: u8) -> Option<Value> {
        let start = self.x;
        let unmatched = if open == b'{' {
            ParseErrorKind::UnmatchedBrace
        } else {
            ParseErrorKind::UnmatchedBracket
        };
        let inner_depth = depth + 1;
        if inner_depth > self.max_depth {
            self.error(ParseErrorKind::DepthExceeded, start);
            self.skip_token(end);
            return None;
        }

        let (body_end, resume) = match self.find_close(open, close, start, end) {
            Some(c) => (c, c + 1),
            None => {
                self.error(unmatched, start);
                (end, end)
            }
        };
        let value = if open == b'{' {
            Value::Object(self.read_obj_body(start + 1, body_end, inner_depth))
        } else {
            Value::Array(self.read_arr_body(start + 1, body_end, inner_depth))
        };
        self.x = resume;
        Some(value)
    }

    // ── Scalars ──

    fn read_literal(&mut self, end: usize, literal: &[u8], value: Value) -> Option<Value> {
        let start = self.x;
        let stop = start + literal.len();
        let exact = stop <= end
            && &self.data[start..stop] == literal
            && (stop == end || is_delimiter(self.data[stop]));
        if exact {
            self.x = stop;
            Some(value)
        } else {
            self.error(ParseErrorKind::InvalidLiteral, start);
            self.skip_token(end);
            None
        }
    }

    fn read_num(&mut self, end: usize) -> Option<Value> {
        let start = self.x;
        let mut x = start;
        let mut is_float = false;
        while x < end && is_number_byte(self.data[x]) {
            if matches!(self.data[x], b'.' | b'e' | b'E') {
                is_float = true;
            }
            x += 1;
        }
        self.x = x;

        // Only ASCII bytes were consumed.
        let token = String::from_utf8_lossy(&self.data[start..x]);
        let value = if is_float {
            // Literals past the f32 range parse as infinity.
            token
                .parse::<f32>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Value::Float)
        } else {
            token.parse::<i64>().ok().map(Value::Integer)
        };
        if value.is_none() {
            self.error(ParseErrorKind::InvalidNumber, start);
        }
        value
    }

    /// Reads the string at the cursor. On an unterminated string the rest of
    /// the range is consumed.
    fn read_str(&mut self, end: usize) -> Option<String> {
        let open = self.x;
        let Some(close) = self.find_string_end(open, end) else {
            self.error(ParseErrorKind::UnterminatedString, open);
            self.x = end;
            return None;
        };
        let s = self.decode_str(open + 1, close);
        self.x = close + 1;
        Some(s)
    }

    fn decode_str(&mut self, start: usize, stop: usize) -> String {
        let data = self.data;
        let body = &data[start..stop];
        if !body.contains(&b'\\') {
            return lossy(body).into_owned();
        }

        let mut out = String::with_capacity(body.len());
        let mut run = start;
        let mut x = start;
        while x < stop {
            if data[x] != b'\\' {
                x += 1;
                continue;
            }
            out.push_str(&lossy(&data[run..x]));
            let esc = data.get(x + 1).copied().unwrap_or(b'\\');
            x += 2;
            match esc {
                b'"' => out.push('"'),
                b'\\' => out.push('\\'),
                b'/' => out.push('/'),
                b'b' => out.push('\u{0008}'),
                b'f' => out.push('\u{000C}'),
                b'n' => out.push('\n'),
                b'r' => out.push('\r'),
                b't' => out.push('\t'),
                b'u' => x = self.decode_unicode_escape(x - 2, stop, &mut out),
                _ => {
                    self.error(ParseErrorKind::InvalidEscape, x - 2);
                    // Keep the escaped character whole, even when multibyte.
                    match leading_char(&data[x - 1..stop]) {
                        Some(ch) => {
                            out.push(ch);
                            x = x - 1 + ch.len_utf8();
                        }
                        None => out.push(char::REPLACEMENT_CHARACTER),
                    }
                }
            }
            run = x;
        }
        if run < stop {
            out.push_str(&lossy(&data[run..stop]));
        }
        out
    }

    /// Decodes `\uXXXX` at `at` (pairing surrogates) and returns the position
    /// after the consumed escape(s).
    fn decode_unicode_escape(&mut self, at: usize, stop: usize, out: &mut String) -> usize {
        let Some(high) = self.hex4(at + 2, stop) else {
            self.error(ParseErrorKind::InvalidEscape, at);
            out.push(char::REPLACEMENT_CHARACTER);
            return (at + 2).min(stop);
        };
        let after = at + 6;

        if (0xD800..0xDC00).contains(&high) {
            let paired = self.data.get(after..after + 2) == Some(b"\\u".as_slice());
            if let Some(low) = paired.then(|| self.hex4(after + 2, stop)).flatten() {
                if (0xDC00..0xE000).contains(&low) {
                    let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                    out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                    return after + 6;
                }
            }
            self.error(ParseErrorKind::InvalidEscape, at);
            out.push(char::REPLACEMENT_CHARACTER);
            return after;
        }

        match char::from_u32(high) {
            Some(c) => out.push(c),
            None => {
                self.error(ParseErrorKind::InvalidEscape, at);
                out.push(char::REPLACEMENT_CHARACTER);
            }
        }
        after
    }

    fn hex4(&self, from: usize, stop: usize) -> Option<u32> {
        if from + 4 > stop {
            return None;
        }
        let digits = std::str::from_utf8(&self.data[from..from + 4]).ok()?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok()
    }
}

fn lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(parsed: &Parsed) -> Vec<ParseErrorKind> {
        parsed.errors.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_scalars() {
        let parsed = parse(r#"{"s": "x", "i": -12, "f": 2.5, "e": 1e3, "t": true, "no": false, "n": null}"#);
        assert!(parsed.is_clean(), "{:?}", parsed.errors);
        let o = &parsed.object;
        assert_eq!(o.get("s"), Some(&Value::from("x")));
        assert_eq!(o.get("i"), Some(&Value::Integer(-12)));
        assert_eq!(o.get("f"), Some(&Value::Float(2.5)));
        assert_eq!(o.get("e"), Some(&Value::Float(1000.0)));
        assert_eq!(o.get("t"), Some(&Value::Bool(true)));
        assert_eq!(o.get("no"), Some(&Value::Bool(false)));
        assert_eq!(o.get("n"), Some(&Value::Null));
        let keys: Vec<&str> = o.keys().collect();
        assert_eq!(keys, vec!["s", "i", "f", "e", "t", "no", "n"]);
    }

    #[test]
    fn test_nested_containers() {
        let parsed = parse(r#"{"a": {"b": [1, [2, {"c": "}"}], "]"]}, "d": []}"#);
        assert!(parsed.is_clean(), "{:?}", parsed.errors);
        let b = parsed
            .object
            .get("a")
            .and_then(Value::as_object)
            .and_then(|a| a.get("b"))
            .and_then(Value::as_array)
            .unwrap();
        assert_eq!(b.len(), 3);
        assert_eq!(b.get(2), Some(&Value::from("]")));
        let inner = b.get(1).and_then(Value::as_array).unwrap();
        let c = inner.get(1).and_then(Value::as_object).unwrap();
        assert_eq!(c.get("c"), Some(&Value::from("}")));
        assert_eq!(parsed.object.get("d").and_then(Value::as_array).map(Array::len), Some(0));
    }

    #[test]
    fn test_missing_value_skips_key() {
        let parsed = parse(r#"{"a": 1, "b": }"#);
        assert_eq!(kinds(&parsed), vec![ParseErrorKind::MissingValue]);
        assert_eq!(parsed.object.get("a"), Some(&Value::Integer(1)));
        assert!(!parsed.object.contains_key("b"));

        let parsed = parse(r#"{"a": , "b": 2}"#);
        assert_eq!(parsed.error_count(), 1);
        assert_eq!(parsed.object.len(), 1);
        assert_eq!(parsed.object.get("b"), Some(&Value::Integer(2)));
    }

    #[test]
    fn test_bare_body_without_braces() {
        let parsed = parse("\"a\": 1,\n\"b\": \"two\"");
        assert!(parsed.is_clean());
        assert_eq!(parsed.object.len(), 2);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(parse("").is_clean());
        assert!(parse("  {  }  ").object.is_empty());
        assert!(parse("{\n}").is_clean());
    }

    #[test]
    fn test_unterminated_string() {
        let parsed = parse(r#"{"a": 1, "b": "open}"#);
        assert_eq!(
            kinds(&parsed),
            vec![ParseErrorKind::UnmatchedBrace, ParseErrorKind::UnterminatedString]
        );
        assert_eq!(parsed.object.get("a"), Some(&Value::Integer(1)));
        assert_eq!(parsed.object.len(), 1);
    }

    #[test]
    fn test_unmatched_brace_reads_rest() {
        let parsed = parse(r#"{"a": 1, "b": 2"#);
        assert_eq!(kinds(&parsed), vec![ParseErrorKind::UnmatchedBrace]);
        assert_eq!(parsed.object.len(), 2);

        let parsed = parse(r#"{"a": [1, 2}"#);
        assert_eq!(kinds(&parsed), vec![ParseErrorKind::UnmatchedBracket]);
        let a = parsed.object.get("a").and_then(Value::as_array).unwrap();
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_bad_tokens_are_skipped() {
        let parsed = parse(r#"{"a": tru, "b": 1.2.3, "c": 99999999999999999999, x: 1, "d": @, "e": 5}"#);
        assert_eq!(
            kinds(&parsed),
            vec![
                ParseErrorKind::InvalidLiteral,
                ParseErrorKind::InvalidNumber,
                ParseErrorKind::InvalidNumber,
                ParseErrorKind::ExpectedKey,
                ParseErrorKind::InvalidLiteral,
            ]
        );
        let keys: Vec<&str> = parsed.object.keys().collect();
        assert_eq!(keys, vec!["e"]);
    }

    #[test]
    fn test_missing_colon_is_tolerated() {
        let parsed = parse(r#"{"a" 1}"#);
        assert_eq!(kinds(&parsed), vec![ParseErrorKind::MissingColon]);
        assert_eq!(parsed.object.get("a"), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_escapes() {
        let parsed = parse(r#"{"k\"ey": "a\\b\/c\n\t\r\b\fé😀"}"#);
        assert!(parsed.is_clean(), "{:?}", parsed.errors);
        assert_eq!(
            parsed.object.get("k\"ey"),
            Some(&Value::from("a\\b/c\n\t\r\u{8}\u{c}é😀"))
        );

        let parsed = parse(r#"{"a": "\q\ud800x\u12"}"#);
        assert_eq!(
            kinds(&parsed),
            vec![
                ParseErrorKind::InvalidEscape,
                ParseErrorKind::InvalidEscape,
                ParseErrorKind::InvalidEscape,
            ]
        );
        assert_eq!(parsed.object.get("a"), Some(&Value::from("q\u{FFFD}x\u{FFFD}12")));
    }

    #[test]
    fn test_invalid_escape_keeps_multibyte_char() {
        let parsed = parse("{\"a\": \"x\\\u{e9}y\", \"b\": \"\\\u{1F600}\"}");
        assert_eq!(kinds(&parsed), vec![ParseErrorKind::InvalidEscape, ParseErrorKind::InvalidEscape]);
        assert_eq!(parsed.object.get("a"), Some(&Value::from("x\u{e9}y")));
        assert_eq!(parsed.object.get("b"), Some(&Value::from("\u{1F600}")));
    }

    #[test]
    fn test_float_out_of_range_is_rejected() {
        let parsed = parse(r#"{"f": 1e39, "g": -1e40, "h": 1e38, "z": 1e-50}"#);
        assert_eq!(kinds(&parsed), vec![ParseErrorKind::InvalidNumber, ParseErrorKind::InvalidNumber]);
        assert_eq!(parsed.object.get("f"), None);
        assert_eq!(parsed.object.get("g"), None);
        assert_eq!(parsed.object.get("h"), Some(&Value::Float(1e38)));
        assert_eq!(parsed.object.get("z"), Some(&Value::Float(0.0)));
    }

    #[test]
    fn test_duplicate_keys_last_wins_first_position() {
        let parsed = parse(r#"{"a": 1, "b": 2, "a": 3}"#);
        let pairs: Vec<(&str, &Value)> = parsed.object.iter().collect();
        assert_eq!(pairs, vec![("a", &Value::Integer(3)), ("b", &Value::Integer(2))]);
    }

    #[test]
    fn test_depth_limit() {
        let reader = JsonReader::with_options(ReaderOptions { max_depth: 2 });
        let parsed = reader.parse(r#"{"a": {"b": {"c": 1}}, "d": 4}"#);
        assert_eq!(kinds(&parsed), vec![ParseErrorKind::DepthExceeded]);
        let a = parsed.object.get("a").and_then(Value::as_object).unwrap();
        assert!(a.is_empty());
        assert_eq!(parsed.object.get("d"), Some(&Value::Integer(4)));
    }

    #[test]
    fn test_trailing_characters() {
        let parsed = parse("{\"a\": 1} extra");
        assert_eq!(kinds(&parsed), vec![ParseErrorKind::TrailingCharacters]);
        assert_eq!(parsed.object.len(), 1);
    }

    #[test]
    fn test_parse_value_roots() {
        assert_eq!(parse_value(" 42 ").value, Value::Integer(42));
        assert_eq!(parse_value("\"s\"").value, Value::from("s"));
        let arr = parse_value("[1, \"x\"]").value;
        assert_eq!(arr.as_array().map(Array::len), Some(2));
        let empty = parse_value("");
        assert_eq!(empty.value, Value::Null);
        assert_eq!(empty.error_count(), 1);
    }

    #[test]
    fn test_parse_strict() {
        assert!(parse_strict(r#"{"a": 1}"#).is_ok());
        match parse_strict(r#"{"a": }"#) {
            Err(JsonError::Parse(err)) => {
                assert_eq!(err.kind, ParseErrorKind::MissingValue);
                assert_eq!(err.offset, 6);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
