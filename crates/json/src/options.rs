use serde::{Deserialize, Serialize};

/// Output layout for [`JsonWriter`](crate::JsonWriter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// One level of indentation.
    pub indent: String,
    /// Fractional digits written for floats. Values below 1 are treated as 1
    /// so that a float never reads back as an integer.
    pub float_precision: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            float_precision: 6,
        }
    }
}

impl WriterOptions {
    /// Indentation of `width` spaces per level.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }

    pub fn with_float_precision(mut self, precision: usize) -> Self {
        self.float_precision = precision;
        self
    }
}

/// Limits for [`JsonReader`](crate::JsonReader).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Deepest container nesting accepted; the root object is depth 1.
    pub max_depth: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let w = WriterOptions::default();
        assert_eq!(w.indent, "    ");
        assert_eq!(w.float_precision, 6);
        assert_eq!(ReaderOptions::default().max_depth, 128);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let w: WriterOptions = serde_json::from_str(r#"{"float_precision": 2}"#).unwrap();
        assert_eq!(w.indent, "    ");
        assert_eq!(w.float_precision, 2);

        let r: ReaderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(r, ReaderOptions::default());
    }

    #[test]
    fn test_builders() {
        let w = WriterOptions::default().with_indent_width(2).with_float_precision(3);
        assert_eq!(w.indent, "  ");
        assert_eq!(w.float_precision, 3);
    }
}
