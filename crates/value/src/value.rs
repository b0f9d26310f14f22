use std::fmt;
use std::mem;

use crate::{Array, Object};

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f32),
    Bool(bool),
    #[default]
    Null,
    Array(Array),
    Object(Object),
}

/// Fieldless tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Bool,
    Null,
    Array,
    Object,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::Null => "null",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::Null => ValueKind::Null,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric read: floats as stored, integers converted.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(n) => Some(*n as f32),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Moves the value out, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        mem::take(self)
    }
}

// ── Conversions ──────────────────────────────────────────────────────────

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Integer(i64::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f as f32)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(Value::from(3u8).kind(), ValueKind::Integer);
        assert_eq!(Value::from(1.5f32).kind(), ValueKind::Float);
        assert_eq!(Value::from(None::<i32>).kind(), ValueKind::Null);
        assert_eq!(Value::from(Object::new()).kind().to_string(), "object");
    }

    #[test]
    fn test_accessors_reject_other_kinds() {
        let v = Value::from(7);
        assert_eq!(v.as_i64(), Some(7));
        assert_eq!(v.as_f32(), Some(7.0));
        assert_eq!(v.as_str(), None);
        assert_eq!(v.as_bool(), None);
        assert!(v.as_array().is_none());
        assert!(v.as_object().is_none());
    }

    #[test]
    fn test_take_leaves_null() {
        let mut v = Value::from("moved");
        let taken = v.take();
        assert!(v.is_null());
        assert_eq!(taken.as_str(), Some("moved"));
    }

    #[test]
    fn test_mutable_access() {
        let mut v = Value::from(Array::new());
        if let Some(arr) = v.as_array_mut() {
            arr.push(true);
        }
        assert_eq!(v.as_array().map(Array::len), Some(1));
    }
}
