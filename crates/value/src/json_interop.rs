//! Conversions to and from `serde_json::Value`.
//!
//! Key order survives both directions (`preserve_order`). Numbers that do not
//! fit an `i64` become floats; floats that JSON cannot carry become null.

use serde_json::{Map, Number};

use crate::{Array, Object, Value};

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(0.0) as f32),
            },
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::Object(Object::from(map)),
        }
    }
}

impl From<&Map<String, serde_json::Value>> for Object {
    fn from(map: &Map<String, serde_json::Value>) -> Self {
        let mut object = Object::with_capacity(map.len());
        for (k, v) in map {
            object.set(k.as_str(), Value::from(v));
        }
        object
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Integer(n) => serde_json::Value::Number((*n).into()),
            Value::Float(f) => match Number::from_f64(f64::from(*f)) {
                Some(n) => serde_json::Value::Number(n),
                None => {
                    tracing::debug!(value = %f, "non-finite float converted to null");
                    serde_json::Value::Null
                }
            },
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(a) => serde_json::Value::from(a),
            Value::Object(o) => serde_json::Value::from(o),
        }
    }
}

impl From<&Array> for serde_json::Value {
    fn from(array: &Array) -> Self {
        serde_json::Value::Array(array.iter().map(serde_json::Value::from).collect())
    }
}

impl From<&Object> for serde_json::Value {
    fn from(object: &Object) -> Self {
        let mut map = Map::with_capacity(object.len());
        for (k, v) in object.iter() {
            map.insert(k.to_owned(), serde_json::Value::from(v));
        }
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_order_and_kinds() {
        let json = json!({"z": 1, "a": [true, null, "s"], "m": {"f": 1.5}, "big": 18446744073709551615u64});
        let value = Value::from(&json);
        let obj = value.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m", "big"]);
        assert_eq!(obj.get("z"), Some(&Value::Integer(1)));
        assert_eq!(obj.get("big").map(Value::kind), Some(crate::ValueKind::Float));
        let nested = obj.get("m").and_then(Value::as_object).unwrap();
        assert_eq!(nested.get("f"), Some(&Value::Float(1.5)));
    }

    #[test]
    fn test_to_json_roundtrip() {
        let json = json!({"name": "n", "list": [1, 2, {"deep": false}], "none": null});
        let back = serde_json::Value::from(&Value::from(&json));
        assert_eq!(back, json);
    }

    #[test]
    fn test_non_finite_float_becomes_null() {
        let json = serde_json::Value::from(&Value::Float(f32::NAN));
        assert!(json.is_null());
    }
}
