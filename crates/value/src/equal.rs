use crate::Value;

/// Deep equality with an absolute tolerance for floats.
///
/// Objects compare by key regardless of order, arrays element by element.
/// Values of different kinds are never equal; in particular an integer never
/// equals a float.
///
/// ```
/// use tagtree_value::{approx_eq, Value};
///
/// assert!(approx_eq(&Value::Float(0.1), &Value::Float(0.100_000_1), 1e-6));
/// assert!(!approx_eq(&Value::Float(1.0), &Value::Integer(1), 1e-6));
/// ```
pub fn approx_eq(a: &Value, b: &Value, epsilon: f32) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b || (a - b).abs() <= epsilon,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a
                    .iter()
                    .zip(arr_b.iter())
                    .all(|(a, b)| approx_eq(a, b, epsilon))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a.iter() {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !approx_eq(val_a, val_b, epsilon) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        _ => false,
    }
}
