use std::fmt;

use tagtree_buffers::GrowableBuffer;

use crate::Value;

/// Ordered key/value store.
///
/// Pairs keep insertion order and keys are unique. Lookup is a linear scan,
/// which suits the small objects typical of configuration documents.
#[derive(Clone, Default)]
pub struct Object {
    pairs: GrowableBuffer<(String, Value)>,
}

impl Object {
    pub fn new() -> Self {
        Self {
            pairs: GrowableBuffer::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: GrowableBuffer::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.pairs.iter().position(|(k, _)| k == key)
    }

    /// Sets `key` to `value`.
    ///
    /// An existing key is overwritten in place and its old value returned;
    /// otherwise the pair is appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(index) => self
                .pairs
                .get_mut(index)
                .map(|(_, slot)| std::mem::replace(slot, value)),
            None => {
                self.pairs.push((key, value));
                None
            }
        }
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<Value> {
        self.set(key, Value::String(value.into()))
    }

    pub fn set_integer(&mut self, key: impl Into<String>, value: i64) -> Option<Value> {
        self.set(key, Value::Integer(value))
    }

    pub fn set_float(&mut self, key: impl Into<String>, value: f32) -> Option<Value> {
        self.set(key, Value::Float(value))
    }

    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) -> Option<Value> {
        self.set(key, Value::Bool(value))
    }

    /// Stores an explicit null. The key stays present.
    pub fn set_null(&mut self, key: impl Into<String>) -> Option<Value> {
        self.set(key, Value::Null)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.pairs
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_pair(&self, key: &str) -> Option<(&str, &Value)> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Removes `key`, keeping the order of the remaining pairs.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.position(key)?;
        self.pairs.pop_at(index).map(|(_, v)| v)
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> + '_ {
        self.pairs.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.pairs.iter().map(|(_, v)| v)
    }
}

/// Key order does not matter for equality.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| v == o))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Object
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (k, v) in iter {
            object.set(k, v);
        }
        object
    }
}

impl<K, V> Extend<(K, V)> for Object
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}
