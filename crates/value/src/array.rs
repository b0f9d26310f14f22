use tagtree_buffers::GrowableBuffer;

use crate::Value;

/// Ordered sequence of values.
///
/// Positional writes past the end are logged and clamped by the underlying
/// buffer; [`remove`](Array::remove) is the one strict variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    items: GrowableBuffer<Value>,
}

impl Array {
    pub fn new() -> Self {
        Self {
            items: GrowableBuffer::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: GrowableBuffer::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Inserts before `index`; past the end appends.
    pub fn push_at(&mut self, index: usize, value: impl Into<Value>) {
        self.items.push_at(index, value.into());
    }

    /// Replaces the element at `index`, returning the old one, or hands the
    /// value back when `index` is out of range.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<Value, Value> {
        self.items.set(index, value.into())
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Removes at `index`; past the end pops the last element.
    pub fn pop_at(&mut self, index: usize) -> Option<Value> {
        self.items.pop_at(index)
    }

    /// Removes at `index`, or returns `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index >= self.items.len() {
            return None;
        }
        self.items.pop_at(index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[Value] {
        self.items.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut array = Array::new();
        for v in iter {
            array.push(v);
        }
        array
    }
}

impl<V: Into<Value>> Extend<V> for Array {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_positional_ops() {
        let mut arr: Array = [1, 3].into_iter().collect();
        arr.push_at(1, 2);
        assert_eq!(arr.as_slice(), &[Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
        assert_eq!(arr.set(0, "one"), Ok(Value::Integer(1)));
        assert_eq!(arr.set(9, false), Err(Value::Bool(false)));
        assert_eq!(arr.pop(), Some(Value::Integer(3)));
        assert_eq!(arr.len(), 2);
    }

    #[test]
    fn test_out_of_range_is_clamped_or_rejected() {
        let mut arr: Array = ["a", "b"].into_iter().collect();
        arr.push_at(50, "c");
        assert_eq!(arr.get(2), Some(&Value::from("c")));
        assert_eq!(arr.pop_at(50), Some(Value::from("c")));
        assert_eq!(arr.remove(50), None);
        assert_eq!(arr.remove(0), Some(Value::from("a")));
        assert_eq!(arr.len(), 1);
    }

    #[test]
    fn test_empty_pop() {
        let mut arr = Array::new();
        assert_eq!(arr.pop(), None);
        assert_eq!(arr.pop_at(0), None);
        assert!(arr.is_empty());
    }
}
