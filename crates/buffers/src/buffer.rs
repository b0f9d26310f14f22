//! Growable, typed element buffer with explicit capacity bookkeeping.
//!
//! Every container in the workspace stores its elements in a
//! [`GrowableBuffer`]. Unlike a bare `Vec`, the buffer tracks a logical
//! capacity that follows a fixed policy: it starts at one slot, doubles when
//! an insertion does not fit, and only shrinks on an explicit
//! [`pack`](GrowableBuffer::pack), [`reserve`](GrowableBuffer::reserve),
//! [`clear`](GrowableBuffer::clear) or
//! [`remove_range`](GrowableBuffer::remove_range).
//!
//! Out-of-range indices are not fatal: they are logged and the operation
//! degrades to the nearest boundary (a push past the end appends, a pop past
//! the end pops the last element). Allocation failure aborts the process.
//!
//! # Example
//!
//! ```
//! use tagtree_buffers::GrowableBuffer;
//!
//! let mut buf = GrowableBuffer::new();
//! buf.push(1);
//! buf.push(3);
//! buf.push_at(1, 2);
//! assert_eq!(buf.as_slice(), &[1, 2, 3]);
//! assert_eq!(buf.capacity(), 4);
//!
//! buf.remove_range(0, 2);
//! assert_eq!(buf.as_slice(), &[3]);
//! assert_eq!(buf.capacity(), 1);
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

pub struct GrowableBuffer<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Default for GrowableBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GrowableBuffer<T> {
    /// Creates an empty buffer with a capacity of one slot.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty buffer with room for `capacity` elements (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = Self {
            items: Vec::new(),
            capacity: 0,
        };
        buf.allocate(capacity.max(1));
        buf
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of allocated slots. Always at least 1 and never below `len`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reallocates to exactly `new_capacity` slots (minimum 1).
    ///
    /// Shrinking below the current length drops the tail elements.
    pub fn reserve(&mut self, new_capacity: usize) {
        let new_capacity = new_capacity.max(1);
        if new_capacity < self.items.len() {
            self.items.truncate(new_capacity);
        }
        self.allocate(new_capacity);
    }

    /// Shrinks the capacity down to the current length.
    pub fn pack(&mut self) {
        self.reserve(self.items.len());
    }

    /// Drops every element and collapses the capacity to one slot.
    pub fn clear(&mut self) {
        self.items.clear();
        self.allocate(1);
    }

    /// Appends an element.
    pub fn push(&mut self, value: T) {
        let len = self.items.len();
        self.grow_for(len + 1);
        self.items.push(value);
        self.check_invariants();
    }

    /// Inserts an element at `index`, shifting the tail right.
    ///
    /// An index past the end is logged and the element is appended.
    pub fn push_at(&mut self, index: usize, value: T) {
        let index = self.clamp_insert_index(index);
        let len = self.items.len();
        self.grow_for(len + 1);
        self.items.insert(index, value);
        self.check_invariants();
    }

    /// Inserts a run of elements at `index`, shifting the tail right.
    ///
    /// Capacity doubles until `len + elements.len()` fits. An index past the
    /// end is logged and the run is appended.
    pub fn insert_at(&mut self, index: usize, elements: &[T])
    where
        T: Clone,
    {
        if elements.is_empty() {
            return;
        }
        let index = self.clamp_insert_index(index);
        let len = self.items.len();
        self.grow_for(len + elements.len());
        self.items
            .splice(index..index, elements.iter().cloned())
            .for_each(drop);
        self.check_invariants();
    }

    /// Appends a run of elements.
    pub fn extend_from_slice(&mut self, elements: &[T])
    where
        T: Clone,
    {
        self.insert_at(self.items.len(), elements);
    }

    /// Removes `length` elements starting at `start`, then packs the capacity
    /// down to the new length. Returns the number of removed elements.
    ///
    /// A `start` at or past the end is logged and nothing is removed; a
    /// `length` running past the end is clamped to the tail.
    pub fn remove_range(&mut self, start: usize, length: usize) -> usize {
        let len = self.items.len();
        if start >= len {
            tracing::error!(start, len, "remove start out of bounds");
            return 0;
        }
        let end = start + length.min(len - start);
        self.items.drain(start..end);
        self.pack();
        end - start
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// An index past the end is logged and the last element is popped.
    /// Returns `None` (after logging) when the buffer is empty.
    pub fn pop_at(&mut self, index: usize) -> Option<T> {
        let len = self.items.len();
        if len == 0 {
            tracing::error!(index, "pop from empty buffer");
            return None;
        }
        let index = if index >= len {
            tracing::error!(index, len, "pop index out of bounds, popping last element");
            len - 1
        } else {
            index
        };
        Some(self.items.remove(index))
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Overwrites the element at `index`, returning the previous one.
    ///
    /// Out-of-range writes are logged and hand the value back as `Err`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, T> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => {
                tracing::error!(index, len, "set index out of bounds");
                Err(value)
            }
        }
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    fn clamp_insert_index(&self, index: usize) -> usize {
        let len = self.items.len();
        if index > len {
            tracing::error!(index, len, "insert index out of bounds, appending");
            len
        } else {
            index
        }
    }

    /// Doubles the capacity until `required` slots fit.
    fn grow_for(&mut self, required: usize) {
        let mut capacity = self.capacity;
        while required > capacity {
            capacity *= 2;
        }
        if capacity != self.capacity {
            self.allocate(capacity);
        }
    }

    fn allocate(&mut self, capacity: usize) {
        let len = self.items.len();
        if capacity > self.items.capacity() {
            if let Err(err) = self.items.try_reserve_exact(capacity - len) {
                tracing::error!(capacity, len, error = %err, "buffer allocation failed");
                std::process::abort();
            }
        } else if capacity < self.items.capacity() {
            self.items.shrink_to(capacity);
        }
        self.capacity = capacity;
        self.check_invariants();
    }

    #[inline]
    fn check_invariants(&self) {
        debug_assert!(self.capacity >= 1, "capacity collapsed to zero");
        debug_assert!(
            self.items.len() <= self.capacity,
            "len {} exceeds capacity {}",
            self.items.len(),
            self.capacity
        );
    }
}

impl<T: Clone> Clone for GrowableBuffer<T> {
    fn clone(&self) -> Self {
        let mut buf = Self::with_capacity(self.capacity);
        buf.items.extend(self.items.iter().cloned());
        buf
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T> Index<usize> for GrowableBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for GrowableBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> Extend<T> for GrowableBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for GrowableBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = Self::new();
        buf.extend(iter);
        buf
    }
}

impl<T> IntoIterator for GrowableBuffer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowableBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
