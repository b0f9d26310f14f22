use std::cmp::Ordering;
use std::fmt;

use tagtree_buffers::GrowableBuffer;

fn default_comparator<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// A set kept as a dense, strictly ascending array.
///
/// Elements live in a [`GrowableBuffer`] ordered by a three-way comparator.
/// Lookups are O(log n); insertions and removals shift the tail and are O(n).
/// Indices are therefore not stable across mutations.
///
/// # Example
///
/// ```
/// use tagtree_collections::SortedSet;
///
/// let mut set = SortedSet::new();
/// for v in [1, 11, 5, 13, 4] {
///     set.add(v);
/// }
/// assert!(!set.add(5));
/// assert_eq!(set.as_slice(), &[1, 4, 5, 11, 13]);
/// assert_eq!(set.index_of(&11), Some(3));
/// ```
pub struct SortedSet<T, C = fn(&T, &T) -> Ordering>
where
    C: Fn(&T, &T) -> Ordering,
{
    data: GrowableBuffer<T>,
    comparator: C,
}

impl<T: Ord> SortedSet<T, fn(&T, &T) -> Ordering> {
    pub fn new() -> Self {
        Self::with_comparator(1, default_comparator::<T>)
    }
}

impl<T: Ord> Default for SortedSet<T, fn(&T, &T) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> SortedSet<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty set with room for `capacity` elements, ordered by
    /// `comparator`.
    pub fn with_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            data: GrowableBuffer::with_capacity(capacity),
            comparator,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Binary search with a probe that compares a stored element against the
    /// sought one.
    ///
    /// Returns `Ok(index)` of the matching element, or `Err(index)` where an
    /// element would have to be inserted to keep the order: `0` for a new
    /// minimum, `len()` for a new maximum.
    pub fn search_by<F>(&self, mut probe: F) -> Result<usize, usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        let items = self.data.as_slice();
        let mut lo = 0usize;
        let mut hi = items.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match probe(&items[mid]) {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Ok(mid),
            }
        }
        Err(lo)
    }

    /// Exact index of `value`, or its insertion index.
    pub fn search(&self, value: &T) -> Result<usize, usize> {
        let comparator = &self.comparator;
        self.search_by(|item| comparator(item, value))
    }

    /// Adds `value` unless an equal element is already present.
    pub fn add(&mut self, value: T) -> bool {
        match self.search(&value) {
            Ok(_) => false,
            Err(index) => {
                self.data.push_at(index, value);
                self.check_order();
                true
            }
        }
    }

    /// Inserts `value`, or overwrites the equal element in place.
    ///
    /// Returns whether the element is new and the index it now occupies.
    pub fn force_add(&mut self, value: T) -> (bool, usize) {
        match self.search(&value) {
            Ok(index) => {
                if let Some(slot) = self.data.get_mut(index) {
                    *slot = value;
                }
                (false, index)
            }
            Err(index) => {
                self.data.push_at(index, value);
                self.check_order();
                (true, index)
            }
        }
    }

    /// Removes the element equal to `value`.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.search(value) {
            Ok(index) => self.data.pop_at(index).is_some(),
            Err(_) => false,
        }
    }

    /// Removes the element at `index`. Out-of-range indices return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.data.len() {
            return None;
        }
        self.data.pop_at(index)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_ok()
    }

    /// Index of the element equal to `value`, or `None` when absent.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.search(value).ok()
    }

    pub fn value_at(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    fn check_order(&self) {
        debug_assert!(
            self.data
                .as_slice()
                .windows(2)
                .all(|w| (self.comparator)(&w[0], &w[1]) == Ordering::Less),
            "sorted set lost strict ascending order"
        );
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SortedSet<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.data.iter()).finish()
    }
}

impl<T: Clone, C: Clone> Clone for SortedSet<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a SortedSet<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T, fn(&T, &T) -> Ordering> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.add(value);
        }
        set
    }
}
