use std::fmt;
use std::mem;

use tagtree_buffers::GrowableBuffer;
use tagtree_util::digest::hash64;

use crate::SortedSet;

/// Maps key bytes to a 64-bit hash.
pub trait KeyHasher {
    fn hash(&self, key: &[u8]) -> u64;
}

/// [`hash64`] from `tagtree-util`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultKeyHasher;

impl KeyHasher for DefaultKeyHasher {
    #[inline]
    fn hash(&self, key: &[u8]) -> u64 {
        hash64(key)
    }
}

impl<F> KeyHasher for F
where
    F: Fn(&[u8]) -> u64,
{
    #[inline]
    fn hash(&self, key: &[u8]) -> u64 {
        self(key)
    }
}

// Entries whose keys share one hash. Never empty while stored.
type Bucket<V> = GrowableBuffer<(String, V)>;

/// String-keyed map over a sorted array of hashes.
///
/// Position `i` of the hash set and position `i` of the bucket buffer always
/// describe the same hash. Buckets keep the full key, so two keys that hash
/// alike are still told apart. Iteration follows hash order.
///
/// # Example
///
/// ```
/// use tagtree_collections::HashIndex;
///
/// let mut index = HashIndex::new();
/// assert_eq!(index.set("alpha", 1), None);
/// assert_eq!(index.set("alpha", 2), Some(1));
/// assert_eq!(index.get("alpha"), Some(&2));
/// assert_eq!(index.remove("alpha"), Some(2));
/// assert!(!index.contains("alpha"));
/// ```
pub struct HashIndex<V, H = DefaultKeyHasher> {
    hashes: SortedSet<u64>,
    buckets: GrowableBuffer<Bucket<V>>,
    hasher: H,
    len: usize,
}

impl<V> HashIndex<V, DefaultKeyHasher> {
    pub fn new() -> Self {
        Self::with_hasher(DefaultKeyHasher)
    }
}

impl<V> Default for HashIndex<V, DefaultKeyHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, H: KeyHasher> HashIndex<V, H> {
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            hashes: SortedSet::new(),
            buckets: GrowableBuffer::new(),
            hasher,
            len: 0,
        }
    }

    /// Number of keys stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts or overwrites `key`, returning the previous value.
    pub fn set(&mut self, key: &str, value: V) -> Option<V> {
        let hash = self.hasher.hash(key.as_bytes());
        let (fresh, position) = self.hashes.force_add(hash);
        if fresh {
            let mut bucket = GrowableBuffer::new();
            bucket.push((key.to_owned(), value));
            self.buckets.push_at(position, bucket);
            self.len += 1;
            self.check_lockstep();
            return None;
        }

        let bucket = self.buckets.get_mut(position)?;
        match bucket.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => Some(mem::replace(slot, value)),
            None => {
                tracing::trace!(key, hash, "hash collision");
                bucket.push((key.to_owned(), value));
                self.len += 1;
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let (position, entry) = self.locate(key)?;
        self.buckets
            .get(position)
            .and_then(|bucket| bucket.get(entry))
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let (position, entry) = self.locate(key)?;
        self.buckets
            .get_mut(position)
            .and_then(|bucket| bucket.get_mut(entry))
            .map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.locate(key).is_some()
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let (position, entry) = self.locate(key)?;
        let bucket = self.buckets.get_mut(position)?;
        let (_, value) = bucket.pop_at(entry)?;
        if bucket.is_empty() {
            self.buckets.pop_at(position);
            self.hashes.remove_at(position);
        }
        self.len -= 1;
        self.check_lockstep();
        Some(value)
    }

    pub fn clear(&mut self) {
        self.hashes.clear();
        self.buckets.clear();
        self.len = 0;
    }

    /// `(key, value)` pairs in hash order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k.as_str(), v)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    // (bucket position, entry within bucket)
    fn locate(&self, key: &str) -> Option<(usize, usize)> {
        let hash = self.hasher.hash(key.as_bytes());
        let position = self.hashes.index_of(&hash)?;
        let entry = self
            .buckets
            .get(position)?
            .iter()
            .position(|(k, _)| k == key)?;
        Some((position, entry))
    }

    #[inline]
    fn check_lockstep(&self) {
        debug_assert_eq!(
            self.hashes.len(),
            self.buckets.len(),
            "hash set and buckets out of step"
        );
        debug_assert!(self.buckets.iter().all(|bucket| !bucket.is_empty()));
    }
}

impl<V: fmt::Debug, H> fmt::Debug for HashIndex<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.buckets
                    .iter()
                    .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v))),
            )
            .finish()
    }
}

impl<V: Clone, H: Clone> Clone for HashIndex<V, H> {
    fn clone(&self) -> Self {
        Self {
            hashes: self.hashes.clone(),
            buckets: self.buckets.clone(),
            hasher: self.hasher.clone(),
            len: self.len,
        }
    }
}
