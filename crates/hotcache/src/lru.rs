//! Single-threaded LRU core: hash index + recency list
//!
//! The index maps each key to its node handle in the recency list; the two
//! structures are kept in lockstep so lookup, insert, and eviction are all
//! O(1). Thread safety lives one layer up, in [`crate::cache::HotCache`].

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

use crate::error::{Error, Result};
use crate::list::RecencyList;

/// LRU cache with fixed capacity
///
/// Every key present in the index maps to exactly one live node in the
/// recency list, and vice versa. `len() <= capacity()` holds between any
/// two calls.
pub struct LruCache<K, V> {
    map: HashMap<K, usize, RandomState>,
    list: RecencyList<K, V>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache with the given capacity
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries; must be at least 1
    ///
    /// # Returns
    /// * `Result<LruCache>` - Empty cache, or `Error::InvalidCapacity`
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            list: RecencyList::with_capacity(capacity),
            capacity,
        })
    }

    /// Get a value from the cache, marking the key most recently used
    ///
    /// A hit only reorders the recency list; the set of keys and their
    /// values are unchanged. A miss returns `None`.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.list.move_to_front(idx);
        self.list.value(idx)
    }

    /// Insert or update a key-value pair
    ///
    /// An existing key has its value overwritten in place and is marked
    /// most recently used; the index is untouched. A new key that would
    /// overflow the capacity first evicts the least recently used entry,
    /// which is returned so callers can account for it. Eviction happens
    /// only here, exactly once per overflowing insert.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            // Update existing
            self.list.set_value(idx, value);
            self.list.move_to_front(idx);
            return None;
        }

        let mut evicted = None;
        if self.map.len() >= self.capacity {
            if let Some((old_key, old_value)) = self.list.pop_back() {
                self.map.remove(&old_key);
                evicted = Some((old_key, old_value));
            }
        }

        let idx = self.list.push_front(key.clone(), value);
        self.map.insert(key, idx);
        evicted
    }

    /// Remove a key from the cache, returning its value
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.map.remove(key)?;
        self.list.remove(idx).map(|(_, value)| value)
    }

    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get the fixed capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear the cache
    pub fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }

    #[cfg(test)]
    fn keys_by_recency(&self) -> Vec<K> {
        self.list.iter().map(|(k, _)| k.clone()).collect()
    }
}
