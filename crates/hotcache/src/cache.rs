//! HotCache: thread-safe LRU cache handle

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Shared, thread-safe LRU cache
///
/// All operations take one exclusive lock for the full duration of the
/// call, so every `get`/`put` is atomic with respect to every other. A
/// `Mutex` rather than a `RwLock`: a hit must move the entry to the front
/// of the recency list, so even reads mutate and a read lock would never
/// be taken. Critical sections perform a constant number of index and
/// list operations, and the guard is released on every exit path.
///
/// Cloning the handle is cheap and shares the same underlying cache.
pub struct HotCache<K, V> {
    /// Index + recency list behind the cache-wide lock
    inner: Arc<Mutex<LruCache<K, V>>>,

    /// Hit/miss/eviction counters, updated without taking the lock
    stats: Arc<CacheStats>,
}

impl<K, V> Clone for HotCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            stats: Arc::clone(&self.stats),
        }
    }
}

impl<K, V> HotCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a new cache with the given capacity
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries; must be at least 1
    ///
    /// # Returns
    /// * `Result<HotCache>` - Empty cache, or `Error::InvalidCapacity`
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(Mutex::new(LruCache::new(capacity)?)),
            stats: Arc::new(CacheStats::new()),
        })
    }

    /// Get a value from the cache
    ///
    /// A hit marks the key most recently used and returns a clone of the
    /// stored value; callers never receive a reference into the cache's
    /// internal structure. A miss returns `None` and is counted, not
    /// treated as an error.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut cache = self.inner.lock();
        let value = cache.get(key).cloned();
        drop(cache);

        match value {
            Some(value) => {
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Insert or update a key-value pair
    ///
    /// Never fails: when the cache is full and the key is new, the least
    /// recently used entry is evicted to make room.
    pub fn put(&self, key: K, value: V) {
        let mut cache = self.inner.lock();
        let evicted = cache.put(key, value);
        drop(cache);

        self.stats.record_insert();
        if evicted.is_some() {
            self.stats.record_eviction();
        }
    }

    /// Remove a key from the cache, returning its value
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Get the fixed capacity
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Clear the cache and reset its statistics
    pub fn clear(&self) {
        self.inner.lock().clear();
        self.stats.reset();
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
