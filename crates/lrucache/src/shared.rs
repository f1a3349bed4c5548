//! Thread-safe handle around a single [`LruCache`]

use std::hash::Hash;
use std::sync::Arc;
use parking_lot::Mutex;

use crate::cache::LruCache;
use crate::config::CacheConfig;
use crate::entry::Entry;
use crate::error::Result;
use crate::stats::StatsSnapshot;

/// Cloneable, lock-guarded LRU cache
///
/// Every call takes one mutex for the whole operation. A `get` reorders
/// the recency list, so reads need exclusive access as well.
pub struct SharedLruCache<K, V> {
    inner: Arc<Mutex<LruCache<K, V>>>,
}

impl<K, V> Clone for SharedLruCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SharedLruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a shared cache with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self::from_cache(LruCache::new(capacity))
    }

    /// Create a shared cache from validated settings
    pub fn with_config(config: &CacheConfig) -> Result<Self> {
        Ok(Self::from_cache(LruCache::with_config(config)?))
    }

    /// Wrap an existing cache
    pub fn from_cache(cache: LruCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Get a copy of a value and mark it most recently used
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().get(key).cloned()
    }

    /// Insert or update a key-value pair
    pub fn put(&self, key: K, value: V) -> Result<()> {
        self.inner.lock().put(key, value)
    }

    /// Remove a key from the cache
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    /// Check if the cache contains a key
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Snapshot of every entry, most recently used first
    pub fn dump_keys(&self) -> Vec<Entry<K, V>> {
        self.inner.lock().dump_keys()
    }

    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Copy of the current statistics
    pub fn stats_snapshot(&self) -> StatsSnapshot {
        self.inner.lock().stats().snapshot()
    }
}
