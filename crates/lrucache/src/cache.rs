//! LRU cache: recency list plus key index under a fixed capacity

use std::hash::Hash;
use tracing::{debug, trace, warn};

use crate::config::CacheConfig;
use crate::entry::Entry;
use crate::error::{Error, Miss, Result};
use crate::index::Index;
use crate::list::RecencyList;
use crate::stats::CacheStats;

/// Upper bound on slots reserved up front
const MAX_PREALLOC: usize = 4096;

/// Fixed-capacity cache with least-recently-used eviction
///
/// Every operation runs in O(1) amortized time. The cache is not
/// synchronized; share it across threads through
/// [`SharedLruCache`](crate::SharedLruCache).
pub struct LruCache<K, V> {
    /// Maximum number of entries
    capacity: usize,

    /// Entries ordered most to least recently used
    list: RecencyList<K, V>,

    /// Key to node lookup
    index: Index<K>,

    /// Cache statistics
    stats: CacheStats,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache with the given capacity
    ///
    /// A zero capacity is accepted here, but such a cache can never hold
    /// data: every `put` fails and every `get` misses.
    pub fn new(capacity: usize) -> Self {
        let reserve = capacity.min(MAX_PREALLOC);

        Self {
            capacity,
            list: RecencyList::with_capacity(reserve),
            index: Index::with_capacity(reserve),
            stats: CacheStats::new(),
        }
    }

    /// Create a cache from validated settings
    ///
    /// # Arguments
    /// * `config` - Cache settings
    ///
    /// # Returns
    /// * `Result<LruCache>` - `Error::ZeroCapacity` if the capacity is zero
    pub fn with_config(config: &CacheConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.capacity))
    }

    /// Get a value and mark it most recently used
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.try_get(key).ok()
    }

    /// Get a value, reporting why a lookup missed
    ///
    /// # Arguments
    /// * `key` - Key to look up
    ///
    /// # Returns
    /// * `Ok(&V)` - The cached value, now most recently used
    /// * `Err(Miss::Unavailable)` - The cache is empty or has zero capacity
    /// * `Err(Miss::NotFound)` - The key is not cached
    pub fn try_get(&mut self, key: &K) -> std::result::Result<&V, Miss> {
        if self.capacity == 0 || self.list.is_empty() {
            self.stats.record_miss();
            return Err(Miss::Unavailable);
        }

        let Some(id) = self.index.get(key) else {
            self.stats.record_miss();
            return Err(Miss::NotFound);
        };

        self.list.move_to_front(id);
        self.stats.record_hit();
        self.list
            .get(id)
            .map(|node| node.entry.value())
            .ok_or(Miss::NotFound)
    }

    /// Insert or update a key-value pair
    ///
    /// An existing key gets its value replaced and becomes most recently
    /// used. A new key goes to the front; if that pushes the cache over
    /// capacity the least recently used entry is evicted.
    ///
    /// # Returns
    /// * `Result<()>` - `Error::ZeroCapacity` if the cache cannot hold data
    pub fn put(&mut self, key: K, value: V) -> Result<()> {
        if self.capacity == 0 {
            warn!("put refused: cache capacity is 0");
            return Err(Error::ZeroCapacity);
        }

        if let Some(id) = self.index.get(&key) {
            // Update existing
            if let Some(node) = self.list.get_mut(id) {
                *node.entry.value_mut() = value;
            }
            self.list.move_to_front(id);
            self.stats.record_update();
            return Ok(());
        }

        let id = self.list.insert_front(Entry::new(key.clone(), value));
        self.index.insert(key, id);
        self.stats.record_insert();

        // Never more than one over capacity here
        if self.list.len() > self.capacity {
            self.evict();
        }

        Ok(())
    }

    /// Remove a key from the cache
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.list.remove(id).map(|entry| entry.into_parts().1)
    }

    /// Drop every entry
    ///
    /// Statistics are kept; reset them with [`CacheStats::reset`].
    pub fn clear(&mut self) {
        let dropped = self.list.len();
        self.list.clear();
        self.index.clear();
        if dropped > 0 {
            debug!(dropped, "cleared cache");
        }
    }

    /// Snapshot of every entry, most recently used first
    pub fn dump_keys(&self) -> Vec<Entry<K, V>>
    where
        V: Clone,
    {
        self.list.iter().cloned().collect()
    }

    /// Iterate entries from most to least recently used without promoting
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.list.iter().map(|entry| (entry.key(), entry.value()))
    }

    /// Get a value without touching recency or stats
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = self.index.get(key)?;
        self.list.get(id).map(|node| node.entry.value())
    }

    /// Check if the cache contains a key
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    /// The entry that would be evicted next
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let node = self.list.get(self.list.tail()?)?;
        Some((node.entry.key(), node.entry.value()))
    }

    /// Remove and return the least recently used entry
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let entry = self.list.pop_tail()?;
        self.index.remove(entry.key());
        Some(entry.into_parts())
    }

    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    fn evict(&mut self) {
        let slot = self.list.tail().map(|id| id.0);
        if let Some(entry) = self.list.pop_tail() {
            self.index.remove(entry.key());
            self.stats.record_eviction();
            trace!(?slot, "evicted least recently used entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::tests::assert_links;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::VecDeque;
    use std::fmt::Debug;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn assert_invariants<K: Hash + Eq + Clone + Debug, V>(cache: &LruCache<K, V>) {
        assert_eq!(cache.len(), cache.index.len());
        assert!(cache.len() <= cache.capacity());
        assert_links(&cache.list);
        for entry in cache.list.iter() {
            let id = cache.index.get(entry.key()).expect("listed key is indexed");
            let node = cache.list.get(id).expect("indexed node exists");
            assert_eq!(node.entry.key(), entry.key());
        }
    }

    fn keys<K: Hash + Eq + Clone, V>(cache: &LruCache<K, V>) -> Vec<K> {
        cache.iter().map(|(k, _)| k.clone()).collect()
    }

    #[test]
    fn test_lru_basic() {
        let mut cache = LruCache::new(2);

        cache.put(1, "a").unwrap();
        cache.put(2, "b").unwrap();

        assert_eq!(cache.get(&1), Some(&"a"));
        assert_eq!(cache.get(&2), Some(&"b"));
        assert_eq!(cache.len(), 2);
        assert_invariants(&cache);
    }

    #[test]
    fn test_capacity_one() {
        let mut cache = LruCache::new(1);

        cache.put(0, 0).unwrap();
        cache.put(1, 1).unwrap();
        cache.put(2, 2).unwrap();

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.try_get(&1), Err(Miss::NotFound));
        assert_eq!(cache.get(&2), Some(&2));
        assert_eq!(cache.stats().evictions(), 2);
        assert_invariants(&cache);
    }

    #[test]
    fn test_capacity_two_promotion() {
        let mut cache = LruCache::new(2);

        cache.put(1, 1).unwrap();
        cache.put(2, 2).unwrap();
        assert_eq!(cache.get(&1), Some(&1));
        cache.put(3, 3).unwrap();

        assert!(!cache.contains(&2));
        let mut present = keys(&cache);
        present.sort();
        assert_eq!(present, vec![1, 3]);
        assert_invariants(&cache);
    }

    #[test]
    fn test_eviction_order() {
        let mut cache = LruCache::new(3);
        for key in 0..4 {
            cache.put(key, key * 10).unwrap();
        }

        assert!(!cache.contains(&0));
        for key in 1..4 {
            assert!(cache.contains(&key));
        }
        assert_eq!(cache.stats().evictions(), 1);
    }

    #[test]
    fn test_put_update_promotes() {
        let mut cache = LruCache::new(2);

        cache.put("a", 1).unwrap();
        cache.put("b", 2).unwrap();
        cache.put("a", 10).unwrap(); // Move "a" to front
        cache.put("c", 3).unwrap(); // Should evict "b"

        assert_eq!(cache.get(&"a"), Some(&10));
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"c"), Some(&3));
        assert_eq!(cache.stats().updates(), 1);
        assert_eq!(cache.stats().inserts(), 3);
    }

    #[test]
    fn test_lru_overwrite() {
        let mut cache = LruCache::new(2);

        cache.put(1, "a").unwrap();
        cache.put(1, "b").unwrap();

        assert_eq!(cache.get(&1), Some(&"b"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_zero_capacity() {
        init_tracing();
        let mut cache: LruCache<u32, u32> = LruCache::new(0);

        assert_eq!(cache.put(1, 1), Err(Error::ZeroCapacity));
        assert_eq!(cache.put(2, 2), Err(Error::ZeroCapacity));
        assert_eq!(cache.try_get(&1), Err(Miss::Unavailable));
        assert_eq!(cache.get(&1), None);
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses(), 2);
    }

    #[test]
    fn test_empty_cache_miss() {
        let mut cache: LruCache<u32, u32> = LruCache::new(4);
        assert_eq!(cache.try_get(&1), Err(Miss::Unavailable));

        cache.put(2, 2).unwrap();
        assert_eq!(cache.try_get(&1), Err(Miss::NotFound));
    }

    #[test]
    fn test_with_config() {
        assert!(matches!(
            LruCache::<u32, u32>::with_config(&CacheConfig::new(0)),
            Err(Error::ZeroCapacity)
        ));

        let cache = LruCache::<u32, u32>::with_config(&CacheConfig::new(8)).unwrap();
        assert_eq!(cache.capacity(), 8);
    }

    #[test]
    fn test_lru_remove() {
        let mut cache = LruCache::new(3);

        cache.put(1, "a").unwrap();
        cache.put(2, "b").unwrap();
        cache.put(3, "c").unwrap();

        assert_eq!(cache.remove(&2), Some("b"));
        assert_eq!(cache.remove(&2), None);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&2), None);
        assert_invariants(&cache);

        // Freed slot is reused without disturbing order
        cache.put(4, "d").unwrap();
        assert_eq!(keys(&cache), vec![4, 3, 1]);
        assert_invariants(&cache);
    }

    #[test]
    fn test_lru_clear() {
        init_tracing();
        let mut cache = LruCache::new(3);

        cache.clear();
        assert!(cache.is_empty());

        cache.put(1, "a").unwrap();
        cache.put(2, "b").unwrap();
        cache.clear();

        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), None);

        cache.clear();
        assert!(cache.is_empty());

        cache.put(3, "c").unwrap();
        assert_eq!(cache.get(&3), Some(&"c"));
        assert_invariants(&cache);
    }

    #[test]
    fn test_dump_keys_recency_order() {
        let mut cache = LruCache::new(3);
        cache.put(1, 10).unwrap();
        cache.put(2, 20).unwrap();
        cache.put(3, 30).unwrap();
        cache.get(&1);

        let dumped: Vec<(i32, i32)> = cache
            .dump_keys()
            .into_iter()
            .map(Entry::into_parts)
            .collect();
        assert_eq!(dumped, vec![(1, 10), (3, 30), (2, 20)]);
    }

    #[test]
    fn test_peek_does_not_promote() {
        let mut cache = LruCache::new(2);
        cache.put(1, 1).unwrap();
        cache.put(2, 2).unwrap();

        assert_eq!(cache.peek(&1), Some(&1));
        assert_eq!(cache.peek_lru(), Some((&1, &1)));
        assert_eq!(cache.stats().hits(), 0);

        cache.put(3, 3).unwrap();
        assert_eq!(cache.peek(&1), None);
    }

    #[test]
    fn test_pop_lru() {
        let mut cache = LruCache::new(3);
        assert_eq!(cache.pop_lru(), None);

        cache.put("x", 1).unwrap();
        cache.put("y", 2).unwrap();
        cache.get(&"x");

        assert_eq!(cache.pop_lru(), Some(("y", 2)));
        assert!(!cache.contains(&"y"));
        assert_eq!(cache.len(), 1);
        assert_invariants(&cache);
    }

    #[test]
    fn test_random_ops_match_model() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for capacity in 1..6 {
            let mut cache = LruCache::new(capacity);
            // Most recent first
            let mut model: VecDeque<(u8, u32)> = VecDeque::new();

            for step in 0..2000u32 {
                let key = rng.gen_range(0..10u8);
                match rng.gen_range(0..10) {
                    0..=4 => {
                        cache.put(key, step).unwrap();
                        if let Some(pos) = model.iter().position(|(k, _)| *k == key) {
                            model.remove(pos);
                        }
                        model.push_front((key, step));
                        model.truncate(capacity);
                    }
                    5..=8 => {
                        let expected = model.iter().position(|(k, _)| *k == key).map(|pos| {
                            let item = model.remove(pos).unwrap_or((key, 0));
                            model.push_front(item);
                            item.1
                        });
                        assert_eq!(cache.get(&key).copied(), expected);
                    }
                    _ => {
                        let expected = model
                            .iter()
                            .position(|(k, _)| *k == key)
                            .and_then(|pos| model.remove(pos))
                            .map(|(_, v)| v);
                        assert_eq!(cache.remove(&key), expected);
                    }
                }

                assert!(cache.len() <= capacity);
                let snapshot: Vec<(u8, u32)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
                assert_eq!(snapshot, model.iter().copied().collect::<Vec<_>>());
            }
            assert_invariants(&cache);
        }
    }
}
