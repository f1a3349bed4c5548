//! Key index: O(1) key to node lookup

use std::collections::HashMap;
use std::hash::Hash;
use ahash::RandomState;

use crate::entry::NodeId;

/// Maps each cached key to the node that holds it
pub(crate) struct Index<K> {
    map: HashMap<K, NodeId, RandomState>,
}

impl<K> Index<K>
where
    K: Hash + Eq,
{
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    pub(crate) fn get(&self, key: &K) -> Option<NodeId> {
        self.map.get(key).copied()
    }

    /// Insert or overwrite the mapping for `key`
    pub(crate) fn insert(&mut self, key: K, id: NodeId) {
        self.map.insert(key, id);
    }

    /// Drop the mapping for `key`, if any
    pub(crate) fn remove(&mut self, key: &K) -> Option<NodeId> {
        self.map.remove(key)
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}
