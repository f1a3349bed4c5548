//! Cache entries and the list nodes that carry them

/// Handle to a node slot inside a [`RecencyList`](crate::list::RecencyList)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// A cached key/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Create a new entry
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// The entry's key
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The entry's value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Split the entry into its key and value
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

/// Node in the recency list
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) entry: Entry<K, V>,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    /// A node not yet linked into any list
    pub(crate) fn detached(entry: Entry<K, V>) -> Self {
        Self {
            entry,
            prev: None,
            next: None,
        }
    }
}
