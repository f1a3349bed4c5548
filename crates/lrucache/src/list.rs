//! Recency-ordered doubly linked list
//!
//! Nodes live in a slot arena and link to each other by [`NodeId`], so the
//! list never holds references into itself. Freed slots are recycled through
//! a free list. The head is the most recently used node, the tail the least.

use crate::entry::{Entry, Node, NodeId};

/// Doubly linked list over an arena of nodes
pub(crate) struct RecencyList<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    free: Vec<usize>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    /// Create an empty list with room for `capacity` nodes
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of linked nodes
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Most recently used node
    pub(crate) fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Least recently used node
    pub(crate) fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<K, V>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Allocate a node for `entry` and link it as the new head
    pub(crate) fn insert_front(&mut self, entry: Entry<K, V>) -> NodeId {
        let id = self.alloc(Node::detached(entry));
        self.push_front(id);
        id
    }

    /// Link a detached node as the new head
    ///
    /// On an empty list the node becomes both head and tail.
    pub(crate) fn push_front(&mut self, id: NodeId) {
        let old_head = self.head;

        match self.get_mut(id) {
            Some(node) => {
                node.prev = None;
                node.next = old_head;
            }
            None => return,
        }

        match old_head {
            Some(head_id) => {
                if let Some(head) = self.get_mut(head_id) {
                    head.prev = Some(id);
                }
            }
            None => {
                self.tail = Some(id);
            }
        }

        self.head = Some(id);
        self.len += 1;
    }

    /// Detach a node from its position, keeping its slot allocated
    pub(crate) fn unlink(&mut self, id: NodeId) {
        let (prev, next) = match self.get(id) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        // Only the head has no predecessor; anything else is already detached.
        if prev.is_none() && self.head != Some(id) {
            return;
        }

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.get_mut(prev_id) {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_id) => {
                if let Some(next_node) = self.get_mut(next_id) {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }

        if let Some(node) = self.get_mut(id) {
            node.prev = None;
            node.next = None;
        }
        self.len -= 1;
    }

    /// Promote a node to the head
    pub(crate) fn move_to_front(&mut self, id: NodeId) {
        if self.head == Some(id) {
            return;
        }

        self.unlink(id);
        self.push_front(id);
    }

    /// Remove the tail node and return its entry
    pub(crate) fn pop_tail(&mut self) -> Option<Entry<K, V>> {
        let tail = self.tail?;
        self.remove(tail)
    }

    /// Unlink a node and release its slot
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<Entry<K, V>> {
        self.get(id)?;
        self.unlink(id);
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        Some(node.entry)
    }

    /// Drop every node
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterate entries from head (most recent) to tail (least recent)
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.head(),
            remaining: self.len,
        }
    }

    fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        if let Some(slot) = self.free.pop() {
            self.slots[slot] = Some(node);
            NodeId(slot)
        } else {
            self.slots.push(Some(node));
            NodeId(self.slots.len() - 1)
        }
    }
}

/// Head-to-tail iterator over a [`RecencyList`]
pub(crate) struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.get(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
