//! Arena-backed doubly linked recency list
//!
//! Nodes live in a `Vec` and link to each other by index, so handles stay
//! stable and no node ever owns another. Slots 0 and 1 are permanent head
//! and tail sentinels: every insert and unlink rewrites exactly two
//! neighbor links with no empty-list special cases.

/// Head sentinel slot, adjacent to the most recently used node
const HEAD: usize = 0;

/// Tail sentinel slot, adjacent to the least recently used node
const TAIL: usize = 1;

/// Node in the recency list
///
/// `data` is `None` only for the two sentinels and for freed slots awaiting
/// reuse.
struct Node<K, V> {
    data: Option<(K, V)>,
    prev: usize,
    next: usize,
}

/// Doubly linked list ordered by recency, most recent first
///
/// Handles returned by [`push_front`](RecencyList::push_front) are arena
/// indices; they remain valid until the node is removed or popped.
pub(crate) struct RecencyList<K, V> {
    nodes: Vec<Node<K, V>>,
    free: Vec<usize>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    /// Create an empty list with room reserved for `capacity` data nodes
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 2);
        nodes.push(Node {
            data: None,
            prev: HEAD,
            next: TAIL,
        });
        nodes.push(Node {
            data: None,
            prev: HEAD,
            next: TAIL,
        });

        Self {
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of data nodes in the list
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the list holds no data nodes
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocate a node for (key, value) and link it at the front
    ///
    /// Returns the node's handle. Freed slots are reused before the arena
    /// grows.
    pub fn push_front(&mut self, key: K, value: V) -> usize {
        let idx = if let Some(idx) = self.free.pop() {
            self.nodes[idx].data = Some((key, value));
            idx
        } else {
            self.nodes.push(Node {
                data: Some((key, value)),
                prev: HEAD,
                next: TAIL,
            });
            self.nodes.len() - 1
        };

        self.link_front(idx);
        self.len += 1;
        idx
    }

    /// Relink an existing node at the front (mark most recently used)
    pub fn move_to_front(&mut self, idx: usize) {
        if self.nodes[HEAD].next == idx {
            return; // Already at front
        }

        self.unlink(idx);
        self.link_front(idx);
    }

    /// Unlink and return the least recently used node
    ///
    /// Returns `None` on an empty list; callers maintain enough state to
    /// never hit that case.
    pub fn pop_back(&mut self) -> Option<(K, V)> {
        let idx = self.nodes[TAIL].prev;
        debug_assert_ne!(idx, HEAD, "pop_back on empty recency list");
        if idx == HEAD {
            return None;
        }

        self.remove(idx)
    }

    /// Unlink a node and free its slot, returning its (key, value)
    pub fn remove(&mut self, idx: usize) -> Option<(K, V)> {
        let data = self.nodes[idx].data.take()?;
        self.unlink(idx);
        self.free.push(idx);
        self.len -= 1;
        Some(data)
    }

    /// Get the value stored at a handle
    pub fn value(&self, idx: usize) -> Option<&V> {
        self.nodes[idx].data.as_ref().map(|(_, v)| v)
    }

    /// Overwrite the value stored at a handle, returning the old value
    pub fn set_value(&mut self, idx: usize, value: V) -> Option<V> {
        let (_, slot) = self.nodes[idx].data.as_mut()?;
        Some(std::mem::replace(slot, value))
    }

    /// Key of the most recently used node
    #[cfg(test)]
    pub fn front_key(&self) -> Option<&K> {
        self.nodes[self.nodes[HEAD].next].data.as_ref().map(|(k, _)| k)
    }

    /// Key of the least recently used node
    #[cfg(test)]
    pub fn back_key(&self) -> Option<&K> {
        self.nodes[self.nodes[TAIL].prev].data.as_ref().map(|(k, _)| k)
    }

    /// Iterate (key, value) pairs from most to least recently used
    #[cfg(test)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            current: self.nodes[HEAD].next,
        }
    }

    /// Drop every data node, keeping the sentinels pre-linked
    pub fn clear(&mut self) {
        self.nodes.truncate(2);
        self.nodes[HEAD].next = TAIL;
        self.nodes[TAIL].prev = HEAD;
        self.free.clear();
        self.len = 0;
    }

    fn link_front(&mut self, idx: usize) {
        let first = self.nodes[HEAD].next;
        self.nodes[idx].prev = HEAD;
        self.nodes[idx].next = first;
        self.nodes[first].prev = idx;
        self.nodes[HEAD].next = idx;
    }

    fn unlink(&mut self, idx: usize) {
        let prev = self.nodes[idx].prev;
        let next = self.nodes[idx].next;
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }
}

/// Iterator over a recency list, front (MRU) to back (LRU)
#[cfg(test)]
pub(crate) struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    current: usize,
}

#[cfg(test)]
impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == TAIL {
            return None;
        }

        let node = &self.list.nodes[self.current];
        self.current = node.next;
        node.data.as_ref().map(|(k, v)| (k, v))
    }
}
