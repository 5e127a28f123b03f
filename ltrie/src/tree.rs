//! The trie store.
//!
//! This module contains [`TrieStore`], a prefix tree keyed by lowercase ASCII strings. Nodes live
//! in an arena and refer to their children by index; every node except the root is owned by
//! exactly one parent slot. Removing a key prunes the nodes that only existed to reach it.

use tracing::{debug, trace};

use crate::error::TrieError;
use crate::keys::{slot_to_letter, LetterKey};
use crate::node::{Node, NodeId};
use crate::stats::{update_tree_stats, TreeStats, TreeStatsTrait};
use crate::utils::fillvector::FillVector;

/// A prefix tree mapping keys over `'a'..='z'` to values.
///
/// Keys share nodes for their common prefixes. A node only exists while it ends a key, or
/// leads to one: after any operation completes, no node other than the root is left without
/// both a value and children.
///
/// ## Examples
///
/// ```rust
/// use ltrie::TrieStore;
///
/// let mut trie = TrieStore::new();
/// trie.insert("ab", 1).unwrap();
/// trie.insert("abc", 2).unwrap();
///
/// assert_eq!(trie.get("ab"), Some(&1));
/// assert_eq!(trie.remove("ab"), Ok(1));
/// // "abc" still reaches its value through the nodes "ab" used to end at.
/// assert_eq!(trie.get("abc"), Some(&2));
/// assert!(trie.insert("Ab", 3).is_err());
/// ```
pub struct TrieStore<V = i32> {
    nodes: FillVector<Node<V>>,
    root: NodeId,
    num_keys: usize,
}

impl<V> Default for TrieStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TrieStore<V> {
    /// Create a new, empty trie. The root node is allocated up front and lives as long as the
    /// store.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create an empty trie with room for `capacity` nodes (root included) before the arena
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = FillVector::with_capacity(capacity.max(1));
        let root = nodes.add(|_| Node::new_root());
        Self {
            nodes,
            root,
            num_keys: 0,
        }
    }

    /// Insert a value under `key`, replacing any value already stored there.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(old_value))` if a previous value was replaced
    /// - `Ok(None)` if this was a new key
    /// - `Err(_)` if `key` is empty or has characters outside `'a'..='z'`; nothing is changed
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltrie::TrieStore;
    ///
    /// let mut trie = TrieStore::new();
    /// assert_eq!(trie.insert("key", 100), Ok(None));
    /// assert_eq!(trie.insert("key", 200), Ok(Some(100)));
    /// assert_eq!(trie.get("key"), Some(&200));
    /// ```
    #[inline]
    pub fn insert(&mut self, key: &str, value: V) -> Result<Option<V>, TrieError> {
        let key = LetterKey::new(key)?;
        Ok(self.insert_k(&key, value))
    }

    /// Insert using an already validated key.
    pub fn insert_k(&mut self, key: &LetterKey, value: V) -> Option<V> {
        let mut cur = self.root;
        for slot in key.slots() {
            cur = match self.nodes[cur].seek_child(slot) {
                Some(child) => child,
                None => {
                    let child = self.nodes.add(|_| Node::new_inner(slot));
                    self.nodes[cur].add_child(slot, child);
                    trace!(key = key.as_str(), slot, "created node");
                    child
                }
            };
        }

        let old = self.nodes[cur].value.replace(value);
        if old.is_none() {
            self.num_keys += 1;
        }
        old
    }

    /// Get a value by key. Invalid keys are never present, so they yield `None` too; use
    /// [`lookup`](Self::lookup) to tell the two apart.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.get_k(&LetterKey::new(key).ok()?)
    }

    /// Get a value by validated key.
    #[inline]
    pub fn get_k(&self, key: &LetterKey) -> Option<&V> {
        let id = self.find_node(key)?;
        self.nodes[id].value()
    }

    /// Get a mutable reference to the value stored under `key`.
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let key = LetterKey::new(key).ok()?;
        let id = self.find_node(&key)?;
        self.nodes[id].value_mut()
    }

    /// Look up `key`, reporting why nothing was found.
    ///
    /// A walk that runs out of nodes and a walk that ends on a node without a value (a prefix of
    /// longer keys only) are both `NotFound`.
    pub fn lookup(&self, key: &str) -> Result<&V, TrieError> {
        let k = LetterKey::new(key)?;
        self.get_k(&k)
            .ok_or_else(|| TrieError::NotFound(key.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`, returning its value and freeing every node that only existed to reach it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltrie::{TrieError, TrieStore};
    ///
    /// let mut trie = TrieStore::new();
    /// trie.insert("aa", 1).unwrap();
    /// trie.insert("ab", 2).unwrap();
    /// assert_eq!(trie.remove("ab"), Ok(2));
    /// assert_eq!(trie.remove("ab"), Err(TrieError::NotFound("ab".to_string())));
    /// assert_eq!(trie.get("aa"), Some(&1));
    /// ```
    pub fn remove(&mut self, key: &str) -> Result<V, TrieError> {
        let k = LetterKey::new(key)?;
        self.remove_k(&k)
            .ok_or_else(|| TrieError::NotFound(key.to_string()))
    }

    /// Remove using an already validated key. Returns `None`, changing nothing, when the key
    /// holds no value.
    pub fn remove_k(&mut self, key: &LetterKey) -> Option<V> {
        // path[d] is the node reached after consuming d letters; path[0] is the root.
        let mut path: Vec<NodeId> = Vec::with_capacity(key.len() + 1);
        // Depth of the deepest node above the target that has to survive. Defaults to the root.
        let mut anchor = 0;

        let mut cur = self.root;
        path.push(cur);
        for (depth, slot) in key.slots().enumerate() {
            let node = &self.nodes[cur];
            if depth > 0 && node.is_load_bearing() {
                anchor = depth;
            }
            cur = node.seek_child(slot)?;
            path.push(cur);
        }

        let target = &mut self.nodes[cur];
        let value = target.value.take()?;
        self.num_keys -= 1;

        // Longer keys run through the target; it stays as a plain path node.
        if target.num_children() > 0 {
            trace!(key = key.as_str(), "cleared value on prefix node");
            return Some(value);
        }

        let cut = key.at(anchor);
        debug_assert_eq!(self.nodes[path[anchor + 1]].letter, Some(slot_to_letter(cut)));
        let detached = self.nodes[path[anchor]].delete_child(cut);
        debug_assert_eq!(detached, Some(path[anchor + 1]));
        debug_assert!(anchor == 0 || !self.nodes[path[anchor]].is_dead());

        let freed = path.len() - (anchor + 1);
        for id in path.drain(anchor + 1..) {
            let node = self.nodes.free(id);
            debug_assert!(node.is_some_and(|n| n.value.is_none() && n.num_children() <= 1));
        }
        debug!(
            key = key.as_str(),
            cut_depth = anchor,
            freed,
            "pruned key path"
        );

        Some(value)
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.num_keys
    }

    pub fn is_empty(&self) -> bool {
        self.num_keys == 0
    }

    /// Number of live nodes, root included. An empty trie has exactly one.
    pub fn node_count(&self) -> usize {
        self.nodes.size()
    }

    /// Drop every key, leaving only the root.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = self.nodes.add(|_| Node::new_root());
        self.num_keys = 0;
    }

    /// Tear the store down.
    ///
    /// Whatever is still stored is freed along with the root. With the `strict_teardown` feature
    /// enabled, calling this on a trie that still holds keys is treated as a programming error
    /// and panics instead.
    pub fn destroy(self) {
        #[cfg(feature = "strict_teardown")]
        assert!(
            self.is_empty(),
            "destroying a trie that still holds {} key(s)",
            self.num_keys
        );
        debug!(
            remaining_keys = self.num_keys,
            nodes = self.nodes.size(),
            "destroying trie"
        );
    }

    /// Tear the store down only if every key has been removed; otherwise hand the store back
    /// untouched alongside the error.
    pub fn try_destroy(self) -> Result<(), (Self, TrieError)> {
        if !self.is_empty() {
            let remaining = self.num_keys;
            return Err((self, TrieError::NotEmpty { remaining }));
        }
        debug_assert_eq!(self.nodes.size(), 1);
        self.destroy();
        Ok(())
    }

    fn find_node(&self, key: &LetterKey) -> Option<NodeId> {
        let mut cur = self.root;
        for slot in key.slots() {
            cur = self.nodes[cur].seek_child(slot)?;
        }
        Some(cur)
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    #[cfg(test)]
    pub(crate) fn node(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id]
    }
}

impl<V> TreeStatsTrait for TrieStore<V> {
    fn get_tree_stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, height)) = stack.pop() {
            let node = &self.nodes[id];
            update_tree_stats(&mut stats, node, height);
            stack.extend(node.children.iter().map(|(_, child)| (child, height + 1)));
        }
        stats.arena_slots = self.nodes.slots();
        stats.finish();
        stats
    }
}
