//! Internal node implementation for the sequence map.
//!
//! Each `TrieNode` stands for every entry whose key starts with the elements
//! chosen on the way down from the root. A node owns its children outright;
//! nothing is shared between nodes or between maps.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// One level of the trie.
#[derive(Debug)]
pub(crate) struct TrieNode<K, V> {
    /// Child nodes indexed by the next key element
    pub children: HashMap<K, TrieNode<K, V>>,

    /// The value of the entry whose key ends exactly here, if any
    pub value: Option<V>,

    /// Number of live entries in this subtree, this node included
    pub count: usize,
}

impl<K, V> TrieNode<K, V> {
    /// Creates a new empty node with no value and no children
    pub fn new() -> Self {
        TrieNode {
            children: HashMap::new(),
            value: None,
            count: 0,
        }
    }

    /// A node without a value and without children holds nothing and must
    /// not stay attached below the root.
    pub fn is_dead(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Detaches every descendant, dropping them one at a time so that
    /// arbitrarily deep tries never recurse during drop.
    pub fn dismantle(&mut self) {
        let mut stack: Vec<TrieNode<K, V>> =
            self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
        self.count = if self.value.is_some() { 1 } else { 0 };
    }
}

impl<K: Hash + Eq, V> TrieNode<K, V> {
    /// Follows `key` one element per level and returns the node it ends on.
    pub fn find<Q>(&self, key: &[Q]) -> Option<&TrieNode<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let mut current = self;
        for element in key {
            current = current.children.get(element)?;
        }
        Some(current)
    }

    pub fn find_mut<Q>(&mut self, key: &[Q]) -> Option<&mut TrieNode<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let mut current = self;
        for element in key {
            current = current.children.get_mut(element)?;
        }
        Some(current)
    }

    /// Recounts the live entries below this node from scratch.
    ///
    /// Only used to cross-check the cached `count`.
    #[cfg(test)]
    pub fn subtree_size(&self) -> usize {
        let mut total = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.value.is_some() {
                total += 1;
            }
            stack.extend(node.children.values());
        }
        total
    }

    /// Panics unless every cached count is exact and no node below this
    /// one is dead.
    #[cfg(test)]
    pub fn assert_well_formed(&self) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            assert_eq!(node.count, node.subtree_size(), "cached count drifted");
            for child in node.children.values() {
                assert!(!child.is_dead(), "dead node left attached");
                stack.push(child);
            }
        }
    }
}

impl<K, V> Default for TrieNode<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: u32) -> TrieNode<&'static str, u32> {
        let mut node = TrieNode::new();
        node.value = Some(value);
        node.count = 1;
        node
    }

    #[test]
    fn test_new_node() {
        let node: TrieNode<String, u32> = TrieNode::new();

        assert!(node.value.is_none());
        assert!(node.children.is_empty());
        assert_eq!(node.count, 0);
        assert!(node.is_dead());
    }

    #[test]
    fn test_node_with_value_is_alive() {
        let node = leaf(42);
        assert!(!node.is_dead());
        assert_eq!(node.subtree_size(), 1);
    }

    #[test]
    fn test_node_with_children_is_alive() {
        let mut node: TrieNode<&str, u32> = TrieNode::new();
        node.children.insert("a", leaf(1));
        node.count = 1;

        assert!(!node.is_dead());
        node.assert_well_formed();
    }

    #[test]
    fn test_find() {
        let mut middle = TrieNode::new();
        middle.children.insert("b", leaf(7));
        middle.count = 1;
        let mut root = TrieNode::new();
        root.children.insert("a", middle);
        root.count = 1;

        assert_eq!(root.find(&["a", "b"]).and_then(|n| n.value), Some(7));
        assert!(root.find(&["a"]).map_or(false, |n| n.value.is_none()));
        assert!(root.find(&["a", "c"]).is_none());
        assert!(root.find(&["a", "b", "c"]).is_none());
        assert!(std::ptr::eq(root.find::<&str>(&[]).unwrap(), &root));
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut root = TrieNode::new();
        root.children.insert("x", leaf(1));
        root.count = 1;

        root.find_mut(&["x"]).unwrap().value = Some(2);
        assert_eq!(root.find(&["x"]).and_then(|n| n.value), Some(2));
    }

    #[test]
    fn test_subtree_size() {
        let mut root = leaf(0);
        let mut child = leaf(1);
        child.children.insert("c", leaf(2));
        child.count = 2;
        root.children.insert("b", child);
        root.count = 3;

        assert_eq!(root.subtree_size(), 3);
        root.assert_well_formed();
    }

    #[test]
    #[should_panic(expected = "dead node left attached")]
    fn test_well_formed_rejects_dead_child() {
        let mut root: TrieNode<&str, u32> = TrieNode::new();
        root.children.insert("a", TrieNode::new());
        root.assert_well_formed();
    }

    #[test]
    #[should_panic(expected = "cached count drifted")]
    fn test_well_formed_rejects_bad_count() {
        let mut root = leaf(1);
        root.count = 2;
        root.assert_well_formed();
    }

    #[test]
    fn test_dismantle_deep_chain() {
        let mut root: TrieNode<u32, u32> = TrieNode::new();
        {
            let mut current = &mut root;
            for i in 0..100_000 {
                current = current.children.entry(i).or_default();
            }
            current.value = Some(1);
        }
        root.value = Some(0);
        root.dismantle();

        assert!(root.children.is_empty());
        assert_eq!(root.count, 1);
    }
}
