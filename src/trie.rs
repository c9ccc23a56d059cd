//! The main map implementation.
//!
//! This module contains the `SequenceMap` type, which provides the primary API
//! for storing values under sequence keys.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use crate::iter::Iter;
use crate::node::TrieNode;

/// A map from sequences of `K` to values of type `V`.
///
/// Keys are stored as a trie of nested single-element maps: every element of a
/// key selects one child of the node reached by the elements before it. Keys
/// that share a prefix share the nodes for that prefix, and a key that is a
/// prefix of another is still an independent entry.
///
/// Nodes that end up holding no value and no children are removed as soon as
/// a delete leaves them empty, so the trie never needs a separate cleanup pass.
///
/// The map does no internal locking. Share it across threads only behind a
/// lock that excludes writers from readers.
pub struct SequenceMap<K, V> {
    /// The root node; it stays in place even when the map is empty
    pub(crate) root: TrieNode<K, V>,
}

impl<K, V> SequenceMap<K, V> {
    /// Creates a new, empty map.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqmap::SequenceMap;
    ///
    /// let map = SequenceMap::<String, i32>::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        SequenceMap {
            root: TrieNode::new(),
        }
    }

    /// Returns the number of entries stored in the map. Runs in constant time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqmap::SequenceMap;
    ///
    /// let mut map = SequenceMap::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(vec!["a", "b"], 1);
    /// map.insert(vec!["a"], 2);
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.root.count
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.root.count == 0
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.root.value = None;
        self.root.dismantle();
    }

    /// Returns an iterator over every entry as `(key, &value)`.
    ///
    /// Each yielded key is a freshly allocated `Vec`, so callers may keep it
    /// for as long as they like. The order in which sibling subtrees are
    /// visited is unspecified and may differ between two maps holding the
    /// same entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqmap::SequenceMap;
    ///
    /// let mut map = SequenceMap::new();
    /// map.insert(vec!["usr", "bin"], 1);
    /// map.insert(vec!["usr", "lib"], 2);
    ///
    /// let mut entries: Vec<_> = map.iter().collect();
    /// entries.sort();
    /// assert_eq!(entries, vec![(vec!["usr", "bin"], &1), (vec!["usr", "lib"], &2)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root)
    }
}

impl<K, V> SequenceMap<K, V>
where
    K: Hash + Eq,
{
    /// Retrieves a reference to the value stored for exactly `key`, if any.
    ///
    /// The empty slice is a valid key and addresses the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqmap::SequenceMap;
    ///
    /// let mut map = SequenceMap::new();
    /// map.insert(vec!["a", "b"], 4);
    ///
    /// assert_eq!(map.get(&["a", "b"]), Some(&4));
    /// assert_eq!(map.get(&["a"]), None);
    /// assert_eq!(map.get(&["a", "b", "c"]), None);
    /// ```
    pub fn get<Q>(&self, key: &[Q]) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.root.find(key)?.value.as_ref()
    }

    /// Retrieves a mutable reference to the value stored for exactly `key`.
    pub fn get_mut<Q>(&mut self, key: &[Q]) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.root.find_mut(key)?.value.as_mut()
    }

    /// Returns `true` if the map holds a value for exactly `key`.
    pub fn contains_key<Q>(&self, key: &[Q]) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.get(key).is_some()
    }

    /// Stores `value` under `key`.
    ///
    /// Returns the previous value if the key was already present, in which
    /// case the value is overwritten in place and `len` does not change.
    /// Otherwise returns `None` and `len` grows by one. Missing intermediate
    /// nodes are created on the way down.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqmap::SequenceMap;
    ///
    /// let mut map = SequenceMap::new();
    /// assert_eq!(map.insert(vec!["a", "b"], 1), None);
    /// assert_eq!(map.insert(vec!["a", "b"], 2), Some(1));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert<I>(&mut self, key: I, value: V) -> Option<V>
    where
        I: IntoIterator<Item = K>,
    {
        let key: Vec<K> = key.into_iter().collect();
        let fresh = !self.contains_key(key.as_slice());

        let mut current = &mut self.root;
        for element in key {
            if fresh {
                current.count += 1;
            }
            current = current.children.entry(element).or_default();
        }

        let old = current.value.replace(value);
        debug_assert_eq!(old.is_none(), fresh);
        if fresh {
            current.count += 1;
        }
        old
    }

    /// Removes `key` and returns the value it held.
    ///
    /// Every node on the path that is left without a value and without
    /// children is detached; the root always stays.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqmap::SequenceMap;
    ///
    /// let mut map = SequenceMap::new();
    /// map.insert(vec!["a", "b"], 4);
    /// map.insert(vec!["a", "b", "c"], 2);
    ///
    /// assert_eq!(map.remove(&["a", "b"]), Some(4));
    /// assert_eq!(map.remove(&["a", "b"]), None);
    /// assert_eq!(map.get(&["a", "b", "c"]), Some(&2));
    /// ```
    pub fn remove<Q>(&mut self, key: &[Q]) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        if !self.contains_key(key) {
            return None;
        }

        // Counts are exact, so the first node on the path whose count is about
        // to reach zero heads a chain that holds nothing but this entry.
        let mut current = &mut self.root;
        for (depth, element) in key.iter().enumerate() {
            current.count -= 1;
            let child_count = current.children.get(element).map_or(0, |child| child.count);
            if child_count == 1 {
                let mut detached = current.children.remove(element)?;
                let value = detached.find_mut(&key[depth + 1..])?.value.take();
                detached.dismantle();
                return value;
            }
            current = current.children.get_mut(element)?;
        }

        current.count -= 1;
        let value = current.value.take();
        debug_assert!(key.is_empty() || !current.is_dead());
        value
    }

    /// Deletes `key`, returning whether a value was actually removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqmap::SequenceMap;
    ///
    /// let mut map = SequenceMap::new();
    /// map.insert(Vec::<&str>::new(), 1);
    ///
    /// assert!(map.delete::<&str>(&[]));
    /// assert!(!map.delete::<&str>(&[]));
    /// assert!(map.is_empty());
    /// ```
    pub fn delete<Q>(&mut self, key: &[Q]) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.remove(key).is_some()
    }
}

impl<K: Clone, V> SequenceMap<K, V> {
    /// Calls `visit` with every entry until it returns `false`.
    ///
    /// Returns `true` if every entry was visited and `false` if `visit` asked
    /// to stop early. Each call receives its own copy of the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqmap::SequenceMap;
    ///
    /// let mut map = SequenceMap::new();
    /// map.insert(vec![1, 2], "x");
    /// map.insert(vec![3], "y");
    ///
    /// let mut seen = 0;
    /// assert!(map.for_each(|_key, _value| {
    ///     seen += 1;
    ///     true
    /// }));
    /// assert_eq!(seen, 2);
    ///
    /// assert!(!map.for_each(|_key, _value| false));
    /// ```
    pub fn for_each<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(Vec<K>, &V) -> bool,
    {
        for (key, value) in self.iter() {
            if !visit(key, value) {
                return false;
            }
        }
        true
    }
}

impl<K, V> Default for SequenceMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for SequenceMap<K, V> {
    fn drop(&mut self) {
        self.root.dismantle();
    }
}

impl<K, V> Clone for SequenceMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        self.iter()
            .map(|(key, value)| (key, value.clone()))
            .collect()
    }
}

impl<K, V> fmt::Debug for SequenceMap<K, V>
where
    K: Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Two maps are equal when they hold the same entries, whatever order their
// children happen to be stored in.
impl<K, V> PartialEq for SequenceMap<K, V>
where
    K: Hash + Eq + Clone,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().all(|(key, value)| {
            other
                .get(key.as_slice())
                .map_or(false, |theirs| *value == *theirs)
        })
    }
}

impl<K, V> Eq for SequenceMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Eq,
{
}

impl<K, V, I> Extend<(I, V)> for SequenceMap<K, V>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    fn extend<T: IntoIterator<Item = (I, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, I> FromIterator<(I, V)> for SequenceMap<K, V>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    fn from_iter<T: IntoIterator<Item = (I, V)>>(iter: T) -> Self {
        let mut map = SequenceMap::new();
        map.extend(iter);
        map
    }
}
