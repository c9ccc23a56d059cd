//! Depth-first traversal over the entries of a sequence map.

use std::iter::FusedIterator;

use crate::node::TrieNode;
use crate::trie::SequenceMap;

/// An iterator over the entries of a `SequenceMap`.
///
/// The traversal is depth-first and keeps its own stack, so it never recurses
/// no matter how long the keys are. Siblings come out in whatever order the
/// per-node hash maps hand them over; callers must not depend on it.
///
/// Every item carries an owned copy of its key.
pub struct Iter<'a, K, V> {
    /// Nodes still to visit, with their depth and the element leading to them
    stack: Vec<(usize, Option<&'a K>, &'a TrieNode<K, V>)>,

    /// Elements on the path to the node most recently visited
    path: Vec<&'a K>,

    /// Entries not yet yielded
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(root: &'a TrieNode<K, V>) -> Self {
        Iter {
            stack: vec![(0, None, root)],
            path: Vec::new(),
            remaining: root.count,
        }
    }
}

impl<'a, K: Clone, V> Iterator for Iter<'a, K, V> {
    type Item = (Vec<K>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, element, node)) = self.stack.pop() {
            if let Some(element) = element {
                self.path.truncate(depth - 1);
                self.path.push(element);
            }

            for (child_element, child) in &node.children {
                self.stack.push((depth + 1, Some(child_element), child));
            }

            if let Some(value) = &node.value {
                self.remaining -= 1;
                let key = self.path.iter().map(|&element| element.clone()).collect();
                return Some((key, value));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: Clone, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K: Clone, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K: Clone, V> IntoIterator for &'a SequenceMap<K, V> {
    type Item = (Vec<K>, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_iter_empty() {
        let map: SequenceMap<String, u32> = SequenceMap::new();
        let mut iter = map.iter();

        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_iter_reconstructs_keys() {
        let mut map = SequenceMap::new();
        map.insert(vec!["hello"], 1);
        map.insert(vec!["hello", "world"], 2);
        map.insert(vec!["help"], 3);
        map.insert(Vec::new(), 0);

        let results: HashSet<(Vec<&str>, &u32)> = map.iter().collect();
        let expected: HashSet<(Vec<&str>, &u32)> = [
            (vec![], &0),
            (vec!["hello"], &1),
            (vec!["hello", "world"], &2),
            (vec!["help"], &3),
        ]
        .iter()
        .cloned()
        .collect();

        assert_eq!(results, expected);
    }

    #[test]
    fn test_iter_backtracks_across_branches() {
        let mut map = SequenceMap::new();
        for a in 0..4u8 {
            for b in 0..4u8 {
                map.insert(vec![a, b, a ^ b], u32::from(a) * 4 + u32::from(b));
            }
        }

        let mut count = 0;
        for (key, value) in &map {
            assert_eq!(key.len(), 3);
            assert_eq!(key[2], key[0] ^ key[1]);
            assert_eq!(*value, u32::from(key[0]) * 4 + u32::from(key[1]));
            count += 1;
        }
        assert_eq!(count, 16);
    }

    #[test]
    fn test_iter_exact_size() {
        let map: SequenceMap<u8, u8> = (0..6u8).map(|i| (vec![i % 2, i], i)).collect();
        let mut iter = map.iter();

        assert_eq!(iter.len(), 6);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.count(), 4);
    }

    #[test]
    fn test_yielded_keys_are_independent() {
        let mut map = SequenceMap::new();
        map.insert(vec!['a', 'b'], 1);
        map.insert(vec!['a', 'c'], 2);

        let mut keys: Vec<Vec<char>> = map.iter().map(|(key, _)| key).collect();
        keys[0].push('z');
        keys[1].clear();

        assert_eq!(map.get(&['a', 'b']), Some(&1));
        assert_eq!(map.get(&['a', 'c']), Some(&2));
        assert!(map.iter().all(|(key, _)| key.len() == 2));
    }
}
