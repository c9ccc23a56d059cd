//! # Sequence Map
//!
//! A map keyed by sequences of elements, stored as a nested trie.
//!
//! `SequenceMap<K, V>` behaves like a `HashMap<Vec<K>, V>` whose keys are
//! split element by element: each node of the trie maps the next key element
//! to a child node, and holds a value if some key ends exactly there. This
//! suits hierarchical keys such as paths, tuples and compound identifiers.
//!
//! ## Features
//!
//! - **Exact-key API**: `get`, `insert`, `remove`/`delete`, `len` in the shape of
//!   the std maps
//! - **Constant-time length**: every node tracks the live entries below it
//! - **Immediate pruning**: deleting a key detaches the nodes it leaves empty
//! - **Early-stop traversal**: `for_each` stops as soon as the callback returns
//!   `false`; `iter` yields owned keys
//! - **No recursion on key length**: lookups, updates, traversal and drop all
//!   walk the trie iteratively
//!
//! Traversal order between sibling elements is unspecified.
//!
//! ## Example
//!
//! ```rust
//! use seqmap::SequenceMap;
//!
//! let mut map = SequenceMap::new();
//!
//! map.insert(vec!["a", "b"], 4);
//! map.insert(vec!["a", "b", "c"], 2);
//!
//! assert_eq!(map.get(&["a", "b"]), Some(&4));
//! assert_eq!(map.get(&["a", "b", "c"]), Some(&2));
//! assert_eq!(map.len(), 2);
//!
//! assert!(map.delete(&["a", "b"]));
//! assert_eq!(map.get(&["a", "b"]), None);
//! assert_eq!(map.len(), 1);
//! ```

mod iter;
mod node;
mod trie;

pub use crate::iter::Iter;
pub use crate::trie::SequenceMap;
