//! A prefix tree (trie) over lowercase ASCII keys.
//!
//! Keys are non-empty strings of `'a'..='z'`; each letter selects one of 26 child slots.
//! Insertion creates nodes lazily, and removal frees the longest run of nodes that no other key
//! needs, so the tree never holds a node that neither ends a key nor leads to one.
//!
//! ```rust
//! use ltrie::TrieStore;
//!
//! let mut trie = TrieStore::new();
//! trie.insert("aa", 1).unwrap();
//! trie.insert("ab", 2).unwrap();
//! assert_eq!(trie.get("ab"), Some(&2));
//! assert_eq!(trie.get("ad"), None);
//!
//! trie.remove("ab").unwrap();
//! trie.remove("aa").unwrap();
//! assert_eq!(trie.node_count(), 1);
//! trie.destroy();
//! ```
//!
//! Single threaded: share a store across threads by wrapping the whole thing in a lock.

pub mod error;
pub mod keys;
pub mod mapping;
mod node;
pub mod stats;
pub mod tree;
pub mod utils;

#[cfg(test)]
mod proptests;

pub use error::TrieError;
pub use keys::LetterKey;
pub use stats::{TreeStats, TreeStatsTrait};
pub use tree::TrieStore;
