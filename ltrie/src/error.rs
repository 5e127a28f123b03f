//! Error types for trie operations.

use thiserror::Error;

/// Errors returned by [`TrieStore`](crate::tree::TrieStore) operations.
///
/// Every variant is recoverable: a failed operation leaves the store exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The key has no characters.
    #[error("key must not be empty")]
    EmptyKey,

    /// The key contains a character outside `'a'..='z'`.
    #[error("invalid character {ch:?} at byte {position}, keys may only contain 'a'..='z'")]
    InvalidCharacter {
        /// The first offending character
        ch: char,
        /// Byte offset of that character in the key
        position: usize,
    },

    /// The key is well formed but holds no value.
    #[error("key {0:?} not found")]
    NotFound(String),

    /// Strict teardown was requested on a trie that still holds keys.
    #[error("trie still holds {remaining} key(s)")]
    NotEmpty {
        /// Number of keys still stored
        remaining: usize,
    },
}

impl TrieError {
    /// True for the errors that reject a key before the trie is touched.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, TrieError::EmptyKey | TrieError::InvalidCharacter { .. })
    }
}
