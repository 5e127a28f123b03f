//! Key validation.
//!
//! Every trie operation accepts the same key domain: a non-empty string made only of the
//! lowercase ASCII letters `a` through `z`. [`LetterKey`] is the validated form, and is what the
//! tree walks; each letter maps onto one of [`ALPHABET_WIDTH`] child slots.

use crate::error::TrieError;

/// Number of child slots per node, one per letter.
pub const ALPHABET_WIDTH: usize = 26;

/// A borrowed key that is known to be non-empty and made of `'a'..='z'` only.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct LetterKey<'a> {
    key: &'a str,
}

impl<'a> LetterKey<'a> {
    pub fn new(key: &'a str) -> Result<Self, TrieError> {
        if key.is_empty() {
            return Err(TrieError::EmptyKey);
        }
        if let Some((position, ch)) = key.char_indices().find(|(_, c)| !c.is_ascii_lowercase()) {
            return Err(TrieError::InvalidCharacter { ch, position });
        }
        Ok(Self { key })
    }

    /// Number of letters, which is also the depth of the node that holds this key's value.
    #[inline]
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Always false; a `LetterKey` is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The child slot selected by the letter at `pos`.
    ///
    /// # Panics
    ///
    /// If `pos >= self.len()`.
    #[inline]
    pub(crate) fn at(&self, pos: usize) -> u8 {
        self.key.as_bytes()[pos] - b'a'
    }

    /// Child slots for each letter, root to leaf.
    pub fn slots(&self) -> impl ExactSizeIterator<Item = u8> + 'a {
        self.key.bytes().map(|b| b - b'a')
    }

    pub fn as_str(&self) -> &'a str {
        self.key
    }
}

impl<'a> TryFrom<&'a str> for LetterKey<'a> {
    type Error = TrieError;

    fn try_from(key: &'a str) -> Result<Self, Self::Error> {
        LetterKey::new(key)
    }
}

impl AsRef<str> for LetterKey<'_> {
    fn as_ref(&self) -> &str {
        self.key
    }
}

/// The letter a child slot stands for.
#[inline]
pub fn slot_to_letter(slot: u8) -> char {
    debug_assert!((slot as usize) < ALPHABET_WIDTH);
    (b'a' + slot) as char
}
