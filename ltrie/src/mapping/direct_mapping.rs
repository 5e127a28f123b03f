use crate::keys::ALPHABET_WIDTH;
use crate::utils::bitset::Bitset32;

/// Child table with one slot per letter, addressed directly by slot index.
///
/// Children are small copyable handles (arena indices), so slots hold a plain value and the
/// bitset decides which of them are live.
pub struct DirectMapping<N> {
    children: [N; ALPHABET_WIDTH],
    occupied: Bitset32,
}

impl<N: Copy + Default> DirectMapping<N> {
    pub fn new() -> Self {
        Self {
            children: [N::default(); ALPHABET_WIDTH],
            occupied: Bitset32::new(),
        }
    }

    /// Adds or replaces the child in `key`'s slot.
    #[inline]
    pub fn add_child(&mut self, key: u8, node: N) {
        self.children[key as usize] = node;
        self.occupied.set(key as usize);
    }

    #[inline]
    pub fn seek_child(&self, key: u8) -> Option<N> {
        if self.occupied.check(key as usize) {
            Some(self.children[key as usize])
        } else {
            None
        }
    }

    #[inline]
    pub fn delete_child(&mut self, key: u8) -> Option<N> {
        let n = self.seek_child(key)?;
        self.occupied.unset(key as usize);
        self.children[key as usize] = N::default();
        Some(n)
    }

    #[inline]
    pub fn num_children(&self) -> usize {
        self.occupied.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Occupied slots in ascending (alphabetical) order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (u8, N)> + '_ {
        self.occupied
            .iter()
            .map(|key| (key as u8, self.children[key]))
    }
}
