use num_traits::PrimInt;

/// Occupancy bits packed into a single primitive word. Wide enough for one node's child slots,
/// which is all the trie needs; wider tables would chain words.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bitset<StorageType>
where
    StorageType: PrimInt,
{
    bits: StorageType,
}

pub type Bitset32 = Bitset<u32>;

impl<StorageType> Bitset<StorageType>
where
    StorageType: PrimInt,
{
    pub const BIT_WIDTH: usize = std::mem::size_of::<StorageType>() * 8;

    pub fn new() -> Self {
        Self {
            bits: StorageType::zero(),
        }
    }

    #[inline]
    pub fn set(&mut self, pos: usize) {
        assert!(pos < Self::BIT_WIDTH);
        self.bits = self.bits | (StorageType::one() << pos);
    }

    #[inline]
    pub fn unset(&mut self, pos: usize) {
        assert!(pos < Self::BIT_WIDTH);
        self.bits = self.bits & !(StorageType::one() << pos);
    }

    #[inline]
    pub fn check(&self, pos: usize) -> bool {
        assert!(pos < Self::BIT_WIDTH);
        !(self.bits & (StorageType::one() << pos)).is_zero()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Set positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let mut remaining = self.bits;
        std::iter::from_fn(move || {
            if remaining.is_zero() {
                return None;
            }
            let pos = remaining.trailing_zeros() as usize;
            // Clear the lowest set bit.
            remaining = remaining & (remaining - StorageType::one());
            Some(pos)
        })
    }
}
