use std::ops::{Index, IndexMut};

// We use a u32 here instead of usize under the assumption there simply won't be that many entries
// and so that we can save some bytes in the child tables that store these indices.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct FVIndex(pub u32);

impl FVIndex {
    #[inline]
    fn for_position(pos: usize) -> Self {
        debug_assert!(pos < u32::MAX as usize, "FillVector outgrew u32 indices");
        FVIndex(pos as u32)
    }
}

/// A place to store (owned) values that can be accessed by an index, with holes being re-used.
/// Maintains a separate free list. A poor man's slot map or arena: freeing hands the value back
/// to the caller and queues the slot for the next `add`.
pub struct FillVector<V> {
    values: Vec<Option<V>>,
    free_list: Vec<u32>,
    size: usize,
}

impl<V> FillVector<V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            free_list: Default::default(),
            size: 0,
        }
    }

    /// Store the value produced by `f`, which is told the index it will live at.
    pub fn add<F: FnOnce(FVIndex) -> V>(&mut self, f: F) -> FVIndex {
        let id = match self.free_list.pop() {
            None => {
                let id = FVIndex::for_position(self.values.len());
                self.values.push(Some(f(id)));
                id
            }
            Some(idx) => {
                let id = FVIndex(idx);
                debug_assert!(self.values[idx as usize].is_none());
                self.values[idx as usize] = Some(f(id));
                id
            }
        };
        self.size += 1;
        id
    }

    /// Remove and return the value at `id`. Returns `None` if the slot is already free.
    pub fn free(&mut self, id: FVIndex) -> Option<V> {
        let idx = id.0 as usize;
        let value = self.values.get_mut(idx)?.take()?;
        self.size -= 1;

        if idx + 1 < self.values.len() {
            self.free_list.push(id.0);
            return Some(value);
        }

        // Freed the last slot: drop it along with any holes it was sitting on.
        while let Some(None) = self.values.last() {
            self.values.pop();
        }
        if idx > self.values.len() {
            let len = self.values.len();
            self.free_list.retain(|&i| (i as usize) < len);
        }
        Some(value)
    }

    pub fn get(&self, id: &FVIndex) -> Option<&V> {
        self.values.get(id.0 as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, id: &FVIndex) -> Option<&mut V> {
        self.values.get_mut(id.0 as usize)?.as_mut()
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.free_list.clear();
        self.size = 0;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Slots currently allocated, live or free. Never ends in a free slot.
    pub fn slots(&self) -> usize {
        self.values.len()
    }
}

impl<V> Index<FVIndex> for FillVector<V> {
    type Output = V;

    fn index(&self, index: FVIndex) -> &Self::Output {
        match self.get(&index) {
            Some(v) => v,
            None => panic!("access to freed or unknown slot {}", index.0),
        }
    }
}

impl<V> IndexMut<FVIndex> for FillVector<V> {
    fn index_mut(&mut self, index: FVIndex) -> &mut Self::Output {
        match self.get_mut(&index) {
            Some(v) => v,
            None => panic!("access to freed or unknown slot {}", index.0),
        }
    }
}
