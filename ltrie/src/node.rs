use crate::keys::slot_to_letter;
use crate::mapping::direct_mapping::DirectMapping;
use crate::utils::fillvector::FVIndex;

pub(crate) type NodeId = FVIndex;

/// One character position along one or more keys.
pub(crate) struct Node<V> {
    /// `None` only for the root sentinel.
    pub(crate) letter: Option<char>,
    pub(crate) children: DirectMapping<NodeId>,
    /// Set when this node terminates a stored key.
    pub(crate) value: Option<V>,
}

impl<V> Node<V> {
    #[inline]
    pub(crate) fn new_root() -> Self {
        Self {
            letter: None,
            children: DirectMapping::new(),
            value: None,
        }
    }

    #[inline]
    pub(crate) fn new_inner(slot: u8) -> Self {
        Self {
            letter: Some(slot_to_letter(slot)),
            children: DirectMapping::new(),
            value: None,
        }
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    #[inline]
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    #[inline]
    pub fn num_children(&self) -> usize {
        self.children.num_children()
    }

    #[inline]
    pub(crate) fn seek_child(&self, slot: u8) -> Option<NodeId> {
        self.children.seek_child(slot)
    }

    #[inline]
    pub(crate) fn add_child(&mut self, slot: u8, child: NodeId) {
        debug_assert!(self.children.seek_child(slot).is_none());
        self.children.add_child(slot, child);
    }

    #[inline]
    pub(crate) fn delete_child(&mut self, slot: u8) -> Option<NodeId> {
        self.children.delete_child(slot)
    }

    /// A node others depend on: it ends a key, or it is where two or more keys part ways.
    #[inline]
    pub fn is_load_bearing(&self) -> bool {
        self.has_value() || self.num_children() >= 2
    }

    /// A node nothing depends on. Only the root may ever be left in this state.
    #[inline]
    pub fn is_dead(&self) -> bool {
        !self.has_value() && self.children.is_empty()
    }
}
