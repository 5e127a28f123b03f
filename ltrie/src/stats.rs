//! Statistics and introspection.
//!
//! Gathers shape information about a trie: how many nodes it holds, how many of them end keys,
//! how deep it goes and how full the child tables are. Useful when looking at memory use or
//! checking that deletions really prune.

use crate::keys::ALPHABET_WIDTH;
use crate::node::Node;

pub trait TreeStatsTrait {
    fn get_tree_stats(&self) -> TreeStats;
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TreeStats {
    /// Live nodes, root included.
    pub num_nodes: usize,
    /// Nodes that end a key.
    pub num_values: usize,
    /// Nodes without children. The root counts while the trie is empty.
    pub num_leaves: usize,
    /// Nodes with at least one child.
    pub num_inner_nodes: usize,
    pub total_children: usize,
    /// Depth of the deepest node; the longest stored key when the trie is pruned.
    pub max_height: usize,
    /// Occupied child slots over available child slots.
    pub density: f64,
    /// Node slots the arena holds, including freed ones waiting for reuse.
    pub arena_slots: usize,
}

impl TreeStats {
    pub(crate) fn finish(&mut self) {
        let total_width = self.num_nodes * ALPHABET_WIDTH;
        self.density = if total_width == 0 {
            0.0
        } else {
            self.total_children as f64 / total_width as f64
        };
    }
}

pub(crate) fn update_tree_stats<V>(tree_stats: &mut TreeStats, node: &Node<V>, height: usize) {
    tree_stats.num_nodes += 1;
    if height > tree_stats.max_height {
        tree_stats.max_height = height;
    }
    if node.has_value() {
        tree_stats.num_values += 1;
    }
    let num_children = node.num_children();
    if num_children == 0 {
        tree_stats.num_leaves += 1;
    } else {
        tree_stats.num_inner_nodes += 1;
        tree_stats.total_children += num_children;
    }
}
