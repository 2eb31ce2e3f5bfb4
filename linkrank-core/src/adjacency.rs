//! Ordered out-neighbour sets.

use crate::graph::NodeId;

/// The outbound neighbours of one node: ascending ids, no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencySet {
    ids: Vec<NodeId>,
}

impl AdjacencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id` at its ordered position. Returns `false` if it was
    /// already present, leaving the set unchanged.
    pub fn insert(&mut self, id: NodeId) -> bool {
        let pos = self
            .ids
            .iter()
            .position(|&v| v >= id)
            .unwrap_or(self.ids.len());

        if self.ids.get(pos) == Some(&id) {
            return false;
        }
        self.ids.insert(pos, id);
        true
    }

    /// Linear membership test that stops as soon as the scan passes `id`.
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids
            .iter()
            .take_while(|&&v| v <= id)
            .any(|&v| v == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
