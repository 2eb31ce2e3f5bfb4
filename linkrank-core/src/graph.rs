//! The link graph: pages, their degree counters and outbound adjacency.

use crate::adjacency::AdjacencySet;
use crate::error::{RankError, Result};
use std::collections::HashMap;

/// Index of a page in its graph. Assigned sequentially, never reused.
pub type NodeId = usize;

/// A page of the graph.
#[derive(Debug, Clone)]
pub struct Node {
    url: String,
    pub(crate) out_degree: usize,
    pub(crate) in_degree: usize,
    pub(crate) weight: f64,
    pub(crate) old_weight: f64,
    pub(crate) w_in: f64,
    pub(crate) w_out: f64,
    pub(crate) links: AdjacencySet,
}

impl Node {
    fn new(url: String) -> Self {
        Self {
            url,
            out_degree: 0,
            in_degree: 0,
            weight: 0.0,
            old_weight: 0.0,
            w_in: 0.0,
            w_out: 0.0,
            links: AdjacencySet::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn old_weight(&self) -> f64 {
        self.old_weight
    }

    pub fn w_in(&self) -> f64 {
        self.w_in
    }

    pub fn w_out(&self) -> f64 {
        self.w_out
    }

    pub fn links(&self) -> &AdjacencySet {
        &self.links
    }
}

/// Result of a [`LinkGraph::link`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// A new edge was recorded and both degree counters moved.
    Created,
    /// The edge already existed; nothing changed.
    AlreadyLinked,
    /// Source and target are the same page; nothing changed.
    SelfLink,
}

impl LinkOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, LinkOutcome::Created)
    }
}

/// Owns every page and the name to id lookup, which stay in one-to-one
/// correspondence for the lifetime of the graph.
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    nodes: Vec<Node>,
    ids: HashMap<String, NodeId>,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ids: HashMap::with_capacity(capacity),
        }
    }

    /// Register `name` if it is unknown. Returns whether a page was created.
    pub fn ensure_node(&mut self, name: &str) -> bool {
        if self.ids.contains_key(name) {
            return false;
        }
        let id = self.nodes.len();
        self.nodes.push(Node::new(name.to_string()));
        self.ids.insert(name.to_string(), id);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    pub fn resolve_id(&self, name: &str) -> Result<NodeId> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| RankError::UnknownNode(name.to_string()))
    }

    /// Record the edge `from -> to`. Both pages must already be registered.
    pub fn link(&mut self, from: &str, to: &str) -> Result<LinkOutcome> {
        let from_id = self.resolve_id(from)?;
        let to_id = self.resolve_id(to)?;
        Ok(self.link_ids(from_id, to_id))
    }

    pub(crate) fn link_ids(&mut self, from: NodeId, to: NodeId) -> LinkOutcome {
        if from == to {
            return LinkOutcome::SelfLink;
        }
        if !self.nodes[from].links.insert(to) {
            return LinkOutcome::AlreadyLinked;
        }
        self.nodes[from].out_degree += 1;
        self.nodes[to].in_degree += 1;
        LinkOutcome::Created
    }

    pub fn is_linked(&self, from: &str, to: &str) -> Result<bool> {
        let from_id = self.resolve_id(from)?;
        let to_id = self.resolve_id(to)?;
        Ok(self.nodes[from_id].links.contains(to_id))
    }

    /// Names of every page linking to `target`, in ascending id order.
    pub fn inbound_neighbors(&self, target: &str) -> Result<Vec<&str>> {
        let target_id = self.resolve_id(target)?;
        Ok(self
            .inbound_ids(target_id)
            .into_iter()
            .map(|id| self.nodes[id].url.as_str())
            .collect())
    }

    /// Ids of every page whose adjacency set holds `target`.
    ///
    /// Only outbound edges are stored, so this scans all pages: O(n·k).
    pub fn inbound_ids(&self, target: NodeId) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.links.contains(target))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn url(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(Node::url)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of recorded edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.links.len()).sum()
    }
}
