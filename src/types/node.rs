//! The per-node adjacency record.

use std::collections::BTreeSet;

use super::NodeId;

/// Adjacency state for one vertex: the ids it points to and the ids that
/// point to it. A node does not store its own id; identity comes from the
/// graph's keyed collection. Keeping both directions makes node deletion
/// and reversal local operations.
///
/// Ordered sets give deterministic neighbor iteration, which in turn makes
/// shortest-path tie-breaking reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    outgoing: BTreeSet<NodeId>,
    incoming: BTreeSet<NodeId>,
}

impl Node {
    /// Create a node with no edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directed edge from this node to `to`.
    pub(crate) fn insert_outgoing(&mut self, to: NodeId) {
        self.outgoing.insert(to);
    }

    /// Record a directed edge from `from` to this node.
    pub(crate) fn insert_incoming(&mut self, from: NodeId) {
        self.incoming.insert(from);
    }

    /// Remove the record of an edge from this node to `to`.
    pub(crate) fn remove_outgoing(&mut self, to: NodeId) {
        self.outgoing.remove(&to);
    }

    /// Remove the record of an edge from `from` to this node.
    pub(crate) fn remove_incoming(&mut self, from: NodeId) {
        self.incoming.remove(&from);
    }

    /// True if this node has an edge to `to`.
    pub fn has_edge_to(&self, to: NodeId) -> bool {
        self.outgoing.contains(&to)
    }

    /// True if this node has an edge from `from`.
    pub fn has_edge_from(&self, from: NodeId) -> bool {
        self.incoming.contains(&from)
    }

    /// The ids this node has an edge to, in ascending order.
    pub fn outgoing(&self) -> &BTreeSet<NodeId> {
        &self.outgoing
    }

    /// The ids this node has an edge from, in ascending order.
    pub fn incoming(&self) -> &BTreeSet<NodeId> {
        &self.incoming
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of incoming edges.
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    /// Swap the outgoing and incoming sets, reversing every edge this
    /// node participates in (from its point of view).
    pub(crate) fn reverse(&mut self) {
        std::mem::swap(&mut self.outgoing, &mut self.incoming);
    }
}
