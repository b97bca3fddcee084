//! Core graph structure — nodes keyed by id, dual adjacency sets.

use std::collections::BTreeMap;

use crate::types::{Node, NodeId};

/// An in-memory directed graph.
///
/// Nodes are keyed by [`NodeId`]; each node tracks both its outgoing and
/// incoming neighbors, and every edge mutation updates exactly the two
/// nodes on the edge so the two directions never disagree.
///
/// Operations on absent ids are silent no-ops rather than errors:
/// [`connect`](Self::connect), [`disconnect`](Self::disconnect), and
/// [`delete`](Self::delete) simply return, and
/// [`is_connected`](Self::is_connected) answers `false`.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    /// All nodes, keyed by id.
    nodes: BTreeMap<NodeId, Node>,
    /// Candidate id for the next auto-generated node.
    next_id: NodeId,
}

impl DirectedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::out_degree).sum()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True iff `id` is present in the graph.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Get a node's adjacency record by id.
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// All present ids, in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Add a node under a freshly generated id and return that id.
    ///
    /// The id counter advances past occupied ids (callers may have
    /// inserted arbitrary explicit ids via
    /// [`add_node_with_id`](Self::add_node_with_id)), wrapping at
    /// `i64::MAX`. A generated id is unique only among currently-present
    /// ids: an id freed by [`delete`](Self::delete) may be handed out
    /// again later.
    pub fn add_node(&mut self) -> NodeId {
        while self.contains(self.next_id) {
            self.next_id = (self.next_id % NodeId::MAX) + 1;
        }
        let id = self.next_id;
        self.nodes.insert(id, Node::new());
        id
    }

    /// Add a node under an explicit id and return that id. Does nothing
    /// if a node with that id already exists.
    pub fn add_node_with_id(&mut self, id: NodeId) -> NodeId {
        self.nodes.entry(id).or_default();
        id
    }

    /// Insert the directed edge `from -> to`. No-op unless both endpoints
    /// are present; idempotent if the edge already exists.
    pub fn connect(&mut self, from: NodeId, to: NodeId) {
        if self.contains(from) && self.contains(to) {
            if let Some(node) = self.nodes.get_mut(&from) {
                node.insert_outgoing(to);
            }
            if let Some(node) = self.nodes.get_mut(&to) {
                node.insert_incoming(from);
            }
        }
    }

    /// Remove the directed edge `from -> to`. No-op if either endpoint or
    /// the edge is absent. Directional: a `to -> from` edge is untouched.
    pub fn disconnect(&mut self, from: NodeId, to: NodeId) {
        if self.contains(from) && self.contains(to) {
            if let Some(node) = self.nodes.get_mut(&from) {
                node.remove_outgoing(to);
            }
            if let Some(node) = self.nodes.get_mut(&to) {
                node.remove_incoming(from);
            }
        }
    }

    /// True iff the edge `from -> to` exists. Answers `false` when `from`
    /// is absent, without inspecting `to`.
    pub fn is_connected(&self, from: NodeId, to: NodeId) -> bool {
        self.nodes
            .get(&from)
            .is_some_and(|node| node.has_edge_to(to))
    }

    /// Remove a node and every edge that touches it.
    ///
    /// Scrubs the dead id out of both its predecessors' outgoing sets and
    /// its successors' incoming sets, so no surviving node keeps a stale
    /// reference and a later insert reusing the id cannot resurrect edges.
    pub fn delete(&mut self, id: NodeId) {
        let Some(removed) = self.nodes.remove(&id) else {
            return;
        };
        for &pred in removed.incoming() {
            if let Some(node) = self.nodes.get_mut(&pred) {
                node.remove_outgoing(id);
            }
        }
        for &succ in removed.outgoing() {
            if let Some(node) = self.nodes.get_mut(&succ) {
                node.remove_incoming(id);
            }
        }
    }

    /// Produce a fully independent copy: same ids, same edges, no shared
    /// storage. `copy.is_connected(a, b) == original.is_connected(a, b)`
    /// for all `a, b`, and mutating one never affects the other.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Reverse every edge of the given graph in place, by swapping each
    /// node's outgoing and incoming sets. Afterwards
    /// `graph.is_connected(a, b)` holds exactly where
    /// `is_connected(b, a)` held before the call.
    pub fn reverse(graph: &mut DirectedGraph) {
        for node in graph.nodes.values_mut() {
            node.reverse();
        }
    }
}
