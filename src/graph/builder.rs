//! Fluent API for building DirectedGraph instances.

use crate::types::NodeId;

use super::DirectedGraph;

/// Fluent builder for constructing a [`DirectedGraph`] with explicit ids.
///
/// Edge endpoints are created on demand, so a graph can be described as a
/// plain list of edges. Mostly a convenience for tests and examples; for
/// incremental construction use [`DirectedGraph`] directly.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: DirectedGraph,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a node with the given id exists.
    pub fn node(mut self, id: NodeId) -> Self {
        self.graph.add_node_with_id(id);
        self
    }

    /// Add the edge `from -> to`, creating either endpoint if needed.
    pub fn edge(mut self, from: NodeId, to: NodeId) -> Self {
        self.graph.add_node_with_id(from);
        self.graph.add_node_with_id(to);
        self.graph.connect(from, to);
        self
    }

    /// Connect consecutive ids into a path: `chain(&[1, 2, 3])` adds the
    /// edges `1 -> 2` and `2 -> 3`.
    pub fn chain(mut self, ids: &[NodeId]) -> Self {
        for pair in ids.windows(2) {
            self = self.edge(pair[0], pair[1]);
        }
        if let [only] = ids {
            self.graph.add_node_with_id(*only);
        }
        self
    }

    /// Finish and return the graph.
    pub fn build(self) -> DirectedGraph {
        self.graph
    }
}
