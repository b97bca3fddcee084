//! edgemap — in-memory directed graph with dual adjacency sets.
//!
//! Every node keeps both its outgoing and its incoming neighbor ids, so
//! node deletion and whole-graph reversal are local operations, and every
//! edge mutation touches exactly the two nodes on the edge. Shortest
//! paths are unweighted BFS with backpointer reconstruction.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::EdgeListReader;
pub use graph::{shortest_path, DirectedGraph, GraphBuilder};
pub use types::{EdgemapError, EdgemapResult, Node, NodeId};
