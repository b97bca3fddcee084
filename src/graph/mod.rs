//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod digraph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use digraph::DirectedGraph;
pub use traversal::shortest_path;
