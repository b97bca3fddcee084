//! All data types for the edgemap library.

pub mod error;
pub mod node;

pub use error::{EdgemapError, EdgemapResult};
pub use node::Node;

/// A node identifier. Unique within a graph while the node is present;
/// freed by deletion and may later be reassigned.
pub type NodeId = i64;
