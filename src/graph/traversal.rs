//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::NodeId;

use super::DirectedGraph;

/// Shortest directed path from `from` to `to` by edge count, inclusive of
/// both endpoints.
///
/// Returns an empty vector if either endpoint is absent or no directed
/// path exists, and `[from]` when `from == to` and the id is present.
/// Neighbors are expanded in ascending id order, so among multiple
/// shortest paths of equal length the one through the smallest ids at
/// each discovery step is returned.
pub fn shortest_path(graph: &DirectedGraph, from: NodeId, to: NodeId) -> Vec<NodeId> {
    if !graph.contains(from) || !graph.contains(to) {
        return Vec::new();
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    // How each node was first discovered, for path reconstruction.
    let mut backpointers: HashMap<NodeId, NodeId> = HashMap::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    queue.push_back(from);
    visited.insert(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            break;
        }
        let Some(node) = graph.get_node(current) else {
            continue;
        };
        for &neighbor in node.outgoing() {
            if visited.insert(neighbor) {
                backpointers.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    if !visited.contains(&to) {
        return Vec::new();
    }

    // Walk backpointers from the destination, then flip.
    let mut path = vec![to];
    let mut current = to;
    while current != from {
        current = backpointers[&current];
        path.push(current);
    }
    path.reverse();
    path
}
