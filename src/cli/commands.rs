//! CLI command implementations.
//!
//! Every command loads an edge-list file, runs one query against the
//! resulting graph, and prints the answer as text or JSON.

use std::path::Path;

use serde::Serialize;

use crate::format::EdgeListReader;
use crate::graph::{shortest_path, DirectedGraph};
use crate::types::{EdgemapResult, NodeId};

/// Display node and edge counts for an edge-list file.
pub fn cmd_info(path: &Path, json: bool) -> EdgemapResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// Report whether the directed edge `from -> to` exists.
pub fn cmd_connected(path: &Path, from: NodeId, to: NodeId, json: bool) -> EdgemapResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let connected = graph.is_connected(from, to);

    if json {
        let result = serde_json::json!({
            "from": from,
            "to": to,
            "connected": connected,
        });
        println!("{}", result);
    } else if connected {
        println!("{} -> {}: connected", from, to);
    } else {
        println!("{} -> {}: not connected", from, to);
    }
    Ok(())
}

/// JSON shape of a shortest-path answer.
#[derive(Serialize)]
struct PathReport {
    from: NodeId,
    to: NodeId,
    reversed: bool,
    found: bool,
    hops: usize,
    path: Vec<NodeId>,
}

/// Print the shortest directed path between two nodes, optionally on the
/// reversed graph.
pub fn cmd_path(
    path: &Path,
    from: NodeId,
    to: NodeId,
    reverse: bool,
    json: bool,
) -> EdgemapResult<()> {
    let mut graph = EdgeListReader::read_from_file(path)?;
    if reverse {
        DirectedGraph::reverse(&mut graph);
    }

    let route = shortest_path(&graph, from, to);

    if json {
        let report = PathReport {
            from,
            to,
            reversed: reverse,
            found: !route.is_empty(),
            hops: route.len().saturating_sub(1),
            path: route,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else if route.is_empty() {
        println!("No path from {} to {}", from, to);
    } else {
        let steps: Vec<String> = route.iter().map(|id| id.to_string()).collect();
        println!("{}", steps.join(" -> "));
        println!("{} hop(s)", route.len() - 1);
    }
    Ok(())
}
