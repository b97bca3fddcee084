//! Reads text edge lists into an in-memory graph.
//!
//! Format: one edge per line, two whitespace-separated decimal ids
//! (`from to`). Blank lines and lines starting with `#` are skipped.
//! Both endpoints are created before the edge is connected, so a file is
//! also a valid way to introduce isolated ids (`5 5` makes a self-loop,
//! a lone id is rejected as malformed).

use std::io::BufRead;
use std::path::Path;

use crate::graph::DirectedGraph;
use crate::types::{EdgemapError, EdgemapResult, NodeId};

/// Reader for text edge-list files.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge-list file into a graph.
    pub fn read_from_file(path: &Path) -> EdgemapResult<DirectedGraph> {
        let file = std::fs::File::open(path)?;
        Self::read_from(std::io::BufReader::new(file))
    }

    /// Read edge-list lines from any buffered reader into a graph.
    pub fn read_from(reader: impl BufRead) -> EdgemapResult<DirectedGraph> {
        let mut graph = DirectedGraph::new();
        let mut edges = 0usize;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let text = line.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let (from, to) = parse_edge(text).map_err(|reason| EdgemapError::MalformedLine {
                line: index + 1,
                reason,
            })?;

            graph.add_node_with_id(from);
            graph.add_node_with_id(to);
            graph.connect(from, to);
            edges += 1;
        }

        log::debug!(
            "edge list parsed: {} edge lines, {} nodes, {} distinct edges",
            edges,
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

/// Parse one non-empty, non-comment line as a `from to` id pair.
fn parse_edge(text: &str) -> Result<(NodeId, NodeId), String> {
    let mut fields = text.split_whitespace();
    let from = fields.next();
    let to = fields.next();
    let (Some(from), Some(to)) = (from, to) else {
        return Err(format!("expected two ids, got {:?}", text));
    };
    if let Some(extra) = fields.next() {
        return Err(format!("unexpected trailing field {:?}", extra));
    }
    let from: NodeId = from
        .parse()
        .map_err(|_| format!("invalid id {:?}", from))?;
    let to: NodeId = to.parse().map_err(|_| format!("invalid id {:?}", to))?;
    Ok((from, to))
}
