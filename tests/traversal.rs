//! Shortest-path scenarios.

use edgemap::graph::{shortest_path, DirectedGraph, GraphBuilder};

#[test]
fn test_path_on_empty_graph() {
    let graph = DirectedGraph::new();
    assert!(shortest_path(&graph, 1, 2).is_empty());
}

#[test]
fn test_path_with_missing_endpoint() {
    let graph = GraphBuilder::new().edge(1, 2).build();
    assert!(shortest_path(&graph, 1, 99).is_empty());
    assert!(shortest_path(&graph, 99, 2).is_empty());
}

#[test]
fn test_path_to_self() {
    let graph = GraphBuilder::new().node(1).build();
    assert_eq!(shortest_path(&graph, 1, 1), vec![1]);
}

#[test]
fn test_direct_edge() {
    let mut graph = DirectedGraph::new();
    let from = graph.add_node();
    let to = graph.add_node();
    graph.connect(from, to);

    assert_eq!(shortest_path(&graph, from, to), vec![from, to]);
    // Directed: nothing goes the other way.
    assert!(shortest_path(&graph, to, from).is_empty());
}

#[test]
fn test_path_gone_after_disconnect() {
    let mut graph = DirectedGraph::new();
    let from = graph.add_node();
    let to = graph.add_node();
    graph.connect(from, to);
    assert_eq!(shortest_path(&graph, from, to).len(), 2);

    graph.disconnect(from, to);
    assert!(shortest_path(&graph, from, to).is_empty());

    graph.connect(from, to);
    assert_eq!(shortest_path(&graph, from, to).len(), 2);
}

#[test]
fn test_path_gone_after_deleting_destination() {
    let mut graph = DirectedGraph::new();
    let from = graph.add_node();
    let to = graph.add_node();
    graph.connect(from, to);

    graph.delete(to);
    assert!(shortest_path(&graph, from, to).is_empty());
    assert!(!graph.is_connected(from, to));
}

#[test]
fn test_three_node_chain() {
    let graph = GraphBuilder::new().chain(&[1, 2, 3]).build();
    assert_eq!(shortest_path(&graph, 1, 3), vec![1, 2, 3]);
}

#[test]
fn test_prefers_fewer_hops() {
    // Long way around 1 -> 2 -> 3 -> 4, shortcut 1 -> 4.
    let graph = GraphBuilder::new().chain(&[1, 2, 3, 4]).edge(1, 4).build();
    assert_eq!(shortest_path(&graph, 1, 4), vec![1, 4]);
}

#[test]
fn test_unreachable_in_disconnected_graph() {
    let graph = GraphBuilder::new().edge(1, 2).edge(3, 4).build();
    assert!(shortest_path(&graph, 1, 4).is_empty());
}

#[test]
fn test_edges_are_one_way_for_reachability() {
    // 1 -> 2 and 3 -> 2: node 3 is not reachable from 1.
    let graph = GraphBuilder::new().edge(1, 2).edge(3, 2).build();
    assert!(shortest_path(&graph, 1, 3).is_empty());
}

#[test]
fn test_diamond_paths_have_equal_length() {
    // Two shortest paths: 1 -> 2 -> 4 and 1 -> 3 -> 4.
    let graph = GraphBuilder::new()
        .edge(1, 2)
        .edge(1, 3)
        .edge(2, 4)
        .edge(3, 4)
        .build();
    let path = shortest_path(&graph, 1, 4);
    assert_eq!(path.len(), 3);
    assert_eq!(path.first(), Some(&1));
    assert_eq!(path.last(), Some(&4));
}

#[test]
fn test_cycle_does_not_loop_forever() {
    let graph = GraphBuilder::new().chain(&[1, 2, 3, 1]).build();
    assert_eq!(shortest_path(&graph, 1, 3), vec![1, 2, 3]);
    assert_eq!(shortest_path(&graph, 3, 2), vec![3, 1, 2]);
}

#[test]
fn test_path_on_reversed_graph() {
    let mut graph = GraphBuilder::new().chain(&[1, 2, 3]).build();
    DirectedGraph::reverse(&mut graph);
    assert!(shortest_path(&graph, 1, 3).is_empty());
    assert_eq!(shortest_path(&graph, 3, 1), vec![3, 2, 1]);
}

#[test]
fn test_long_chain() {
    let ids: Vec<i64> = (0..500).collect();
    let graph = GraphBuilder::new().chain(&ids).build();
    let path = shortest_path(&graph, 0, 499);
    assert_eq!(path.len(), 500);
    assert_eq!(path, ids);
}
