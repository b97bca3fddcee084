//! Build a ring with chords and time a long BFS query.

use std::time::Instant;

use edgemap::{shortest_path, DirectedGraph};

const NODES: i64 = 100_000;

fn main() {
    let started = Instant::now();

    let mut graph = DirectedGraph::new();
    for id in 0..NODES {
        graph.add_node_with_id(id);
    }
    // Ring, plus a chord from every 100th node jumping ahead 1000.
    for id in 0..NODES {
        graph.connect(id, (id + 1) % NODES);
        if id % 100 == 0 {
            graph.connect(id, (id + 1_000) % NODES);
        }
    }
    println!(
        "Built {} nodes / {} edges in {:?}",
        graph.node_count(),
        graph.edge_count(),
        started.elapsed()
    );

    let started = Instant::now();
    let path = shortest_path(&graph, 0, NODES / 2);
    println!(
        "Shortest path 0 -> {}: {} hops in {:?}",
        NODES / 2,
        path.len().saturating_sub(1),
        started.elapsed()
    );

    let started = Instant::now();
    DirectedGraph::reverse(&mut graph);
    println!("Reversed the graph in {:?}", started.elapsed());

    let path_back = shortest_path(&graph, NODES / 2, 0);
    println!(
        "On the reversed graph, {} -> 0 takes {} hops",
        NODES / 2,
        path_back.len().saturating_sub(1)
    );
}
