//! Basic build -> query -> reverse -> copy flow.

use edgemap::{shortest_path, DirectedGraph};

fn main() {
    let mut graph = DirectedGraph::new();

    // A small dependency chain plus a shortcut
    let a = graph.add_node();
    let b = graph.add_node();
    let c = graph.add_node();
    let d = graph.add_node();
    graph.connect(a, b);
    graph.connect(b, c);
    graph.connect(c, d);
    graph.connect(a, d);

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let path = shortest_path(&graph, a, d);
    println!("Shortest path {} -> {}: {:?}", a, d, path);

    // A deep copy is fully independent
    let copy = graph.deep_copy();
    graph.disconnect(a, d);
    println!(
        "After disconnect: original path {:?}, copy path {:?}",
        shortest_path(&graph, a, d),
        shortest_path(&copy, a, d)
    );

    // Reversing flips every edge
    DirectedGraph::reverse(&mut graph);
    println!(
        "Reversed: path {} -> {} is {:?}",
        d,
        a,
        shortest_path(&graph, d, a)
    );
}
