//! Criterion benchmarks for edgemap.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use edgemap::graph::{shortest_path, DirectedGraph};
use edgemap::types::NodeId;

/// Build a random graph with `node_count` nodes and roughly
/// `edges_per_node` outgoing edges each.
fn make_random_graph(node_count: i64, edges_per_node: usize) -> DirectedGraph {
    let mut rng = rand::thread_rng();
    let mut graph = DirectedGraph::new();
    for id in 0..node_count {
        graph.add_node_with_id(id);
    }
    for from in 0..node_count {
        for _ in 0..edges_per_node {
            let to: NodeId = rng.gen_range(0..node_count);
            graph.connect(from, to);
        }
    }
    graph
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("build_10k_nodes_5_edges", |b| {
        b.iter(|| make_random_graph(black_box(10_000), black_box(5)));
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 5);
    c.bench_function("shortest_path_10k", |b| {
        b.iter(|| shortest_path(black_box(&graph), 0, 9_999));
    });

    // Worst case: one long chain, the whole graph is on the path.
    let mut chain = DirectedGraph::new();
    for id in 0..10_000 {
        chain.add_node_with_id(id);
    }
    for id in 0..9_999 {
        chain.connect(id, id + 1);
    }
    c.bench_function("shortest_path_chain_10k", |b| {
        b.iter(|| shortest_path(black_box(&chain), 0, 9_999));
    });
}

fn bench_deep_copy(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 5);
    c.bench_function("deep_copy_10k", |b| {
        b.iter(|| black_box(&graph).deep_copy());
    });
}

fn bench_reverse(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 5);
    c.bench_function("reverse_10k", |b| {
        b.iter(|| {
            let mut copy = graph.deep_copy();
            DirectedGraph::reverse(&mut copy);
            copy
        });
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_shortest_path,
    bench_deep_copy,
    bench_reverse
);
criterion_main!(benches);
