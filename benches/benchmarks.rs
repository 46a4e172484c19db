//! Criterion benchmarks for graphwalk.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use graphwalk::graph::Graph;
use graphwalk::types::Vertex;

/// Build a random graph with roughly `edges_per_vertex` edges per vertex.
fn make_random_graph(
    vertex_count: usize,
    edges_per_vertex: usize,
) -> (Graph<usize>, Vec<Vertex<usize>>) {
    let mut rng = rand::thread_rng();
    let vertices: Vec<Vertex<usize>> = (0..vertex_count).map(Vertex::new).collect();
    let mut graph = Graph::new();
    graph.add_vertices(&vertices);

    for (i, v) in vertices.iter().enumerate() {
        for _ in 0..edges_per_vertex {
            let target = rng.gen_range(0..vertex_count);
            if target != i {
                graph.add_edge(v, &vertices[target]);
            }
        }
    }

    (graph, vertices)
}

fn bench_add_edges(c: &mut Criterion) {
    let vertices: Vec<Vertex<usize>> = (0..1_000).map(Vertex::new).collect();
    c.bench_function("add_edges_1k_chain", |b| {
        b.iter(|| {
            let mut graph = Graph::new();
            for pair in vertices.windows(2) {
                graph.add_edge(&pair[0], &pair[1]);
            }
            black_box(graph.edge_count())
        })
    });
}

fn bench_remove_vertex(c: &mut Criterion) {
    let (graph, vertices) = make_random_graph(1_000, 8);
    c.bench_function("remove_vertex_10k_edges", |b| {
        b.iter(|| {
            let mut g = graph.clone();
            for v in vertices.iter().step_by(10) {
                g.remove_vertex(v);
            }
            black_box(g.vertex_count())
        })
    });
}

fn bench_depth_first(c: &mut Criterion) {
    let (graph, vertices) = make_random_graph(10_000, 5);
    c.bench_function("depth_first_10k", |b| {
        b.iter(|| black_box(graph.depth_first_search(&vertices[0])))
    });
}

fn bench_breadth_first(c: &mut Criterion) {
    let (graph, vertices) = make_random_graph(10_000, 5);
    c.bench_function("breadth_first_10k", |b| {
        b.iter(|| black_box(graph.breadth_first_search(&vertices[0])))
    });
}

criterion_group!(
    benches,
    bench_add_edges,
    bench_remove_vertex,
    bench_depth_first,
    bench_breadth_first
);
criterion_main!(benches);
