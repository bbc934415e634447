//! Criterion benchmarks for pathgraph.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use pathgraph::{find_path, Graph};

/// Build a width x height grid graph; vertices are flattened (row, col)
/// indices. Grids give long, winding DFS paths without disconnection.
fn make_grid_graph(width: usize, height: usize) -> Graph<usize> {
    let mut graph = Graph::new();
    for v in 0..width * height {
        graph.add_vertex(v);
    }
    for row in 0..height {
        for col in 0..width {
            let v = row * width + col;
            if col + 1 < width {
                graph.add_edge(&v, &(v + 1));
            }
            if row + 1 < height {
                graph.add_edge(&v, &(v + width));
            }
        }
    }
    graph
}

fn bench_add_vertex(c: &mut Criterion) {
    c.bench_function("add_vertex_10k", |b| {
        b.iter(|| {
            let mut graph = Graph::new();
            for v in 0..10_000usize {
                graph.add_vertex(black_box(v));
            }
            graph
        });
    });
}

fn bench_add_edge_chain(c: &mut Criterion) {
    c.bench_function("add_edge_chain_10k", |b| {
        b.iter(|| {
            let mut graph = Graph::new();
            for v in 0..10_000usize {
                graph.add_vertex(v);
            }
            for v in 0..9_999usize {
                graph.add_edge(black_box(&v), black_box(&(v + 1)));
            }
            graph
        });
    });
}

fn bench_find_path_grid(c: &mut Criterion) {
    let graph = make_grid_graph(100, 100);
    let target = 100 * 100 - 1;
    c.bench_function("find_path_grid_100x100", |b| {
        b.iter(|| find_path(&graph, black_box(&0), black_box(&target)));
    });
}

fn bench_find_path_absent(c: &mut Criterion) {
    // two disconnected grids; the search must exhaust one component
    let mut graph = make_grid_graph(70, 70);
    let offset = 70 * 70;
    for v in offset..offset + 100 {
        graph.add_vertex(v);
    }
    c.bench_function("find_path_disconnected_70x70", |b| {
        b.iter(|| find_path(&graph, black_box(&0), black_box(&offset)));
    });
}

fn bench_render(c: &mut Criterion) {
    let graph = make_grid_graph(30, 30);
    c.bench_function("render_grid_30x30", |b| {
        b.iter(|| black_box(&graph).render());
    });
}

criterion_group!(
    benches,
    bench_add_vertex,
    bench_add_edge_chain,
    bench_find_path_grid,
    bench_find_path_absent,
    bench_render,
);
criterion_main!(benches);
