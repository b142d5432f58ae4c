//! Indexed topology enumeration and traversal benchmarks.
//!
//! Measures how quickly each topology family yields its edge list and how
//! quickly a traverser visits every incident edge of every node. Both are
//! computed from the adjacency rule alone, so no setup beyond the shape
//! parameters is needed.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use nodal_benches::{error::BenchSetupError, params::TopologyBenchParams, suite::topologies};
use nodal_core::{Graph, GraphError, IndexedGraph};

/// Graph sizes to benchmark.
const NODE_COUNTS: &[usize] = &[100, 1_000, 10_000];

fn bench_params(graph: &IndexedGraph) -> TopologyBenchParams {
    TopologyBenchParams {
        topology: graph.topology().label(),
        node_count: graph.node_count(),
    }
}

fn visit_all(graph: &IndexedGraph) -> Result<usize, GraphError> {
    let mut visited = 0;
    for node in graph.nodes() {
        visited += graph.traverse(node)?.count();
    }
    Ok(visited)
}

fn edge_enumeration_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("edge_enumeration");
    group.sample_size(20);

    for &node_count in NODE_COUNTS {
        for graph in topologies(node_count)? {
            group.bench_with_input(
                BenchmarkId::from_parameter(bench_params(&graph)),
                &graph,
                |b, graph| {
                    b.iter(|| black_box(graph.edges().count()));
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn traversal_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("traversal");
    group.sample_size(20);

    for &node_count in NODE_COUNTS {
        for graph in topologies(node_count)? {
            // Degree sum doubles as a sanity check on the traversal protocol.
            let expected = 2 * graph.edge_count();
            let actual = visit_all(&graph)?;
            if actual != expected {
                return Err(BenchSetupError::DegreeSum {
                    topology: graph.topology().label(),
                    expected,
                    actual,
                });
            }
            group.bench_with_input(
                BenchmarkId::from_parameter(bench_params(&graph)),
                &graph,
                |b, graph| {
                    b.iter(|| black_box(visit_all(graph)));
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn edge_enumeration(c: &mut Criterion) {
    if let Err(err) = edge_enumeration_impl(c) {
        panic!("edge_enumeration benchmark setup failed: {err}");
    }
}

fn traversal(c: &mut Criterion) {
    if let Err(err) = traversal_impl(c) {
        panic!("traversal benchmark setup failed: {err}");
    }
}

criterion_group!(benches, edge_enumeration, traversal);
criterion_main!(benches);
