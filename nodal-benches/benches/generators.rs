//! Random graph generator benchmarks.
//!
//! Measures end-to-end generation for each model, including scaffold
//! construction, so results reflect what a caller of `generate` observes.
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

use nodal_benches::{error::BenchSetupError, params::GeneratorBenchParams};
use nodal_core::{PreferentialParams, SmallWorldParams, UniformParams};

/// Seed used for every generator run.
const SEED: u64 = 42;

/// Graph sizes to benchmark.
const NODE_COUNTS: &[usize] = &[100, 500, 2_000];

/// Edge probability for the uniform model.
const UNIFORM_PROBABILITY: f64 = 0.05;

/// Ring distance and rewiring probability for the small-world model.
const RING_DISTANCE: usize = 4;
const REWIRE_PROBABILITY: f64 = 0.2;

/// Initial nodes and edges per new node for preferential attachment.
const INITIAL_NODES: usize = 5;
const EDGES_PER_NODE: usize = 3;

fn uniform_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("uniform");
    group.sample_size(10);

    for &node_count in NODE_COUNTS {
        let params = UniformParams::new(node_count, UNIFORM_PROBABILITY)?.with_rng_seed(SEED);
        let bench_params = GeneratorBenchParams {
            node_count,
            density: format!("p={UNIFORM_PROBABILITY}"),
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(&bench_params),
            &params,
            |b, params| {
                b.iter(|| black_box(params.generate()));
            },
        );
    }

    group.finish();
    Ok(())
}

fn small_world_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("small_world");
    group.sample_size(10);

    for &node_count in NODE_COUNTS {
        let params = SmallWorldParams::new(node_count, RING_DISTANCE, REWIRE_PROBABILITY)?
            .with_rng_seed(SEED);
        let bench_params = GeneratorBenchParams {
            node_count,
            density: format!("k={RING_DISTANCE},p={REWIRE_PROBABILITY}"),
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(&bench_params),
            &params,
            |b, params| {
                b.iter(|| black_box(params.generate()));
            },
        );
    }

    group.finish();
    Ok(())
}

fn preferential_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("preferential");
    group.sample_size(10);

    for &node_count in NODE_COUNTS {
        let params =
            PreferentialParams::new(INITIAL_NODES, node_count, EDGES_PER_NODE)?.with_rng_seed(SEED);
        let bench_params = GeneratorBenchParams {
            node_count,
            density: format!("m={EDGES_PER_NODE}"),
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(&bench_params),
            &params,
            |b, params| {
                b.iter(|| black_box(params.generate()));
            },
        );
    }

    group.finish();
    Ok(())
}

fn uniform(c: &mut Criterion) {
    if let Err(err) = uniform_impl(c) {
        panic!("uniform benchmark setup failed: {err}");
    }
}

fn small_world(c: &mut Criterion) {
    if let Err(err) = small_world_impl(c) {
        panic!("small_world benchmark setup failed: {err}");
    }
}

fn preferential(c: &mut Criterion) {
    if let Err(err) = preferential_impl(c) {
        panic!("preferential benchmark setup failed: {err}");
    }
}

criterion_group!(benches, uniform, small_world, preferential);
criterion_main!(benches);
