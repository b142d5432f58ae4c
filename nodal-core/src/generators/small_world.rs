//! Small-world rewiring of a circulant ring.

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{info, instrument, trace};

use super::{DEFAULT_SEED, check_probability, renamed, sampling::draw_uniform};
use crate::{
    edge::Direction,
    edge_set::EdgeSetGraph,
    error::Result,
    graph::Graph,
    indexed::IndexedGraph,
};

/// Parameters for the small-world model.
///
/// The scaffold is `Circulant(node_count, distance)`; each ring edge is then
/// rewired with probability `probability`.
///
/// # Examples
/// ```
/// use nodal_core::{Graph, SmallWorldParams};
///
/// let ring = SmallWorldParams::new(12, 2, 0.0)?.generate()?;
/// assert_eq!(ring.edge_count(), 24);
/// assert!(ring.nodes().all(|node| ring.degree(node) == Ok(4)));
/// # Ok::<(), nodal_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SmallWorldParams {
    node_count: usize,
    distance: usize,
    probability: f64,
    rng_seed: u64,
}

impl SmallWorldParams {
    /// Creates small-world parameters.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidShape`] when `probability` is not a
    /// finite value in `[0, 1]`, or when `(node_count, distance)` is not a
    /// valid circulant shape.
    pub fn new(node_count: usize, distance: usize, probability: f64) -> Result<Self> {
        check_probability("small-world", probability)?;
        IndexedGraph::circulant(node_count, distance).map_err(renamed("small-world"))?;
        Ok(Self {
            node_count,
            distance,
            probability,
            rng_seed: DEFAULT_SEED,
        })
    }

    /// Seeds the RNG used by [`SmallWorldParams::generate`].
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Returns the number of nodes on the ring.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the largest ring distance joined by the scaffold.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distance(&self) -> usize { self.distance }

    /// Returns the per-edge rewiring probability.
    #[must_use]
    #[rustfmt::skip]
    pub const fn probability(&self) -> f64 { self.probability }

    /// Returns the configured RNG seed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rng_seed(&self) -> u64 { self.rng_seed }

    /// Builds a graph using a [`SmallRng`] seeded from the configured seed.
    ///
    /// # Errors
    /// Propagates failures from [`SmallWorldParams::generate_with`].
    pub fn generate(&self) -> Result<EdgeSetGraph> {
        let mut rng = SmallRng::seed_from_u64(self.rng_seed);
        self.generate_with(&mut rng)
    }

    /// Builds a graph drawing randomness from `rng`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::Unsatisfiable`] when a node has no
    /// remaining non-adjacent target to rewire to.
    #[instrument(
        name = "generator.small_world",
        err,
        skip(self, rng),
        fields(
            nodes = self.node_count,
            distance = self.distance,
            probability = self.probability,
        ),
    )]
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<EdgeSetGraph> {
        let scaffold = IndexedGraph::circulant(self.node_count, self.distance)?;
        let mut graph = EdgeSetGraph::from_graph(&scaffold)?.with_name("small-world");
        let rewired = rewire_ring(&mut graph, self, rng)?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            rewired,
            "small-world graph generated"
        );
        Ok(graph)
    }
}

/// Rewires the ring edges of `graph` and returns how many were moved.
///
/// `graph` must hold nodes `0..params.node_count()`. Ring distances are swept
/// from 1 to `params.distance()`, and nodes in ascending order within each
/// distance. A selected forward edge `(node, node + dist)` is removed and
/// replaced by an edge from `node` to a uniformly chosen node that is neither
/// `node` nor currently adjacent to it. Forward edges that no longer exist
/// are left alone.
///
/// # Errors
/// Returns [`crate::GraphError::Unsatisfiable`] when `node` is adjacent to
/// every other node, and propagates errors from the graph mutations.
pub fn rewire_ring<G, R>(graph: &mut G, params: &SmallWorldParams, rng: &mut R) -> Result<usize>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    let n = params.node_count;
    let mut rewired = 0;
    for gap in 1..=params.distance {
        for node in 0..n {
            if !rng.gen_bool(params.probability) {
                continue;
            }
            let forward = (node + gap) % n;
            let Some(edge) = graph.get_edge(node, forward) else {
                trace!(node, forward, "forward edge already rewired");
                continue;
            };
            graph.remove_edge(&edge)?;
            let mut excluded: HashSet<usize> =
                graph.adjacent_nodes(node, Direction::Any)?.into_iter().collect();
            excluded.insert(node);
            let target = draw_uniform(rng, node, n, &excluded, 1)?;
            graph.add_edge(node, target, false)?;
            trace!(node, from = forward, to = target, "rewired ring edge");
            rewired += 1;
        }
    }
    Ok(rewired)
}
