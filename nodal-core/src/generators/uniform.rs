//! The `G(n, p)` model: every unordered pair is joined independently.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use super::{DEFAULT_SEED, check_probability};
use crate::{
    edge_set::EdgeSetGraph,
    error::Result,
    graph::Graph,
    indexed::IndexedGraph,
};

/// Parameters for the uniform random graph model.
///
/// # Examples
/// ```
/// use nodal_core::{Graph, UniformParams};
///
/// let graph = UniformParams::new(6, 1.0)?.generate()?;
/// assert_eq!(graph.edge_count(), 15);
/// # Ok::<(), nodal_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UniformParams {
    node_count: usize,
    probability: f64,
    rng_seed: u64,
}

impl UniformParams {
    /// Creates parameters for `node_count` nodes joined with probability
    /// `probability`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidShape`] when `probability` is not
    /// a finite value in `[0, 1]`.
    pub fn new(node_count: usize, probability: f64) -> Result<Self> {
        check_probability("uniform", probability)?;
        Ok(Self {
            node_count,
            probability,
            rng_seed: DEFAULT_SEED,
        })
    }

    /// Seeds the RNG used by [`UniformParams::generate`].
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the per-pair edge probability.
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
    /// Propagates failures from [`UniformParams::generate_with`].
    pub fn generate(&self) -> Result<EdgeSetGraph> {
        let mut rng = SmallRng::seed_from_u64(self.rng_seed);
        self.generate_with(&mut rng)
    }

    /// Builds a graph drawing randomness from `rng`.
    ///
    /// # Errors
    /// Returns an error only if the working graph rejects an edge, which
    /// cannot happen for a freshly created edgeless scaffold.
    #[instrument(
        name = "generator.uniform",
        err,
        skip(self, rng),
        fields(nodes = self.node_count, probability = self.probability),
    )]
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<EdgeSetGraph> {
        let scaffold = IndexedGraph::empty(self.node_count);
        let mut graph = EdgeSetGraph::from_graph(&scaffold)?.with_name("uniform");
        connect_uniform(&mut graph, self, rng)?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "uniform graph generated"
        );
        Ok(graph)
    }
}

/// Adds each edge `(tail, head)` with `tail < head` among the nodes of
/// `graph` independently with probability `params.probability()`.
///
/// Pairs are visited tail-major in node enumeration order.
///
/// # Errors
/// Propagates any error returned by [`Graph::add_edge`].
pub fn connect_uniform<G, R>(graph: &mut G, params: &UniformParams, rng: &mut R) -> Result<usize>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    let nodes: Vec<usize> = graph.nodes().collect();
    let mut added = 0;
    for (position, &tail) in nodes.iter().enumerate() {
        for &head in nodes.iter().skip(position + 1) {
            if rng.gen_bool(params.probability) && graph.add_edge(tail, head, false)? {
                added += 1;
            }
        }
    }
    Ok(added)
}
