//! Preferential attachment: new nodes favour well-connected targets.

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, info, instrument, trace};

use super::{
    DEFAULT_SEED,
    sampling::{MAX_REJECTIONS, draw_uniform, pick_weighted, record_fallback, record_resample},
};
use crate::{
    edge_set::EdgeSetGraph,
    error::{GraphError, Result},
    graph::Graph,
    indexed::IndexedGraph,
};

/// Parameters for the preferential-attachment model.
///
/// # Examples
/// ```
/// use nodal_core::{Graph, PreferentialParams};
///
/// let graph = PreferentialParams::new(3, 40, 2)?.with_rng_seed(9).generate()?;
/// assert_eq!(graph.node_count(), 40);
/// assert_eq!(graph.edge_count(), 2 * (40 - 3));
/// # Ok::<(), nodal_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PreferentialParams {
    initial_nodes: usize,
    final_nodes: usize,
    edges_per_node: usize,
    rng_seed: u64,
}

impl PreferentialParams {
    /// Creates preferential-attachment parameters.
    ///
    /// The graph starts from `initial_nodes + 1` nodes and grows to
    /// `final_nodes`, each new node attaching `edges_per_node` edges.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidShape`] unless
    /// `1 <= edges_per_node <= initial_nodes` and
    /// `final_nodes > initial_nodes`.
    pub fn new(initial_nodes: usize, final_nodes: usize, edges_per_node: usize) -> Result<Self> {
        if edges_per_node == 0 {
            return Err(GraphError::invalid_shape(
                "preferential",
                "edges per new node must be at least 1",
            ));
        }
        if edges_per_node > initial_nodes {
            return Err(GraphError::invalid_shape(
                "preferential",
                format!(
                    "edges per new node ({edges_per_node}) must not exceed the initial nodes ({initial_nodes})"
                ),
            ));
        }
        if final_nodes <= initial_nodes {
            return Err(GraphError::invalid_shape(
                "preferential",
                format!(
                    "final nodes ({final_nodes}) must exceed the initial nodes ({initial_nodes})"
                ),
            ));
        }
        Ok(Self {
            initial_nodes,
            final_nodes,
            edges_per_node,
            rng_seed: DEFAULT_SEED,
        })
    }

    /// Seeds the RNG used by [`PreferentialParams::generate`].
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Returns the number of initial nodes, `m0`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn initial_nodes(&self) -> usize { self.initial_nodes }

    /// Returns the number of nodes in the finished graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn final_nodes(&self) -> usize { self.final_nodes }

    /// Returns the edges attached by each new node, `m`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges_per_node(&self) -> usize { self.edges_per_node }

    /// Returns the configured RNG seed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rng_seed(&self) -> u64 { self.rng_seed }

    /// Builds a graph using a [`SmallRng`] seeded from the configured seed.
    ///
    /// # Errors
    /// Propagates failures from [`PreferentialParams::generate_with`].
    pub fn generate(&self) -> Result<EdgeSetGraph> {
        let mut rng = SmallRng::seed_from_u64(self.rng_seed);
        self.generate_with(&mut rng)
    }

    /// Builds a graph drawing randomness from `rng`.
    ///
    /// # Errors
    /// Returns [`GraphError::Unsatisfiable`] if a new node cannot find enough
    /// distinct targets.
    #[instrument(
        name = "generator.preferential",
        err,
        skip(self, rng),
        fields(
            initial_nodes = self.initial_nodes,
            final_nodes = self.final_nodes,
            edges_per_node = self.edges_per_node,
        ),
    )]
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<EdgeSetGraph> {
        let scaffold = IndexedGraph::empty(self.initial_nodes + 1);
        let mut graph = EdgeSetGraph::from_graph(&scaffold)?.with_name("preferential");
        attach_preferential(&mut graph, self, rng)?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "preferential graph generated"
        );
        Ok(graph)
    }
}

/// Grows `graph` by preferential attachment.
///
/// `graph` must be edgeless with nodes `0..=params.initial_nodes()`. Node
/// `m0` is first joined to `m` distinct nodes drawn uniformly from `0..m0`.
/// Every later node is added with [`Graph::add_node`] and attached to `m`
/// distinct existing nodes, each drawn with probability proportional to its
/// current degree.
///
/// # Errors
/// Returns [`GraphError::InvalidShape`] when `graph` does not hold the seed
/// nodes, [`GraphError::Unsatisfiable`] when a node runs out of distinct
/// targets, and propagates errors from the graph mutations.
pub fn attach_preferential<G, R>(
    graph: &mut G,
    params: &PreferentialParams,
    rng: &mut R,
) -> Result<()>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    let seed = params.initial_nodes;
    let wanted = params.edges_per_node;
    if graph.node_count() != seed + 1 || !graph.contains_node(seed) {
        return Err(GraphError::invalid_shape(
            "preferential",
            format!(
                "scaffold must hold nodes 0..={seed} (found {} nodes)",
                graph.node_count()
            ),
        ));
    }

    let mut chosen = HashSet::with_capacity(wanted);
    for placed in 0..wanted {
        let target = draw_uniform(rng, seed, seed, &chosen, wanted - placed)?;
        graph.add_edge(seed, target, false)?;
        chosen.insert(target);
    }

    let mut total_degree = 2 * wanted;
    for _ in seed + 1..params.final_nodes {
        let node = graph.add_node()?;
        let mut attached = HashSet::with_capacity(wanted);
        check_attachable(graph, node, wanted)?;
        for placed in 0..wanted {
            let degrees = current_degrees(&*graph, node)?;
            let target = match draw_by_degree(rng, node, total_degree, &degrees, &attached) {
                Some(target) => target,
                None => fallback_by_degree(rng, node, &degrees, &attached, wanted - placed)?,
            };
            graph.add_edge(node, target, false)?;
            attached.insert(target);
        }
        total_degree += 2 * wanted;
    }
    Ok(())
}

/// Fails unless at least `wanted` nodes before `node` have positive degree.
fn check_attachable<G: Graph + ?Sized>(graph: &G, node: usize, wanted: usize) -> Result<()> {
    let mut available = 0;
    for other in 0..node {
        if graph.contains_node(other) && graph.degree(other)? > 0 {
            available += 1;
        }
    }
    if available < wanted {
        return Err(GraphError::Unsatisfiable {
            node,
            required: wanted,
            available,
        });
    }
    Ok(())
}

/// Snapshots `(node, degree)` for every live node before `node`.
///
/// Removed slots are skipped rather than weighted as zero.
fn current_degrees<G: Graph + ?Sized>(graph: &G, node: usize) -> Result<Vec<(usize, usize)>> {
    (0..node)
        .filter(|&other| graph.contains_node(other))
        .map(|other| Ok((other, graph.degree(other)?)))
        .collect()
}

/// Rejection-samples a degree-weighted target, or returns `None` after
/// [`MAX_REJECTIONS`] consecutive rejections.
fn draw_by_degree<R: Rng + ?Sized>(
    rng: &mut R,
    node: usize,
    total_degree: usize,
    degrees: &[(usize, usize)],
    attached: &HashSet<usize>,
) -> Option<usize> {
    for attempt in 0..MAX_REJECTIONS {
        let draw = rng.gen_range(0..total_degree);
        match pick_weighted(degrees.iter().copied(), draw) {
            Some(target) if !attached.contains(&target) => return Some(target),
            target => {
                trace!(node, ?target, attempt, "rejected attachment target");
                record_resample();
            }
        }
    }
    None
}

/// Draws a degree-weighted target from the explicitly enumerated eligible
/// nodes.
fn fallback_by_degree<R: Rng + ?Sized>(
    rng: &mut R,
    node: usize,
    degrees: &[(usize, usize)],
    attached: &HashSet<usize>,
    required: usize,
) -> Result<usize> {
    let eligible: Vec<(usize, usize)> = degrees
        .iter()
        .copied()
        .filter(|&(other, degree)| degree > 0 && !attached.contains(&other))
        .collect();
    let weight: usize = eligible.iter().map(|&(_, degree)| degree).sum();
    debug!(node, eligible = eligible.len(), "falling back to enumerated targets");
    record_fallback();
    let unsatisfiable = GraphError::Unsatisfiable {
        node,
        required,
        available: eligible.len(),
    };
    if eligible.len() < required || weight == 0 {
        return Err(unsatisfiable);
    }
    pick_weighted(eligible, rng.gen_range(0..weight)).ok_or(unsatisfiable)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn seeded(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    fn star_with_removed_leaf() -> Result<EdgeSetGraph> {
        let mut graph = EdgeSetGraph::from_graph(&IndexedGraph::star(4)?)?;
        graph.remove_node(2)?;
        Ok(graph)
    }

    #[rstest]
    fn current_degrees_skip_removed_nodes() -> Result<()> {
        let graph = star_with_removed_leaf()?;
        let degrees = current_degrees(&graph, 5)?;
        assert_eq!(degrees, vec![(0, 3), (1, 1), (3, 1), (4, 1)]);
        Ok(())
    }

    #[rstest]
    fn current_degrees_stop_before_the_new_node() -> Result<()> {
        let graph = star_with_removed_leaf()?;
        assert_eq!(current_degrees(&graph, 2)?, vec![(0, 3), (1, 1)]);
        assert!(current_degrees(&graph, 0)?.is_empty());
        Ok(())
    }

    #[rstest]
    #[case::first_seed(1)]
    #[case::second_seed(7)]
    #[case::third_seed(42)]
    fn fallback_picks_only_unattached_positive_degree_nodes(#[case] seed: u64) -> Result<()> {
        let degrees = [(0, 3), (1, 0), (3, 5), (4, 2)];
        let attached = HashSet::from([3]);
        let mut rng = seeded(seed);
        for _ in 0..64 {
            let target = fallback_by_degree(&mut rng, 5, &degrees, &attached, 1)?;
            assert!(matches!(target, 0 | 4), "unexpected target {target}");
        }
        Ok(())
    }

    #[rstest]
    fn fallback_with_a_single_candidate_is_deterministic() -> Result<()> {
        let degrees = [(0, 4), (1, 0), (2, 6)];
        let attached = HashSet::from([2]);
        assert_eq!(fallback_by_degree(&mut seeded(3), 3, &degrees, &attached, 1)?, 0);
        Ok(())
    }

    #[rstest]
    #[case::too_few_eligible(&[(0, 2), (1, 0), (2, 2)], &[2], 2, 1)]
    #[case::all_attached(&[(0, 1), (1, 1)], &[0, 1], 1, 0)]
    #[case::no_degree(&[(0, 0), (1, 0)], &[], 1, 0)]
    fn fallback_reports_unsatisfiable(
        #[case] degrees: &[(usize, usize)],
        #[case] attached: &[usize],
        #[case] required: usize,
        #[case] available: usize,
    ) {
        let attached: HashSet<usize> = attached.iter().copied().collect();
        let err = fallback_by_degree(&mut seeded(5), 9, degrees, &attached, required)
            .expect_err("too few targets must be rejected");
        assert_eq!(
            err,
            GraphError::Unsatisfiable {
                node: 9,
                required,
                available,
            }
        );
    }

    #[rstest]
    fn draw_gives_up_when_all_weight_is_attached() {
        let attached = HashSet::from([0]);
        let degrees = [(0, 4), (1, 0)];
        assert_eq!(draw_by_degree(&mut seeded(8), 2, 4, &degrees, &attached), None);
    }
}
