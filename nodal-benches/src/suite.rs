//! Topology suites sized for benchmark inputs.

use nodal_core::IndexedGraph;

use crate::error::BenchSetupError;

/// Ring distance used for the circulant member of the suite.
pub const RING_DISTANCE: usize = 3;

/// Largest complete graph in the suite; its edge count grows quadratically.
pub const COMPLETE_CAP: usize = 256;

/// Builds one graph per topology family with roughly `node_count` nodes.
///
/// Meshes, trees and complete graphs round the size down to the nearest
/// shape they can represent.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when `node_count` is too small for the
/// circulant ring, which needs more than `2 * RING_DISTANCE` nodes.
pub fn topologies(node_count: usize) -> Result<Vec<IndexedGraph>, BenchSetupError> {
    let side = node_count.isqrt().max(2);
    let height = (node_count + 1).ilog2().saturating_sub(1) as usize;
    Ok(vec![
        IndexedGraph::path(node_count)?,
        IndexedGraph::cycle(node_count)?,
        IndexedGraph::circulant(node_count, RING_DISTANCE)?,
        IndexedGraph::complete(node_count.min(COMPLETE_CAP))?,
        IndexedGraph::complete_tree(height, 2)?,
        IndexedGraph::star(node_count.saturating_sub(1))?,
        IndexedGraph::mesh(side, side)?,
    ])
}

#[cfg(test)]
mod tests {
    use nodal_core::{Graph, Topology};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(64)]
    #[case(100)]
    #[case(1_000)]
    fn suites_stay_near_the_requested_size(#[case] node_count: usize) {
        let suite = topologies(node_count).expect("suite must build");
        assert_eq!(suite.len(), 7);
        for graph in &suite {
            assert!(graph.node_count() <= node_count, "{}", graph.name());
            assert!(graph.node_count() * 4 >= node_count.min(COMPLETE_CAP), "{}", graph.name());
        }
        assert!(suite.iter().any(|graph| matches!(graph.topology(), Topology::Mesh { .. })));
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    fn small_sizes_are_rejected(#[case] node_count: usize) {
        let err = topologies(node_count).expect_err("suite needs a valid ring");
        assert!(matches!(err, BenchSetupError::Graph(_)));
    }
}
