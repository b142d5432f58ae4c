use std::collections::HashSet;

use nodal_core::{Edge, Graph};

/// Neighbours of `node` in traversal order.
pub fn neighbours<G: Graph>(graph: &G, node: usize) -> Vec<usize> {
    graph
        .traverse(node)
        .expect("node must exist")
        .map(|(neighbour, _)| neighbour)
        .collect()
}

/// Asserts that `graph` has no duplicate edges and satisfies the handshake
/// lemma.
pub fn assert_simple<G: Graph>(graph: &G) {
    let edges: Vec<Edge> = graph.edges().collect();
    let distinct: HashSet<Edge> = edges.iter().copied().collect();
    assert_eq!(distinct.len(), edges.len(), "duplicate edges in {}", graph.name());
    assert!(edges.iter().all(|edge| !edge.is_self_loop()));
    let degree_sum: usize = graph
        .nodes()
        .map(|node| graph.degree(node).expect("node must exist"))
        .sum();
    assert_eq!(degree_sum, 2 * edges.len(), "handshake fails for {}", graph.name());
}
