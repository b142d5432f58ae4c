//! Mutable graph with explicitly stored nodes and edges.
//!
//! Nodes live in slots indexed by their identifier. Removing a node leaves a
//! tombstone so the remaining identifiers stay stable. Each live slot keeps
//! its incident edges in insertion order, which fixes the traversal order,
//! while a hash set answers membership queries.

use std::{collections::HashSet, iter::Enumerate, slice, sync::Arc};

use crate::{
    edge::Edge,
    error::{GraphError, Result},
    graph::{Graph, require_node},
    traverser::{NeighbourSource, Traverser},
};

const DEFAULT_LABEL: &str = "edge-set";

/// Simple graph backed by adjacency lists and an edge set.
///
/// Self-loops are rejected and an edge equal to a stored edge is ignored, so
/// every incident edge contributes exactly one to a node's degree.
///
/// # Examples
/// ```
/// use nodal_core::{Edge, EdgeSetGraph, Graph};
///
/// let mut graph = EdgeSetGraph::with_nodes(3);
/// assert!(graph.add_edge(0, 1, false)?);
/// assert!(!graph.add_edge(1, 0, false)?);
/// assert!(graph.add_edge(2, 1, true)?);
/// assert_eq!(graph.degree(1)?, 2);
/// assert_eq!(graph.get_edge(1, 0), Some(Edge::undirected(0, 1)));
/// assert_eq!(graph.get_edge(1, 2), None);
/// # Ok::<(), nodal_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct EdgeSetGraph {
    label: Arc<str>,
    slots: Vec<Option<Vec<Edge>>>,
    edges: HashSet<Edge>,
    live: usize,
}

impl Default for EdgeSetGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeSetGraph {
    /// Creates a graph with no nodes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: Arc::from(DEFAULT_LABEL),
            slots: Vec::new(),
            edges: HashSet::new(),
            live: 0,
        }
    }

    /// Creates `node_count` isolated nodes numbered `0..node_count`.
    #[must_use]
    pub fn with_nodes(node_count: usize) -> Self {
        let mut slots = Vec::with_capacity(node_count);
        slots.resize_with(node_count, || Some(Vec::new()));
        Self {
            slots,
            live: node_count,
            ..Self::new()
        }
    }

    /// Replaces the diagnostic label returned by [`Graph::name`].
    #[must_use]
    pub fn with_name(mut self, label: impl AsRef<str>) -> Self {
        self.label = Arc::from(label.as_ref());
        self
    }

    /// Copies the nodes and edges of `graph`, preserving node identifiers and
    /// edge order.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when `graph` contains a self-loop.
    pub fn from_graph<G: Graph + ?Sized>(graph: &G) -> Result<Self> {
        let span = graph.nodes().max().map_or(0, |node| node + 1);
        let mut slots: Vec<Option<Vec<Edge>>> = Vec::with_capacity(span);
        slots.resize_with(span, || None);
        for node in graph.nodes() {
            if let Some(slot) = slots.get_mut(node) {
                *slot = Some(Vec::new());
            }
        }
        let mut copy = Self {
            label: Arc::from(graph.name()),
            slots,
            edges: HashSet::with_capacity(graph.edge_count()),
            live: graph.node_count(),
        };
        for edge in graph.edges() {
            copy.insert_edge(edge)?;
        }
        Ok(copy)
    }

    /// Returns the number of identifiers issued so far, including removed
    /// nodes.
    #[must_use]
    pub fn id_span(&self) -> usize {
        self.slots.len()
    }

    fn incident(&self, node: usize) -> Option<&[Edge]> {
        self.slots.get(node)?.as_deref()
    }

    fn insert_edge(&mut self, edge: Edge) -> Result<bool> {
        require_node(self, edge.tail())?;
        require_node(self, edge.head())?;
        if edge.is_self_loop() {
            return Err(GraphError::SelfLoop { node: edge.tail() });
        }
        if !self.edges.insert(edge) {
            return Ok(false);
        }
        for endpoint in [edge.tail(), edge.head()] {
            if let Some(Some(list)) = self.slots.get_mut(endpoint) {
                list.push(edge);
            }
        }
        Ok(true)
    }

    fn detach(&mut self, node: usize, edge: &Edge) {
        if let Some(Some(list)) = self.slots.get_mut(node)
            && let Some(position) = list.iter().position(|stored| stored == edge)
        {
            list.remove(position);
        }
    }
}

impl Graph for EdgeSetGraph {
    type Nodes<'a> = LiveNodes<'a>;
    type Edges<'a> = StoredEdges<'a>;
    type Neighbours<'a> = StoredNeighbours<'a>;

    fn name(&self) -> &str {
        &self.label
    }

    fn node_count(&self) -> usize {
        self.live
    }

    fn contains_node(&self, node: usize) -> bool {
        self.incident(node).is_some()
    }

    fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    fn get_edge(&self, tail: usize, head: usize) -> Option<Edge> {
        self.edges
            .get(&Edge::undirected(tail, head))
            .or_else(|| self.edges.get(&Edge::directed(tail, head)))
            .copied()
    }

    fn degree(&self, node: usize) -> Result<usize> {
        require_node(self, node)?;
        Ok(self.incident(node).map_or(0, <[Edge]>::len))
    }

    fn nodes(&self) -> Self::Nodes<'_> {
        LiveNodes {
            slots: self.slots.iter().enumerate(),
        }
    }

    fn edges(&self) -> Self::Edges<'_> {
        StoredEdges {
            slots: self.slots.iter().enumerate(),
            current: None,
        }
    }

    fn traverse(&self, node: usize) -> Result<Traverser<Self::Neighbours<'_>>> {
        require_node(self, node)?;
        let incident = self.incident(node).unwrap_or_default();
        Ok(Traverser::new(
            node,
            StoredNeighbours {
                source: node,
                incident: incident.iter(),
            },
        ))
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn add_node(&mut self) -> Result<usize> {
        let node = self.slots.len();
        self.slots.push(Some(Vec::new()));
        self.live += 1;
        Ok(node)
    }

    fn remove_node(&mut self, node: usize) -> Result<bool> {
        let Some(incident) = self.slots.get_mut(node).and_then(Option::take) else {
            return Ok(false);
        };
        for edge in &incident {
            self.edges.remove(edge);
            let other = if edge.tail() == node {
                edge.head()
            } else {
                edge.tail()
            };
            self.detach(other, edge);
        }
        self.live -= 1;
        Ok(true)
    }

    fn add_edge(&mut self, tail: usize, head: usize, directed: bool) -> Result<bool> {
        self.insert_edge(Edge::new(tail, head, directed))
    }

    fn remove_edge(&mut self, edge: &Edge) -> Result<bool> {
        let Some(stored) = self.edges.take(edge) else {
            return Ok(false);
        };
        self.detach(stored.tail(), &stored);
        self.detach(stored.head(), &stored);
        Ok(true)
    }
}

/// Iterator over the live node identifiers of an [`EdgeSetGraph`].
#[derive(Clone, Debug)]
pub struct LiveNodes<'a> {
    slots: Enumerate<slice::Iter<'a, Option<Vec<Edge>>>>,
}

impl Iterator for LiveNodes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .by_ref()
            .find_map(|(node, slot)| slot.as_ref().map(|_| node))
    }
}

/// Iterator over the stored edges of an [`EdgeSetGraph`].
///
/// Each edge is yielded once, from the adjacency list of its tail, so edges
/// appear grouped by tail in ascending identifier order.
#[derive(Clone, Debug)]
pub struct StoredEdges<'a> {
    slots: Enumerate<slice::Iter<'a, Option<Vec<Edge>>>>,
    current: Option<(usize, slice::Iter<'a, Edge>)>,
}

impl Iterator for StoredEdges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((node, incident)) = self.current.as_mut()
                && let Some(edge) = incident.by_ref().find(|edge| edge.tail() == *node)
            {
                return Some(*edge);
            }
            let (node, slot) = self.slots.next()?;
            self.current = slot.as_deref().map(|incident| (node, incident.iter()));
        }
    }
}

/// Neighbour source over the stored adjacency list of one node.
#[derive(Clone, Debug)]
pub struct StoredNeighbours<'a> {
    source: usize,
    incident: slice::Iter<'a, Edge>,
}

impl NeighbourSource for StoredNeighbours<'_> {
    fn next_neighbour(&mut self) -> Option<(usize, Edge)> {
        let edge = *self.incident.next()?;
        let neighbour = if edge.tail() == self.source {
            edge.head()
        } else {
            edge.tail()
        };
        Some((neighbour, edge))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::{GraphErrorCode, IndexedGraph, edge::Direction};

    #[fixture]
    fn triangle() -> EdgeSetGraph {
        let mut graph = EdgeSetGraph::with_nodes(3);
        for (tail, head) in [(0, 1), (1, 2), (2, 0)] {
            assert_eq!(graph.add_edge(tail, head, false), Ok(true));
        }
        graph
    }

    #[rstest]
    fn duplicate_edges_are_ignored(mut triangle: EdgeSetGraph) {
        assert_eq!(triangle.add_edge(1, 0, false), Ok(false));
        assert_eq!(triangle.edge_count(), 3);
        assert_eq!(triangle.degree(0), Ok(2));
    }

    #[rstest]
    #[case::self_loop(1, 1, GraphErrorCode::SelfLoop)]
    #[case::unknown_tail(7, 1, GraphErrorCode::UnknownNode)]
    #[case::unknown_head(0, 3, GraphErrorCode::UnknownNode)]
    fn invalid_edges_are_rejected(
        mut triangle: EdgeSetGraph,
        #[case] tail: usize,
        #[case] head: usize,
        #[case] code: GraphErrorCode,
    ) {
        let err = triangle
            .add_edge(tail, head, false)
            .expect_err("edge must be rejected");
        assert_eq!(err.code(), code);
        assert_eq!(triangle.edge_count(), 3);
    }

    #[rstest]
    fn traversal_follows_insertion_order(mut triangle: EdgeSetGraph) {
        let node = triangle.add_node().expect("edge-set graphs grow");
        assert_eq!(node, 3);
        assert_eq!(triangle.add_edge(node, 0, true), Ok(true));
        assert_eq!(triangle.adjacent_nodes(0, Direction::Any), Ok(vec![1, 2, 3]));
        assert_eq!(triangle.adjacent_nodes(0, Direction::Incoming), Ok(vec![3]));
        assert_eq!(triangle.degree_filtered(3, Direction::Outgoing), Ok(1));
    }

    #[rstest]
    fn removing_a_node_drops_incident_edges(mut triangle: EdgeSetGraph) {
        assert_eq!(triangle.remove_node(1), Ok(true));
        assert_eq!(triangle.remove_node(1), Ok(false));
        assert_eq!(triangle.node_count(), 2);
        assert_eq!(triangle.id_span(), 3);
        assert_eq!(triangle.nodes().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(triangle.edges().collect::<Vec<_>>(), vec![Edge::undirected(0, 2)]);
        assert_eq!(triangle.degree(2), Ok(1));
        assert!(triangle.degree(1).is_err());
    }

    #[rstest]
    fn removing_an_edge_matches_either_orientation(mut triangle: EdgeSetGraph) {
        assert_eq!(triangle.remove_edge(&Edge::undirected(0, 2)), Ok(true));
        assert_eq!(triangle.remove_edge(&Edge::undirected(2, 0)), Ok(false));
        assert_eq!(triangle.adjacent_nodes(2, Direction::Any), Ok(vec![1]));
        assert_eq!(triangle.edge_count(), 2);
    }

    #[test]
    fn get_edge_prefers_the_undirected_edge() {
        let mut graph = EdgeSetGraph::with_nodes(2);
        assert_eq!(graph.add_edge(0, 1, true), Ok(true));
        assert_eq!(graph.get_edge(0, 1), Some(Edge::directed(0, 1)));
        assert_eq!(graph.get_edge(1, 0), None);
        assert_eq!(graph.add_edge(1, 0, false), Ok(true));
        let found = graph.get_edge(0, 1).expect("undirected edge stored");
        assert!(!found.is_directed());
        assert_eq!((found.tail(), found.head()), (1, 0));
    }

    #[test]
    fn copies_preserve_structure_and_label() {
        let mesh = IndexedGraph::mesh(2, 3).expect("valid mesh");
        let copy = EdgeSetGraph::from_graph(&mesh).expect("indexed graphs have no self-loops");
        assert_eq!(copy.name(), "mesh");
        assert_eq!(copy.node_count(), mesh.node_count());
        assert_eq!(copy.edges().collect::<Vec<_>>(), mesh.edges().collect::<Vec<_>>());
        for node in mesh.nodes() {
            assert_eq!(copy.degree(node), mesh.degree(node));
        }
    }

    #[test]
    fn copies_keep_tombstones() {
        let mut graph = EdgeSetGraph::with_nodes(4).with_name("sparse");
        assert_eq!(graph.add_edge(0, 3, false), Ok(true));
        assert_eq!(graph.remove_node(2), Ok(true));
        let copy = EdgeSetGraph::from_graph(&graph).expect("graph has no self-loops");
        assert_eq!(copy.name(), "sparse");
        assert_eq!(copy.nodes().collect::<Vec<_>>(), vec![0, 1, 3]);
        assert!(!copy.contains_node(2));
        assert!(copy.contains_edge(&Edge::undirected(3, 0)));
    }
}
