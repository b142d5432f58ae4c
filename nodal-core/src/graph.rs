//! The read-mostly contract every graph in the crate satisfies.

use crate::{
    edge::{Direction, Edge},
    error::{GraphError, Result},
    traverser::{Filtered, NeighbourSource, Traverser},
};

/// Graph whose nodes are `usize` identifiers and whose edges are [`Edge`]
/// values.
///
/// Enumeration is lazy: [`Graph::nodes`] and [`Graph::edges`] return fresh
/// iterators on every call, and [`Graph::traverse`] returns a new
/// single-use [`Traverser`]. Iteration order is fixed for a given graph.
///
/// Mutations are part of the contract but default to
/// [`GraphError::Unsupported`]; only graphs with explicitly stored edges
/// override them.
///
/// # Examples
/// ```
/// use nodal_core::{Graph, IndexedGraph};
///
/// let cycle = IndexedGraph::cycle(4)?;
/// assert_eq!(cycle.node_count(), 4);
/// assert_eq!(cycle.edges().count(), 4);
/// assert!(cycle.nodes().all(|node| cycle.degree(node) == Ok(2)));
/// # Ok::<(), nodal_core::GraphError>(())
/// ```
pub trait Graph {
    /// Iterator over every node. Returned by [`Graph::nodes`].
    type Nodes<'a>: Iterator<Item = usize> + 'a
    where
        Self: 'a;

    /// Iterator over every edge. Returned by [`Graph::edges`].
    type Edges<'a>: Iterator<Item = Edge> + 'a
    where
        Self: 'a;

    /// Neighbour source backing the traversers of this graph.
    type Neighbours<'a>: NeighbourSource + 'a
    where
        Self: 'a;

    /// Short label for diagnostics, such as the topology name.
    fn name(&self) -> &str;

    /// Returns the number of nodes.
    fn node_count(&self) -> usize;

    /// Returns `true` when `node` identifies a node of this graph.
    fn contains_node(&self, node: usize) -> bool;

    /// Returns `true` when `edge` is an edge of this graph.
    fn contains_edge(&self, edge: &Edge) -> bool;

    /// Returns the edge joining `tail` to `head`, if any.
    fn get_edge(&self, tail: usize, head: usize) -> Option<Edge>;

    /// Returns the number of edges incident to `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `node` is not in the graph.
    fn degree(&self, node: usize) -> Result<usize>;

    /// Returns a fresh iterator over all nodes.
    fn nodes(&self) -> Self::Nodes<'_>;

    /// Returns a fresh iterator over all edges.
    fn edges(&self) -> Self::Edges<'_>;

    /// Returns a new traverser over the neighbours of `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `node` is not in the graph.
    fn traverse(&self, node: usize) -> Result<Traverser<Self::Neighbours<'_>>>;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns a traverser visiting only the incident edges accepted by
    /// `direction`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `node` is not in the graph.
    fn traverse_filtered(
        &self,
        node: usize,
        direction: Direction,
    ) -> Result<Traverser<Filtered<Self::Neighbours<'_>>>> {
        let neighbours = self.traverse(node)?.into_neighbours();
        Ok(Traverser::new(
            node,
            Filtered::new(node, direction, neighbours),
        ))
    }

    /// Counts the incident edges of `node` accepted by `direction`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `node` is not in the graph.
    fn degree_filtered(&self, node: usize, direction: Direction) -> Result<usize> {
        if direction == Direction::Any {
            return self.degree(node);
        }
        Ok(self.traverse_filtered(node, direction)?.count())
    }

    /// Collects the neighbours of `node` reached through edges accepted by
    /// `direction`, in traversal order.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `node` is not in the graph.
    fn adjacent_nodes(&self, node: usize, direction: Direction) -> Result<Vec<usize>> {
        Ok(self
            .traverse_filtered(node, direction)?
            .map(|(neighbour, _)| neighbour)
            .collect())
    }

    /// Collects the edges incident to `node` accepted by `direction`, in
    /// traversal order.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `node` is not in the graph.
    fn incident_edges(&self, node: usize, direction: Direction) -> Result<Vec<Edge>> {
        Ok(self
            .traverse_filtered(node, direction)?
            .map(|(_, edge)| edge)
            .collect())
    }

    /// Returns the first node, in enumeration order, accepted by `predicate`.
    fn find_node(&self, mut predicate: impl FnMut(usize) -> bool) -> Option<usize> {
        self.nodes().find(|node| predicate(*node))
    }

    /// Returns the first edge, in enumeration order, accepted by `predicate`.
    fn find_edge(&self, mut predicate: impl FnMut(&Edge) -> bool) -> Option<Edge> {
        self.edges().find(|edge| predicate(edge))
    }

    /// Adds a node and returns its identifier.
    ///
    /// # Errors
    /// Returns [`GraphError::Unsupported`] unless the graph stores its
    /// structure explicitly.
    fn add_node(&mut self) -> Result<usize> {
        Err(GraphError::unsupported("add_node", self.name()))
    }

    /// Removes `node` and every edge incident to it. Returns `false` when the
    /// node was absent.
    ///
    /// # Errors
    /// Returns [`GraphError::Unsupported`] unless the graph stores its
    /// structure explicitly.
    fn remove_node(&mut self, node: usize) -> Result<bool> {
        let _ = node;
        Err(GraphError::unsupported("remove_node", self.name()))
    }

    /// Adds an edge. Returns `false` when an equal edge already exists.
    ///
    /// # Errors
    /// Returns [`GraphError::Unsupported`] unless the graph stores its
    /// structure explicitly.
    fn add_edge(&mut self, tail: usize, head: usize, directed: bool) -> Result<bool> {
        let _ = (tail, head, directed);
        Err(GraphError::unsupported("add_edge", self.name()))
    }

    /// Removes `edge`. Returns `false` when it was absent.
    ///
    /// # Errors
    /// Returns [`GraphError::Unsupported`] unless the graph stores its
    /// structure explicitly.
    fn remove_edge(&mut self, edge: &Edge) -> Result<bool> {
        let _ = edge;
        Err(GraphError::unsupported("remove_edge", self.name()))
    }
}

/// Returns [`GraphError::UnknownNode`] unless `graph` contains `node`.
pub(crate) fn require_node<G: Graph + ?Sized>(graph: &G, node: usize) -> Result<()> {
    if graph.contains_node(node) {
        Ok(())
    } else {
        Err(GraphError::unknown_node(
            node,
            graph.node_count(),
            graph.name(),
        ))
    }
}
