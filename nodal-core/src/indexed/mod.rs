//! Graphs on the dense node range `0..n` whose edges follow a closed-form
//! rule instead of being stored.
//!
//! Every query reduces to [`IndexedGraph::edge_between`], a per-topology
//! degree formula, and a per-topology cursor for enumeration and traversal.
//! A graph therefore occupies constant space regardless of its size.

mod edges;
mod neighbours;
mod petersen;
mod tree;

use std::ops::Range;

pub use self::{edges::IndexedEdges, neighbours::IndexedNeighbours};

use crate::{
    edge::Edge,
    error::{GraphError, Result},
    graph::{Graph, require_node},
    traverser::Traverser,
};

/// Adjacency rule and shape parameters of an [`IndexedGraph`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Topology {
    /// No edges.
    Empty,
    /// `i` is joined to `i + 1`.
    Path,
    /// `i` is joined to `(i + 1) mod n`.
    Cycle,
    /// `i` is joined to `(i + offset) mod n`.
    Loop {
        /// Ring distance between joined nodes.
        offset: usize,
    },
    /// `i` is joined to every node within ring distance `distance`.
    Circulant {
        /// Largest ring distance that is joined.
        distance: usize,
    },
    /// Every pair of distinct nodes is joined.
    Complete,
    /// Rooted tree with node `0` as root and children `k*i + 1 ..= k*i + k`.
    CompleteTree {
        /// Number of levels below the root.
        height: usize,
        /// Children per internal node.
        branching: usize,
    },
    /// The Petersen graph on ten nodes.
    Petersen,
    /// Node `0` is joined to every other node.
    Star,
    /// Row-major grid where each node is joined to its axis neighbours.
    Mesh {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        columns: usize,
    },
}

impl Topology {
    /// Returns the stable label used in diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Path => "path",
            Self::Cycle => "cycle",
            Self::Loop { .. } => "loop",
            Self::Circulant { .. } => "circulant",
            Self::Complete => "complete",
            Self::CompleteTree { .. } => "complete-tree",
            Self::Petersen => "petersen",
            Self::Star => "star",
            Self::Mesh { .. } => "mesh",
        }
    }
}

/// Immutable graph on `0..node_count` with a closed-form [`Topology`].
///
/// # Examples
/// ```
/// use nodal_core::{Edge, Graph, IndexedGraph};
///
/// let path = IndexedGraph::path(5)?;
/// assert_eq!(path.degree(0)?, 1);
/// assert_eq!(path.degree(2)?, 2);
/// assert_eq!(path.edges().count(), 4);
/// assert_eq!(path.edge_between(3, 2), Some(Edge::undirected(2, 3)));
/// assert_eq!(path.edge_between(0, 2), None);
/// # Ok::<(), nodal_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct IndexedGraph {
    node_count: usize,
    topology: Topology,
}

impl IndexedGraph {
    /// Creates `n` isolated nodes.
    #[must_use]
    pub const fn empty(node_count: usize) -> Self {
        Self::from_parts(node_count, Topology::Empty)
    }

    /// Creates a path on `node_count` nodes.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidShape`] when `node_count < 2`.
    pub fn path(node_count: usize) -> Result<Self> {
        if node_count < 2 {
            return Err(GraphError::invalid_shape(
                "path",
                format!("node count must be at least 2 (got {node_count})"),
            ));
        }
        Ok(Self::from_parts(node_count, Topology::Path))
    }

    /// Creates a cycle on `node_count` nodes.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidShape`] when `node_count < 3`.
    pub fn cycle(node_count: usize) -> Result<Self> {
        if node_count < 3 {
            return Err(GraphError::invalid_shape(
                "cycle",
                format!("node count must be at least 3 (got {node_count})"),
            ));
        }
        Ok(Self::from_parts(node_count, Topology::Cycle))
    }

    /// Creates a ring joining each node to the node `offset` steps ahead.
    ///
    /// When `2 * offset == node_count` the forward and backward neighbours
    /// coincide and every node has degree 1.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidShape`] unless `offset >= 1` and
    /// `2 * offset <= node_count`.
    pub fn offset_loop(node_count: usize, offset: usize) -> Result<Self> {
        if offset == 0 {
            return Err(GraphError::invalid_shape("loop", "offset must be at least 1"));
        }
        if offset.checked_mul(2).is_none_or(|span| span > node_count) {
            return Err(GraphError::invalid_shape(
                "loop",
                format!("2 * offset ({offset}) must not exceed the node count ({node_count})"),
            ));
        }
        Ok(Self::from_parts(node_count, Topology::Loop { offset }))
    }

    /// Creates a circulant graph joining each node to every node within ring
    /// distance `distance`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidShape`] unless `node_count >= 3`,
    /// `distance >= 1` and `2 * distance < node_count`.
    pub fn circulant(node_count: usize, distance: usize) -> Result<Self> {
        if node_count < 3 {
            return Err(GraphError::invalid_shape(
                "circulant",
                format!("node count must be at least 3 (got {node_count})"),
            ));
        }
        if distance == 0 {
            return Err(GraphError::invalid_shape(
                "circulant",
                "neighbour distance must be at least 1",
            ));
        }
        if distance.checked_mul(2).is_none_or(|span| span >= node_count) {
            return Err(GraphError::invalid_shape(
                "circulant",
                format!(
                    "2 * distance ({distance}) must be smaller than the node count ({node_count})"
                ),
            ));
        }
        Ok(Self::from_parts(node_count, Topology::Circulant { distance }))
    }

    /// Creates the complete graph on `node_count` nodes.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidShape`] when `node_count == 0`.
    pub fn complete(node_count: usize) -> Result<Self> {
        if node_count == 0 {
            return Err(GraphError::invalid_shape(
                "complete",
                "node count must be at least 1",
            ));
        }
        Ok(Self::from_parts(node_count, Topology::Complete))
    }

    /// Creates a complete `branching`-ary tree with `height` levels below
    /// the root.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidShape`] when `branching == 0` or the node
    /// count does not fit in `usize`.
    pub fn complete_tree(height: usize, branching: usize) -> Result<Self> {
        if branching == 0 {
            return Err(GraphError::invalid_shape(
                "complete-tree",
                "branching factor must be at least 1",
            ));
        }
        let node_count = tree::node_count(height, branching).ok_or_else(|| {
            GraphError::invalid_shape(
                "complete-tree",
                format!("height {height} with branching {branching} overflows the node range"),
            )
        })?;
        Ok(Self::from_parts(
            node_count,
            Topology::CompleteTree { height, branching },
        ))
    }

    /// Creates the Petersen graph.
    #[must_use]
    pub const fn petersen() -> Self {
        Self::from_parts(petersen::NODE_COUNT, Topology::Petersen)
    }

    /// Creates a star with centre `0` and `outer` leaves `1..=outer`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidShape`] when `outer + 1` overflows.
    pub fn star(outer: usize) -> Result<Self> {
        let node_count = outer.checked_add(1).ok_or_else(|| {
            GraphError::invalid_shape("star", format!("{outer} leaves overflow the node range"))
        })?;
        Ok(Self::from_parts(node_count, Topology::Star))
    }

    /// Creates a `rows` by `columns` grid, the product of two paths.
    ///
    /// Node `row * columns + column` sits at `(row, column)`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidShape`] when either side is shorter than
    /// 2 or the node count overflows.
    pub fn mesh(rows: usize, columns: usize) -> Result<Self> {
        if rows < 2 || columns < 2 {
            return Err(GraphError::invalid_shape(
                "mesh",
                format!("both sides must be at least 2 (got {rows} x {columns})"),
            ));
        }
        let node_count = rows.checked_mul(columns).ok_or_else(|| {
            GraphError::invalid_shape(
                "mesh",
                format!("{rows} x {columns} overflows the node range"),
            )
        })?;
        Ok(Self::from_parts(node_count, Topology::Mesh { rows, columns }))
    }

    const fn from_parts(node_count: usize, topology: Topology) -> Self {
        Self {
            node_count,
            topology,
        }
    }

    /// Returns the adjacency rule with its shape parameters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn topology(&self) -> Topology { self.topology }

    /// Returns the edge joining nodes `a` and `b`, oriented with the smaller
    /// index as tail, or `None` when they are not adjacent.
    ///
    /// Out-of-range indices and `a == b` always yield `None`.
    #[must_use]
    pub fn edge_between(&self, a: usize, b: usize) -> Option<Edge> {
        if a == b || a >= self.node_count || b >= self.node_count {
            return None;
        }
        self.adjacent(a, b).then(|| canonical(a, b))
    }

    fn adjacent(&self, a: usize, b: usize) -> bool {
        let n = self.node_count;
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        match self.topology {
            Topology::Empty => false,
            Topology::Path => high - low == 1,
            Topology::Cycle => ring_gap(low, high, n) == 1,
            Topology::Loop { offset } => ring_gap(low, high, n) == offset,
            Topology::Circulant { distance } => ring_gap(low, high, n) <= distance,
            Topology::Complete => true,
            Topology::CompleteTree { branching, .. } => {
                tree::parent(high, branching) == Some(low)
            }
            Topology::Petersen => petersen::adjacent(low, high),
            Topology::Star => low == 0,
            Topology::Mesh { columns, .. } => {
                let (low_row, low_column) = (low / columns, low % columns);
                let (high_row, high_column) = (high / columns, high % columns);
                (low_row == high_row && high_column - low_column == 1)
                    || (low_column == high_column && high_row - low_row == 1)
            }
        }
    }

    fn closed_form_degree(&self, node: usize) -> usize {
        let n = self.node_count;
        match self.topology {
            Topology::Empty => 0,
            Topology::Path => path_degree(node, n),
            Topology::Cycle => 2,
            Topology::Loop { offset } => {
                if n - offset == offset {
                    1
                } else {
                    2
                }
            }
            Topology::Circulant { distance } => distance * 2,
            Topology::Complete => n - 1,
            Topology::CompleteTree { height, branching } => {
                if node == 0 {
                    if height == 0 { 0 } else { branching }
                } else if tree::first_child(node, branching).is_some_and(|child| child < n) {
                    branching + 1
                } else {
                    1
                }
            }
            Topology::Petersen => petersen::DEGREE,
            Topology::Star => {
                if node == 0 {
                    n - 1
                } else {
                    1
                }
            }
            Topology::Mesh { rows, columns } => {
                path_degree(node / columns, rows) + path_degree(node % columns, columns)
            }
        }
    }

    /// Edge count, or `None` when it does not fit in `usize`.
    fn closed_form_edge_count(&self) -> Option<usize> {
        let n = self.node_count;
        match self.topology {
            Topology::Empty => Some(0),
            Topology::Path | Topology::CompleteTree { .. } | Topology::Star => Some(n - 1),
            Topology::Cycle => Some(n),
            Topology::Loop { offset } => Some(if n - offset == offset { offset } else { n }),
            Topology::Circulant { distance } => n.checked_mul(distance),
            Topology::Complete if n % 2 == 0 => (n / 2).checked_mul(n - 1),
            Topology::Complete => n.checked_mul((n - 1) / 2),
            Topology::Petersen => Some(petersen::EDGE_COUNT),
            Topology::Mesh { rows, columns } => rows
                .checked_mul(columns - 1)?
                .checked_add(columns.checked_mul(rows - 1)?),
        }
    }

    /// Returns the parent of `node` in a complete tree, or `None` for the
    /// root, for nodes outside the graph, and for other topologies.
    #[must_use]
    pub fn tree_parent(&self, node: usize) -> Option<usize> {
        match self.topology {
            Topology::CompleteTree { branching, .. } if node < self.node_count => {
                tree::parent(node, branching)
            }
            _ => None,
        }
    }

    /// Returns the contiguous block of children of `node` in a complete tree.
    ///
    /// The range is empty for leaves, for nodes outside the graph, and for
    /// other topologies.
    #[must_use]
    pub fn tree_children(&self, node: usize) -> Range<usize> {
        match self.topology {
            Topology::CompleteTree { branching, .. } if node < self.node_count => {
                tree::children(node, branching, self.node_count)
            }
            _ => 0..0,
        }
    }

    /// Returns the depth of `node` in a complete tree, the root being at
    /// depth 0.
    #[must_use]
    pub fn tree_depth(&self, node: usize) -> Option<usize> {
        match self.topology {
            Topology::CompleteTree { branching, .. } if node < self.node_count => {
                Some(tree::depth(node, branching))
            }
            _ => None,
        }
    }

    /// Returns the `(row, column)` of `node` in a mesh.
    #[must_use]
    pub const fn mesh_coordinates(&self, node: usize) -> Option<(usize, usize)> {
        match self.topology {
            Topology::Mesh { columns, .. } if node < self.node_count => {
                Some((node / columns, node % columns))
            }
            _ => None,
        }
    }

    /// Returns the node at `(row, column)` in a mesh.
    #[must_use]
    pub const fn mesh_node(&self, row: usize, column: usize) -> Option<usize> {
        match self.topology {
            Topology::Mesh { rows, columns } if row < rows && column < columns => {
                Some(row * columns + column)
            }
            _ => None,
        }
    }
}

impl Graph for IndexedGraph {
    type Nodes<'a> = Range<usize>;
    type Edges<'a> = IndexedEdges<'a>;
    type Neighbours<'a> = IndexedNeighbours<'a>;

    fn name(&self) -> &str {
        self.topology.label()
    }

    fn node_count(&self) -> usize {
        self.node_count
    }

    fn contains_node(&self, node: usize) -> bool {
        node < self.node_count
    }

    fn contains_edge(&self, edge: &Edge) -> bool {
        self.edge_between(edge.tail(), edge.head())
            .is_some_and(|canonical| canonical == *edge)
    }

    fn get_edge(&self, tail: usize, head: usize) -> Option<Edge> {
        self.edge_between(tail, head)
    }

    fn degree(&self, node: usize) -> Result<usize> {
        require_node(self, node)?;
        Ok(self.closed_form_degree(node))
    }

    fn nodes(&self) -> Self::Nodes<'_> {
        0..self.node_count
    }

    fn edges(&self) -> Self::Edges<'_> {
        IndexedEdges::new(self)
    }

    fn traverse(&self, node: usize) -> Result<Traverser<Self::Neighbours<'_>>> {
        require_node(self, node)?;
        Ok(Traverser::new(node, IndexedNeighbours::new(self, node)))
    }

    /// Closed-form edge count, saturating at `usize::MAX` for graphs whose
    /// edges outnumber the address space.
    fn edge_count(&self) -> usize {
        self.closed_form_edge_count().unwrap_or(usize::MAX)
    }
}

/// Undirected edge oriented with the smaller index as tail.
const fn canonical(a: usize, b: usize) -> Edge {
    if a <= b {
        Edge::undirected(a, b)
    } else {
        Edge::undirected(b, a)
    }
}

/// Node `gap` steps clockwise of `node` on a ring of `n`, for `gap < n`.
const fn ring_forward(node: usize, gap: usize, n: usize) -> usize {
    if node < n - gap { node + gap } else { node - (n - gap) }
}

/// Node `gap` steps anticlockwise of `node` on a ring of `n`, for `gap < n`.
const fn ring_backward(node: usize, gap: usize, n: usize) -> usize {
    if node >= gap { node - gap } else { n - (gap - node) }
}

/// Shorter way round the ring between `low < high`.
const fn ring_gap(low: usize, high: usize, n: usize) -> usize {
    let forward = high - low;
    let backward = n - forward;
    if forward < backward {
        forward
    } else {
        backward
    }
}

const fn path_degree(position: usize, length: usize) -> usize {
    if position == 0 || position + 1 == length {
        1
    } else {
        2
    }
}
