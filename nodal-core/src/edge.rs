//! Value-typed edges and the direction filters applied to them.
//!
//! Edges are never stored by the indexed topologies; they are rebuilt on
//! every query, so equality and hashing depend only on the endpoints and the
//! directedness flag. An undirected edge `(a, b)` equals `(b, a)`.

use std::hash::{Hash, Hasher};

use crate::error::{GraphError, Result};

/// A connection between two nodes.
///
/// # Examples
/// ```
/// use nodal_core::Edge;
///
/// assert_eq!(Edge::undirected(1, 4), Edge::undirected(4, 1));
/// assert_ne!(Edge::directed(1, 4), Edge::directed(4, 1));
/// assert_eq!(Edge::undirected(1, 4).other_endpoint(1)?, 4);
/// # Ok::<(), nodal_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    tail: usize,
    head: usize,
    directed: bool,
}

impl Edge {
    /// Creates an edge with an explicit directedness flag.
    #[must_use]
    pub const fn new(tail: usize, head: usize, directed: bool) -> Self {
        Self {
            tail,
            head,
            directed,
        }
    }

    /// Creates an undirected edge.
    #[must_use]
    pub const fn undirected(tail: usize, head: usize) -> Self {
        Self::new(tail, head, false)
    }

    /// Creates a directed edge from `tail` to `head`.
    #[must_use]
    pub const fn directed(tail: usize, head: usize) -> Self {
        Self::new(tail, head, true)
    }

    /// Returns the tail endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tail(&self) -> usize { self.tail }

    /// Returns the head endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn head(&self) -> usize { self.head }

    /// Returns `true` for directed edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_directed(&self) -> bool { self.directed }

    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.tail == self.head
    }

    /// Returns `true` when `node` is one of the endpoints.
    #[must_use]
    pub const fn is_incident(&self, node: usize) -> bool {
        self.tail == node || self.head == node
    }

    /// Returns the endpoint of the edge that is not `node`.
    ///
    /// For a self-loop the node itself is returned.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNode`] when `node` is not an endpoint.
    pub fn other_endpoint(&self, node: usize) -> Result<usize> {
        if node == self.tail {
            Ok(self.head)
        } else if node == self.head {
            Ok(self.tail)
        } else {
            Err(GraphError::InvalidNode {
                node,
                tail: self.tail,
                head: self.head,
            })
        }
    }

    /// Returns the endpoints ordered as `(min, max)`.
    #[must_use]
    pub const fn ordered_endpoints(&self) -> (usize, usize) {
        if self.tail <= self.head {
            (self.tail, self.head)
        } else {
            (self.head, self.tail)
        }
    }

    fn identity(&self) -> (usize, usize, bool) {
        if self.directed {
            (self.tail, self.head, true)
        } else {
            let (low, high) = self.ordered_endpoints();
            (low, high, false)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

/// Selects which incident edges of a base node are visited.
///
/// # Examples
/// ```
/// use nodal_core::{Direction, Edge};
///
/// let edge = Edge::directed(2, 5);
/// assert!(Direction::Outgoing.matches(2, &edge));
/// assert!(Direction::Incoming.matches(5, &edge));
/// assert!(!Direction::Undirected.matches(2, &edge));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Every incident edge.
    #[default]
    Any,
    /// Undirected edges only.
    Undirected,
    /// Directed edges in either direction.
    Directed,
    /// Directed edges whose tail is the base node.
    Outgoing,
    /// Directed edges whose head is the base node.
    Incoming,
}

impl Direction {
    /// Returns `true` when `edge`, seen from `base`, passes the filter.
    #[must_use]
    pub const fn matches(self, base: usize, edge: &Edge) -> bool {
        match self {
            Self::Any => true,
            Self::Undirected => !edge.directed,
            Self::Directed => edge.directed,
            Self::Outgoing => edge.directed && edge.tail == base,
            Self::Incoming => edge.directed && edge.head == base,
        }
    }

    /// Returns the filter that matches the same edges seen from the other
    /// endpoint.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Outgoing => Self::Incoming,
            Self::Incoming => Self::Outgoing,
            other => other,
        }
    }
}
