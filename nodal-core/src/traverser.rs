//! Single-use cursors over the neighbours of one node.
//!
//! A [`Traverser`] starts `Fresh`, becomes `Positioned` after each successful
//! [`Traverser::advance`], and ends `Exhausted`. The neighbours themselves are
//! produced lazily by a [`NeighbourSource`] supplied by the graph.

use crate::{
    edge::{Direction, Edge},
    error::{GraphError, Result},
};

/// Lazily yields `(neighbour, edge)` pairs for one base node.
///
/// Implementations compute each neighbour on demand and must yield the same
/// sequence every time they are created for the same graph and node.
pub trait NeighbourSource {
    /// Returns the next neighbour and the edge reaching it, or `None` once
    /// every neighbour has been produced.
    fn next_neighbour(&mut self) -> Option<(usize, Edge)>;
}

/// Observable phase of a [`Traverser`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TraverserState {
    /// No neighbour has been requested yet.
    Fresh,
    /// The most recent [`Traverser::advance`] returned a neighbour.
    Positioned,
    /// Every neighbour has been produced.
    Exhausted,
}

#[derive(Clone, Copy, Debug)]
enum Cursor {
    Fresh,
    Positioned { neighbour: usize, edge: Edge },
    Exhausted,
}

/// Stateful cursor over the neighbours of a source node.
///
/// Traversers are not restartable: request a fresh one from the graph to walk
/// the same node again.
///
/// # Examples
/// ```
/// use nodal_core::{Edge, Graph, IndexedGraph, TraverserState};
///
/// let path = IndexedGraph::path(5)?;
/// let mut traverser = path.traverse(2)?;
/// assert_eq!(traverser.state(), TraverserState::Fresh);
/// assert_eq!(traverser.advance(), Some(1));
/// assert_eq!(traverser.current_edge()?, Edge::undirected(1, 2));
/// assert_eq!(traverser.advance(), Some(3));
/// assert_eq!(traverser.advance(), None);
/// assert_eq!(traverser.state(), TraverserState::Exhausted);
/// # Ok::<(), nodal_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Traverser<S> {
    source: usize,
    neighbours: S,
    cursor: Cursor,
}

impl<S: NeighbourSource> Traverser<S> {
    /// Wraps `neighbours` as a fresh traverser rooted at `source`.
    #[must_use]
    pub const fn new(source: usize, neighbours: S) -> Self {
        Self {
            source,
            neighbours,
            cursor: Cursor::Fresh,
        }
    }

    /// Returns the node this traverser is rooted at.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> TraverserState {
        match self.cursor {
            Cursor::Fresh => TraverserState::Fresh,
            Cursor::Positioned { .. } => TraverserState::Positioned,
            Cursor::Exhausted => TraverserState::Exhausted,
        }
    }

    /// Moves to the next neighbour and returns it, or returns `None` and
    /// becomes exhausted when none remain.
    pub fn advance(&mut self) -> Option<usize> {
        if matches!(self.cursor, Cursor::Exhausted) {
            return None;
        }
        match self.neighbours.next_neighbour() {
            Some((neighbour, edge)) => {
                self.cursor = Cursor::Positioned { neighbour, edge };
                Some(neighbour)
            }
            None => {
                self.cursor = Cursor::Exhausted;
                None
            }
        }
    }

    /// Returns the edge joining the source to the neighbour most recently
    /// returned by [`Traverser::advance`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidState`] before the first advance or after
    /// exhaustion.
    pub fn current_edge(&self) -> Result<Edge> {
        match self.cursor {
            Cursor::Positioned { edge, .. } => Ok(edge),
            _ => Err(self.misuse("current_edge")),
        }
    }

    /// Returns the neighbour most recently returned by [`Traverser::advance`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidState`] before the first advance or after
    /// exhaustion.
    pub fn current_neighbour(&self) -> Result<usize> {
        match self.cursor {
            Cursor::Positioned { neighbour, .. } => Ok(neighbour),
            _ => Err(self.misuse("current_neighbour")),
        }
    }

    pub(crate) fn into_neighbours(self) -> S {
        self.neighbours
    }

    fn misuse(&self, operation: &'static str) -> GraphError {
        GraphError::InvalidState {
            operation,
            state: self.state(),
        }
    }
}

impl<S: NeighbourSource> Iterator for Traverser<S> {
    type Item = (usize, Edge);

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()?;
        match self.cursor {
            Cursor::Positioned { neighbour, edge } => Some((neighbour, edge)),
            _ => None,
        }
    }
}

/// Neighbour source that drops edges rejected by a [`Direction`].
#[derive(Clone, Debug)]
pub struct Filtered<S> {
    base: usize,
    direction: Direction,
    inner: S,
}

impl<S> Filtered<S> {
    pub(crate) const fn new(base: usize, direction: Direction, inner: S) -> Self {
        Self {
            base,
            direction,
            inner,
        }
    }
}

impl<S: NeighbourSource> NeighbourSource for Filtered<S> {
    fn next_neighbour(&mut self) -> Option<(usize, Edge)> {
        loop {
            let (neighbour, edge) = self.inner.next_neighbour()?;
            if self.direction.matches(self.base, &edge) {
                return Some((neighbour, edge));
            }
        }
    }
}
