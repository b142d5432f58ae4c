//! Lazy enumeration of indexed edges.

use std::iter::FusedIterator;

use super::{IndexedGraph, Topology, canonical, petersen, ring_forward};
use crate::edge::Edge;

/// Iterator over the edges of an [`IndexedGraph`].
///
/// Each edge is produced exactly once, oriented with the smaller index as
/// tail. `major` and `minor` are topology-specific counters.
#[derive(Clone, Debug)]
pub struct IndexedEdges<'a> {
    graph: &'a IndexedGraph,
    major: usize,
    minor: usize,
}

impl<'a> IndexedEdges<'a> {
    pub(super) const fn new(graph: &'a IndexedGraph) -> Self {
        Self {
            graph,
            major: 0,
            minor: 0,
        }
    }

    fn next_on_ring(&mut self, offset: usize) -> Option<Edge> {
        let n = self.graph.node_count;
        let limit = if n - offset == offset { offset } else { n };
        let node = self.major;
        if node >= limit {
            return None;
        }
        self.major += 1;
        Some(canonical(node, ring_forward(node, offset, n)))
    }

    fn next_circulant(&mut self, distance: usize) -> Option<Edge> {
        let n = self.graph.node_count;
        let gap = self.major + 1;
        if gap > distance {
            return None;
        }
        let node = self.minor;
        self.minor += 1;
        if self.minor == n {
            self.minor = 0;
            self.major += 1;
        }
        Some(canonical(node, ring_forward(node, gap, n)))
    }

    fn next_complete(&mut self) -> Option<Edge> {
        let n = self.graph.node_count;
        loop {
            let tail = self.major;
            if tail + 1 >= n {
                return None;
            }
            let head = self.minor.max(tail + 1);
            if head < n {
                self.minor = head + 1;
                return Some(Edge::undirected(tail, head));
            }
            self.major += 1;
            self.minor = 0;
        }
    }

    fn next_mesh(&mut self, rows: usize, columns: usize) -> Option<Edge> {
        loop {
            let node = self.major;
            if node >= self.graph.node_count {
                return None;
            }
            let (row, column) = (node / columns, node % columns);
            let step = self.minor;
            self.minor += 1;
            match step {
                0 if column + 1 < columns => return Some(Edge::undirected(node, node + 1)),
                1 if row + 1 < rows => return Some(Edge::undirected(node, node + columns)),
                0 | 1 => {}
                _ => {
                    self.major += 1;
                    self.minor = 0;
                }
            }
        }
    }
}

impl Iterator for IndexedEdges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.graph.node_count;
        match self.graph.topology {
            Topology::Empty => None,
            Topology::Path => {
                let tail = self.major;
                if tail + 1 >= n {
                    return None;
                }
                self.major += 1;
                Some(Edge::undirected(tail, tail + 1))
            }
            Topology::Cycle => self.next_on_ring(1),
            Topology::Loop { offset } => self.next_on_ring(offset),
            Topology::Circulant { distance } => self.next_circulant(distance),
            Topology::Complete => self.next_complete(),
            Topology::CompleteTree { branching, .. } => {
                let child = self.major + 1;
                if child >= n {
                    return None;
                }
                self.major += 1;
                let parent = (child - 1) / branching;
                Some(Edge::undirected(parent, child))
            }
            Topology::Petersen => {
                let (a, b) = petersen::edge(self.major)?;
                self.major += 1;
                Some(canonical(a, b))
            }
            Topology::Star => {
                let leaf = self.major + 1;
                if leaf >= n {
                    return None;
                }
                self.major += 1;
                Some(Edge::undirected(0, leaf))
            }
            Topology::Mesh { rows, columns } => self.next_mesh(rows, columns),
        }
    }
}

impl FusedIterator for IndexedEdges<'_> {}
