//! Lazy neighbour sources backing indexed traversers.

use super::{IndexedGraph, Topology, canonical, petersen, ring_backward, ring_forward, tree};
use crate::{edge::Edge, traverser::NeighbourSource};

/// What a neighbour position resolves to for a given topology.
enum Slot {
    Neighbour(usize),
    Skip,
    End,
}

impl Slot {
    fn when(present: bool, node: usize) -> Self {
        if present { Self::Neighbour(node) } else { Self::Skip }
    }
}

/// Computes the neighbours of one node of an [`IndexedGraph`] on demand.
///
/// Orders are fixed per topology: ring and circulant graphs visit the
/// forward neighbour before the backward one, trees visit the parent before
/// the children, and the other topologies visit neighbours in ascending
/// index order.
#[derive(Clone, Debug)]
pub struct IndexedNeighbours<'a> {
    graph: &'a IndexedGraph,
    source: usize,
    position: usize,
}

impl<'a> IndexedNeighbours<'a> {
    pub(super) const fn new(graph: &'a IndexedGraph, source: usize) -> Self {
        Self {
            graph,
            source,
            position: 0,
        }
    }

    fn slot(&self) -> Slot {
        let n = self.graph.node_count;
        let (node, position) = (self.source, self.position);
        match self.graph.topology {
            Topology::Empty => Slot::End,
            Topology::Path => match position {
                0 => Slot::when(node > 0, node.wrapping_sub(1)),
                1 => Slot::when(node + 1 < n, node + 1),
                _ => Slot::End,
            },
            Topology::Cycle => ring_slot(node, position, 1, n),
            Topology::Loop { offset } => ring_slot(node, position, offset, n),
            Topology::Circulant { distance } => {
                let gap = position / 2 + 1;
                if gap > distance {
                    Slot::End
                } else if position % 2 == 0 {
                    Slot::Neighbour(ring_forward(node, gap, n))
                } else {
                    Slot::Neighbour(ring_backward(node, gap, n))
                }
            }
            Topology::Complete if position < n => Slot::when(position != node, position),
            Topology::Complete => Slot::End,
            Topology::CompleteTree { branching, .. } => {
                if position == 0 {
                    return tree::parent(node, branching).map_or(Slot::Skip, Slot::Neighbour);
                }
                match tree::first_child(node, branching) {
                    Some(first) if position <= branching => {
                        let child = first + position - 1;
                        if child < n { Slot::Neighbour(child) } else { Slot::End }
                    }
                    _ => Slot::End,
                }
            }
            Topology::Petersen => {
                petersen::neighbour(node, position).map_or(Slot::End, Slot::Neighbour)
            }
            Topology::Star if node == 0 => {
                let leaf = position + 1;
                if leaf < n { Slot::Neighbour(leaf) } else { Slot::End }
            }
            Topology::Star => match position {
                0 => Slot::Neighbour(0),
                _ => Slot::End,
            },
            Topology::Mesh { rows, columns } => {
                let (row, column) = (node / columns, node % columns);
                match position {
                    0 => Slot::when(row > 0, node.wrapping_sub(columns)),
                    1 => Slot::when(column > 0, node.wrapping_sub(1)),
                    2 => Slot::when(column + 1 < columns, node + 1),
                    3 => Slot::when(row + 1 < rows, node + columns),
                    _ => Slot::End,
                }
            }
        }
    }
}

fn ring_slot(node: usize, position: usize, offset: usize, n: usize) -> Slot {
    match position {
        0 => Slot::Neighbour(ring_forward(node, offset, n)),
        1 => Slot::when(n - offset != offset, ring_backward(node, offset, n)),
        _ => Slot::End,
    }
}

impl NeighbourSource for IndexedNeighbours<'_> {
    fn next_neighbour(&mut self) -> Option<(usize, Edge)> {
        loop {
            let slot = self.slot();
            self.position += 1;
            match slot {
                Slot::Neighbour(neighbour) => {
                    return Some((neighbour, canonical(self.source, neighbour)));
                }
                Slot::Skip => {}
                Slot::End => {
                    self.position -= 1;
                    return None;
                }
            }
        }
    }
}
