//! Nodal core library.
//!
//! Graphs on `usize` node identifiers behind a single [`Graph`] contract:
//! closed-form [`IndexedGraph`] topologies that store no edges, the mutable
//! [`EdgeSetGraph`], and random generators that build on either.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod edge;
mod edge_set;
mod error;
mod generators;
mod graph;
mod indexed;
mod traverser;

#[cfg(test)]
mod test_utils;

pub use crate::{
    edge::{Direction, Edge},
    edge_set::{EdgeSetGraph, LiveNodes, StoredEdges, StoredNeighbours},
    error::{GraphError, GraphErrorCode, Result},
    generators::{
        DEFAULT_SEED, MAX_REJECTIONS, PreferentialParams, SmallWorldParams, UniformParams,
        attach_preferential, connect_uniform, rewire_ring,
    },
    graph::Graph,
    indexed::{IndexedEdges, IndexedGraph, IndexedNeighbours, Topology},
    traverser::{Filtered, NeighbourSource, Traverser, TraverserState},
};
