//! Error types for the nodal core library.
//!
//! Defines the error enum shared by every graph, traverser and generator,
//! its stable machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::traverser::TraverserState;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by graph construction, queries, traversal and
/// generation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// Construction parameters violate a topology or generator precondition.
    #[error("invalid {shape} shape: {reason}")]
    InvalidShape {
        /// Topology or generator whose precondition failed.
        shape: &'static str,
        /// Human-readable description of the violated precondition.
        reason: String,
    },
    /// A node identifier is not part of the graph.
    #[error("node {node} is not in graph `{graph}` ({node_count} nodes)")]
    UnknownNode {
        /// The rejected node identifier.
        node: usize,
        /// Number of nodes in the graph at the time of the call.
        node_count: usize,
        /// Label of the graph that rejected the node.
        graph: Arc<str>,
    },
    /// A node was asked for the opposite endpoint of an edge it does not
    /// touch.
    #[error("node {node} is not an endpoint of edge ({tail}, {head})")]
    InvalidNode {
        /// The node that is not incident to the edge.
        node: usize,
        /// Tail of the edge.
        tail: usize,
        /// Head of the edge.
        head: usize,
    },
    /// A traverser was queried for its current edge while not positioned.
    #[error("traverser `{operation}` is invalid in the {state:?} state")]
    InvalidState {
        /// The traverser operation that was attempted.
        operation: &'static str,
        /// State of the traverser when the call was made.
        state: TraverserState,
    },
    /// A mutation was requested on a graph whose structure is fixed.
    #[error("graph `{graph}` does not support `{operation}`")]
    Unsupported {
        /// The rejected mutation.
        operation: &'static str,
        /// Label of the graph that rejected the mutation.
        graph: Arc<str>,
    },
    /// A generator cannot find enough distinct eligible targets for a node.
    #[error("node {node} needs {required} more distinct targets but only {available} are eligible")]
    Unsatisfiable {
        /// Node whose edges could not be placed.
        node: usize,
        /// Number of targets still required.
        required: usize,
        /// Number of eligible targets remaining.
        available: usize,
    },
    /// An edge from a node to itself was offered to a simple graph.
    #[error("self-loop on node {node} is not permitted")]
    SelfLoop {
        /// The node at both ends of the rejected edge.
        node: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Construction parameters violate a precondition.
        InvalidShape => InvalidShape { .. } => "GRAPH_INVALID_SHAPE",
        /// A node identifier is not part of the graph.
        UnknownNode => UnknownNode { .. } => "GRAPH_UNKNOWN_NODE",
        /// A node is not an endpoint of the edge.
        InvalidNode => InvalidNode { .. } => "GRAPH_INVALID_NODE",
        /// A traverser was misused.
        InvalidState => InvalidState { .. } => "GRAPH_INVALID_STATE",
        /// A mutation was requested on an immutable graph.
        Unsupported => Unsupported { .. } => "GRAPH_UNSUPPORTED",
        /// A generator constraint cannot be met.
        Unsatisfiable => Unsatisfiable { .. } => "GRAPH_UNSATISFIABLE",
        /// A self-loop was offered to a simple graph.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
    }
}

impl GraphError {
    pub(crate) fn invalid_shape(shape: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            shape,
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown_node(node: usize, node_count: usize, graph: &str) -> Self {
        Self::UnknownNode {
            node,
            node_count,
            graph: Arc::from(graph),
        }
    }

    pub(crate) fn unsupported(operation: &'static str, graph: &str) -> Self {
        Self::Unsupported {
            operation,
            graph: Arc::from(graph),
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
