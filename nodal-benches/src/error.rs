//! Benchmark setup error type.
//!
//! Lets setup functions propagate graph construction failures with `?`
//! instead of using `.expect()`.

use nodal_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building a topology or generator parameters failed.
    #[error("graph setup failed: {0}")]
    Graph(#[from] GraphError),
    /// A traversal visited a different number of edges than the handshake
    /// lemma predicts.
    #[error("{topology}: traversal visited {actual} edge ends, expected {expected}")]
    DegreeSum {
        /// Label of the offending topology.
        topology: &'static str,
        /// Twice the edge count.
        expected: usize,
        /// Edge ends yielded by the traversers.
        actual: usize,
    },
}
