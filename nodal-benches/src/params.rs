//! Benchmark parameter types.
//!
//! Each type renders as the Criterion benchmark id for one input size.

use std::fmt;

/// Parameters for a topology enumeration or traversal run.
#[derive(Clone, Debug)]
pub struct TopologyBenchParams {
    /// Label of the topology under test.
    pub topology: &'static str,
    /// Number of nodes in the topology.
    pub node_count: usize,
}

impl fmt::Display for TopologyBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.topology, self.node_count)
    }
}

/// Parameters for a generator run.
#[derive(Clone, Debug)]
pub struct GeneratorBenchParams {
    /// Number of nodes in the generated graph.
    pub node_count: usize,
    /// Model-specific density knob, such as `p=0.1` or `m=3`.
    pub density: String,
}

impl fmt::Display for GeneratorBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.node_count, self.density)
    }
}
