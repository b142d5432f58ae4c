//! Benchmark support crate for nodal.
//!
//! Provides the topology suites and parameter types used by the Criterion
//! benchmarks for edge enumeration, traversal and random graph generation.

pub mod error;
pub mod params;
pub mod suite;
