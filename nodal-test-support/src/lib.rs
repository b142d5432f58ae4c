//! Shared test utilities used across nodal crates.

pub mod profile;
pub mod tracing;
