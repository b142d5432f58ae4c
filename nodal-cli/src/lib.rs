//! Support library for the nodal CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and unit tests
//! can drive commands without spawning a subprocess.

pub mod cli;
pub mod logging;
