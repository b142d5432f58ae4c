//! Command-line interface orchestration for nodal.
//!
//! `topology` builds one of the indexed shapes and `generate` runs a random
//! graph model. Both produce a [`GraphSummary`] for rendering.

mod commands;

pub use commands::{
    CirculantArgs, Cli, CliError, Command, GenerateCommand, GraphSummary, LoopArgs, MeshArgs,
    Model, NodesArgs, OutputArgs, PreferentialArgs, Shape, SmallWorldArgs, StarArgs,
    TopologyCommand, TreeArgs, UniformArgs, render_summary, run_cli,
};

#[cfg(test)]
mod tests;
