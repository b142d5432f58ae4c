//! Command implementations and argument parsing for the nodal CLI.

use std::collections::BTreeMap;
use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use nodal_core::{
    DEFAULT_SEED, Edge, Graph, GraphError, IndexedGraph, PreferentialParams, SmallWorldParams,
    UniformParams,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "nodal", about = "Build graph topologies and random graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a fixed topology from the indexed family.
    Topology(TopologyCommand),
    /// Run a random graph generator.
    Generate(GenerateCommand),
}

/// Output options shared by every command.
#[derive(Debug, Args, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Print every edge as `tail<TAB>head` after the summary.
    #[arg(long, global = true)]
    pub edges: bool,
}

/// Options accepted by the `topology` command.
#[derive(Debug, Args, Clone)]
pub struct TopologyCommand {
    /// Topology to build.
    #[command(subcommand)]
    pub shape: Shape,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Topologies offered by `nodal topology`.
#[derive(Debug, Subcommand, Clone)]
pub enum Shape {
    /// Isolated nodes with no edges.
    Empty(NodesArgs),
    /// A simple path.
    Path(NodesArgs),
    /// A simple cycle.
    Cycle(NodesArgs),
    /// A ring where every node joins the node `offset` steps ahead.
    Loop(LoopArgs),
    /// A ring joining every pair at ring distance `1..=distance`.
    Circulant(CirculantArgs),
    /// Every pair of nodes joined.
    Complete(NodesArgs),
    /// A complete tree in breadth-first order.
    Tree(TreeArgs),
    /// The Petersen graph.
    Petersen,
    /// A hub joined to every outer node.
    Star(StarArgs),
    /// A rectangular grid.
    Mesh(MeshArgs),
}

/// Node count for single-parameter topologies.
#[derive(Debug, Args, Clone, Copy)]
pub struct NodesArgs {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,
}

/// Arguments for `topology loop`.
#[derive(Debug, Args, Clone, Copy)]
pub struct LoopArgs {
    /// Number of nodes on the ring.
    #[arg(long)]
    pub nodes: usize,
    /// Ring offset joined from each node.
    #[arg(long, default_value_t = 1)]
    pub offset: usize,
}

/// Arguments for `topology circulant`.
#[derive(Debug, Args, Clone, Copy)]
pub struct CirculantArgs {
    /// Number of nodes on the ring.
    #[arg(long)]
    pub nodes: usize,
    /// Largest ring distance joined.
    #[arg(long)]
    pub distance: usize,
}

/// Arguments for `topology tree`.
#[derive(Debug, Args, Clone, Copy)]
pub struct TreeArgs {
    /// Depth of the deepest level; a single root has height 0.
    #[arg(long)]
    pub height: usize,
    /// Children per internal node.
    #[arg(long, default_value_t = 2)]
    pub branching: usize,
}

/// Arguments for `topology star`.
#[derive(Debug, Args, Clone, Copy)]
pub struct StarArgs {
    /// Number of outer nodes around the hub.
    #[arg(long)]
    pub leaves: usize,
}

/// Arguments for `topology mesh`.
#[derive(Debug, Args, Clone, Copy)]
pub struct MeshArgs {
    /// Number of rows.
    #[arg(long)]
    pub rows: usize,
    /// Number of columns.
    #[arg(long)]
    pub columns: usize,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Generator to run.
    #[command(subcommand)]
    pub model: Model,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Random graph models offered by `nodal generate`.
#[derive(Debug, Subcommand, Clone)]
pub enum Model {
    /// Join every pair independently with a fixed probability.
    Uniform(UniformArgs),
    /// Rewire the edges of a circulant ring.
    SmallWorld(SmallWorldArgs),
    /// Grow a graph by degree-proportional attachment.
    Preferential(PreferentialArgs),
}

/// Arguments for `generate uniform`.
#[derive(Debug, Args, Clone, Copy)]
pub struct UniformArgs {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,
    /// Probability that a pair is joined.
    #[arg(long)]
    pub probability: f64,
    /// RNG seed.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Arguments for `generate small-world`.
#[derive(Debug, Args, Clone, Copy)]
pub struct SmallWorldArgs {
    /// Number of nodes on the ring.
    #[arg(long)]
    pub nodes: usize,
    /// Largest ring distance in the scaffold.
    #[arg(long)]
    pub distance: usize,
    /// Probability that a ring edge is rewired.
    #[arg(long)]
    pub probability: f64,
    /// RNG seed.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Arguments for `generate preferential`.
#[derive(Debug, Args, Clone, Copy)]
pub struct PreferentialArgs {
    /// Nodes available before growth starts.
    #[arg(long)]
    pub initial: usize,
    /// Nodes in the finished graph.
    #[arg(long = "final")]
    pub final_nodes: usize,
    /// Edges attached by every new node.
    #[arg(long)]
    pub per_node: usize,
    /// RNG seed.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Graph construction or generation failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Describes the graph produced by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    /// Name reported by the graph.
    pub name: String,
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Number of nodes with each degree, keyed by degree.
    pub degree_histogram: BTreeMap<usize, usize>,
    /// Every edge in enumeration order, when requested.
    pub edges: Option<Vec<Edge>>,
}

impl GraphSummary {
    /// Summarises `graph`, collecting its edges when `include_edges` is set.
    ///
    /// # Errors
    /// Propagates [`GraphError`] if an enumerated node reports no degree.
    pub fn from_graph<G: Graph + ?Sized>(
        graph: &G,
        include_edges: bool,
    ) -> Result<Self, GraphError> {
        let mut degree_histogram = BTreeMap::new();
        for node in graph.nodes() {
            *degree_histogram.entry(graph.degree(node)?).or_insert(0) += 1;
        }
        Ok(Self {
            name: graph.name().to_owned(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            degree_histogram,
            edges: include_edges.then(|| graph.edges().collect()),
        })
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the requested graph cannot be built.
///
/// # Examples
/// ```
/// use nodal_cli::cli::{Cli, Command, NodesArgs, OutputArgs, Shape, TopologyCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Topology(TopologyCommand {
///         shape: Shape::Cycle(NodesArgs { nodes: 6 }),
///         output: OutputArgs::default(),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.edge_count, 6);
/// assert_eq!(summary.degree_histogram.get(&2), Some(&6));
/// # Ok::<(), nodal_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<GraphSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Topology(command) => {
            span.record("command", field::display("topology"));
            run_topology(command)
        }
        Command::Generate(command) => {
            span.record("command", field::display("generate"));
            run_generate(command)
        }
    }
}

#[instrument(name = "cli.topology", err, skip(command), fields(topology = field::Empty))]
pub(super) fn run_topology(command: TopologyCommand) -> Result<GraphSummary, CliError> {
    let graph = build_shape(&command.shape)?;
    Span::current().record("topology", field::display(graph.name()));
    let summary = GraphSummary::from_graph(&graph, command.output.edges)?;
    info!(
        graph = summary.name.as_str(),
        nodes = summary.node_count,
        edges = summary.edge_count,
        "command completed"
    );
    Ok(summary)
}

pub(super) fn build_shape(shape: &Shape) -> Result<IndexedGraph, GraphError> {
    match *shape {
        Shape::Empty(NodesArgs { nodes }) => Ok(IndexedGraph::empty(nodes)),
        Shape::Path(NodesArgs { nodes }) => IndexedGraph::path(nodes),
        Shape::Cycle(NodesArgs { nodes }) => IndexedGraph::cycle(nodes),
        Shape::Loop(LoopArgs { nodes, offset }) => IndexedGraph::offset_loop(nodes, offset),
        Shape::Circulant(CirculantArgs { nodes, distance }) => {
            IndexedGraph::circulant(nodes, distance)
        }
        Shape::Complete(NodesArgs { nodes }) => IndexedGraph::complete(nodes),
        Shape::Tree(TreeArgs { height, branching }) => {
            IndexedGraph::complete_tree(height, branching)
        }
        Shape::Petersen => Ok(IndexedGraph::petersen()),
        Shape::Star(StarArgs { leaves }) => IndexedGraph::star(leaves),
        Shape::Mesh(MeshArgs { rows, columns }) => IndexedGraph::mesh(rows, columns),
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(model = field::Empty, seed = field::Empty),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GraphSummary, CliError> {
    let span = Span::current();
    let graph = match command.model {
        Model::Uniform(args) => {
            span.record("model", field::display("uniform"));
            span.record("seed", args.seed);
            UniformParams::new(args.nodes, args.probability)?
                .with_rng_seed(args.seed)
                .generate()?
        }
        Model::SmallWorld(args) => {
            span.record("model", field::display("small-world"));
            span.record("seed", args.seed);
            SmallWorldParams::new(args.nodes, args.distance, args.probability)?
                .with_rng_seed(args.seed)
                .generate()?
        }
        Model::Preferential(args) => {
            span.record("model", field::display("preferential"));
            span.record("seed", args.seed);
            PreferentialParams::new(args.initial, args.final_nodes, args.per_node)?
                .with_rng_seed(args.seed)
                .generate()?
        }
    };
    let summary = GraphSummary::from_graph(&graph, command.output.edges)?;
    info!(
        graph = summary.name.as_str(),
        nodes = summary.node_count,
        edges = summary.edge_count,
        "command completed"
    );
    Ok(summary)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::collections::BTreeMap;
/// # use nodal_cli::cli::{GraphSummary, render_summary};
/// # use nodal_core::Edge;
/// let summary = GraphSummary {
///     name: "path".into(),
///     node_count: 2,
///     edge_count: 1,
///     degree_histogram: BTreeMap::from([(1, 2)]),
///     edges: Some(vec![Edge::undirected(0, 1)]),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer).expect("summary is UTF-8");
/// assert!(text.ends_with("0\t1\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &GraphSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graph: {}", summary.name)?;
    writeln!(writer, "nodes: {}", summary.node_count)?;
    writeln!(writer, "edges: {}", summary.edge_count)?;
    for (degree, count) in &summary.degree_histogram {
        writeln!(writer, "degree {degree}: {count}")?;
    }
    for edge in summary.edges.iter().flatten() {
        writeln!(writer, "{}\t{}", edge.tail(), edge.head())?;
    }
    Ok(())
}
