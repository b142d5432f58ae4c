//! Unit tests for the CLI commands and summary rendering.

use super::commands::{build_shape, run_generate, run_topology};
use super::{
    CirculantArgs, Cli, CliError, Command, GenerateCommand, GraphSummary, LoopArgs, MeshArgs,
    Model, NodesArgs, OutputArgs, PreferentialArgs, Shape, SmallWorldArgs, StarArgs,
    TopologyCommand, TreeArgs, UniformArgs, render_summary, run_cli,
};

use std::collections::BTreeMap;

use clap::Parser;
use nodal_core::{DEFAULT_SEED, Edge, GraphError, GraphErrorCode};
use nodal_test_support::tracing::with_recording;
use rstest::rstest;
use tracing::Level;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn topology(shape: Shape) -> TopologyCommand {
    TopologyCommand {
        shape,
        output: OutputArgs::default(),
    }
}

fn parse(args: &[&str]) -> Cli {
    match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => panic!("arguments must parse: {err}"),
    }
}

#[rstest]
#[case::empty(Shape::Empty(NodesArgs { nodes: 4 }), "empty", 4, 0)]
#[case::path(Shape::Path(NodesArgs { nodes: 5 }), "path", 5, 4)]
#[case::cycle(Shape::Cycle(NodesArgs { nodes: 6 }), "cycle", 6, 6)]
#[case::loop_offset(Shape::Loop(LoopArgs { nodes: 8, offset: 3 }), "loop", 8, 8)]
#[case::circulant(Shape::Circulant(CirculantArgs { nodes: 9, distance: 2 }), "circulant", 9, 18)]
#[case::complete(Shape::Complete(NodesArgs { nodes: 5 }), "complete", 5, 10)]
#[case::tree(Shape::Tree(TreeArgs { height: 2, branching: 3 }), "complete-tree", 13, 12)]
#[case::petersen(Shape::Petersen, "petersen", 10, 15)]
#[case::star(Shape::Star(StarArgs { leaves: 6 }), "star", 7, 6)]
#[case::mesh(Shape::Mesh(MeshArgs { rows: 3, columns: 4 }), "mesh", 12, 17)]
fn topologies_report_their_size(
    #[case] shape: Shape,
    #[case] name: &str,
    #[case] nodes: usize,
    #[case] edges: usize,
) -> TestResult {
    let summary = run_topology(topology(shape))?;
    assert_eq!(summary.name, name);
    assert_eq!(summary.node_count, nodes);
    assert_eq!(summary.edge_count, edges);
    assert_eq!(summary.degree_histogram.values().sum::<usize>(), nodes);
    assert!(summary.edges.is_none());
    Ok(())
}

#[rstest]
fn star_histogram_separates_the_hub() -> TestResult {
    let summary = run_topology(topology(Shape::Star(StarArgs { leaves: 5 })))?;
    assert_eq!(summary.degree_histogram, BTreeMap::from([(1, 5), (5, 1)]));
    Ok(())
}

#[rstest]
#[case::short_path(Shape::Path(NodesArgs { nodes: 1 }))]
#[case::short_cycle(Shape::Cycle(NodesArgs { nodes: 2 }))]
#[case::wide_loop(Shape::Loop(LoopArgs { nodes: 6, offset: 4 }))]
#[case::dense_circulant(Shape::Circulant(CirculantArgs { nodes: 6, distance: 3 }))]
#[case::thin_mesh(Shape::Mesh(MeshArgs { rows: 1, columns: 4 }))]
fn invalid_shapes_surface_core_errors(#[case] shape: Shape) {
    let err = build_shape(&shape).expect_err("shape must be rejected");
    assert_eq!(err.code(), GraphErrorCode::InvalidShape);
}

#[rstest]
fn edge_listing_is_opt_in() -> TestResult {
    let command = TopologyCommand {
        shape: Shape::Path(NodesArgs { nodes: 3 }),
        output: OutputArgs { edges: true },
    };
    let summary = run_topology(command)?;
    assert_eq!(
        summary.edges,
        Some(vec![Edge::undirected(0, 1), Edge::undirected(1, 2)])
    );
    Ok(())
}

#[rstest]
fn generators_run_with_fixed_seeds() -> TestResult {
    let command = |seed| GenerateCommand {
        model: Model::Uniform(UniformArgs {
            nodes: 20,
            probability: 0.4,
            seed,
        }),
        output: OutputArgs { edges: true },
    };
    let first = run_generate(command(3))?;
    let again = run_generate(command(3))?;
    assert_eq!(first, again);
    assert_eq!(first.name, "uniform");
    Ok(())
}

#[rstest]
fn small_world_keeps_the_ring_edge_count() -> TestResult {
    let summary = run_generate(GenerateCommand {
        model: Model::SmallWorld(SmallWorldArgs {
            nodes: 16,
            distance: 2,
            probability: 0.5,
            seed: 11,
        }),
        output: OutputArgs::default(),
    })?;
    assert_eq!(summary.name, "small-world");
    assert_eq!(summary.edge_count, 32);
    Ok(())
}

#[rstest]
fn preferential_grows_to_the_final_size() -> TestResult {
    let summary = run_generate(GenerateCommand {
        model: Model::Preferential(PreferentialArgs {
            initial: 3,
            final_nodes: 25,
            per_node: 2,
            seed: DEFAULT_SEED,
        }),
        output: OutputArgs::default(),
    })?;
    assert_eq!(summary.node_count, 25);
    assert_eq!(summary.edge_count, 2 * (25 - 3));
    Ok(())
}

#[rstest]
fn generator_parameters_are_validated() {
    let cli = Cli {
        command: Command::Generate(GenerateCommand {
            model: Model::Uniform(UniformArgs {
                nodes: 4,
                probability: 1.5,
                seed: 1,
            }),
            output: OutputArgs::default(),
        }),
    };
    let err = run_cli(cli).expect_err("probability above one must fail");
    assert!(matches!(
        err,
        CliError::Core(GraphError::InvalidShape {
            shape: "uniform",
            ..
        })
    ));
}

#[rstest]
fn clap_parses_topology_flags() -> TestResult {
    let cli = parse(&["nodal", "topology", "mesh", "--rows", "2", "--columns", "3", "--edges"]);
    let Command::Topology(command) = &cli.command else {
        panic!("expected the topology command");
    };
    assert!(command.output.edges);
    let summary = run_cli(cli)?;
    assert_eq!(summary.node_count, 6);
    assert_eq!(summary.edges.map(|edges| edges.len()), Some(7));
    Ok(())
}

#[rstest]
fn clap_defaults_the_seed() {
    let cli = parse(&[
        "nodal",
        "generate",
        "small-world",
        "--nodes",
        "10",
        "--distance",
        "2",
        "--probability",
        "0.1",
    ]);
    match cli.command {
        Command::Generate(GenerateCommand {
            model: Model::SmallWorld(args),
            ..
        }) => assert_eq!(args.seed, DEFAULT_SEED),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[rstest]
fn clap_reads_preferential_flags() {
    let cli = parse(&[
        "nodal",
        "generate",
        "preferential",
        "--initial",
        "4",
        "--final",
        "30",
        "--per-node",
        "2",
        "--seed",
        "9",
    ]);
    match cli.command {
        Command::Generate(GenerateCommand {
            model: Model::Preferential(args),
            ..
        }) => {
            assert_eq!(
                (args.initial, args.final_nodes, args.per_node, args.seed),
                (4, 30, 2, 9)
            );
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[rstest]
#[case::unknown_shape(&["nodal", "topology", "hypercube", "--nodes", "8"])]
#[case::missing_nodes(&["nodal", "topology", "path"])]
#[case::negative_count(&["nodal", "topology", "cycle", "--nodes", "-3"])]
#[case::bad_probability(&["nodal", "generate", "uniform", "--nodes", "3", "--probability", "high"])]
fn clap_rejects_malformed_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
fn render_summary_outputs_histogram_and_edges() -> TestResult {
    let summary = GraphSummary {
        name: "path".into(),
        node_count: 3,
        edge_count: 2,
        degree_histogram: BTreeMap::from([(1, 2), (2, 1)]),
        edges: Some(vec![Edge::undirected(0, 1), Edge::undirected(1, 2)]),
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    assert_eq!(
        text,
        "graph: path\nnodes: 3\nedges: 2\ndegree 1: 2\ndegree 2: 1\n0\t1\n1\t2\n"
    );
    Ok(())
}

#[rstest]
fn render_summary_omits_edges_unless_requested() -> TestResult {
    let summary = GraphSummary::from_graph(&nodal_core::IndexedGraph::petersen(), false)?;
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("degree 3: 10"));
    Ok(())
}

#[rstest]
fn run_cli_emits_tracing_fields() -> TestResult {
    let cli = Cli {
        command: Command::Topology(topology(Shape::Cycle(NodesArgs { nodes: 7 }))),
    };
    let (summary, layer) = with_recording(|| run_cli(cli));
    assert_eq!(summary?.edge_count, 7);

    let run = layer.span("cli.run").expect("cli.run span must exist");
    assert_eq!(run.field("command"), Some("topology"));
    let build = layer
        .span("cli.topology")
        .expect("cli.topology span must exist");
    assert_eq!(build.field("topology"), Some("cycle"));

    let completed = layer
        .event(Level::INFO, "command completed")
        .expect("completion event must exist");
    assert_eq!(completed.field("graph"), Some("cycle"));
    assert_eq!(completed.field("edges"), Some("7"));
    Ok(())
}

#[rstest]
fn generate_records_model_and_seed() -> TestResult {
    let command = GenerateCommand {
        model: Model::Uniform(UniformArgs {
            nodes: 6,
            probability: 0.5,
            seed: 77,
        }),
        output: OutputArgs::default(),
    };
    let (summary, layer) = with_recording(|| run_generate(command));
    summary?;
    let span = layer
        .span("cli.generate")
        .expect("cli.generate span must exist");
    assert_eq!(span.field("model"), Some("uniform"));
    assert_eq!(span.field("seed"), Some("77"));
    assert!(layer.span("generator.uniform").is_some());
    Ok(())
}
