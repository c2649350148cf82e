use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{
    compute::ComputeArgs,
    generate::GenerateSubcommands,
    mutate::{EdgeArgs, NewArgs, SymmetrizeArgs, VertexArgs},
    render::RenderArgs,
};

mod compute;
mod file_utils;
mod generate;
mod mutate;
mod parsers;
mod render;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the built-in 4 vertex graph and its shortest paths
    Demo {
        /// Treat the graph as undirected
        #[arg(short, long)]
        symmetric: bool,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// Compute all-pairs shortest paths of one matrix, or of every .json file in a folder
    #[command(visible_alias = "c")]
    Compute {
        #[command(flatten)]
        args: ComputeArgs,
    },
    /// Create a matrix without edges
    New {
        #[command(flatten)]
        args: NewArgs,
    },
    /// Append an isolated vertex
    AddVertex {
        #[command(flatten)]
        args: VertexArgs,
    },
    /// Drop the last vertex and its edges
    RemoveVertex {
        #[command(flatten)]
        args: VertexArgs,
    },
    /// Set the weight of one edge
    SetEdge {
        #[command(flatten)]
        args: EdgeArgs,
    },
    /// Mirror edges so the matrix describes an undirected graph
    Symmetrize {
        #[command(flatten)]
        args: SymmetrizeArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Demo { symmetric, render }) => compute::run_demo(symmetric, &render),
        Some(Commands::Compute { args }) => compute::run(args)?,
        Some(Commands::New { args }) => mutate::run_new(args)?,
        Some(Commands::AddVertex { args }) => mutate::run_add_vertex(args)?,
        Some(Commands::RemoveVertex { args }) => mutate::run_remove_vertex(args)?,
        Some(Commands::SetEdge { args }) => mutate::run_set_edge(args)?,
        Some(Commands::Symmetrize { args }) => mutate::run_symmetrize(args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => compute::run_demo(false, &RenderArgs::default()),
    }

    Ok(())
}
