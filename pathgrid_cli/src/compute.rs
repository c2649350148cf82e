use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use pathgrid_core::{AdjacencyMatrix, ShortestPaths, compute_shortest_paths, make_symmetric};
use tracing::{error, info};

use crate::{
    file_utils::{matrix_files, read_matrix},
    render::{RenderArgs, print_matrix},
};

#[derive(Args)]
pub struct ComputeArgs {
    /// Matrix file, or folder searched for .json matrix files
    #[arg(short, long)]
    input: PathBuf,

    /// Treat every graph as undirected
    #[arg(short, long)]
    symmetric: bool,

    /// Also print the vertices along every shortest path
    #[arg(short, long)]
    paths: bool,

    #[command(flatten)]
    render: RenderArgs,
}

fn describe_paths(shortest_paths: &ShortestPaths) -> Vec<String> {
    let distances = shortest_paths.distances();
    let mut lines = Vec::new();

    for from in distances.vertices() {
        for to in distances.vertices().filter(|&to| to != from) {
            let line = match shortest_paths.path(from, to) {
                Some(path) => format!(
                    "{from} -> {to} ({}): {}",
                    shortest_paths.distance(from, to),
                    path.iter()
                        .map(|vertex| vertex.to_string())
                        .collect::<Vec<_>>()
                        .join(" -> ")
                ),
                None => format!("{from} -> {to}: unreachable"),
            };
            lines.push(line);
        }
    }

    lines
}

fn show(matrix: &AdjacencyMatrix, symmetric: bool, paths: bool, render: &RenderArgs) {
    let matrix = if symmetric {
        make_symmetric(matrix)
    } else {
        matrix.clone()
    };

    let shortest_paths = compute_shortest_paths(&matrix);

    print_matrix("Adjacency matrix", &matrix, render);
    println!();
    print_matrix("Shortest paths matrix", shortest_paths.distances(), render);

    if paths {
        println!();
        for line in describe_paths(&shortest_paths) {
            println!("{line}");
        }
    }
}

pub fn run_demo(symmetric: bool, render: &RenderArgs) {
    info!("Showing demo graph");
    show(&AdjacencyMatrix::demo(), symmetric, true, render);
}

pub fn run(args: ComputeArgs) -> Result<(), anyhow::Error> {
    let paths = matrix_files(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    if paths.is_empty() {
        return Err(anyhow::anyhow!("No matrix file found in {:?}", args.input));
    }

    let mut failures = 0;

    for path in &paths {
        info!("Computing shortest paths for {:?}", path);

        match read_matrix(path) {
            Ok(matrix) => show(&matrix, args.symmetric, args.paths, &args.render),
            Err(err) => {
                // A folder may hold unrelated JSON, keep going with the other files
                error!("{:#}", err);
                failures += 1;
            }
        }
        println!();
    }

    if failures == paths.len() {
        return Err(anyhow::anyhow!("No valid matrix in {:?}", args.input));
    }

    Ok(())
}
