use std::path::PathBuf;

use anyhow::bail;
use clap::Args;
use pathgrid_core::{
    AdjacencyMatrix, SymmetryPolicy, VertexIdx, Weight, add_vertex, make_symmetric_with,
    try_remove_last_vertex,
};
use tracing::info;

use crate::{
    file_utils::{emit_matrix, read_matrix},
    parsers::{self, MAX_VERTICES, MIN_VERTICES},
};

#[derive(Args)]
pub struct NewArgs {
    /// Number of vertices (2-8)
    #[arg(short, long, value_parser = parsers::parse_vertex_count, default_value = "4")]
    size: usize,

    /// Output file, the matrix is printed when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
pub struct VertexArgs {
    #[arg(short, long)]
    input: PathBuf,

    /// Output file, the matrix is printed when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
pub struct EdgeArgs {
    #[arg(short, long)]
    input: PathBuf,

    #[arg(long)]
    from: usize,

    #[arg(long)]
    to: usize,

    /// Edge weight; empty, '∞' or 'INF' removes the edge
    #[arg(short, long, value_parser = parsers::parse_weight, allow_hyphen_values = true)]
    weight: Weight,

    /// Also set the reverse edge
    #[arg(long)]
    undirected: bool,

    /// Output file, the matrix is printed when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
pub struct SymmetrizeArgs {
    #[arg(short, long)]
    input: PathBuf,

    /// How to combine two different weights on the same edge: row-major or minimum
    #[arg(long, value_parser = parsers::parse_symmetry_policy, default_value = "row-major")]
    policy: SymmetryPolicy,

    /// Output file, the matrix is printed when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Adds a vertex, refusing to grow past [`MAX_VERTICES`].
fn grow(matrix: &AdjacencyMatrix) -> anyhow::Result<AdjacencyMatrix> {
    if matrix.num_vertices() >= MAX_VERTICES {
        bail!("Maximum size ({MAX_VERTICES}) reached");
    }

    Ok(add_vertex(matrix))
}

/// Removes the last vertex, refusing to shrink below [`MIN_VERTICES`].
fn shrink(matrix: &AdjacencyMatrix) -> anyhow::Result<AdjacencyMatrix> {
    if matrix.num_vertices() <= MIN_VERTICES {
        bail!("Minimum size ({MIN_VERTICES}) reached");
    }

    Ok(try_remove_last_vertex(matrix)?)
}

fn set_edge(
    matrix: &AdjacencyMatrix,
    from: VertexIdx,
    to: VertexIdx,
    weight: Weight,
    undirected: bool,
) -> anyhow::Result<AdjacencyMatrix> {
    let mut updated = matrix.with_edge(from, to, weight)?;
    if undirected {
        updated = updated.with_edge(to, from, weight)?;
    }

    Ok(updated)
}

pub fn run_new(args: NewArgs) -> Result<(), anyhow::Error> {
    let matrix = AdjacencyMatrix::new_unconnected(args.size);
    emit_matrix(args.output.as_deref(), &matrix)
}

pub fn run_add_vertex(args: VertexArgs) -> Result<(), anyhow::Error> {
    let grown = grow(&read_matrix(&args.input)?)?;

    info!("Matrix now has {} vertices", grown.num_vertices());
    emit_matrix(args.output.as_deref(), &grown)
}

pub fn run_remove_vertex(args: VertexArgs) -> Result<(), anyhow::Error> {
    let shrunk = shrink(&read_matrix(&args.input)?)?;

    info!("Matrix now has {} vertices", shrunk.num_vertices());
    emit_matrix(args.output.as_deref(), &shrunk)
}

pub fn run_set_edge(args: EdgeArgs) -> Result<(), anyhow::Error> {
    let matrix = read_matrix(&args.input)?;
    let (from, to) = (VertexIdx::new(args.from), VertexIdx::new(args.to));

    let updated = set_edge(&matrix, from, to, args.weight, args.undirected)?;

    info!("Edge {} -> {} set to {}", from, to, args.weight);
    emit_matrix(args.output.as_deref(), &updated)
}

pub fn run_symmetrize(args: SymmetrizeArgs) -> Result<(), anyhow::Error> {
    let matrix = read_matrix(&args.input)?;
    let symmetric = make_symmetric_with(&matrix, args.policy);

    emit_matrix(args.output.as_deref(), &symmetric)
}
