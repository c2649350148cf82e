use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use pathgrid_core::{AdjacencyMatrix, json::types::JsonAdjacencyMatrix};

/// Every regular file below `root`, nested folders included, in path order.
pub fn read_folder(root: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut pending = vec![root.to_path_buf()];
    let mut files = Vec::new();

    while let Some(folder) = pending.pop() {
        for entry in std::fs::read_dir(&folder)? {
            let entry = entry?;
            let file_type = entry.file_type()?;

            if file_type.is_dir() {
                pending.push(entry.path());
            } else if file_type.is_file() {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    Ok(files)
}

/// The file itself, or every `.json` file below it when it is a folder.
pub fn matrix_files(input: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let files = read_folder(input)?
        .into_iter()
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    Ok(files)
}

pub fn read_matrix(path: &Path) -> anyhow::Result<AdjacencyMatrix> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let document: JsonAdjacencyMatrix = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let matrix = document
        .build_matrix()
        .with_context(|| format!("Invalid matrix in {}", path.display()))?;
    Ok(matrix)
}

pub fn write_matrix(path: &Path, matrix: &AdjacencyMatrix) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &JsonAdjacencyMatrix::from(matrix))?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

/// Writes `matrix` to `output`, or prints it as JSON when no output is given.
pub fn emit_matrix(output: Option<&Path>, matrix: &AdjacencyMatrix) -> anyhow::Result<()> {
    match output {
        Some(path) => write_matrix(path, matrix),
        None => {
            let json = serde_json::to_string_pretty(&JsonAdjacencyMatrix::from(matrix))?;
            println!("{json}");
            Ok(())
        }
    }
}
