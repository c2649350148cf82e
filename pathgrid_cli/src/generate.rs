use std::path::PathBuf;

use clap::Subcommand;
use tracing::info;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// JSON schema of the matrix files read and written by the other commands
    JsonSchema {
        /// Output file, the schema is printed when omitted
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            let schema = pathgrid_core::json::schema::generate_json_schema()?;
            write_schema(out, &schema)?;
        }
    }

    Ok(())
}

fn write_schema(out: Option<PathBuf>, schema: &str) -> Result<(), anyhow::Error> {
    let Some(out) = out else {
        println!("{schema}");
        return Ok(());
    };

    if let Some(parent) = out.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(&out, schema)?;
    info!("Wrote JSON schema to {}", out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_written_in_new_folder() {
        let folder = std::env::temp_dir().join(format!("pathgrid_schema_{}", std::process::id()));
        let out = folder.join("nested/matrix.schema.json");

        run(GenerateSubcommands::JsonSchema {
            out: Some(out.clone()),
        })
        .unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        std::fs::remove_dir_all(&folder).unwrap();

        let schema: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert!(schema.get("properties").is_some());
    }
}
