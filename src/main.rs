#![allow(clippy::print_stdout)]
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use schemapool::Context;

#[derive(Parser)]
#[command(name = "schemapool")]
struct Cli {
    /// A path to the JSON instance to validate.
    #[arg(value_parser)]
    instance: PathBuf,

    /// The JSON Schema to validate with (i.e. schema.json).
    #[arg(short = 's', long = "schema")]
    schema: PathBuf,
}

fn read_json(path: &Path) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

fn validate_instance(
    instance_path: &Path,
    schema_path: &Path,
) -> Result<bool, Box<dyn std::error::Error>> {
    let schema = read_json(schema_path)?;
    let instance = read_json(instance_path)?;

    let mut context = Context::new();
    let root = match context.compile_value(&schema) {
        Ok(root) => root,
        Err(error) => {
            println!("Schema is invalid. Error: {error}");
            return Ok(false);
        }
    };
    if let Err(error) = context.resolve_refs(root) {
        println!("Schema is invalid. Error: {error}");
        return Ok(false);
    }
    context.set_root(root);

    let filename = instance_path.to_string_lossy();
    match context.validate_value(&instance, root) {
        Ok(()) => {
            let title = context.title(root);
            if title.is_empty() {
                println!("{filename} - VALID");
            } else {
                println!("{filename} - VALID against '{title}'");
            }
            Ok(true)
        }
        Err(error) => {
            println!("{filename} - INVALID. Error: {error}");
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = Cli::parse();
    match validate_instance(&cli.instance, &cli.schema) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            println!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
