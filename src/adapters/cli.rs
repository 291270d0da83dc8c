// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line front end.
//!
//! This module defines the `dots` command-line interface: load one document, then
//! read either a single value (fail-fast) or a batch of values (best-effort).
//!
//! ```text
//! dots config.yml get a.port --type int
//! dots config.yml batch --type string y a.missing x.b.c.d
//! ```

use crate::domain::{ConfigError, ConfigNode, ConfigReader, Result};
use crate::service::ConfigDocument;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the `dots` binary.
#[derive(Debug, Parser)]
#[command(name = "dots", version, about = "Read values from a YAML file by dot-path")]
pub struct CliArgs {
    /// Path to the YAML document
    pub file: PathBuf,

    /// What to read from the document
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Subcommands of the `dots` binary.
#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Read one value; fails if the path is missing or has the wrong type
    Get {
        /// Dot-path of the value, e.g. `a.b.c`
        path: String,

        /// Type to read the value as
        #[arg(long = "type", value_enum, default_value_t = ValueType::String)]
        value_type: ValueType,
    },
    /// Read several values; failing paths print the type's zero value
    Batch {
        /// Type to read every value as
        #[arg(long = "type", value_enum, default_value_t = ValueType::String)]
        value_type: ValueType,

        /// Dot-paths of the values
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

/// The type a value is read as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    /// A string scalar
    String,
    /// An integer scalar
    Int,
    /// A boolean scalar
    Bool,
    /// Any node, printed as YAML
    Node,
}

/// Loads the document named in `args` and runs its command.
///
/// Returns the text to print on success. A load failure is always an error.
pub fn run(args: &CliArgs) -> Result<String> {
    let document = ConfigDocument::load(&args.file)?;
    execute(&document, &args.command)
}

/// Runs `command` against an already loaded document.
pub fn execute(document: &ConfigDocument, command: &CliCommand) -> Result<String> {
    match command {
        CliCommand::Get { path, value_type } => {
            let line = match value_type {
                ValueType::String => document.get_string(path)?,
                ValueType::Int => document.get_int(path)?.to_string(),
                ValueType::Bool => document.get_bool(path)?.to_string(),
                ValueType::Node => render_node(&document.get_node(path)?)?,
            };
            Ok(format!("{}\n", line))
        }
        CliCommand::Batch { value_type, paths } => {
            let lines: Vec<String> = match value_type {
                ValueType::String => document.get_strings(paths),
                ValueType::Int => to_lines(document.get_ints(paths)),
                ValueType::Bool => to_lines(document.get_bools(paths)),
                ValueType::Node => paths
                    .iter()
                    .map(|path| {
                        document
                            .get_node(path)
                            .and_then(|node| render_node(&node))
                            .unwrap_or_default()
                    })
                    .collect(),
            };
            Ok(lines.iter().map(|line| format!("{}\n", line)).collect())
        }
    }
}

fn to_lines<T: ToString>(values: Vec<T>) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Scalars print as plain text; mappings and sequences as YAML.
fn render_node(node: &ConfigNode) -> Result<String> {
    match node {
        ConfigNode::Scalar(scalar) => Ok(scalar.to_string()),
        _ => serde_yaml::to_string(node)
            .map(|yaml| yaml.trim_end().to_string())
            .map_err(|e| ConfigError::ParseError {
                message: format!("Failed to render node as YAML: {}", e),
                source: Some(Box::new(e)),
            }),
    }
}
