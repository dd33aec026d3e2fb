//! `docval` CLI — canonicalize and inspect JSON documents through the tagged
//! value container.
//!
//! ## Usage
//!
//! ```sh
//! # Canonicalize (sorted keys, normalized nulls), stdin → stdout
//! echo '{"b":1,"a":null}' | docval normalize
//!
//! # Canonicalize from file to file, folding key case
//! docval normalize -i data.json -o canonical.json --case-insensitive
//!
//! # Reject documents nested deeper than 16 levels
//! docval normalize -i data.json --max-depth 16
//!
//! # Structural statistics, human-readable or as JSON
//! docval stats -i data.json
//! docval stats -i data.json --json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docval_core::{
    export_with_depth, import_with_depth, CaseInsensitive, DocValue, JsonScalar, JsonValue,
    KeyPolicy, Ordinal, Scalar, MAX_DEPTH,
};
use serde::Serialize;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "docval",
    version,
    about = "Canonicalize and inspect JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a JSON document in canonical form (ordered keys, normalized nulls)
    Normalize {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Fold ASCII case when comparing object keys (a later duplicate
        /// replaces an earlier one)
        #[arg(long)]
        case_insensitive: bool,
        /// Maximum nesting depth accepted before giving up
        #[arg(long, default_value_t = MAX_DEPTH)]
        max_depth: usize,
    },
    /// Report structural statistics for a JSON document
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Emit the report as JSON instead of the human-readable table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize {
            input,
            output,
            case_insensitive,
            max_depth,
        } => {
            let text = read_input(input.as_deref())?;
            let doc: serde_json::Value =
                serde_json::from_str(&text).context("Input is not valid JSON")?;

            let canonical = if case_insensitive {
                normalize::<CaseInsensitive>(&doc, max_depth)?
            } else {
                normalize::<Ordinal>(&doc, max_depth)?
            };

            let pretty = serde_json::to_string_pretty(&canonical)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Stats { input, json } => {
            let text = read_input(input.as_deref())?;
            let doc: serde_json::Value =
                serde_json::from_str(&text).context("Input is not valid JSON")?;
            let value: JsonValue =
                import_with_depth(&doc, MAX_DEPTH).context("Failed to import the document")?;

            let stats = Stats::collect(&value);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Maps:      {}", stats.maps);
                println!("Arrays:    {}", stats.arrays);
                println!("Scalars:   {}", stats.scalars);
                println!("Nulls:     {}", stats.nulls);
                println!("Max depth: {}", stats.max_depth);
            }
        }
    }

    Ok(())
}

/// Import under the chosen key policy and export straight back. The net
/// effect is a canonical rendition: object keys in policy order, nulls
/// normalized, numbers untouched.
fn normalize<P: KeyPolicy>(doc: &serde_json::Value, max_depth: usize) -> Result<serde_json::Value> {
    let value: DocValue<JsonScalar, P> =
        import_with_depth(doc, max_depth).context("Failed to import the document")?;
    let back: serde_json::Value = export_with_depth(&value, &mut (), max_depth)
        .context("Failed to export the document")?;
    Ok(back)
}

/// Structural counts reported by `docval stats`.
#[derive(Serialize)]
struct Stats {
    maps: usize,
    arrays: usize,
    scalars: usize,
    nulls: usize,
    max_depth: usize,
}

impl Stats {
    fn collect<P: KeyPolicy>(value: &DocValue<JsonScalar, P>) -> Stats {
        let mut stats = Stats {
            maps: 0,
            arrays: 0,
            scalars: 0,
            nulls: 0,
            max_depth: 0,
        };
        let mut stack: Vec<(&DocValue<JsonScalar, P>, usize)> = vec![(value, 1)];
        while let Some((value, depth)) = stack.pop() {
            stats.max_depth = stats.max_depth.max(depth);
            match value {
                DocValue::Map(entries) => {
                    stats.maps += 1;
                    for child in entries.values() {
                        stack.push((child, depth + 1));
                    }
                }
                DocValue::Array(elements) => {
                    stats.arrays += 1;
                    for child in elements {
                        stack.push((child, depth + 1));
                    }
                }
                DocValue::Variant(scalar) => {
                    if scalar.is_empty() {
                        stats.nulls += 1;
                    } else {
                        stats.scalars += 1;
                    }
                }
                DocValue::Empty => stats.nulls += 1,
            }
        }
        stats
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
