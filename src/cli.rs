use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::builder::DEFAULT_MAX_DEPTH;

/// Generate Thrift wire-type signatures from Rust types
#[derive(Parser, Debug)]
#[command(name = "thrift-sig")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan sources and write the signature report
    Generate {
        /// Path to the configuration file
        #[arg(short, long, default_value = "thrift-sig.toml")]
        config: PathBuf,

        /// Print progress and debug logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create a default configuration file
    Init {
        /// Where to write the configuration file
        #[arg(short, long, default_value = "thrift-sig.toml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the signatures of a single type expression
    Signature {
        /// Rust type expression, e.g. "Vec<HashMap<String, Order>>"
        type_expr: String,

        /// Treat NAME as a user-defined struct (repeatable)
        #[arg(long = "struct", value_name = "NAME")]
        structs: Vec<String>,

        /// Treat NAME as a Thrift enum (repeatable)
        #[arg(long = "enum", value_name = "NAME")]
        enums: Vec<String>,

        /// Maximum number of nested parameterized levels
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, value_parser = parse_max_depth)]
        max_depth: usize,
    },
}

/// Depth limits below one would reject every generic type
fn parse_max_depth(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(depth) => Ok(depth),
        Err(err) => Err(err.to_string()),
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether debug logging was requested
    pub fn verbose(&self) -> bool {
        matches!(self.command, Commands::Generate { verbose: true, .. })
    }
}
