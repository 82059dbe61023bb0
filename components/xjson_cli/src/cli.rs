//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

/// Deserialize an extended JSON document and print the result
#[derive(Debug, Parser)]
#[command(name = "xjson", version, about)]
pub struct Cli {
    /// Document to read; stdin when omitted
    pub file: Option<PathBuf>,

    /// Deserialize TEXT instead of reading a file
    #[arg(short, long, value_name = "TEXT", conflicts_with = "file")]
    pub eval: Option<String>,

    /// Print every statement, one per line
    #[arg(long)]
    pub all: bool,

    /// Fail on references past the last statement
    #[arg(long)]
    pub strict_references: bool,

    /// Print plain JSON instead of document notation
    #[arg(long)]
    pub json: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
