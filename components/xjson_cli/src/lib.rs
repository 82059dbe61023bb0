//! Extended JSON CLI Library
//!
//! Argument parsing, input handling and output rendering for the `xjson`
//! binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod json;
pub mod runner;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use runner::Runner;
