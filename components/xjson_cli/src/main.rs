//! xjson
//!
//! Reads an extended JSON document from a file, `--eval` or stdin and
//! prints the deserialized value.

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;
use xjson_cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let runner = Runner::from_cli(&cli);
    let result = if let Some(source) = &cli.eval {
        runner.execute_string(source)
    } else if let Some(file) = &cli.file {
        runner.execute_file(file)
    } else {
        runner.execute_stdin()
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
