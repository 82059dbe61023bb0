//! Reads input, deserializes it and renders the output text

use std::io::Read;
use std::path::Path;

use tracing::debug;

use core_types::Value;
use deserializer::{deserialize_all, DeserializeOptions, ReferencePolicy};

use crate::cli::Cli;
use crate::error::CliResult;
use crate::json::to_json;

/// Deserializes documents and renders them for printing
#[derive(Debug, Default)]
pub struct Runner {
    options: DeserializeOptions,
    /// Render every statement instead of only the first
    all: bool,
    /// Render plain JSON instead of document notation
    json: bool,
}

impl Runner {
    /// Create a runner with the given options
    ///
    /// # Example
    /// ```
    /// use deserializer::DeserializeOptions;
    /// use xjson_cli::Runner;
    ///
    /// let runner = Runner::new(DeserializeOptions::new());
    /// assert_eq!(runner.execute_string("[1, NaN]").unwrap(), "[1,NaN]");
    /// ```
    pub fn new(options: DeserializeOptions) -> Self {
        Self {
            options,
            all: false,
            json: false,
        }
    }

    /// Build a runner from parsed arguments
    pub fn from_cli(cli: &Cli) -> Self {
        let references = if cli.strict_references {
            ReferencePolicy::Strict
        } else {
            ReferencePolicy::Lenient
        };
        Self::new(DeserializeOptions::new().with_references(references))
            .with_all(cli.all)
            .with_json(cli.json)
    }

    /// Render every statement, one per line
    pub fn with_all(mut self, enabled: bool) -> Self {
        self.all = enabled;
        self
    }

    /// Render plain JSON
    pub fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Deserialize a file
    ///
    /// # Errors
    /// Returns `CliError::Io` if the file cannot be read, otherwise the
    /// errors of [`Runner::execute_string`]
    pub fn execute_file(&self, path: impl AsRef<Path>) -> CliResult<String> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading document");
        let source = std::fs::read_to_string(path)?;
        self.execute_string(&source)
    }

    /// Deserialize everything on standard input
    pub fn execute_stdin(&self) -> CliResult<String> {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        self.execute_string(&source)
    }

    /// Deserialize `source` and render the result
    pub fn execute_string(&self, source: &str) -> CliResult<String> {
        let values = deserialize_all(source, &self.options)?;
        if self.all {
            let lines = values
                .iter()
                .map(|value| self.render(value))
                .collect::<CliResult<Vec<_>>>()?;
            Ok(lines.join("\n"))
        } else {
            self.render(values.first().unwrap_or(&Value::Undefined))
        }
    }

    fn render(&self, value: &Value) -> CliResult<String> {
        if self.json {
            Ok(to_json(value)?.to_string())
        } else {
            Ok(value.to_string())
        }
    }
}
