//! End-to-End CLI Integration Tests
//!
//! Tests the complete pipeline through the xjson_cli Runner API: file on
//! disk to rendered output.

use std::io::Write;

use tempfile::NamedTempFile;
use xjson_cli::{Cli, CliError, Runner};

fn document(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn runner(args: &[&str]) -> Runner {
    let mut argv = vec!["xjson"];
    argv.extend_from_slice(args);
    let cli = <Cli as clap::Parser>::try_parse_from(argv).expect("parse args");
    Runner::from_cli(&cli)
}

/// Test: file input renders the first statement
#[test]
fn test_e2e_file_first_statement() {
    let file = document("[$1, $1];\n{\"k\": 10n}\n");
    let output = runner(&[]).execute_file(file.path()).unwrap();

    assert_eq!(output, r#"[{"k":10n},{"k":10n}]"#);
}

/// Test: --all prints each statement on its own line
#[test]
fn test_e2e_file_all_statements() {
    let file = document("1; NaN; undefined; /x/m");
    let output = runner(&["--all"]).execute_file(file.path()).unwrap();

    assert_eq!(output, "1\nNaN\nundefined\n/x/m");
}

/// Test: --json output
#[test]
fn test_e2e_file_json() {
    let file = document(r#"{"values": [1, Infinity, undefined], "re": /a/}"#);
    let output = runner(&["--json"]).execute_file(file.path()).unwrap();

    assert_eq!(output, r#"{"values":[1,null,null],"re":{}}"#);
}

/// Test: --json refuses cyclic values
#[test]
fn test_e2e_json_cycle_fails() {
    let file = document(r#"{"self": $0}"#);
    let err = runner(&["--json"]).execute_file(file.path()).unwrap_err();

    assert!(matches!(err, CliError::Json(_)));
}

/// Test: syntax errors in files report line and column
#[test]
fn test_e2e_file_syntax_error() {
    let file = document("{\n  \"a\": 1,\n  \"b\": [1 2]\n}");
    let err = runner(&[]).execute_file(file.path()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "SyntaxError: unexpected token '2' at 22 (line 3, column 11)"
    );
}

/// Test: strict references
#[test]
fn test_e2e_strict_references() {
    let file = document("[$2]; 0");

    assert_eq!(runner(&[]).execute_file(file.path()).unwrap(), "[undefined]");
    let err = runner(&["--strict-references"])
        .execute_file(file.path())
        .unwrap_err();
    assert!(err.to_string().starts_with("ReferenceError: $2"));
}
