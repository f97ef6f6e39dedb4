//! Integration tests for a full generate-and-export run
//!
//! Tests cover:
//! - CSV, TSV and JSON files with a companion statistics file
//! - Reproducible output for a fixed seed and evaluation instant
//! - Validation and configuration failures with their exit codes

use std::path::Path;

use clap::Parser;
use tempfile::TempDir;
use uarsynth::GeneratorError;
use uarsynth_cli::cli::Cli;
use uarsynth_cli::error::CliError;
use uarsynth_cli::formats::csv::COLUMN_NAMES;
use uarsynth_cli::run;

fn cli(dir: &Path, extra: &[&str]) -> Cli {
    let output = dir.join("records.out");
    let stats = dir.join("stats.txt");
    let mut args = vec![
        "uarsynth".to_string(),
        "--seed".into(),
        "12345".into(),
        "--records".into(),
        "120".into(),
        "--employees".into(),
        "30".into(),
        "--campaigns".into(),
        "8".into(),
        "--as-of".into(),
        "2025-06-15T12:00:00Z".into(),
        "--output".into(),
        output.display().to_string(),
        "--stats-file".into(),
        stats.display().to_string(),
        "--quiet".into(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    Cli::try_parse_from(args).unwrap()
}

// =========================================================================
// Output files
// =========================================================================

#[test]
fn test_csv_output_with_stats_file() {
    let dir = TempDir::new().unwrap();
    run::execute(cli(dir.path(), &[])).unwrap();

    let mut reader = csv::Reader::from_path(dir.path().join("records.out")).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, COLUMN_NAMES.to_vec());
    assert_eq!(reader.records().count(), 120);

    let stats = std::fs::read_to_string(dir.path().join("stats.txt")).unwrap();
    assert!(stats.contains("UAR (USER ACCESS REVIEW) DATA GENERATOR STATISTICS"));
    assert!(stats.contains("Total Records Generated: 120"));
}

#[test]
fn test_tsv_output() {
    let dir = TempDir::new().unwrap();
    run::execute(cli(dir.path(), &["--format", "tsv"])).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_path(dir.path().join("records.out"))
        .unwrap();
    assert_eq!(reader.headers().unwrap().len(), COLUMN_NAMES.len());
    assert_eq!(reader.records().count(), 120);
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    run::execute(cli(dir.path(), &["--format", "json"])).unwrap();

    let content = std::fs::read_to_string(dir.path().join("records.out")).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
    assert_eq!(records.len(), 120);
    assert!(records.iter().all(|r| r["unique_key"].as_str().unwrap().len() == 64));
}

#[test]
fn test_fixed_seed_output_is_reproducible() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    run::execute(cli(first.path(), &[])).unwrap();
    run::execute(cli(second.path(), &[])).unwrap();

    let a = std::fs::read(first.path().join("records.out")).unwrap();
    let b = std::fs::read(second.path().join("records.out")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_summary_only_writes_no_records() {
    let dir = TempDir::new().unwrap();
    let mut cli = cli(dir.path(), &[]);
    cli.output = None;
    cli.stats_file = None;
    cli.summary_only = true;
    run::execute(cli).unwrap();
    assert!(!dir.path().join("records.out").exists());
}

#[test]
fn test_zero_records_writes_header_only() {
    let dir = TempDir::new().unwrap();
    let mut cli = cli(dir.path(), &[]);
    cli.records = Some(0);
    run::execute(cli).unwrap();

    let content = std::fs::read_to_string(dir.path().join("records.out")).unwrap();
    assert_eq!(content.lines().count(), 1);
}

// =========================================================================
// Failures
// =========================================================================

#[test]
fn test_empty_employee_pool_is_a_validation_failure() {
    let dir = TempDir::new().unwrap();
    let mut cli = cli(dir.path(), &[]);
    cli.employees = Some(0);
    let err = run::execute(cli).unwrap_err();
    assert!(matches!(
        err,
        CliError::Generation(GeneratorError::EmptyPool { .. })
    ));
    assert_eq!(err.exit_code(), 4);
    assert!(!dir.path().join("records.out").exists());
}

#[test]
fn test_out_of_range_rate_is_rejected() {
    let dir = TempDir::new().unwrap();
    let err = run::execute(cli(dir.path(), &["--compliance-rate", "1.5"])).unwrap_err();
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn test_unwritable_output_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let mut cli = cli(dir.path(), &[]);
    cli.output = Some(dir.path().join("missing").join("records.csv"));
    let err = run::execute(cli).unwrap_err();
    assert!(matches!(err, CliError::Io(_)));
    assert_eq!(err.exit_code(), 1);
}
