//! Dataset serialization
//!
//! This module renders generated records in the supported formats:
//! - CSV (default, titled headers in export column order)
//! - TSV (same columns, tab separated)
//! - JSON (pretty-printed record array)
//!
//! Column values that depend on "now" are computed against the run's
//! evaluation instant, never a fresh clock read.

use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use std::io::Write;
use uarsynth::GeneratedDataset;

use crate::error::CliResult;

pub mod csv;
pub mod json;
pub mod tsv;

/// Output format for generated records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values with titled headers
    #[default]
    Csv,
    /// Tab-separated values with titled headers
    Tsv,
    /// JSON array of records, pretty-printed
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Write every record of `dataset` to `writer` in `format`.
pub fn write_records<W: Write>(
    format: OutputFormat,
    dataset: &GeneratedDataset,
    writer: W,
) -> CliResult<()> {
    match format {
        OutputFormat::Csv => csv::write_csv(&dataset.records, dataset.evaluated_at, writer),
        OutputFormat::Tsv => tsv::write_tsv(&dataset.records, dataset.evaluated_at, writer),
        OutputFormat::Json => json::write_json(&dataset.records, writer),
    }
}

// ============================================================================
// Value formatting
// ============================================================================

/// `M/D/YYYY h:mm:ss AM/PM`, e.g. `10/3/2025 12:00:00 AM`.
pub fn long_datetime(instant: DateTime<Utc>) -> String {
    instant.format("%-m/%-d/%Y %-I:%M:%S %p").to_string()
}

/// `M/D/YY`, e.g. `10/3/25`.
pub fn short_date(instant: DateTime<Utc>) -> String {
    instant.format("%-m/%-d/%y").to_string()
}

/// `MM/DD/YYYY` of a trendline month start.
pub fn tl_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// `TRUE` / `FALSE`.
pub fn flag(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// Whole days from `as_of` until `due`, rounding half-days up.
pub fn due_in_days(due: DateTime<Utc>, as_of: DateTime<Utc>) -> i64 {
    let days = (due - as_of).num_milliseconds() as f64 / 86_400_000.0;
    (days + 0.5).floor() as i64
}

/// Band of days until the due date.
pub fn access_grouping(due_in_days: i64) -> &'static str {
    match due_in_days {
        d if d < 0 => "Past Due",
        0..=7 => "0-7 Days",
        8..=14 => "8-14 Days",
        15..=28 => "15-28 Days",
        _ => "29+ Days",
    }
}
