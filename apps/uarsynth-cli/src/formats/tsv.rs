//! Tab-separated export, sharing the CSV column layout.

use chrono::{DateTime, Utc};
use std::io::Write;
use uarsynth::Record;

use super::csv::write_delimited;
use crate::error::CliResult;

/// Export records as TSV.
pub fn write_tsv<W: Write>(records: &[Record], as_of: DateTime<Utc>, writer: W) -> CliResult<()> {
    write_delimited(records, as_of, writer, b'\t')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::csv::COLUMN_NAMES;
    use chrono::TimeZone;
    use uarsynth::{generate, GeneratorConfig};

    #[test]
    fn test_tab_separated_rows() {
        let data = generate(&GeneratorConfig {
            record_count: 12,
            employee_count: 6,
            campaign_count: 3,
            seed: Some(3),
            evaluation_instant: Some(Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        })
        .unwrap();

        let mut buffer = Vec::new();
        write_tsv(&data.records, data.evaluated_at, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let mut lines = output.lines();
        assert_eq!(lines.next().unwrap(), COLUMN_NAMES.join("\t"));

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_reader(output.as_bytes());
        let rows: Vec<_> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|row| row.len() == COLUMN_NAMES.len()));
    }
}
