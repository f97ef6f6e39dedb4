//! Command execution.

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::Path;

use chrono::Utc;
use tracing::{info, warn};
use uarsynth::GeneratedDataset;

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use crate::formats::write_records;
use crate::report::{default_stats_path, DatasetStats};

/// Generate a dataset and emit records and statistics as requested by `cli`.
pub fn execute(cli: Cli) -> CliResult<()> {
    let config = cli.load_config()?;
    let dataset = uarsynth::generate(&config)?;
    let report = DatasetStats::collect(&dataset, &config).render();

    if cli.summary_only {
        let mut stdout = io::stdout().lock();
        stdout.write_all(report.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let redirected = match &cli.output {
        Some(path) => {
            write_to_file(&cli, &dataset, path)?;
            true
        }
        None => {
            let stdout = io::stdout();
            let redirected = !stdout.is_terminal();
            write_records(cli.format, &dataset, BufWriter::new(stdout.lock()))?;
            redirected
        }
    };

    if redirected {
        let stats_path = cli
            .stats_file
            .clone()
            .unwrap_or_else(|| default_stats_path(Utc::now()));
        match std::fs::write(&stats_path, &report) {
            Ok(()) => info!(path = %stats_path.display(), "Statistics written"),
            Err(e) => {
                warn!(path = %stats_path.display(), error = %e, "Could not write statistics file");
                eprint!("{report}");
            }
        }
    } else {
        eprint!("{report}");
    }

    Ok(())
}

fn write_to_file(cli: &Cli, dataset: &GeneratedDataset, path: &Path) -> CliResult<()> {
    let file = File::create(path)
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    write_records(cli.format, dataset, BufWriter::new(file))?;
    info!(
        path = %path.display(),
        format = %cli.format,
        records = dataset.records.len(),
        "Records written"
    );
    Ok(())
}
