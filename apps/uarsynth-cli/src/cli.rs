//! Command-line arguments.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use uarsynth::GeneratorConfig;

use crate::error::{CliError, CliResult};
use crate::formats::OutputFormat;

/// Generate a calibrated user access review dataset
#[derive(Debug, Clone, Parser)]
#[command(name = "uarsynth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML configuration file; flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for a reproducible dataset
    #[arg(long)]
    pub seed: Option<i64>,

    /// Number of records to generate
    #[arg(long)]
    pub records: Option<usize>,

    /// Number of employees in the pool
    #[arg(long)]
    pub employees: Option<usize>,

    /// Number of campaigns
    #[arg(long)]
    pub campaigns: Option<usize>,

    /// Target certification compliance rate, within [0, 1]
    #[arg(long)]
    pub compliance_rate: Option<f64>,

    /// Evaluation instant (RFC 3339); defaults to the current time
    #[arg(long, value_name = "RFC3339")]
    pub as_of: Option<DateTime<Utc>>,

    /// Output format for the records
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Write records to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Companion statistics file (default: uar_stats_<timestamp>.txt)
    #[arg(long, value_name = "FILE")]
    pub stats_file: Option<PathBuf>,

    /// Print the statistics report only, without records
    #[arg(long)]
    pub summary_only: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Build the generator configuration: file (or defaults), then flag overrides.
    pub fn load_config(&self) -> CliResult<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)
                .map_err(|e| CliError::Config(e.to_string()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(records) = self.records {
            config.record_count = records;
        }
        if let Some(employees) = self.employees {
            config.employee_count = employees;
        }
        if let Some(campaigns) = self.campaigns {
            config.campaign_count = campaigns;
        }
        if let Some(rate) = self.compliance_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err(CliError::Validation(format!(
                    "--compliance-rate must be within [0, 1], got {rate}"
                )));
            }
            config.compliance_rate = rate;
        }
        if let Some(as_of) = self.as_of {
            config.evaluation_instant = Some(as_of);
        }

        Ok(config)
    }
}
