//! uarsynth - synthetic user access review datasets
//!
//! Generates a reproducible, calibrated access review dataset and writes it
//! as CSV, TSV or JSON together with a statistics report.

use clap::Parser;

use uarsynth_cli::cli::Cli;
use uarsynth_cli::{logging, run};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet);

    match run::execute(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}
