//! CLI error types and exit codes

use thiserror::Error;
use uarsynth::GeneratorError;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: Configuration, I/O or serialization error
/// - 4: Validation error (including unusable generator settings)
/// - 5: Generation failed at runtime
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generation failed: {0}")]
    Generation(#[from] GeneratorError),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid input: {0}")]
    Validation(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 1,
            CliError::Io(_) => 1,
            CliError::Serialization(_) => 1,
            CliError::Validation(_) => 4,
            CliError::Generation(e) => match e {
                GeneratorError::InvalidConfig { .. } | GeneratorError::EmptyPool { .. } => 4,
                GeneratorError::DateOutOfRange { .. } => 5,
            },
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::Generation(GeneratorError::EmptyPool { .. }) => {
                Some("Use --employees and --campaigns values above zero, or --records 0.")
            }
            CliError::Generation(GeneratorError::InvalidConfig { .. }) => {
                Some("Rates must lie within [0, 1]; check the configuration file and flags.")
            }
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(format!("JSON error: {}", e))
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Serialization(format!("CSV error: {}", e))
    }
}
