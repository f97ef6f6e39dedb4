//! Error Types
//!
//! This module provides the error taxonomy for dataset generation.
//!
//! Only conditions that make a run meaningless are errors. Malformed monthly
//! weight tables and infeasible calibration targets are reported through
//! `tracing` warnings and the calibration reports instead.
//!
//! # Example
//!
//! ```
//! use uarsynth::{GeneratorError, Result};
//!
//! fn require_employees(count: usize) -> Result<()> {
//!     if count == 0 {
//!         return Err(GeneratorError::EmptyPool {
//!             resource: "employee".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_employees(0).is_err());
//! ```

use serde::Serialize;
use thiserror::Error;

/// Error type for the generation pipeline.
///
/// # Variants
///
/// - `InvalidConfig` - A configuration value has an unusable shape
/// - `EmptyPool` - Records were requested but a required pool is empty
/// - `DateOutOfRange` - A date computation left chrono's representable range
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorError {
    /// A configuration value failed a shape check.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// The configuration field that failed validation
        field: String,
        /// Description of the problem
        message: String,
    },

    /// A pool the pipeline draws from is empty.
    ///
    /// Raised when records are requested with zero employees or zero campaigns.
    #[error("Cannot draw from an empty {resource} pool")]
    EmptyPool {
        /// The kind of pool (e.g., "employee", "campaign")
        resource: String,
    },

    /// A date computation overflowed.
    #[error("Date out of range while computing {context}")]
    DateOutOfRange {
        /// What was being computed
        context: String,
    },
}

impl GeneratorError {
    /// Shorthand for an `InvalidConfig` error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a `DateOutOfRange` error.
    pub fn date_out_of_range(context: impl Into<String>) -> Self {
        Self::DateOutOfRange {
            context: context.into(),
        }
    }
}

/// Type alias for Results using `GeneratorError`.
pub type Result<T> = std::result::Result<T, GeneratorError>;
