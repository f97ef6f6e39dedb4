//! uarsynth CLI library
//!
//! Exposes the command modules for integration testing. The binary entry
//! point lives in main.rs.

pub mod cli;
pub mod error;
pub mod formats;
pub mod logging;
pub mod report;
pub mod run;
