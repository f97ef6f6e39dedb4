//! Deterministic synthesis of user access review (UAR) audit records.
//!
//! This crate generates a reproducible population of access review
//! certifications for exercising compliance reporting pipelines, then
//! calibrates it so that aggregate rates match configured targets exactly
//! while every record stays internally consistent.
//!
//! # Features
//!
//! - Seeded Park-Miller stream driving every random draw of a run
//! - Static six-level org hierarchy with arena-indexed nodes
//! - Leaver, quarterly and special campaigns with status drift
//! - Reviewer assignment, SLA due dates and phase-by-SLA evaluation
//! - Termination-to-deprovisioning sub-records with seasonal slowdowns
//! - Unbiased post-generation calibration of both compliance rates
//! - Current-record resolution per employee and campaign
//!
//! # Pipeline
//!
//! [`generate`] runs every stage against one evaluation instant and one
//! [`DeterministicStream`]:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use uarsynth::{generate, GeneratorConfig};
//!
//! let config = GeneratorConfig {
//!     record_count: 200,
//!     employee_count: 40,
//!     campaign_count: 6,
//!     seed: Some(12345),
//!     evaluation_instant: Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()),
//!     ..Default::default()
//! };
//!
//! let dataset = generate(&config).unwrap();
//! assert_eq!(dataset.records.len(), 200);
//! assert_eq!(dataset.compliance_calibration.target, 186);
//! ```

pub mod config;
pub mod dates;
pub mod error;
pub mod pipeline;
pub mod sample_data;
pub mod services;
pub mod stream;
pub mod types;

// Re-export commonly used types
pub use config::{
    CampaignMix, GeneratorConfig, IdentityConfig, ReviewerConfig, SlaConfig, StatusDistribution,
    TerminationConfig, TrendlineConfig,
};
pub use error::{GeneratorError, Result};
pub use pipeline::{generate, type_quotas, GeneratedDataset};
pub use stream::DeterministicStream;
pub use types::{
    CampaignStatus, CampaignType, CertificationStatus, ComplianceStatus, DeprovisionSpeed,
    PhaseBySla, ReviewerType,
};

// Re-export service types
pub use services::{
    CalibrationOutcome, CalibrationReport, Campaign, CurrencyReport, Deprovisioning, Employee,
    OrgChain, Record, SeasonalModel, MONTH_NAMES,
};
