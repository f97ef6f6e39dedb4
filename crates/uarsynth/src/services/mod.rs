//! Generation services.
//!
//! Each module owns one pipeline stage: the org hierarchy and employee pool,
//! campaigns, records with their deprovisioning sub-records, the seasonal
//! model, calibration, and currency resolution.

pub mod calibration;
pub mod campaign_factory;
pub mod currency;
pub mod deprovisioning;
pub mod entity_pool;
pub mod org_hierarchy;
pub mod record_synthesizer;
pub mod seasonal;

// Re-export commonly used types
pub use calibration::{
    calibrate_compliance, calibrate_deprovisioning, target_count, CalibrationOutcome,
    CalibrationReport,
};
pub use campaign_factory::{Campaign, CampaignFactory};
pub use currency::{resolve_currency, CurrencyReport};
pub use deprovisioning::Deprovisioning;
pub use entity_pool::{Employee, EntityPool};
pub use org_hierarchy::{OrgChain, OrgHierarchy, OrgNode};
pub use record_synthesizer::{evaluate_phase, fingerprint, Record, RecordSynthesizer};
pub use seasonal::{SeasonalModel, MONTH_NAMES};
