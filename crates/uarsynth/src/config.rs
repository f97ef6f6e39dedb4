//! Generator configuration loading and types.
//!
//! A [`GeneratorConfig`] is built once (from defaults, a YAML document, or
//! both) and then passed by reference into every stage of the pipeline.
//! Nothing downstream mutates it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{GeneratorError, Result};
use crate::types::CampaignType;

/// Default compliance multipliers per month, January first.
pub const DEFAULT_MONTHLY_COMPLIANCE_WEIGHTS: [f64; 12] = [
    1.08, 1.12, 1.15, 1.10, 1.02, 0.95, 0.88, 0.92, 1.00, 1.05, 0.98, 0.82,
];

/// Default deprovisioning slowdown multipliers per month, January first.
pub const DEFAULT_MONTHLY_DEPROVISION_WEIGHTS: [f64; 12] = [
    0.85, 0.80, 0.75, 0.90, 1.00, 1.15, 1.35, 1.25, 1.05, 0.95, 1.20, 1.45,
];

/// Root generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_record_count")]
    pub record_count: usize,
    #[serde(default = "default_employee_count")]
    pub employee_count: usize,
    #[serde(default = "default_campaign_count")]
    pub campaign_count: usize,
    /// Trailing window, in days before the evaluation instant, for campaign starts.
    #[serde(default = "default_date_range_days")]
    pub date_range_days: i64,
    /// Target share of compliant records after calibration.
    #[serde(default = "default_compliance_rate")]
    pub compliance_rate: f64,
    /// Seed for a reproducible run. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<i64>,
    /// The single "now" of a run. `None` reads the clock once at pipeline start.
    #[serde(default)]
    pub evaluation_instant: Option<DateTime<Utc>>,
    #[serde(default)]
    pub campaign_mix: CampaignMix,
    #[serde(default)]
    pub status_distribution: StatusDistribution,
    #[serde(default)]
    pub reviewers: ReviewerConfig,
    #[serde(default)]
    pub sla: SlaConfig,
    #[serde(default)]
    pub termination: TerminationConfig,
    #[serde(default)]
    pub trendline: TrendlineConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
}

fn default_record_count() -> usize {
    30_000
}

fn default_employee_count() -> usize {
    5_000
}

fn default_campaign_count() -> usize {
    40
}

fn default_date_range_days() -> i64 {
    360
}

fn default_compliance_rate() -> f64 {
    0.93
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            record_count: default_record_count(),
            employee_count: default_employee_count(),
            campaign_count: default_campaign_count(),
            date_range_days: default_date_range_days(),
            compliance_rate: default_compliance_rate(),
            seed: None,
            evaluation_instant: None,
            campaign_mix: CampaignMix::default(),
            status_distribution: StatusDistribution::default(),
            reviewers: ReviewerConfig::default(),
            sla: SlaConfig::default(),
            termination: TerminationConfig::default(),
            trendline: TrendlineConfig::default(),
            identity: IdentityConfig::default(),
        }
    }
}

/// Weighted split of campaign types. Expected to sum to 1; not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignMix {
    pub leaver: f64,
    pub quarterly: f64,
    pub special: f64,
}

impl Default for CampaignMix {
    fn default() -> Self {
        Self {
            leaver: 0.35,
            quarterly: 0.45,
            special: 0.20,
        }
    }
}

impl CampaignMix {
    /// Map a uniform roll onto a campaign type using cumulative thresholds.
    #[must_use]
    pub fn classify(&self, roll: f64) -> CampaignType {
        if roll < self.leaver {
            CampaignType::Leaver
        } else if roll < self.leaver + self.quarterly {
            CampaignType::Quarterly
        } else {
            CampaignType::Special
        }
    }
}

/// Weighted split of certification statuses. Expected to sum to 1; not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusDistribution {
    pub closed: f64,
    pub new: f64,
    pub in_progress: f64,
}

impl Default for StatusDistribution {
    fn default() -> Self {
        Self {
            closed: 0.75,
            new: 0.15,
            in_progress: 0.10,
        }
    }
}

/// Reviewer assignment rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewerConfig {
    pub admin_percentage: f64,
    pub reassignment_percentage: f64,
    pub manager_review_percentage: f64,
}

impl Default for ReviewerConfig {
    fn default() -> Self {
        Self {
            admin_percentage: 0.15,
            reassignment_percentage: 0.08,
            manager_review_percentage: 0.15,
        }
    }
}

/// Certification SLA settings, in days from certification start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlaConfig {
    pub min_days: i64,
    pub max_days: i64,
    pub typical_days: i64,
    pub leaver_days: i64,
    pub special_days: i64,
    pub quarterly_days: i64,
}

impl Default for SlaConfig {
    fn default() -> Self {
        Self {
            min_days: 14,
            max_days: 45,
            typical_days: 30,
            leaver_days: 7,
            special_days: 21,
            quarterly_days: 35,
        }
    }
}

impl SlaConfig {
    /// Base SLA days for a campaign type, before jitter and clamping.
    #[must_use]
    pub fn days_for(&self, campaign_type: CampaignType) -> i64 {
        match campaign_type {
            CampaignType::Leaver => self.leaver_days,
            CampaignType::Special => self.special_days,
            CampaignType::Quarterly => self.quarterly_days,
        }
    }
}

/// Termination tracking and deprovisioning settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminationConfig {
    pub enabled: bool,
    pub min_minutes: i64,
    pub max_minutes: i64,
    pub fast_percentage: f64,
    pub typical_percentage: f64,
    pub slow_percentage: f64,
    pub very_slow_percentage: f64,
    /// A deprovisioning is compliant when it completes within this many minutes.
    pub sla_minutes: i64,
    /// Target share of SLA-compliant deprovisionings after calibration.
    pub compliance_rate: f64,
}

impl Default for TerminationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_minutes: 30,
            max_minutes: 2880,
            fast_percentage: 0.20,
            typical_percentage: 0.60,
            slow_percentage: 0.15,
            very_slow_percentage: 0.05,
            sla_minutes: 1440,
            compliance_rate: 0.91,
        }
    }
}

/// Seasonal trendline settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendlineConfig {
    pub enabled: bool,
    /// Zero-based month (0 = January) of peak compliance.
    pub peak_month: u32,
    /// Zero-based month of lowest compliance.
    pub low_month: u32,
    pub compliance_variance: f64,
    pub deprovision_seasonal_impact: f64,
    /// Explicit per-month compliance multipliers. Must hold 12 entries to take effect.
    pub monthly_compliance_weights: Option<Vec<f64>>,
    /// Explicit per-month deprovisioning multipliers. Must hold 12 entries to take effect.
    pub monthly_deprovision_weights: Option<Vec<f64>>,
}

impl Default for TrendlineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            peak_month: 2,
            low_month: 11,
            compliance_variance: 0.15,
            deprovision_seasonal_impact: 0.30,
            monthly_compliance_weights: Some(DEFAULT_MONTHLY_COMPLIANCE_WEIGHTS.to_vec()),
            monthly_deprovision_weights: Some(DEFAULT_MONTHLY_DEPROVISION_WEIGHTS.to_vec()),
        }
    }
}

/// Organization identity used when deriving names and addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub company_name: String,
    /// Suffix appended to `first.last`, including the `@`.
    pub email_domain: String,
    pub admin_reviewer: String,
    pub admin_email: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            company_name: "TechCorp Industries".to_string(),
            email_domain: "@techcorp.com".to_string(),
            admin_reviewer: "techcorp_admin".to_string(),
            admin_email: "security_infosec_data@techcorp.com".to_string(),
        }
    }
}

impl IdentityConfig {
    /// Derive `first.last@domain` from a display name.
    ///
    /// Uses the first two whitespace-separated parts; a single-part name
    /// yields `first.@domain`.
    #[must_use]
    pub fn email_for(&self, full_name: &str) -> String {
        let mut parts = full_name.split_whitespace();
        let first = parts.next().unwrap_or_default().to_lowercase();
        let last = parts.next().unwrap_or_default().to_lowercase();
        format!("{first}.{last}{}", self.email_domain)
    }

    /// Derive the `first.last` username from a name pair.
    #[must_use]
    pub fn username_for(first_name: &str, last_name: &str) -> String {
        format!("{}.{}", first_name.to_lowercase(), last_name.to_lowercase())
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            GeneratorError::invalid_config(
                path.as_ref().display().to_string(),
                format!("Failed to read config file: {e}"),
            )
        })?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string. Missing keys take their defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| {
            GeneratorError::invalid_config("yaml", format!("Failed to parse config: {e}"))
        })
    }

    /// Basic shape checks.
    ///
    /// Rates must lie in `[0, 1]`, bounds must be ordered and months must be
    /// valid indices. Whether weighted splits sum to 1 is left to the caller.
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("compliance_rate", self.compliance_rate),
            ("campaign_mix.leaver", self.campaign_mix.leaver),
            ("campaign_mix.quarterly", self.campaign_mix.quarterly),
            ("campaign_mix.special", self.campaign_mix.special),
            ("status_distribution.closed", self.status_distribution.closed),
            ("status_distribution.new", self.status_distribution.new),
            ("status_distribution.in_progress", self.status_distribution.in_progress),
            ("reviewers.admin_percentage", self.reviewers.admin_percentage),
            ("reviewers.reassignment_percentage", self.reviewers.reassignment_percentage),
            ("reviewers.manager_review_percentage", self.reviewers.manager_review_percentage),
            ("termination.fast_percentage", self.termination.fast_percentage),
            ("termination.typical_percentage", self.termination.typical_percentage),
            ("termination.slow_percentage", self.termination.slow_percentage),
            ("termination.very_slow_percentage", self.termination.very_slow_percentage),
            ("termination.compliance_rate", self.termination.compliance_rate),
        ];
        for (field, value) in rates {
            if !(0.0..=1.0).contains(&value) {
                return Err(GeneratorError::invalid_config(
                    field,
                    format!("must be within [0, 1], got {value}"),
                ));
            }
        }

        if self.date_range_days < 0 {
            return Err(GeneratorError::invalid_config(
                "date_range_days",
                "must not be negative",
            ));
        }

        if self.sla.min_days > self.sla.max_days {
            return Err(GeneratorError::invalid_config(
                "sla",
                format!(
                    "min_days ({}) exceeds max_days ({})",
                    self.sla.min_days, self.sla.max_days
                ),
            ));
        }

        let term = &self.termination;
        if !(term.min_minutes <= term.sla_minutes && term.sla_minutes <= term.max_minutes) {
            return Err(GeneratorError::invalid_config(
                "termination",
                format!(
                    "expected min_minutes <= sla_minutes <= max_minutes, got {} / {} / {}",
                    term.min_minutes, term.sla_minutes, term.max_minutes
                ),
            ));
        }

        for (field, month) in [
            ("trendline.peak_month", self.trendline.peak_month),
            ("trendline.low_month", self.trendline.low_month),
        ] {
            if month >= 12 {
                return Err(GeneratorError::invalid_config(
                    field,
                    format!("month index must be 0-11, got {month}"),
                ));
            }
        }

        Ok(())
    }
}
