//! Seasonal multipliers for compliance and deprovisioning speed.
//!
//! Both factors follow the same precedence: disabled trendlines yield 1.0,
//! a well-formed 12-entry table wins next, and otherwise an automatic
//! pattern is computed from the trendline settings.

use chrono::{DateTime, Datelike, Utc};
use std::f64::consts::PI;
use tracing::warn;

use crate::config::TrendlineConfig;

/// Zero-based months in which deprovisioning slows down.
const BUSY_MONTHS: [u32; 4] = [5, 6, 10, 11];
/// Zero-based months in which deprovisioning speeds up.
const EFFICIENT_MONTHS: [u32; 4] = [0, 1, 2, 3];

/// Month abbreviations, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Seasonal model resolved once from [`TrendlineConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalModel {
    enabled: bool,
    peak_month: u32,
    compliance_variance: f64,
    deprovision_impact: f64,
    compliance_table: Option<[f64; 12]>,
    deprovision_table: Option<[f64; 12]>,
}

impl SeasonalModel {
    /// Resolve the model, warning once for each malformed monthly table.
    pub fn resolve(config: &TrendlineConfig) -> Self {
        Self {
            enabled: config.enabled,
            peak_month: config.peak_month % 12,
            compliance_variance: config.compliance_variance,
            deprovision_impact: config.deprovision_seasonal_impact,
            compliance_table: monthly_table(
                "monthly_compliance_weights",
                config.monthly_compliance_weights.as_deref(),
            ),
            deprovision_table: monthly_table(
                "monthly_deprovision_weights",
                config.monthly_deprovision_weights.as_deref(),
            ),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Check if a 12-entry compliance table is in effect.
    #[must_use]
    pub fn uses_custom_compliance(&self) -> bool {
        self.compliance_table.is_some()
    }

    /// Check if a 12-entry deprovisioning table is in effect.
    #[must_use]
    pub fn uses_custom_deprovision(&self) -> bool {
        self.deprovision_table.is_some()
    }

    #[must_use]
    pub fn compliance_table(&self) -> Option<&[f64; 12]> {
        self.compliance_table.as_ref()
    }

    #[must_use]
    pub fn deprovision_table(&self) -> Option<&[f64; 12]> {
        self.deprovision_table.as_ref()
    }

    /// Compliance multiplier for the month of `date`.
    #[must_use]
    pub fn compliance_factor(&self, date: DateTime<Utc>) -> f64 {
        self.compliance_factor_for_month(date.month0())
    }

    /// Compliance multiplier for a zero-based month.
    ///
    /// The automatic curve is a cosine peaking at `peak_month`, spanning
    /// `[1 - variance, 1 + variance]`.
    #[must_use]
    pub fn compliance_factor_for_month(&self, month0: u32) -> f64 {
        if !self.enabled {
            return 1.0;
        }
        let month0 = month0 % 12;
        if let Some(table) = &self.compliance_table {
            return table[month0 as usize];
        }
        let position = f64::from((month0 + 12 - self.peak_month) % 12);
        let radians = position / 12.0 * 2.0 * PI;
        let seasonal = (radians.cos() + 1.0) / 2.0;
        1.0 + self.compliance_variance * (seasonal * 2.0 - 1.0)
    }

    /// Deprovisioning slowdown multiplier for the month of `date`.
    #[must_use]
    pub fn deprovision_factor(&self, date: DateTime<Utc>) -> f64 {
        self.deprovision_factor_for_month(date.month0())
    }

    /// Deprovisioning slowdown multiplier for a zero-based month.
    #[must_use]
    pub fn deprovision_factor_for_month(&self, month0: u32) -> f64 {
        if !self.enabled {
            return 1.0;
        }
        let month0 = month0 % 12;
        if let Some(table) = &self.deprovision_table {
            return table[month0 as usize];
        }
        if BUSY_MONTHS.contains(&month0) {
            1.0 + self.deprovision_impact * 0.7
        } else if EFFICIENT_MONTHS.contains(&month0) {
            1.0 - self.deprovision_impact * 0.5
        } else {
            let variation = (f64::from(month0) / 12.0 * 2.0 * PI).sin() * 0.15;
            1.0 + variation * self.deprovision_impact
        }
    }
}

fn monthly_table(name: &str, weights: Option<&[f64]>) -> Option<[f64; 12]> {
    let weights = weights?;
    match <[f64; 12]>::try_from(weights) {
        Ok(table) => Some(table),
        Err(_) => {
            warn!(
                table = name,
                entries = weights.len(),
                "Monthly weight table must have exactly 12 values, using automatic pattern"
            );
            None
        }
    }
}
