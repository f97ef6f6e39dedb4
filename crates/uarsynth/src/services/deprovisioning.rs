//! Termination-to-deprovisioning sub-records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::TerminationConfig;
use crate::dates;
use crate::error::Result;
use crate::services::seasonal::SeasonalModel;
use crate::stream::DeterministicStream;
use crate::types::{CampaignType, DeprovisionSpeed};

/// Chance that a special access review record tracks a termination.
pub const SPECIAL_TRACKING_RATE: f64 = 0.30;

/// First business hour (inclusive) for termination requests.
const BUSINESS_HOUR_START: i64 = 8;
/// Last business hour (exclusive) for termination requests.
const BUSINESS_HOUR_END: i64 = 18;

/// Termination request and the matching access removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deprovisioning {
    pub requested_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    minutes: i64,
    compliant: bool,
}

impl Deprovisioning {
    /// Build a sub-record completing `minutes` after `requested_at`.
    pub fn new(requested_at: DateTime<Utc>, minutes: i64, sla_minutes: i64) -> Result<Self> {
        Ok(Self {
            requested_at,
            completed_at: dates::add_minutes(requested_at, minutes, "deprovision completion")?,
            minutes,
            compliant: minutes <= sla_minutes,
        })
    }

    #[must_use]
    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    /// Whether removal completed within the SLA.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.compliant
    }

    /// Replace the interval, recomputing completion and compliance.
    pub fn reschedule(&mut self, minutes: i64, sla_minutes: i64) -> Result<()> {
        *self = Self::new(self.requested_at, minutes, sla_minutes)?;
        Ok(())
    }
}

/// Map a uniform roll onto a speed bucket using cumulative thresholds.
///
/// A roll past every threshold (splits summing below 1) lands in the slowest bucket.
#[must_use]
pub fn classify_speed(config: &TerminationConfig, roll: f64) -> DeprovisionSpeed {
    let fast = config.fast_percentage;
    let typical = fast + config.typical_percentage;
    let slow = typical + config.slow_percentage;
    if roll < fast {
        DeprovisionSpeed::Fast
    } else if roll < typical {
        DeprovisionSpeed::Typical
    } else if roll < slow {
        DeprovisionSpeed::Slow
    } else {
        DeprovisionSpeed::VerySlow
    }
}

/// Check whether a record of this campaign type should carry a sub-record.
///
/// Draws only for special campaigns.
fn tracks_termination(campaign_type: CampaignType, stream: &mut DeterministicStream) -> bool {
    match campaign_type {
        CampaignType::Leaver => true,
        CampaignType::Special => stream.chance(SPECIAL_TRACKING_RATE),
        CampaignType::Quarterly => false,
    }
}

/// Synthesize the deprovisioning sub-record of one certification.
///
/// Returns `None` without drawing when tracking is disabled.
pub fn synthesize(
    config: &TerminationConfig,
    seasonal: &SeasonalModel,
    campaign_type: CampaignType,
    certification_load: DateTime<Utc>,
    stream: &mut DeterministicStream,
) -> Result<Option<Deprovisioning>> {
    if !config.enabled || !tracks_termination(campaign_type, stream) {
        return Ok(None);
    }

    let hour = stream.int_in(BUSINESS_HOUR_START, BUSINESS_HOUR_END);
    let minute = stream.int_in(0, 60);
    let requested_at = dates::at_time_of_day(certification_load, hour as u32, minute as u32)?;

    let (low, high) = classify_speed(config, stream.next_f64()).minute_range();
    let drawn = stream.int_in(low, high);

    let factor = seasonal.deprovision_factor(requested_at);
    let minutes =
        ((drawn as f64 * factor).round() as i64).clamp(config.min_minutes, config.max_minutes);

    Deprovisioning::new(requested_at, minutes, config.sla_minutes).map(Some)
}
