//! End-to-end generation pipeline.
//!
//! Stages run strictly in this order, all drawing from one stream:
//!
//! 1. employee pool
//! 2. campaigns
//! 3. records, grouped by campaign type (leaver, quarterly, special)
//! 4. full shuffle of the record array
//! 5. certification compliance calibration
//! 6. deprovisioning compliance calibration (when termination tracking is on)
//! 7. currency resolution
//!
//! Reordering stages or adding draws between them changes the output of a
//! seeded run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, Result};
use crate::services::calibration::{self, CalibrationReport};
use crate::services::campaign_factory::{Campaign, CampaignFactory};
use crate::services::currency::{self, CurrencyReport};
use crate::services::entity_pool::{Employee, EntityPool};
use crate::services::org_hierarchy::OrgHierarchy;
use crate::services::record_synthesizer::{Record, RecordSynthesizer};
use crate::services::seasonal::SeasonalModel;
use crate::stream::DeterministicStream;
use crate::types::CampaignType;

/// Everything a run produces, handed to the output layer.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedDataset {
    pub records: Vec<Record>,
    pub employees: Vec<Employee>,
    pub campaigns: Vec<Campaign>,
    /// The single "now" every derived field was evaluated against.
    pub evaluated_at: DateTime<Utc>,
    /// Seed of the run, `None` for an entropy-backed run.
    pub seed: Option<i64>,
    pub compliance_calibration: CalibrationReport,
    /// `None` when termination tracking is disabled.
    pub deprovision_calibration: Option<CalibrationReport>,
    pub currency: CurrencyReport,
}

impl GeneratedDataset {
    /// Records whose campaign is of `campaign_type`.
    pub fn records_of(&self, campaign_type: CampaignType) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(move |r| r.campaign_type() == campaign_type)
    }

    /// Records that carry a deprovisioning sub-record.
    pub fn termination_records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| r.deprovisioning.is_some())
    }
}

/// Per-type record quotas summing to `total`.
///
/// Leaver and quarterly quotas are rounded shares; special takes the
/// remainder, saturating at zero.
#[must_use]
pub fn type_quotas(total: usize, config: &GeneratorConfig) -> [(CampaignType, usize); 3] {
    let leaver = share(total, config.campaign_mix.leaver);
    let quarterly = share(total, config.campaign_mix.quarterly).min(total - leaver);
    let special = total - leaver - quarterly;
    [
        (CampaignType::Leaver, leaver),
        (CampaignType::Quarterly, quarterly),
        (CampaignType::Special, special),
    ]
}

fn share(total: usize, rate: f64) -> usize {
    calibration::target_count(total, rate)
}

/// Run the full pipeline for `config`.
pub fn generate(config: &GeneratorConfig) -> Result<GeneratedDataset> {
    config.validate()?;

    let as_of = config.evaluation_instant.unwrap_or_else(Utc::now);
    let mut stream = DeterministicStream::new(config.seed);
    info!(
        records = config.record_count,
        employees = config.employee_count,
        campaigns = config.campaign_count,
        seed = ?config.seed,
        as_of = %as_of,
        "Starting dataset generation"
    );

    let seasonal = SeasonalModel::resolve(&config.trendline);
    let hierarchy = OrgHierarchy::standard();

    let pool = EntityPool::generate(config, &hierarchy, &mut stream);
    info!(employees = pool.len(), "Generated employee pool");

    let campaigns = CampaignFactory::new(config, as_of)?.generate(pool.employees(), &mut stream)?;
    info!(campaigns = campaigns.len(), "Generated campaigns");

    if config.record_count > 0 {
        if pool.is_empty() {
            return Err(GeneratorError::EmptyPool {
                resource: "employee".to_string(),
            });
        }
        if campaigns.is_empty() {
            return Err(GeneratorError::EmptyPool {
                resource: "campaign".to_string(),
            });
        }
    }

    let synthesizer = RecordSynthesizer::new(config, &seasonal, as_of);
    let mut records = Vec::with_capacity(config.record_count);
    for (campaign_type, quota) in type_quotas(config.record_count, config) {
        if quota == 0 {
            continue;
        }
        let typed: Vec<&Campaign> = campaigns
            .iter()
            .filter(|c| c.campaign_type == campaign_type)
            .collect();
        let candidates: Vec<&Campaign> = if typed.is_empty() {
            warn!(
                campaign_type = %campaign_type,
                quota,
                "No campaigns of this type, drawing from all campaigns"
            );
            campaigns.iter().collect()
        } else {
            typed
        };

        for _ in 0..quota {
            let Some(&campaign) = stream.pick(&candidates) else {
                break;
            };
            records.push(synthesizer.synthesize(campaign, pool.employees(), &mut stream)?);
        }
        info!(campaign_type = %campaign_type, records = quota, "Generated records");
    }

    stream.shuffle(&mut records);

    let compliance_calibration =
        calibration::calibrate_compliance(&mut records, config.compliance_rate, &mut stream);

    let deprovision_calibration = if config.termination.enabled {
        Some(calibration::calibrate_deprovisioning(
            &mut records,
            &config.termination,
            &mut stream,
        )?)
    } else {
        None
    };

    let currency = currency::resolve_currency(&mut records);

    info!(
        records = records.len(),
        compliant = compliance_calibration.after,
        draws = stream.draws(),
        "Dataset generation complete"
    );

    Ok(GeneratedDataset {
        records,
        employees: pool.into_employees(),
        campaigns,
        evaluated_at: as_of,
        seed: stream.seed(),
        compliance_calibration,
        deprovision_calibration,
        currency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CampaignMix;
    use chrono::TimeZone;

    fn config(records: usize) -> GeneratorConfig {
        GeneratorConfig {
            record_count: records,
            employee_count: 25,
            campaign_count: 8,
            seed: Some(42),
            evaluation_instant: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_type_quotas_sum_to_total() {
        let config = GeneratorConfig::default();
        for total in [0, 1, 3, 7, 100, 1001] {
            let quotas = type_quotas(total, &config);
            assert_eq!(quotas.iter().map(|(_, n)| n).sum::<usize>(), total);
        }
        assert_eq!(
            type_quotas(100, &config),
            [
                (CampaignType::Leaver, 35),
                (CampaignType::Quarterly, 45),
                (CampaignType::Special, 20)
            ]
        );
    }

    #[test]
    fn test_type_quotas_saturate() {
        let config = GeneratorConfig {
            campaign_mix: CampaignMix {
                leaver: 0.6,
                quarterly: 0.6,
                special: 0.0,
            },
            ..Default::default()
        };
        assert_eq!(
            type_quotas(10, &config),
            [
                (CampaignType::Leaver, 6),
                (CampaignType::Quarterly, 4),
                (CampaignType::Special, 0)
            ]
        );
    }

    #[test]
    fn test_generate_exact_record_count() {
        let dataset = generate(&config(150)).unwrap();
        assert_eq!(dataset.records.len(), 150);
        assert_eq!(dataset.employees.len(), 25);
        assert_eq!(dataset.campaigns.len(), 8);
        assert_eq!(dataset.seed, Some(42));
    }

    #[test]
    fn test_zero_records_with_empty_pools() {
        let config = GeneratorConfig {
            record_count: 0,
            employee_count: 0,
            campaign_count: 0,
            seed: Some(1),
            ..Default::default()
        };
        let dataset = generate(&config).unwrap();
        assert!(dataset.records.is_empty());
    }

    #[test]
    fn test_records_without_employees_fail() {
        let config = GeneratorConfig {
            employee_count: 0,
            ..config(10)
        };
        assert_eq!(
            generate(&config).unwrap_err(),
            GeneratorError::EmptyPool {
                resource: "employee".to_string()
            }
        );
    }

    #[test]
    fn test_records_without_campaigns_fail() {
        let config = GeneratorConfig {
            campaign_count: 0,
            ..config(10)
        };
        assert!(matches!(
            generate(&config),
            Err(GeneratorError::EmptyPool { .. })
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeneratorConfig {
            compliance_rate: 1.5,
            ..config(10)
        };
        assert!(matches!(
            generate(&config),
            Err(GeneratorError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_disabled_termination_skips_calibration() {
        let mut config = config(60);
        config.termination.enabled = false;
        let dataset = generate(&config).unwrap();
        assert!(dataset.deprovision_calibration.is_none());
        assert_eq!(dataset.termination_records().count(), 0);
    }
}
