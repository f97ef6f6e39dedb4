//! Common test utilities for uarsynth integration tests.
//!
//! Provides configuration builders and checkers for the invariants every
//! generated dataset must satisfy.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use uarsynth::{
    CampaignStatus, CampaignType, CertificationStatus, GeneratedDataset, GeneratorConfig,
    PhaseBySla, Record,
};

static INIT: Once = Once::new();

/// Initialize logging for tests (once).
pub fn init_test_logging() {
    INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::fmt()
                .with_test_writer()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init()
                .ok();
        }
    });
}

/// Fixed evaluation instant shared by the integration tests.
pub fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// A small seeded configuration evaluated at [`as_of`].
pub fn seeded_config(seed: i64, records: usize) -> GeneratorConfig {
    GeneratorConfig {
        record_count: records,
        employee_count: 120,
        campaign_count: 12,
        seed: Some(seed),
        evaluation_instant: Some(as_of()),
        ..Default::default()
    }
}

/// Run the pipeline, panicking on error.
pub fn generate(config: &GeneratorConfig) -> GeneratedDataset {
    init_test_logging();
    uarsynth::generate(config).expect("generation failed")
}

/// Number of certification-compliant records.
pub fn compliant_count(records: &[Record]) -> usize {
    records.iter().filter(|r| r.is_compliant()).count()
}

/// `(tracked, compliant)` counts over records with deprovisioning data.
pub fn deprovision_counts(records: &[Record]) -> (usize, usize) {
    let tracked: Vec<&Record> = records
        .iter()
        .filter(|r| r.deprovisioning.is_some())
        .collect();
    let compliant = tracked
        .iter()
        .filter(|r| r.deprovision_compliance() == Some(true))
        .count();
    (tracked.len(), compliant)
}

/// Assert every field-level invariant of a generated dataset.
pub fn assert_record_invariants(dataset: &GeneratedDataset) {
    let config_min = 30;
    let config_max = 2880;
    for record in &dataset.records {
        let phase = record.phase_by_sla();
        // Only an open certification past its due date is non-compliant.
        assert_eq!(
            record.is_compliant(),
            phase != PhaseBySla::OpenPastSla,
            "phase {phase} on {}",
            record.unique_key
        );

        match record.certification_status {
            CertificationStatus::Closed => {
                assert!(record.certification_end.is_some());
                assert!(matches!(
                    phase,
                    PhaseBySla::CompletedWithinSla | PhaseBySla::CompletedPastSla
                ));
            }
            _ => {
                assert!(record.certification_end.is_none());
                assert!(matches!(
                    phase,
                    PhaseBySla::OpenWithinSla | PhaseBySla::OpenPastSla
                ));
            }
        }

        match record.campaign_type() {
            CampaignType::Quarterly => assert!(record.deprovisioning.is_none()),
            CampaignType::Leaver => assert!(record.deprovisioning.is_some()),
            CampaignType::Special => {}
        }
        match &record.deprovisioning {
            Some(d) => {
                assert!((config_min..=config_max).contains(&d.minutes()));
                assert_eq!(
                    d.completed_at - d.requested_at,
                    chrono::Duration::minutes(d.minutes())
                );
            }
            None => assert_eq!(record.deprovision_compliance(), None),
        }

        assert_eq!(record.unique_key.len(), 64);
        assert!(record
            .unique_key
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}

/// Assert at most one current record per `(employee, campaign)` group, and
/// only for active campaigns.
pub fn assert_currency(records: &[Record]) {
    let mut current: HashMap<(i64, &str), usize> = HashMap::new();
    for record in records.iter().filter(|r| r.is_current) {
        assert_eq!(record.campaign.status, CampaignStatus::Active);
        *current
            .entry((record.employee.emp_id, record.campaign.id.as_str()))
            .or_default() += 1;
    }
    assert!(current.values().all(|&n| n == 1));
}
