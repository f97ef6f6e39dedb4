//! Current-record resolution.
//!
//! Records are grouped by `(employee id, campaign id)`. The most recent
//! record of each group (by certification start) is marked current, but only
//! when its campaign is reported `ACTIVE`. This pass draws nothing.

use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use crate::services::record_synthesizer::Record;

/// Summary of a currency pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyReport {
    /// Distinct `(employee, campaign)` groups.
    pub groups: usize,
    /// Records marked current.
    pub current: usize,
}

/// Reset every `is_current` flag, then mark at most one record per group.
pub fn resolve_currency(records: &mut [Record]) -> CurrencyReport {
    let mut groups: HashMap<(i64, &str), usize> = HashMap::new();
    let mut order: Vec<(i64, &str)> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let key = (record.employee.emp_id, record.campaign.id.as_str());
        match groups.get_mut(&key) {
            Some(latest) => {
                // Ties keep the earlier record, as a stable descending sort would.
                if record.certification_start > records[*latest].certification_start {
                    *latest = index;
                }
            }
            None => {
                groups.insert(key, index);
                order.push(key);
            }
        }
    }

    let winners: Vec<usize> = order
        .iter()
        .filter_map(|key| groups.get(key).copied())
        .filter(|&index| records[index].is_active_campaign())
        .collect();
    let report = CurrencyReport {
        groups: order.len(),
        current: winners.len(),
    };

    for record in records.iter_mut() {
        record.is_current = false;
    }
    for index in winners {
        records[index].is_current = true;
    }

    info!(
        groups = report.groups,
        current = report.current,
        "Resolved current records"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::campaign_factory::Campaign;
    use crate::services::entity_pool::Employee;
    use crate::services::org_hierarchy::OrgChain;
    use crate::types::{CampaignStatus, CampaignType, CertificationStatus, PhaseBySla, ReviewerType};
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn record(
        emp_id: i64,
        campaign_id: &str,
        status: CampaignStatus,
        start_offset_days: i64,
    ) -> Record {
        let start = base() + Duration::days(start_offset_days);
        let mut record = Record {
            unique_key: format!("{emp_id}-{campaign_id}-{start_offset_days}"),
            campaign: Campaign {
                id: campaign_id.to_string(),
                name: "Quarterly Access Review".into(),
                campaign_type: CampaignType::Quarterly,
                status,
                created_at: base(),
                load_date: base(),
                start_date: base(),
                end_date: base() + Duration::days(60),
            },
            employee: Employee {
                emp_id,
                first_name: "Sam".into(),
                last_name: "Lee".into(),
                name: "Sam Lee".into(),
                email: "sam.lee@techcorp.com".into(),
                username: "sam.lee".into(),
                job_title: "Data Analyst".into(),
                manager_name: "Olivia Lee".into(),
                manager_email: "olivia.lee@techcorp.com".into(),
                manager_emp_id: 200_000,
                org: OrgChain::default(),
            },
            uar_source: "sailpoint_identitynow".into(),
            certification_id: "f".repeat(32),
            certification_name: "Identity Access Review for Sam Lee".into(),
            certification_status: CertificationStatus::New,
            certification_start: start,
            certification_end: None,
            certification_due: start + Duration::days(35),
            certification_load: base(),
            sla_days: 35,
            total_certifications: 50,
            completed_certifications: 46,
            reviewer_type: ReviewerType::SelfReview,
            reviewer_name: "Sam Lee".into(),
            reviewer_email: "sam.lee@techcorp.com".into(),
            tl_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            is_current: true,
            deprovisioning: None,
            phase_by_sla: PhaseBySla::OpenWithinSla,
            compliance_status: PhaseBySla::OpenWithinSla.compliance(),
        };
        record.set_phase(PhaseBySla::OpenWithinSla);
        record
    }

    #[test]
    fn test_latest_active_record_is_current() {
        let mut records = vec![
            record(1, "CAMP-A", CampaignStatus::Active, 1),
            record(1, "CAMP-A", CampaignStatus::Active, 5),
            record(1, "CAMP-A", CampaignStatus::Active, 3),
        ];
        let report = resolve_currency(&mut records);
        assert_eq!(report, CurrencyReport { groups: 1, current: 1 });
        assert!(!records[0].is_current);
        assert!(records[1].is_current);
        assert!(!records[2].is_current);
    }

    #[test]
    fn test_inactive_campaign_has_no_current() {
        let mut records = vec![
            record(1, "CAMP-B", CampaignStatus::Completed, 1),
            record(1, "CAMP-B", CampaignStatus::Completed, 2),
            record(2, "CAMP-C", CampaignStatus::Staged, 2),
        ];
        let report = resolve_currency(&mut records);
        assert_eq!(report.groups, 2);
        assert_eq!(report.current, 0);
        assert!(records.iter().all(|r| !r.is_current));
    }

    #[test]
    fn test_groups_are_independent() {
        let mut records = vec![
            record(1, "CAMP-A", CampaignStatus::Active, 1),
            record(2, "CAMP-A", CampaignStatus::Active, 1),
            record(1, "CAMP-D", CampaignStatus::Active, 1),
            record(1, "CAMP-A", CampaignStatus::Active, 0),
        ];
        let report = resolve_currency(&mut records);
        assert_eq!(report, CurrencyReport { groups: 3, current: 3 });
        assert!(records[0].is_current);
        assert!(records[1].is_current);
        assert!(records[2].is_current);
        assert!(!records[3].is_current);
    }

    #[test]
    fn test_tie_keeps_first_record() {
        let mut records = vec![
            record(7, "CAMP-E", CampaignStatus::Active, 4),
            record(7, "CAMP-E", CampaignStatus::Active, 4),
        ];
        resolve_currency(&mut records);
        assert!(records[0].is_current);
        assert!(!records[1].is_current);
    }

    #[test]
    fn test_empty_population() {
        let mut records: Vec<Record> = Vec::new();
        assert_eq!(
            resolve_currency(&mut records),
            CurrencyReport { groups: 0, current: 0 }
        );
    }
}
