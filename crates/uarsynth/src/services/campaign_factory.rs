//! Review campaign synthesis.
//!
//! Each campaign consumes the stream in a fixed order: type roll, name
//! template, type-specific placeholders, the four lifecycle dates, the id,
//! and finally the status-noise roll.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::dates;
use crate::error::Result;
use crate::sample_data::{
    self, DEPARTMENTS, GROUPS, LEAVER_TEMPLATES, QUARTERLY_TEMPLATES, SPECIAL_TEMPLATES,
};
use crate::services::entity_pool::Employee;
use crate::stream::DeterministicStream;
use crate::types::{CampaignStatus, CampaignType};

const CAMPAIGN_ID_PREFIX: &str = "CAMP-";
const CAMPAIGN_ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const CAMPAIGN_ID_LEN: usize = 8;

/// Chance that a completed campaign is still reported active.
pub const STALE_ACTIVE_RATE: f64 = 0.10;
/// Chance that a running campaign is reported staged.
pub const UNLAUNCHED_STAGED_RATE: f64 = 0.05;

/// A review campaign. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub campaign_type: CampaignType,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
    pub load_date: DateTime<Utc>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Campaign {
    /// Check if the campaign is reported active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Status implied by where `now` falls relative to `[start, end]`.
#[must_use]
pub fn status_at(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> CampaignStatus {
    if now < start {
        CampaignStatus::Staged
    } else if now <= end {
        CampaignStatus::Active
    } else {
        CampaignStatus::Completed
    }
}

/// Apply reporting drift to a date-derived status.
#[must_use]
pub fn apply_status_noise(status: CampaignStatus, roll: f64) -> CampaignStatus {
    match status {
        CampaignStatus::Completed if roll < STALE_ACTIVE_RATE => CampaignStatus::Active,
        CampaignStatus::Active if roll < UNLAUNCHED_STAGED_RATE => CampaignStatus::Staged,
        other => other,
    }
}

/// Builds the campaigns of a run.
pub struct CampaignFactory<'a> {
    config: &'a GeneratorConfig,
    now: DateTime<Utc>,
    window_start: DateTime<Utc>,
}

impl<'a> CampaignFactory<'a> {
    /// Create a factory evaluating statuses at `now`.
    pub fn new(config: &'a GeneratorConfig, now: DateTime<Utc>) -> Result<Self> {
        let window_start = dates::add_days(now, -config.date_range_days, "campaign window start")?;
        Ok(Self {
            config,
            now,
            window_start,
        })
    }

    /// Generate `config.campaign_count` campaigns.
    pub fn generate(
        &self,
        employees: &[Employee],
        stream: &mut DeterministicStream,
    ) -> Result<Vec<Campaign>> {
        (0..self.config.campaign_count)
            .map(|_| self.synthesize(employees, stream))
            .collect()
    }

    fn synthesize(
        &self,
        employees: &[Employee],
        stream: &mut DeterministicStream,
    ) -> Result<Campaign> {
        let campaign_type = self.config.campaign_mix.classify(stream.next_f64());
        let name = self.campaign_name(campaign_type, employees, stream);

        let start_date = stream.date_between(self.window_start, self.now);
        let end_date = stream.date_between(
            dates::add_days(start_date, 30, "campaign end lower bound")?,
            dates::add_days(start_date, 90, "campaign end upper bound")?,
        );
        let created_at = stream.date_between(
            dates::add_days(start_date, -7, "campaign creation")?,
            start_date,
        );
        let load_date = stream.date_between(created_at, start_date);

        let id = campaign_id(stream);

        let status = apply_status_noise(
            status_at(self.now, start_date, end_date),
            stream.next_f64(),
        );

        Ok(Campaign {
            id,
            name,
            campaign_type,
            status,
            created_at,
            load_date,
            start_date,
            end_date,
        })
    }

    fn campaign_name(
        &self,
        campaign_type: CampaignType,
        employees: &[Employee],
        stream: &mut DeterministicStream,
    ) -> String {
        match campaign_type {
            CampaignType::Leaver => {
                let template = sample_data::draw(stream, LEAVER_TEMPLATES);
                match stream.pick(employees) {
                    Some(employee) => template
                        .replace("{employee_name}", &employee.name)
                        .replace("{emp_id}", &employee.emp_id.to_string()),
                    None => template.to_string(),
                }
            }
            CampaignType::Quarterly => {
                let template = sample_data::draw(stream, QUARTERLY_TEMPLATES);
                let campaign_date = stream.date_between(self.window_start, self.now);
                let quarter = campaign_date.month0() / 3 + 1;
                let hour = stream.int_in(0, 23);
                let minute = stream.int_in(0, 59);
                let timestamp = format!("{}{hour:02}{minute:02}", campaign_date.format("%Y%m%d"));
                let group = sample_data::draw(stream, GROUPS);
                let department = sample_data::draw(stream, DEPARTMENTS);
                template
                    .replace("{year}", &campaign_date.year().to_string())
                    .replace("{quarter}", &quarter.to_string())
                    .replace("{timestamp}", &timestamp)
                    .replace("{group}", group)
                    .replace("{department}", department)
            }
            CampaignType::Special => {
                let template = sample_data::draw(stream, SPECIAL_TEMPLATES);
                let year = stream.int_in(2020, 2025);
                template.replace("{year}", &year.to_string())
            }
        }
    }
}

fn campaign_id(stream: &mut DeterministicStream) -> String {
    let mut id = String::with_capacity(CAMPAIGN_ID_PREFIX.len() + CAMPAIGN_ID_LEN);
    id.push_str(CAMPAIGN_ID_PREFIX);
    for _ in 0..CAMPAIGN_ID_LEN {
        if let Some(&byte) = stream.pick(CAMPAIGN_ID_ALPHABET) {
            id.push(char::from(byte));
        }
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::entity_pool::EntityPool;
    use crate::services::org_hierarchy::OrgHierarchy;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn campaigns(count: usize, seed: i64) -> Vec<Campaign> {
        let config = GeneratorConfig {
            employee_count: 30,
            campaign_count: count,
            ..Default::default()
        };
        let mut stream = DeterministicStream::seeded(seed);
        let pool = EntityPool::generate(&config, &OrgHierarchy::standard(), &mut stream);
        CampaignFactory::new(&config, now())
            .unwrap()
            .generate(pool.employees(), &mut stream)
            .unwrap()
    }

    #[test]
    fn test_status_at() {
        let start = now() - Duration::days(10);
        let end = now() + Duration::days(10);
        assert_eq!(status_at(now(), start, end), CampaignStatus::Active);
        assert_eq!(status_at(now(), now(), now()), CampaignStatus::Active);
        assert_eq!(
            status_at(now(), now() + Duration::seconds(1), end),
            CampaignStatus::Staged
        );
        assert_eq!(
            status_at(now(), start, now() - Duration::seconds(1)),
            CampaignStatus::Completed
        );
    }

    #[test]
    fn test_status_noise_thresholds() {
        use CampaignStatus::*;
        assert_eq!(apply_status_noise(Completed, 0.09), Active);
        assert_eq!(apply_status_noise(Completed, 0.10), Completed);
        assert_eq!(apply_status_noise(Active, 0.04), Staged);
        assert_eq!(apply_status_noise(Active, 0.05), Active);
        assert_eq!(apply_status_noise(Staged, 0.0), Staged);
    }

    #[test]
    fn test_dates_are_ordered() {
        for campaign in campaigns(60, 11) {
            assert!(campaign.created_at <= campaign.load_date);
            assert!(campaign.load_date <= campaign.start_date);
            assert!(campaign.end_date > campaign.start_date);
            let length = campaign.end_date - campaign.start_date;
            assert!(length >= Duration::days(30) && length < Duration::days(90));
            assert!(campaign.start_date <= now());
            assert!(campaign.start_date >= now() - Duration::days(360));
        }
    }

    #[test]
    fn test_ids_and_names() {
        for campaign in campaigns(60, 12) {
            assert!(campaign.id.starts_with("CAMP-"));
            assert_eq!(campaign.id.len(), 13);
            assert!(campaign.id[5..]
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
            assert!(!campaign.name.contains('{'), "unfilled name {}", campaign.name);
            match campaign.campaign_type {
                CampaignType::Leaver => assert!(campaign.name.starts_with("Leaver Campaign for ")),
                CampaignType::Quarterly => {
                    assert!(campaign.name.starts_with("Quarterly Access Review"))
                }
                CampaignType::Special => {}
            }
        }
    }

    #[test]
    fn test_all_types_appear() {
        let generated = campaigns(100, 13);
        for campaign_type in CampaignType::ALL {
            assert!(generated.iter().any(|c| c.campaign_type == campaign_type));
        }
    }

    #[test]
    fn test_reproducible() {
        assert_eq!(campaigns(20, 99), campaigns(20, 99));
    }

    #[test]
    fn test_leaver_without_employees_keeps_template() {
        let config = GeneratorConfig {
            campaign_count: 50,
            campaign_mix: crate::config::CampaignMix {
                leaver: 1.0,
                quarterly: 0.0,
                special: 0.0,
            },
            ..Default::default()
        };
        let mut stream = DeterministicStream::seeded(1);
        let generated = CampaignFactory::new(&config, now())
            .unwrap()
            .generate(&[], &mut stream)
            .unwrap();
        assert!(generated
            .iter()
            .all(|c| c.campaign_type == CampaignType::Leaver));
    }
}
