//! Access review record synthesis.
//!
//! A [`Record`] pairs one campaign with one employee snapshot and carries
//! every derived field an export needs. Phase and compliance are stored
//! together behind [`Record::set_phase`] so they can never disagree.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::GeneratorConfig;
use crate::dates;
use crate::error::{GeneratorError, Result};
use crate::sample_data::{self, COMMON_REVIEWERS, FIRST_NAMES, LAST_NAMES, SOURCES};
use crate::services::campaign_factory::Campaign;
use crate::services::deprovisioning::{self, Deprovisioning};
use crate::services::entity_pool::Employee;
use crate::services::seasonal::SeasonalModel;
use crate::stream::DeterministicStream;
use crate::types::{
    CampaignType, CertificationStatus, ComplianceStatus, PhaseBySla, ReviewerType,
};

/// Maximum days between campaign start and certification start.
const CERTIFICATION_START_WINDOW_DAYS: i64 = 7;
/// SLA jitter, in days, applied symmetrically around the base SLA.
const SLA_JITTER_DAYS: i64 = 3;

const CERTIFICATION_ID_ALPHABET: &[u8] = b"0123456789abcdef";
const CERTIFICATION_ID_LEN: usize = 32;

/// Bounds of the placeholder total-certifications column.
const TOTAL_CERTIFICATIONS_MIN: i64 = 50;
const TOTAL_CERTIFICATIONS_MAX: i64 = 200;

/// One access review certification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Upper-case hex SHA-256 over the record's identifying fields.
    pub unique_key: String,
    pub campaign: Campaign,
    pub employee: Employee,
    pub uar_source: String,
    pub certification_id: String,
    pub certification_name: String,
    pub certification_status: CertificationStatus,
    pub certification_start: DateTime<Utc>,
    /// Present iff the status is `CLOSED`.
    pub certification_end: Option<DateTime<Utc>>,
    pub certification_due: DateTime<Utc>,
    pub certification_load: DateTime<Utc>,
    pub sla_days: i64,
    pub total_certifications: i64,
    pub completed_certifications: i64,
    pub reviewer_type: ReviewerType,
    pub reviewer_name: String,
    pub reviewer_email: String,
    /// First day of the certification start month.
    pub tl_date: NaiveDate,
    pub is_current: bool,
    pub deprovisioning: Option<Deprovisioning>,
    pub(crate) phase_by_sla: PhaseBySla,
    pub(crate) compliance_status: ComplianceStatus,
}

impl Record {
    #[must_use]
    pub fn phase_by_sla(&self) -> PhaseBySla {
        self.phase_by_sla
    }

    #[must_use]
    pub fn compliance_status(&self) -> ComplianceStatus {
        self.compliance_status
    }

    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.compliance_status.is_compliant()
    }

    /// Set the phase and the compliance verdict it implies.
    pub fn set_phase(&mut self, phase: PhaseBySla) {
        self.phase_by_sla = phase;
        self.compliance_status = phase.compliance();
    }

    #[must_use]
    pub fn certification_completed(&self) -> bool {
        self.certification_status.is_closed()
    }

    #[must_use]
    pub fn is_active_campaign(&self) -> bool {
        self.campaign.is_active()
    }

    #[must_use]
    pub fn campaign_type(&self) -> CampaignType {
        self.campaign.campaign_type
    }

    /// Deprovisioning compliance, or `None` when no termination is tracked.
    #[must_use]
    pub fn deprovision_compliance(&self) -> Option<bool> {
        self.deprovisioning.as_ref().map(Deprovisioning::is_compliant)
    }
}

/// Phase of a certification evaluated at `as_of`.
///
/// Closed certifications compare their end to the due date; open ones
/// compare `as_of`.
#[must_use]
pub fn evaluate_phase(
    status: CertificationStatus,
    end: Option<DateTime<Utc>>,
    due: DateTime<Utc>,
    as_of: DateTime<Utc>,
) -> PhaseBySla {
    match (status, end) {
        (CertificationStatus::Closed, Some(end)) if end > due => PhaseBySla::CompletedPastSla,
        (CertificationStatus::Closed, _) => PhaseBySla::CompletedWithinSla,
        _ if as_of <= due => PhaseBySla::OpenWithinSla,
        _ => PhaseBySla::OpenPastSla,
    }
}

/// Stable record fingerprint.
#[must_use]
pub fn fingerprint(
    campaign_name: &str,
    certification_name: &str,
    certification_id: &str,
    campaign_id: &str,
    emp_id: i64,
    employee_name: &str,
    employee_email: &str,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(campaign_name.as_bytes());
    hasher.update(certification_name.as_bytes());
    hasher.update(certification_id.as_bytes());
    hasher.update(campaign_id.as_bytes());
    hasher.update(emp_id.to_string().as_bytes());
    hasher.update(employee_name.as_bytes());
    hasher.update(employee_email.as_bytes());
    hex::encode_upper(hasher.finalize())
}

struct ReviewerAssignment {
    reviewer_type: ReviewerType,
    certification_name: String,
    reviewer_name: String,
    reviewer_email: String,
}

/// Builds records against one evaluation instant.
pub struct RecordSynthesizer<'a> {
    config: &'a GeneratorConfig,
    seasonal: &'a SeasonalModel,
    as_of: DateTime<Utc>,
}

impl<'a> RecordSynthesizer<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        seasonal: &'a SeasonalModel,
        as_of: DateTime<Utc>,
    ) -> Self {
        Self {
            config,
            seasonal,
            as_of,
        }
    }

    /// Synthesize one record for `campaign`.
    ///
    /// Fails with `EmptyPool` when there is no employee to review.
    pub fn synthesize(
        &self,
        campaign: &Campaign,
        employees: &[Employee],
        stream: &mut DeterministicStream,
    ) -> Result<Record> {
        let employee = stream.pick(employees).ok_or_else(|| GeneratorError::EmptyPool {
            resource: "employee".to_string(),
        })?;

        let reviewer = self.assign_reviewer(campaign, employee, stream);
        let certification_status = self.draw_status(stream);

        let certification_start = stream.date_between(
            campaign.start_date,
            dates::add_days(
                campaign.start_date,
                CERTIFICATION_START_WINDOW_DAYS,
                "certification start window",
            )?,
        );
        let certification_end = if certification_status.is_closed() {
            Some(stream.date_between(certification_start, campaign.end_date))
        } else {
            None
        };

        let sla = &self.config.sla;
        let jitter = stream.int_in(-SLA_JITTER_DAYS, SLA_JITTER_DAYS + 1);
        let sla_days =
            (sla.days_for(campaign.campaign_type) + jitter).clamp(sla.min_days, sla.max_days);
        let certification_due =
            dates::add_days(certification_start, sla_days, "certification due date")?;
        let certification_load = stream.date_between(campaign.load_date, campaign.start_date);

        let uar_source = sample_data::draw(stream, SOURCES).to_string();

        let deprovisioning = deprovisioning::synthesize(
            &self.config.termination,
            self.seasonal,
            campaign.campaign_type,
            certification_load,
            stream,
        )?;

        let certification_id = certification_id(stream);

        let total_certifications =
            stream.int_in(TOTAL_CERTIFICATIONS_MIN, TOTAL_CERTIFICATIONS_MAX);
        let completed_certifications =
            (total_certifications as f64 * self.config.compliance_rate).floor() as i64;

        let phase = evaluate_phase(
            certification_status,
            certification_end,
            certification_due,
            self.as_of,
        );

        let unique_key = fingerprint(
            &campaign.name,
            &reviewer.certification_name,
            &certification_id,
            &campaign.id,
            employee.emp_id,
            &employee.name,
            &employee.email,
        );

        Ok(Record {
            unique_key,
            campaign: campaign.clone(),
            employee: employee.clone(),
            uar_source,
            certification_id,
            certification_name: reviewer.certification_name,
            certification_status,
            certification_start,
            certification_end,
            certification_due,
            certification_load,
            sla_days,
            total_certifications,
            completed_certifications,
            reviewer_type: reviewer.reviewer_type,
            reviewer_name: reviewer.reviewer_name,
            reviewer_email: reviewer.reviewer_email,
            tl_date: dates::first_of_month(certification_start)?,
            is_current: false,
            deprovisioning,
            phase_by_sla: phase,
            compliance_status: phase.compliance(),
        })
    }

    /// Roll admin, then reassignment, then (only if neither) manager review.
    fn assign_reviewer(
        &self,
        campaign: &Campaign,
        employee: &Employee,
        stream: &mut DeterministicStream,
    ) -> ReviewerAssignment {
        let rates = &self.config.reviewers;
        let identity = &self.config.identity;

        let is_admin = stream.chance(rates.admin_percentage);
        let is_reassignment = stream.chance(rates.reassignment_percentage);
        let is_manager =
            !is_admin && !is_reassignment && stream.chance(rates.manager_review_percentage);

        let certification_name = if is_reassignment {
            let original = format!(
                "{} {}",
                sample_data::draw(stream, FIRST_NAMES),
                sample_data::draw(stream, LAST_NAMES)
            );
            let new_reviewer = if is_admin {
                identity.admin_reviewer.clone()
            } else {
                sample_data::draw(stream, COMMON_REVIEWERS).to_string()
            };
            let review_kind = match campaign.campaign_type {
                CampaignType::Leaver => "Identity",
                _ => "Manager",
            };
            format!(
                "Reassignment from '{review_kind} Access Review for {original}' to {new_reviewer}"
            )
        } else if is_manager {
            format!("Manager Access Review for {}", employee.name)
        } else {
            format!("Identity Access Review for {}", employee.name)
        };

        let (reviewer_type, reviewer_name, reviewer_email) = if is_admin {
            (
                ReviewerType::Admin,
                identity.admin_reviewer.clone(),
                identity.admin_email.clone(),
            )
        } else if is_reassignment {
            let name = sample_data::draw(stream, COMMON_REVIEWERS);
            (ReviewerType::Reassignment, name.to_string(), identity.email_for(name))
        } else if is_manager {
            (
                ReviewerType::Manager,
                employee.name.clone(),
                employee.email.clone(),
            )
        } else {
            (
                ReviewerType::SelfReview,
                employee.name.clone(),
                employee.email.clone(),
            )
        };

        ReviewerAssignment {
            reviewer_type,
            certification_name,
            reviewer_name,
            reviewer_email,
        }
    }

    fn draw_status(&self, stream: &mut DeterministicStream) -> CertificationStatus {
        let distribution = &self.config.status_distribution;
        let roll = stream.next_f64();
        if roll < distribution.closed {
            CertificationStatus::Closed
        } else if roll < distribution.closed + distribution.new {
            CertificationStatus::New
        } else {
            CertificationStatus::InProgress
        }
    }
}

fn certification_id(stream: &mut DeterministicStream) -> String {
    (0..CERTIFICATION_ID_LEN)
        .filter_map(|_| stream.pick(CERTIFICATION_ID_ALPHABET).map(|&b| char::from(b)))
        .collect()
}
