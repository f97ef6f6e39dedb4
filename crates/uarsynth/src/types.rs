//! Type definitions for the access review domain.
//!
//! Enums carry the exact labels that appear in exported datasets through
//! both `Display` and their serde representation.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Campaign Enums
// ============================================================================

/// Kind of review campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    /// Triggered by an employee departure; carries deprovisioning data.
    Leaver,
    /// Periodic bulk review.
    Quarterly,
    /// Ad-hoc review of a specific system or privilege.
    Special,
}

impl CampaignType {
    /// All campaign types in pipeline generation order.
    pub const ALL: [CampaignType; 3] = [Self::Leaver, Self::Quarterly, Self::Special];

    /// Human-readable plural label used in reports.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Leaver => "Leaver Campaigns",
            Self::Quarterly => "Quarterly Reviews",
            Self::Special => "Special Access Reviews",
        }
    }
}

impl fmt::Display for CampaignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaver => write!(f, "leaver"),
            Self::Quarterly => write!(f, "quarterly"),
            Self::Special => write!(f, "special"),
        }
    }
}

/// Reported lifecycle status of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    /// Prepared but not launched.
    Staged,
    /// Running; reviewers can act.
    Active,
    /// Past its end date.
    Completed,
}

impl CampaignStatus {
    /// Check if the campaign is reported as active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Staged => write!(f, "STAGED"),
            Self::Active => write!(f, "ACTIVE"),
            Self::Completed => write!(f, "COMPLETED"),
        }
    }
}

// ============================================================================
// Certification Enums
// ============================================================================

/// Status of a single certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CertificationStatus {
    /// Review decided; the certification has an end date.
    #[serde(rename = "CLOSED")]
    Closed,
    /// Not yet opened by the reviewer.
    #[serde(rename = "NEW")]
    New,
    /// Opened but not decided.
    #[serde(rename = "IN PROGRESS")]
    InProgress,
}

impl CertificationStatus {
    /// Check if the certification is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for CertificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "CLOSED"),
            Self::New => write!(f, "NEW"),
            Self::InProgress => write!(f, "IN PROGRESS"),
        }
    }
}

/// Where a certification stands relative to its SLA due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseBySla {
    /// Closed on or before the due date.
    #[serde(rename = "Completed within SLA")]
    CompletedWithinSla,
    /// Closed after the due date.
    #[serde(rename = "Completed past SLA")]
    CompletedPastSla,
    /// Open and not yet due.
    #[serde(rename = "Open within SLA")]
    OpenWithinSla,
    /// Open and overdue.
    #[serde(rename = "Open Past SLA")]
    OpenPastSla,
}

impl PhaseBySla {
    /// The compliance verdict implied by this phase.
    ///
    /// Only an overdue open certification is non-compliant.
    #[must_use]
    pub fn compliance(&self) -> ComplianceStatus {
        match self {
            Self::OpenPastSla => ComplianceStatus::NotCompliant,
            _ => ComplianceStatus::Compliant,
        }
    }

    /// Compliant phase for a certification with the given status.
    #[must_use]
    pub fn within_sla(status: CertificationStatus) -> Self {
        if status.is_closed() {
            Self::CompletedWithinSla
        } else {
            Self::OpenWithinSla
        }
    }
}

impl fmt::Display for PhaseBySla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CompletedWithinSla => write!(f, "Completed within SLA"),
            Self::CompletedPastSla => write!(f, "Completed past SLA"),
            Self::OpenWithinSla => write!(f, "Open within SLA"),
            Self::OpenPastSla => write!(f, "Open Past SLA"),
        }
    }
}

/// Compliance verdict of a certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceStatus {
    /// Within SLA, or closed.
    Compliant,
    /// Open past its due date.
    #[serde(rename = "Not Compliant")]
    NotCompliant,
}

impl ComplianceStatus {
    /// Check if the verdict is compliant.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        matches!(self, Self::Compliant)
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compliant => write!(f, "Compliant"),
            Self::NotCompliant => write!(f, "Not Compliant"),
        }
    }
}

/// Who was assigned to review a certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewerType {
    /// The security administrator identity.
    Admin,
    /// Moved from an original reviewer to a new one.
    Reassignment,
    /// The employee's manager.
    Manager,
    /// The employee reviews their own access.
    SelfReview,
}

impl fmt::Display for ReviewerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Reassignment => write!(f, "reassignment"),
            Self::Manager => write!(f, "manager"),
            Self::SelfReview => write!(f, "self_review"),
        }
    }
}

// ============================================================================
// Deprovisioning Enums
// ============================================================================

/// Speed bucket of a termination-to-deprovisioning interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeprovisionSpeed {
    /// 1 to 4 hours.
    Fast,
    /// 4 to 12 hours.
    Typical,
    /// 12 to 24 hours.
    Slow,
    /// 24 to 48 hours.
    VerySlow,
}

impl DeprovisionSpeed {
    /// Minute range `[start, end)` drawn for this bucket.
    #[must_use]
    pub fn minute_range(&self) -> (i64, i64) {
        match self {
            Self::Fast => (60, 240),
            Self::Typical => (240, 720),
            Self::Slow => (720, 1440),
            Self::VerySlow => (1440, 2880),
        }
    }
}

impl fmt::Display for DeprovisionSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fast => write!(f, "fast"),
            Self::Typical => write!(f, "typical"),
            Self::Slow => write!(f, "slow"),
            Self::VerySlow => write!(f, "very_slow"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certification_status_labels() {
        assert_eq!(CertificationStatus::Closed.to_string(), "CLOSED");
        assert_eq!(CertificationStatus::InProgress.to_string(), "IN PROGRESS");
        assert_eq!(
            serde_json::to_string(&CertificationStatus::InProgress).unwrap(),
            "\"IN PROGRESS\""
        );
    }

    #[test]
    fn test_campaign_status_serde() {
        assert_eq!(
            serde_json::to_string(&CampaignStatus::Completed).unwrap(),
            "\"COMPLETED\""
        );
        let parsed: CampaignStatus = serde_json::from_str("\"STAGED\"").unwrap();
        assert_eq!(parsed, CampaignStatus::Staged);
    }

    #[test]
    fn test_phase_compliance_mapping() {
        assert!(PhaseBySla::CompletedWithinSla.compliance().is_compliant());
        assert!(PhaseBySla::CompletedPastSla.compliance().is_compliant());
        assert!(PhaseBySla::OpenWithinSla.compliance().is_compliant());
        assert_eq!(
            PhaseBySla::OpenPastSla.compliance(),
            ComplianceStatus::NotCompliant
        );
    }

    #[test]
    fn test_phase_within_sla_by_status() {
        assert_eq!(
            PhaseBySla::within_sla(CertificationStatus::Closed),
            PhaseBySla::CompletedWithinSla
        );
        assert_eq!(
            PhaseBySla::within_sla(CertificationStatus::New),
            PhaseBySla::OpenWithinSla
        );
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(PhaseBySla::OpenPastSla.to_string(), "Open Past SLA");
        assert_eq!(
            serde_json::to_string(&PhaseBySla::CompletedPastSla).unwrap(),
            "\"Completed past SLA\""
        );
    }

    #[test]
    fn test_speed_ranges_are_contiguous() {
        let buckets = [
            DeprovisionSpeed::Fast,
            DeprovisionSpeed::Typical,
            DeprovisionSpeed::Slow,
            DeprovisionSpeed::VerySlow,
        ];
        for pair in buckets.windows(2) {
            assert_eq!(pair[0].minute_range().1, pair[1].minute_range().0);
        }
    }

    #[test]
    fn test_campaign_type_display() {
        assert_eq!(CampaignType::Leaver.to_string(), "leaver");
        assert_eq!(CampaignType::Special.display_name(), "Special Access Reviews");
    }
}
