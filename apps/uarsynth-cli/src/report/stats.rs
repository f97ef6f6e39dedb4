//! Statistics report over a generated dataset.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write;

use chrono::{DateTime, Datelike, Utc};
use uarsynth::{
    CalibrationReport, CampaignType, CertificationStatus, GeneratedDataset, GeneratorConfig,
    ReviewerType, SeasonalModel, MONTH_NAMES,
};

use crate::formats::short_date;

const RULE_WIDTH: usize = 70;
const TOP_REVIEWERS: usize = 10;
/// Deprovisionings at or under this many minutes count as fast.
const FAST_DEPROVISION_MINUTES: i64 = 240;
/// Deprovisionings at or over this many minutes count as slow.
const SLOW_DEPROVISION_MINUTES: i64 = 1440;

/// One month of the trendline table, keyed by certification load month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyStats {
    pub year: i32,
    pub month0: u32,
    pub records: usize,
    pub closed: usize,
    pub terminations: usize,
    pub deprovision_minutes: i64,
    /// Seasonal compliance multiplier configured for this month.
    pub expected_factor: f64,
}

impl MonthlyStats {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month0 as usize % 12], self.year)
    }

    /// Share of closed certifications, in percent.
    #[must_use]
    pub fn closed_percent(&self) -> f64 {
        percent(self.closed, self.records)
    }

    /// Average deprovisioning time in hours, if any termination was tracked.
    #[must_use]
    pub fn average_deprovision_hours(&self) -> Option<f64> {
        (self.terminations > 0)
            .then(|| self.deprovision_minutes as f64 / self.terminations as f64 / 60.0)
    }
}

/// Termination-to-deprovisioning metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct OdmMetrics {
    pub events: usize,
    pub average_minutes: f64,
    pub fast: usize,
    pub slow: usize,
    pub compliant: usize,
}

/// Aggregated statistics, rendered by [`DatasetStats::render`].
#[derive(Debug, Clone)]
pub struct DatasetStats {
    pub company_name: String,
    pub admin_reviewer: String,
    pub records: usize,
    pub employees: usize,
    pub campaigns: usize,
    pub evaluated_at: DateTime<Utc>,
    pub seed: Option<i64>,
    pub campaign_types: Vec<(CampaignType, usize)>,
    pub statuses: Vec<(CertificationStatus, usize)>,
    pub reviewer_types: HashMap<ReviewerType, usize>,
    pub top_reviewers: Vec<(String, usize)>,
    pub sources: BTreeMap<String, usize>,
    pub load_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    pub compliance: CalibrationReport,
    pub deprovision: Option<CalibrationReport>,
    pub current: usize,
    pub trendline_enabled: bool,
    pub monthly: Vec<MonthlyStats>,
    pub seasonal: SeasonalModel,
    pub peak_month: u32,
    pub low_month: u32,
    pub compliance_variance: f64,
    pub deprovision_impact: f64,
    pub odm: Option<OdmMetrics>,
}

impl DatasetStats {
    /// Aggregate `dataset`, generated from `config`.
    pub fn collect(dataset: &GeneratedDataset, config: &GeneratorConfig) -> Self {
        let records = &dataset.records;
        let seasonal = SeasonalModel::resolve(&config.trendline);

        let campaign_types = CampaignType::ALL
            .iter()
            .map(|&t| {
                let count = dataset
                    .campaigns
                    .iter()
                    .filter(|c| c.campaign_type == t)
                    .count();
                (t, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect();

        let statuses = [
            CertificationStatus::Closed,
            CertificationStatus::New,
            CertificationStatus::InProgress,
        ]
        .into_iter()
        .map(|s| (s, records.iter().filter(|r| r.certification_status == s).count()))
        .filter(|(_, count)| *count > 0)
        .collect();

        let mut reviewer_types: HashMap<ReviewerType, usize> = HashMap::new();
        let mut reviewer_counts: HashMap<&str, usize> = HashMap::new();
        let mut sources: BTreeMap<String, usize> = BTreeMap::new();
        let mut monthly: BTreeMap<(i32, u32), MonthlyStats> = BTreeMap::new();
        for record in records {
            *reviewer_types.entry(record.reviewer_type).or_default() += 1;
            if record.reviewer_name != config.identity.admin_reviewer {
                *reviewer_counts.entry(record.reviewer_name.as_str()).or_default() += 1;
            }
            *sources.entry(record.uar_source.clone()).or_default() += 1;

            let load = record.certification_load;
            let entry = monthly
                .entry((load.year(), load.month0()))
                .or_insert_with(|| MonthlyStats {
                    year: load.year(),
                    month0: load.month0(),
                    records: 0,
                    closed: 0,
                    terminations: 0,
                    deprovision_minutes: 0,
                    expected_factor: seasonal.compliance_factor_for_month(load.month0()),
                });
            entry.records += 1;
            if record.certification_completed() {
                entry.closed += 1;
            }
            if let Some(d) = &record.deprovisioning {
                entry.terminations += 1;
                entry.deprovision_minutes += d.minutes();
            }
        }

        let mut top_reviewers: Vec<(String, usize)> = reviewer_counts
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        top_reviewers.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_reviewers.truncate(TOP_REVIEWERS);

        let load_range = records
            .iter()
            .map(|r| r.certification_load)
            .min()
            .zip(records.iter().map(|r| r.certification_load).max());

        let odm = if config.termination.enabled {
            odm_metrics(dataset)
        } else {
            None
        };

        Self {
            company_name: config.identity.company_name.clone(),
            admin_reviewer: config.identity.admin_reviewer.clone(),
            records: records.len(),
            employees: dataset.employees.len(),
            campaigns: dataset.campaigns.len(),
            evaluated_at: dataset.evaluated_at,
            seed: dataset.seed,
            campaign_types,
            statuses,
            reviewer_types,
            top_reviewers,
            sources,
            load_range,
            compliance: dataset.compliance_calibration.clone(),
            deprovision: dataset.deprovision_calibration.clone(),
            current: dataset.currency.current,
            trendline_enabled: config.trendline.enabled,
            monthly: monthly.into_values().collect(),
            seasonal,
            peak_month: config.trendline.peak_month,
            low_month: config.trendline.low_month,
            compliance_variance: config.trendline.compliance_variance,
            deprovision_impact: config.trendline.deprovision_seasonal_impact,
            odm,
        }
    }

    /// Render the plain-text report.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_report(&mut out);
        out
    }

    fn write_report(&self, out: &mut String) -> std::fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "{rule}")?;
        writeln!(out, "UAR (USER ACCESS REVIEW) DATA GENERATOR STATISTICS")?;
        writeln!(out, "{rule}")?;
        writeln!(out, "Company: {}", self.company_name)?;
        writeln!(out, "Total Records Generated: {}", thousands(self.records))?;
        writeln!(out, "Total Employees: {}", thousands(self.employees))?;
        writeln!(out, "Total Campaigns: {}", self.campaigns)?;
        writeln!(out, "Evaluated At: {}", self.evaluated_at.to_rfc3339())?;
        match self.seed {
            Some(seed) => writeln!(out, "Seed: {seed}")?,
            None => writeln!(out, "Seed: none (non-reproducible run)")?,
        }

        writeln!(out, "\nCAMPAIGN TYPE DISTRIBUTION:")?;
        for (campaign_type, count) in &self.campaign_types {
            writeln!(
                out,
                "  {}: {} campaigns ({:.1}%)",
                campaign_type.display_name(),
                count,
                percent(*count, self.campaigns)
            )?;
        }

        writeln!(out, "\nCERTIFICATION STATUS DISTRIBUTION:")?;
        for (status, count) in &self.statuses {
            writeln!(
                out,
                "  {}: {} records ({:.1}%)",
                status,
                thousands(*count),
                percent(*count, self.records)
            )?;
        }

        self.write_calibration(out)?;
        self.write_reviewers(out)?;

        writeln!(out, "\nSOURCE SYSTEM DISTRIBUTION:")?;
        for (source, count) in &self.sources {
            writeln!(
                out,
                "  {}: {} records ({:.1}%)",
                source,
                thousands(*count),
                percent(*count, self.records)
            )?;
        }

        if let Some((min, max)) = self.load_range {
            writeln!(out, "\nDATE RANGE ANALYSIS:")?;
            writeln!(
                out,
                "  Load Date Range: {} to {}",
                short_date(min),
                short_date(max)
            )?;
            let span_seconds = (max - min).num_seconds();
            writeln!(out, "  Data Span: {} days", (span_seconds + 86_399) / 86_400)?;
        }

        if self.trendline_enabled {
            self.write_trendline(out)?;
        }
        if let Some(odm) = &self.odm {
            write_odm(out, odm)?;
        }
        Ok(())
    }

    fn write_calibration(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "\nCOMPLIANCE CALIBRATION:")?;
        write_calibration_line(out, "Certification", &self.compliance)?;
        match &self.deprovision {
            Some(report) => write_calibration_line(out, "Deprovisioning", report)?,
            None => writeln!(out, "  Deprovisioning: termination tracking disabled")?,
        }
        writeln!(out, "  Current Records: {}", thousands(self.current))
    }

    fn write_reviewers(&self, out: &mut String) -> std::fmt::Result {
        let count = |t: ReviewerType| self.reviewer_types.get(&t).copied().unwrap_or(0);

        writeln!(out, "\nREVIEWER TYPE ANALYSIS:")?;
        let admin = count(ReviewerType::Admin);
        writeln!(
            out,
            "  Admin Reviews ({}): {} records ({:.1}%)",
            self.admin_reviewer,
            thousands(admin),
            percent(admin, self.records)
        )?;
        for (label, reviewer_type) in [
            ("Reassignments", ReviewerType::Reassignment),
            ("Manager Reviews", ReviewerType::Manager),
            ("Self Reviews", ReviewerType::SelfReview),
        ] {
            let n = count(reviewer_type);
            writeln!(
                out,
                "  {label}: {} records ({:.1}%)",
                thousands(n),
                percent(n, self.records)
            )?;
        }

        writeln!(out, "\nTOP 10 REVIEWERS (excluding admin):")?;
        for (name, n) in &self.top_reviewers {
            writeln!(
                out,
                "  {name}: {n} reviews ({:.1}%)",
                percent(*n, self.records)
            )?;
        }
        Ok(())
    }

    fn write_trendline(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "\nMONTHLY TRENDLINE ANALYSIS:")?;
        writeln!(
            out,
            "  Month         Records     Closed%  Terminations  Avg Deprovision  Seasonal"
        )?;
        writeln!(out, "  {}", "-".repeat(76))?;
        for month in &self.monthly {
            let average = month
                .average_deprovision_hours()
                .map(|h| format!("{h:.1}h"))
                .unwrap_or_else(|| "N/A".to_string());
            writeln!(
                out,
                "  {:<13} {:>7}  {:>9.1}%  {:>12}  {:>15}  {:>8.2}",
                month.label(),
                month.records,
                month.closed_percent(),
                month.terminations,
                average,
                month.expected_factor
            )?;
        }

        writeln!(out, "\nTRENDLINE INSIGHTS:")?;
        match self.seasonal.compliance_table() {
            Some(weights) => {
                writeln!(out, "  - Using CUSTOM monthly compliance weights")?;
                writeln!(out, "  - Weights: [{}]", join_weights(weights))?;
            }
            None => {
                writeln!(out, "  - Using AUTOMATIC compliance pattern (sinusoidal)")?;
                writeln!(
                    out,
                    "  - Peak Compliance Month: {}",
                    MONTH_NAMES[self.peak_month as usize % 12]
                )?;
                writeln!(
                    out,
                    "  - Low Compliance Month: {}",
                    MONTH_NAMES[self.low_month as usize % 12]
                )?;
                writeln!(
                    out,
                    "  - Compliance Variance: ±{:.0}% over the year",
                    self.compliance_variance * 100.0
                )?;
            }
        }
        match self.seasonal.deprovision_table() {
            Some(weights) => {
                writeln!(out, "  - Using CUSTOM monthly deprovisioning weights")?;
                writeln!(out, "  - Weights: [{}]", join_weights(weights))?;
            }
            None => {
                writeln!(out, "  - Using AUTOMATIC deprovisioning pattern (seasonal)")?;
                writeln!(
                    out,
                    "  - Seasonal impact on deprovisioning: {:.0}% variance",
                    self.deprovision_impact * 100.0
                )?;
            }
        }
        Ok(())
    }
}

fn write_calibration_line(
    out: &mut String,
    label: &str,
    report: &CalibrationReport,
) -> std::fmt::Result {
    writeln!(
        out,
        "  {label}: {} -> {} compliant of {} ({:.1}% -> {:.1}%, target {}), {} flipped{}",
        thousands(report.before),
        thousands(report.after),
        thousands(report.population),
        report.rate_before() * 100.0,
        report.rate_after() * 100.0,
        thousands(report.target),
        thousands(report.flipped),
        if report.met_target() {
            String::new()
        } else {
            format!(", SHORTFALL ({} closed skipped)", report.skipped_closed)
        }
    )
}

fn write_odm(out: &mut String, odm: &OdmMetrics) -> std::fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    let hours = odm.average_minutes / 60.0;
    writeln!(out, "\n{rule}")?;
    writeln!(out, "ODM - ACCESS TERMINATION METRICS (MINUTES)")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Total Termination Events: {}", thousands(odm.events))?;
    writeln!(out, "\nDEPROVISIONING TIME ANALYSIS:")?;
    writeln!(
        out,
        "  Average Minutes to Deprovision: {:.2} minutes ({hours:.2} hours)",
        odm.average_minutes
    )?;
    writeln!(
        out,
        "  Fast Deprovisioning (<=4 hours): {} ({:.1}%)",
        odm.fast,
        percent(odm.fast, odm.events)
    )?;
    writeln!(
        out,
        "  Slow Deprovisioning (>=24 hours): {} ({:.1}%)",
        odm.slow,
        percent(odm.slow, odm.events)
    )?;
    writeln!(
        out,
        "  Within SLA: {} ({:.1}%)",
        odm.compliant,
        percent(odm.compliant, odm.events)
    )?;
    writeln!(out, "\nODM CALCULATION:")?;
    writeln!(
        out,
        "  Metric: Average minutes from termination request to deprovisioning"
    )?;
    writeln!(
        out,
        "  Result: {:.2} minutes ({hours:.2} hours)",
        odm.average_minutes
    )
}

/// Termination metrics, or `None` when no record tracks a termination.
pub fn odm_metrics(dataset: &GeneratedDataset) -> Option<OdmMetrics> {
    let minutes: Vec<(i64, bool)> = dataset
        .termination_records()
        .filter_map(|r| r.deprovisioning.as_ref())
        .map(|d| (d.minutes(), d.is_compliant()))
        .collect();
    if minutes.is_empty() {
        return None;
    }
    let total: i64 = minutes.iter().map(|(m, _)| m).sum();
    Some(OdmMetrics {
        events: minutes.len(),
        average_minutes: total as f64 / minutes.len() as f64,
        fast: minutes
            .iter()
            .filter(|(m, _)| *m <= FAST_DEPROVISION_MINUTES)
            .count(),
        slow: minutes
            .iter()
            .filter(|(m, _)| *m >= SLOW_DEPROVISION_MINUTES)
            .count(),
        compliant: minutes.iter().filter(|(_, c)| *c).count(),
    })
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn join_weights(weights: &[f64]) -> String {
    weights
        .iter()
        .map(|w| format!("{w:.2}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Group digits in threes, e.g. `30,000`.
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uarsynth::generate;

    fn config() -> GeneratorConfig {
        GeneratorConfig {
            record_count: 300,
            employee_count: 50,
            campaign_count: 10,
            seed: Some(12345),
            evaluation_instant: Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(30_000), "30,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_percent_of_empty() {
        assert_eq!(percent(3, 0), 0.0);
        assert_eq!(percent(1, 4), 25.0);
    }

    #[test]
    fn test_collect_counts() {
        let config = config();
        let dataset = generate(&config).unwrap();
        let stats = DatasetStats::collect(&dataset, &config);

        assert_eq!(stats.records, 300);
        assert_eq!(stats.statuses.iter().map(|(_, n)| n).sum::<usize>(), 300);
        assert_eq!(stats.campaign_types.iter().map(|(_, n)| n).sum::<usize>(), 10);
        assert_eq!(stats.reviewer_types.values().sum::<usize>(), 300);
        assert_eq!(stats.monthly.iter().map(|m| m.records).sum::<usize>(), 300);
        assert!(stats.top_reviewers.len() <= TOP_REVIEWERS);
        assert!(stats
            .top_reviewers
            .windows(2)
            .all(|pair| pair[0].1 >= pair[1].1));
        assert!(stats
            .top_reviewers
            .iter()
            .all(|(name, _)| name != &config.identity.admin_reviewer));
        assert_eq!(stats.sources.get("sailpoint_identitynow"), Some(&300));
    }

    #[test]
    fn test_monthly_rows_are_chronological() {
        let config = config();
        let dataset = generate(&config).unwrap();
        let stats = DatasetStats::collect(&dataset, &config);
        assert!(stats
            .monthly
            .windows(2)
            .all(|pair| (pair[0].year, pair[0].month0) < (pair[1].year, pair[1].month0)));
    }

    #[test]
    fn test_odm_metrics_match_termination_records() {
        let config = config();
        let dataset = generate(&config).unwrap();
        let odm = odm_metrics(&dataset).unwrap();
        let report = dataset.deprovision_calibration.clone().unwrap();
        assert_eq!(odm.events, report.population);
        assert_eq!(odm.compliant, report.after);
    }

    #[test]
    fn test_render_sections() {
        let config = config();
        let dataset = generate(&config).unwrap();
        let text = DatasetStats::collect(&dataset, &config).render();

        for section in [
            "UAR (USER ACCESS REVIEW) DATA GENERATOR STATISTICS",
            "CAMPAIGN TYPE DISTRIBUTION:",
            "CERTIFICATION STATUS DISTRIBUTION:",
            "COMPLIANCE CALIBRATION:",
            "REVIEWER TYPE ANALYSIS:",
            "TOP 10 REVIEWERS (excluding admin):",
            "SOURCE SYSTEM DISTRIBUTION:",
            "DATE RANGE ANALYSIS:",
            "MONTHLY TRENDLINE ANALYSIS:",
            "TRENDLINE INSIGHTS:",
            "ODM - ACCESS TERMINATION METRICS (MINUTES)",
        ] {
            assert!(text.contains(section), "missing section {section}");
        }
        assert!(text.contains("Total Records Generated: 300"));
        assert!(text.contains("Using CUSTOM monthly compliance weights"));
        assert!(text.contains("Seed: 12345"));
    }

    #[test]
    fn test_calibration_line_shows_rates() {
        let report = CalibrationReport {
            population: 200,
            before: 150,
            target: 186,
            after: 186,
            flipped: 36,
            skipped_closed: 0,
            outcome: uarsynth::CalibrationOutcome::Reached,
        };
        let mut out = String::new();
        write_calibration_line(&mut out, "Certification", &report).unwrap();
        assert_eq!(
            out,
            "  Certification: 150 -> 186 compliant of 200 \
             (75.0% -> 93.0%, target 186), 36 flipped\n"
        );
    }

    #[test]
    fn test_render_without_trendline_or_termination() {
        let mut config = config();
        config.trendline.enabled = false;
        config.termination.enabled = false;
        let dataset = generate(&config).unwrap();
        let text = DatasetStats::collect(&dataset, &config).render();
        assert!(!text.contains("MONTHLY TRENDLINE ANALYSIS:"));
        assert!(!text.contains("ACCESS TERMINATION METRICS"));
        assert!(text.contains("termination tracking disabled"));
    }
}
