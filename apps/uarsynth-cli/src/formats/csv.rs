//! Delimited export of access review records
//!
//! Each record flattens into an [`ExportRow`] whose serde names are the
//! titled column headers, in export order. Four columns are derived at
//! serialization time from the evaluation instant: `Past Due`,
//! `User Access Grouping`, `Data as of` and `Due in Days`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use uarsynth::Record;

use super::{access_grouping, due_in_days, flag, long_datetime, short_date, tl_date};
use crate::error::CliResult;

/// Column headers, in export order.
pub const COLUMN_NAMES: [&str; 46] = [
    "Campaign Created Datetime",
    "Campaign End Datetime",
    "Campaign Id",
    "Campaign Load Date",
    "Campaign Name",
    "Campaign Status",
    "Certification Completed",
    "Certification Due Date",
    "Certification End Date",
    "Certification Id",
    "Certification Load Date",
    "Certification Name",
    "Certification Start Date",
    "Certification Status",
    "Compliance Status",
    "Employee Email Address",
    "Employee Id",
    "Employee Job Title",
    "Employee Name",
    "Level 3",
    "Is Active Campaign",
    "Is Current",
    "Level 1",
    "Level 5",
    "Level 6",
    "Manager Email Address",
    "Manager Employee Id",
    "Manager Full Name",
    "Past Due",
    "Phase By Sla",
    "Reviewer Mail Id",
    "Reviewer Name",
    "Level 4",
    "Tl Date",
    "Uar Source",
    "Unique Key",
    "User Access Grouping",
    "Level 2",
    "Completed Certifications",
    "Total Certifications",
    "Data as of",
    "Due in Days",
    "Termination Request Datetime",
    "Deprovision Complete Datetime",
    "Minutes To Deprovision",
    "Deprovision Compliance Status",
];

/// One flattened export row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExportRow<'a> {
    #[serde(rename = "Campaign Created Datetime")]
    pub campaign_created: String,
    #[serde(rename = "Campaign End Datetime")]
    pub campaign_end: String,
    #[serde(rename = "Campaign Id")]
    pub campaign_id: &'a str,
    #[serde(rename = "Campaign Load Date")]
    pub campaign_load_date: String,
    #[serde(rename = "Campaign Name")]
    pub campaign_name: &'a str,
    #[serde(rename = "Campaign Status")]
    pub campaign_status: String,
    #[serde(rename = "Certification Completed")]
    pub certification_completed: &'static str,
    #[serde(rename = "Certification Due Date")]
    pub certification_due: String,
    #[serde(rename = "Certification End Date")]
    pub certification_end: String,
    #[serde(rename = "Certification Id")]
    pub certification_id: &'a str,
    #[serde(rename = "Certification Load Date")]
    pub certification_load: String,
    #[serde(rename = "Certification Name")]
    pub certification_name: &'a str,
    #[serde(rename = "Certification Start Date")]
    pub certification_start: String,
    #[serde(rename = "Certification Status")]
    pub certification_status: String,
    #[serde(rename = "Compliance Status")]
    pub compliance_status: &'static str,
    #[serde(rename = "Employee Email Address")]
    pub employee_email: &'a str,
    #[serde(rename = "Employee Id")]
    pub employee_id: i64,
    #[serde(rename = "Employee Job Title")]
    pub employee_job_title: &'a str,
    #[serde(rename = "Employee Name")]
    pub employee_name: &'a str,
    #[serde(rename = "Level 3")]
    pub level_3: &'a str,
    #[serde(rename = "Is Active Campaign")]
    pub is_active_campaign: &'static str,
    #[serde(rename = "Is Current")]
    pub is_current: &'static str,
    #[serde(rename = "Level 1")]
    pub level_1: &'a str,
    #[serde(rename = "Level 5")]
    pub level_5: &'a str,
    #[serde(rename = "Level 6")]
    pub level_6: &'a str,
    #[serde(rename = "Manager Email Address")]
    pub manager_email: &'a str,
    #[serde(rename = "Manager Employee Id")]
    pub manager_emp_id: i64,
    #[serde(rename = "Manager Full Name")]
    pub manager_name: &'a str,
    #[serde(rename = "Past Due")]
    pub past_due: &'static str,
    #[serde(rename = "Phase By Sla")]
    pub phase_by_sla: String,
    #[serde(rename = "Reviewer Mail Id")]
    pub reviewer_email: &'a str,
    #[serde(rename = "Reviewer Name")]
    pub reviewer_name: &'a str,
    #[serde(rename = "Level 4")]
    pub level_4: &'a str,
    #[serde(rename = "Tl Date")]
    pub tl_date: String,
    #[serde(rename = "Uar Source")]
    pub uar_source: &'a str,
    #[serde(rename = "Unique Key")]
    pub unique_key: &'a str,
    #[serde(rename = "User Access Grouping")]
    pub user_access_grouping: &'static str,
    #[serde(rename = "Level 2")]
    pub level_2: &'a str,
    #[serde(rename = "Completed Certifications")]
    pub completed_certifications: i64,
    #[serde(rename = "Total Certifications")]
    pub total_certifications: i64,
    #[serde(rename = "Data as of")]
    pub data_as_of: String,
    #[serde(rename = "Due in Days")]
    pub due_in_days: i64,
    #[serde(rename = "Termination Request Datetime")]
    pub termination_requested: String,
    #[serde(rename = "Deprovision Complete Datetime")]
    pub deprovision_completed: String,
    #[serde(rename = "Minutes To Deprovision")]
    pub minutes_to_deprovision: Option<i64>,
    #[serde(rename = "Deprovision Compliance Status")]
    pub deprovision_compliance: &'static str,
}

impl<'a> ExportRow<'a> {
    /// Flatten `record`, deriving the time-dependent columns at `as_of`.
    pub fn new(record: &'a Record, as_of: DateTime<Utc>) -> Self {
        let [level_1, level_2, level_3, level_4, level_5, level_6] = record.employee.org.levels();
        let due_in_days = due_in_days(record.certification_due, as_of);
        let past_due = due_in_days < 0 && !record.certification_completed();
        let campaign_load_date = short_date(record.campaign.load_date);
        let deprovisioning = record.deprovisioning.as_ref();

        Self {
            campaign_created: long_datetime(record.campaign.created_at),
            campaign_end: long_datetime(record.campaign.end_date),
            campaign_id: &record.campaign.id,
            data_as_of: campaign_load_date.clone(),
            campaign_load_date,
            campaign_name: &record.campaign.name,
            campaign_status: record.campaign.status.to_string(),
            certification_completed: flag(record.certification_completed()),
            certification_due: long_datetime(record.certification_due),
            certification_end: record
                .certification_end
                .map(long_datetime)
                .unwrap_or_default(),
            certification_id: &record.certification_id,
            certification_load: long_datetime(record.certification_load),
            certification_name: &record.certification_name,
            certification_start: long_datetime(record.certification_start),
            certification_status: record.certification_status.to_string(),
            compliance_status: flag(record.is_compliant()),
            employee_email: &record.employee.email,
            employee_id: record.employee.emp_id,
            employee_job_title: &record.employee.job_title,
            employee_name: &record.employee.name,
            is_active_campaign: flag(record.is_active_campaign()),
            is_current: flag(record.is_current),
            level_1,
            level_2,
            level_3,
            level_4,
            level_5,
            level_6,
            manager_email: &record.employee.manager_email,
            manager_emp_id: record.employee.manager_emp_id,
            manager_name: &record.employee.manager_name,
            past_due: if past_due { "Past Due" } else { "" },
            phase_by_sla: record.phase_by_sla().to_string(),
            reviewer_email: &record.reviewer_email,
            reviewer_name: &record.reviewer_name,
            tl_date: tl_date(record.tl_date),
            uar_source: &record.uar_source,
            unique_key: &record.unique_key,
            user_access_grouping: access_grouping(due_in_days),
            completed_certifications: record.completed_certifications,
            total_certifications: record.total_certifications,
            due_in_days,
            termination_requested: deprovisioning
                .map(|d| long_datetime(d.requested_at))
                .unwrap_or_default(),
            deprovision_completed: deprovisioning
                .map(|d| long_datetime(d.completed_at))
                .unwrap_or_default(),
            minutes_to_deprovision: deprovisioning.map(|d| d.minutes()),
            deprovision_compliance: record.deprovision_compliance().map(flag).unwrap_or_default(),
        }
    }
}

/// Write records with a header row using `delimiter`.
///
/// An empty record set still produces the header.
pub fn write_delimited<W: Write>(
    records: &[Record],
    as_of: DateTime<Utc>,
    writer: W,
    delimiter: u8,
) -> CliResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(COLUMN_NAMES)?;
    for record in records {
        wtr.serialize(ExportRow::new(record, as_of))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export records as CSV.
pub fn write_csv<W: Write>(records: &[Record], as_of: DateTime<Utc>, writer: W) -> CliResult<()> {
    write_delimited(records, as_of, writer, b',')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uarsynth::{generate, GeneratorConfig};

    fn dataset() -> uarsynth::GeneratedDataset {
        generate(&GeneratorConfig {
            record_count: 40,
            employee_count: 15,
            campaign_count: 6,
            seed: Some(12345),
            evaluation_instant: Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        })
        .unwrap()
    }

    fn export(data: &uarsynth::GeneratedDataset) -> String {
        let mut buffer = Vec::new();
        write_csv(&data.records, data.evaluated_at, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_matches_column_names() {
        let data = dataset();
        let output = export(&data);
        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, COLUMN_NAMES.to_vec());
        assert_eq!(reader.records().count(), 40);
    }

    #[test]
    fn test_level_columns_keep_export_positions() {
        let position = |name: &str| COLUMN_NAMES.iter().position(|c| *c == name).unwrap();
        assert_eq!(position("Level 3"), position("Employee Name") + 1);
        assert_eq!(position("Level 1"), position("Is Current") + 1);
        assert_eq!(position("Level 5"), position("Level 1") + 1);
        assert_eq!(position("Level 6"), position("Level 5") + 1);
        assert_eq!(position("Level 4"), position("Reviewer Name") + 1);
        assert_eq!(position("Level 2"), position("User Access Grouping") + 1);
        assert_eq!(COLUMN_NAMES[19], "Level 3");
        assert_eq!(COLUMN_NAMES[37], "Level 2");
    }

    #[test]
    fn test_row_fields_serialize_in_column_order() {
        let data = dataset();
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.serialize(ExportRow::new(&data.records[0], data.evaluated_at))
            .unwrap();
        let output = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, COLUMN_NAMES.to_vec());

        let row = reader.records().next().unwrap().unwrap();
        let levels = data.records[0].employee.org.levels();
        assert_eq!(&row[19], levels[2]);
        assert_eq!(&row[22], levels[0]);
        assert_eq!(&row[37], levels[1]);
    }

    #[test]
    fn test_empty_record_set_writes_header_only() {
        let mut buffer = Vec::new();
        write_csv(&[], Utc::now(), &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("Campaign Created Datetime,Campaign End Datetime,"));
    }

    #[test]
    fn test_row_fields_follow_record() {
        let data = dataset();
        for record in &data.records {
            let row = ExportRow::new(record, data.evaluated_at);
            assert_eq!(row.compliance_status, flag(record.is_compliant()));
            assert_eq!(row.phase_by_sla, record.phase_by_sla().to_string());
            assert_eq!(row.data_as_of, row.campaign_load_date);
            assert_eq!(row.level_6, row.manager_name);
            assert_eq!(row.certification_end.is_empty(), record.certification_end.is_none());
            match record.deprovisioning.as_ref() {
                Some(d) => {
                    assert_eq!(row.minutes_to_deprovision, Some(d.minutes()));
                    assert_eq!(row.deprovision_compliance, flag(d.is_compliant()));
                }
                None => {
                    assert!(row.termination_requested.is_empty());
                    assert!(row.deprovision_completed.is_empty());
                    assert_eq!(row.deprovision_compliance, "");
                }
            }
            if row.past_due == "Past Due" {
                assert!(row.due_in_days < 0);
                assert_ne!(record.certification_status, uarsynth::CertificationStatus::Closed);
            }
        }
    }

    #[test]
    fn test_quoting_of_commas() {
        let data = dataset();
        let output = export(&data);
        let mut reader = csv::Reader::from_reader(output.as_bytes());
        for (row, record) in reader.records().zip(&data.records) {
            let row = row.unwrap();
            assert_eq!(&row[4], record.campaign.name.as_str());
            assert_eq!(row.len(), COLUMN_NAMES.len());
        }
    }
}
