//! Overflow-checked date arithmetic.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::error::{GeneratorError, Result};

/// Shift `instant` by a signed number of days.
pub fn add_days(instant: DateTime<Utc>, days: i64, context: &str) -> Result<DateTime<Utc>> {
    Duration::try_days(days)
        .and_then(|delta| instant.checked_add_signed(delta))
        .ok_or_else(|| GeneratorError::date_out_of_range(context))
}

/// Shift `instant` by a signed number of minutes.
pub fn add_minutes(instant: DateTime<Utc>, minutes: i64, context: &str) -> Result<DateTime<Utc>> {
    Duration::try_minutes(minutes)
        .and_then(|delta| instant.checked_add_signed(delta))
        .ok_or_else(|| GeneratorError::date_out_of_range(context))
}

/// First calendar day of the month containing `instant`.
pub fn first_of_month(instant: DateTime<Utc>) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(instant.year(), instant.month(), 1)
        .ok_or_else(|| GeneratorError::date_out_of_range("first day of month"))
}

/// Same calendar day as `instant` at `hour:minute:00`.
pub fn at_time_of_day(instant: DateTime<Utc>, hour: u32, minute: u32) -> Result<DateTime<Utc>> {
    instant
        .date_naive()
        .and_hms_opt(hour, minute, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| GeneratorError::date_out_of_range("time of day"))
}
