//! Run reporting
//!
//! The statistics report summarizes a generated dataset: distributions,
//! calibration outcomes, the monthly trendline and termination metrics.

pub mod stats;

pub use stats::{odm_metrics, thousands, DatasetStats, MonthlyStats, OdmMetrics};

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Default companion statistics path for a run finishing at `now`.
pub fn default_stats_path(now: DateTime<Utc>) -> PathBuf {
    PathBuf::from(format!("uar_stats_{}.txt", now.format("%Y-%m-%dT%H-%M-%S")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_stats_path() {
        let now = Utc.with_ymd_and_hms(2025, 10, 3, 14, 5, 9).unwrap();
        assert_eq!(
            default_stats_path(now),
            PathBuf::from("uar_stats_2025-10-03T14-05-09.txt")
        );
    }
}
