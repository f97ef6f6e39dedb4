//! Post-generation calibration of compliance rates.
//!
//! Two passes run over an already generated population:
//!
//! 1. [`calibrate_compliance`] forces the compliant-record count toward
//!    `round(N * rate)` by rewriting the phase of randomly selected records.
//! 2. [`calibrate_deprovisioning`] does the same for the deprovisioning SLA,
//!    over records that carry a deprovisioning sub-record, by redrawing the
//!    interval on either side of the SLA threshold.
//!
//! Selection is an unbiased partial Fisher-Yates shuffle of the eligible
//! pool drawn from the run's stream. A pass never fails on an unreachable
//! target: it logs a warning and reports the shortfall.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::TerminationConfig;
use crate::error::Result;
use crate::services::record_synthesizer::Record;
use crate::stream::DeterministicStream;
use crate::types::PhaseBySla;

// ============================================================================
// Reports
// ============================================================================

/// How a calibration pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationOutcome {
    /// The population already matched the target.
    AlreadyOnTarget,
    /// Records were flipped and the target was met.
    Reached,
    /// Records were flipped but the target was not met.
    Shortfall,
    /// Nothing could be flipped (empty population or empty required pool).
    Skipped,
}

/// Summary of one calibration pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalibrationReport {
    /// Number of records the pass considered.
    pub population: usize,
    /// Compliant count before the pass.
    pub before: usize,
    /// `round(population * rate)`.
    pub target: usize,
    /// Compliant count after the pass.
    pub after: usize,
    /// Records whose verdict changed.
    pub flipped: usize,
    /// Selected `CLOSED` records left untouched while reducing compliance.
    pub skipped_closed: usize,
    /// How the pass ended.
    pub outcome: CalibrationOutcome,
}

impl CalibrationReport {
    fn unchanged(
        population: usize,
        compliant: usize,
        target: usize,
        outcome: CalibrationOutcome,
    ) -> Self {
        Self {
            population,
            before: compliant,
            target,
            after: compliant,
            flipped: 0,
            skipped_closed: 0,
            outcome,
        }
    }

    #[must_use]
    pub fn met_target(&self) -> bool {
        self.after == self.target
    }

    /// Compliant share after the pass, or 0 for an empty population.
    #[must_use]
    pub fn rate_after(&self) -> f64 {
        if self.population == 0 {
            0.0
        } else {
            self.after as f64 / self.population as f64
        }
    }

    /// Compliant share before the pass, or 0 for an empty population.
    #[must_use]
    pub fn rate_before(&self) -> f64 {
        if self.population == 0 {
            0.0
        } else {
            self.before as f64 / self.population as f64
        }
    }
}

/// `round(population * rate)`, saturating at the population size.
#[must_use]
pub fn target_count(population: usize, rate: f64) -> usize {
    let target = (population as f64 * rate).round();
    if target <= 0.0 {
        0
    } else {
        (target as usize).min(population)
    }
}

// ============================================================================
// Certification Compliance
// ============================================================================

/// Calibrate certification compliance across `records`.
///
/// Raising compliance moves a record to the within-SLA phase for its status.
/// Lowering compliance moves open records to "Open Past SLA"; selected
/// `CLOSED` records are skipped without replacement, so the realized count
/// can fall short of the target.
pub fn calibrate_compliance(
    records: &mut [Record],
    target_rate: f64,
    stream: &mut DeterministicStream,
) -> CalibrationReport {
    let population = records.len();
    let before = records.iter().filter(|r| r.is_compliant()).count();
    let target = target_count(population, target_rate);

    info!(
        population,
        current = before,
        target_compliant = target,
        "Calibrating certification compliance"
    );

    if target == before {
        return CalibrationReport::unchanged(
            population,
            before,
            target,
            CalibrationOutcome::AlreadyOnTarget,
        );
    }

    let raise = target > before;
    let mut pool: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_compliant() != raise)
        .map(|(i, _)| i)
        .collect();

    if pool.is_empty() {
        warn!(
            direction = if raise { "raise" } else { "lower" },
            "No records available to calibrate certification compliance"
        );
        return CalibrationReport::unchanged(
            population,
            before,
            target,
            CalibrationOutcome::Skipped,
        );
    }

    let needed = before.abs_diff(target);
    let take = needed.min(pool.len());
    stream.partial_shuffle(&mut pool, take);

    let mut flipped = 0;
    let mut skipped_closed = 0;
    for &index in &pool[..take] {
        let record = &mut records[index];
        if raise {
            record.set_phase(PhaseBySla::within_sla(record.certification_status));
            flipped += 1;
        } else if record.certification_status.is_closed() {
            skipped_closed += 1;
        } else {
            record.set_phase(PhaseBySla::OpenPastSla);
            flipped += 1;
        }
    }

    let after = records.iter().filter(|r| r.is_compliant()).count();
    let report = finish(population, before, target, after, flipped, skipped_closed);
    info!(
        flipped,
        skipped_closed,
        after,
        outcome = ?report.outcome,
        "Certification compliance calibrated"
    );
    if !report.met_target() {
        warn!(
            target_compliant = target,
            after,
            skipped_closed,
            "Certification compliance target not reached"
        );
    }
    report
}

// ============================================================================
// Deprovisioning Compliance
// ============================================================================

/// Calibrate deprovisioning SLA compliance over records with a sub-record.
///
/// Raising compliance redraws the interval in `[min_minutes, sla_minutes]`;
/// lowering redraws it in `(sla_minutes, max_minutes]`. Completion
/// timestamps are recomputed from the stored request timestamps.
pub fn calibrate_deprovisioning(
    records: &mut [Record],
    config: &TerminationConfig,
    stream: &mut DeterministicStream,
) -> Result<CalibrationReport> {
    let mut tracked: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.deprovisioning.is_some())
        .map(|(i, _)| i)
        .collect();
    let population = tracked.len();
    let is_compliant = |r: &Record| r.deprovision_compliance() == Some(true);
    let before = tracked.iter().filter(|&&i| is_compliant(&records[i])).count();
    let target = target_count(population, config.compliance_rate);

    if population == 0 {
        warn!("No termination records to calibrate");
        return Ok(CalibrationReport::unchanged(0, 0, 0, CalibrationOutcome::Skipped));
    }

    info!(
        population,
        current = before,
        target_compliant = target,
        "Calibrating deprovisioning compliance"
    );

    if target == before {
        return Ok(CalibrationReport::unchanged(
            population,
            before,
            target,
            CalibrationOutcome::AlreadyOnTarget,
        ));
    }

    let raise = target > before;
    if !raise && config.sla_minutes >= config.max_minutes {
        warn!(
            sla_minutes = config.sla_minutes,
            max_minutes = config.max_minutes,
            "No interval above the deprovisioning SLA fits the configured maximum"
        );
        return Ok(CalibrationReport::unchanged(
            population,
            before,
            target,
            CalibrationOutcome::Skipped,
        ));
    }

    tracked.retain(|&i| is_compliant(&records[i]) != raise);
    if tracked.is_empty() {
        warn!(
            direction = if raise { "raise" } else { "lower" },
            "No records available to calibrate deprovisioning compliance"
        );
        return Ok(CalibrationReport::unchanged(
            population,
            before,
            target,
            CalibrationOutcome::Skipped,
        ));
    }

    let take = before.abs_diff(target).min(tracked.len());
    stream.partial_shuffle(&mut tracked, take);

    let (low, high) = if raise {
        (config.min_minutes, config.sla_minutes + 1)
    } else {
        (config.sla_minutes + 1, config.max_minutes + 1)
    };

    let mut flipped = 0;
    for &index in &tracked[..take] {
        let minutes = stream.int_in(low, high);
        if let Some(deprovisioning) = records[index].deprovisioning.as_mut() {
            deprovisioning.reschedule(minutes, config.sla_minutes)?;
            flipped += 1;
        }
    }

    let after = records.iter().filter(|&r| is_compliant(r)).count();
    let report = finish(population, before, target, after, flipped, 0);
    info!(
        flipped,
        after,
        outcome = ?report.outcome,
        "Deprovisioning compliance calibrated"
    );
    Ok(report)
}

fn finish(
    population: usize,
    before: usize,
    target: usize,
    after: usize,
    flipped: usize,
    skipped_closed: usize,
) -> CalibrationReport {
    CalibrationReport {
        population,
        before,
        target,
        after,
        flipped,
        skipped_closed,
        outcome: if after == target {
            CalibrationOutcome::Reached
        } else {
            CalibrationOutcome::Shortfall
        },
    }
}
