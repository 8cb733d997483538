// Use-case level outputs of the aim loop.

use super::fire::FireOutcome;
use crate::domain::{AimDelta, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoObserver,
    NoCandidates,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AimReport {
    pub target_id: Option<u64>,
    /// Filtered world-space point the aim was computed toward.
    pub aim_point: Vec3,
    /// Delta sent to the input sink; `None` when the point coincided with the observer.
    pub delta: Option<AimDelta>,
    /// Set when the aim point fell inside the trigger zone.
    pub fire: Option<FireOutcome>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Skipped(SkipReason),
    NoTarget,
    Aimed(AimReport),
}

/// Counters collected by the poll loop until shutdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollSummary {
    pub ticks: u64,
    pub aimed: u64,
    pub no_target: u64,
    pub skipped: u64,
    pub source_failures: u64,
    pub fire_pulses: u64,
}

impl PollSummary {
    pub(crate) fn record(&mut self, outcome: &TickOutcome) {
        self.ticks += 1;
        match outcome {
            TickOutcome::Skipped(_) => self.skipped += 1,
            TickOutcome::NoTarget => self.no_target += 1,
            TickOutcome::Aimed(report) => {
                self.aimed += 1;
                if report.fire == Some(FireOutcome::Fired) {
                    self.fire_pulses += 1;
                }
            }
        }
    }

    pub(crate) fn record_failure(&mut self) {
        self.ticks += 1;
        self.source_failures += 1;
    }
}
