use super::fire::FireTrigger;
use super::types::{AimReport, SkipReason, TickOutcome};
use crate::domain::errors::ConfigError;
use crate::domain::ports::{FireControl, InputSink};
use crate::domain::state::{AimDelta, Snapshot};
use crate::domain::systems::filter::PredictionFilter;
use crate::domain::systems::velocity::VelocityTracker;
use crate::domain::systems::{projection, selection};
use crate::domain::tuning::AimTuning;
use std::sync::Arc;
use tracing::debug;

/// Long-lived owner of all per-tick state: previous heads, filter output and the
/// pending fire release.
pub struct AimEngine {
    tuning: AimTuning,
    tracker: VelocityTracker,
    filter: PredictionFilter,
    input: Arc<dyn InputSink>,
    fire: FireTrigger,
}

impl AimEngine {
    pub fn new(
        tuning: AimTuning,
        input: Arc<dyn InputSink>,
        fire_control: Arc<dyn FireControl>,
    ) -> Result<Self, ConfigError> {
        tuning.validate()?;
        Ok(Self {
            filter: PredictionFilter::new(tuning.filter),
            fire: FireTrigger::new(fire_control, tuning.fire_hold()),
            tracker: VelocityTracker::new(),
            tuning,
            input,
        })
    }

    pub fn tracked_candidates(&self) -> usize {
        self.tracker.tracked()
    }

    /// Runs select, filter, project and the trigger-zone check for one snapshot.
    ///
    /// Velocities are refreshed before anything else, so a skipped tick still
    /// records head positions for the next one. Fire pulses need a tokio runtime for
    /// their release; without one the report carries [`FireOutcome::NoRuntime`].
    ///
    /// [`FireOutcome::NoRuntime`]: super::fire::FireOutcome::NoRuntime
    pub fn tick(&mut self, mut snapshot: Snapshot) -> TickOutcome {
        self.tracker
            .update(&mut snapshot.candidates, self.tuning.velocity_dt);

        let Some(observer) = snapshot.observer else {
            return TickOutcome::Skipped(SkipReason::NoObserver);
        };
        if snapshot.candidates.is_empty() {
            return TickOutcome::Skipped(SkipReason::NoCandidates);
        }

        let Some(target) =
            selection::select_best(&observer, &snapshot.candidates, &self.tuning.selection)
        else {
            return TickOutcome::NoTarget;
        };

        let aim_point = self.filter.compute(&target);

        let weapon = self.tuning.weapons.resolve(&snapshot.weapon);
        let recoil = self.filter.recoil_offset(weapon.recoil);
        let delta =
            projection::project(observer.position, aim_point, weapon.gain).map(|d| AimDelta {
                dx: d.dx + recoil.x,
                dy: d.dy + recoil.y,
            });
        if let Some(delta) = delta {
            self.input.send(delta);
        }

        let fire = projection::is_within_trigger_zone(
            observer.aim_point,
            aim_point,
            self.tuning.snap_radius,
        )
        .then(|| self.fire.trigger());

        debug!(
            target_id = ?target.candidate.id,
            score = target.score,
            weapon = %snapshot.weapon,
            ?delta,
            ?fire,
            "aimed"
        );

        TickOutcome::Aimed(AimReport {
            target_id: target.candidate.id,
            aim_point,
            delta,
            fire,
        })
    }

    /// Releases fire if a release is still pending.
    pub fn shutdown(&mut self) {
        self.fire.release();
    }
}
