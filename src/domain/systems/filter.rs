use crate::domain::state::Target;
use crate::domain::tuning::{FilterTuning, RecoilTuning};
use crate::domain::vector::Vec3;

/// Exponential blend `alpha * current + (1 - alpha) * previous`, per axis.
pub fn blend(current: Vec3, previous: Vec3, alpha: f64) -> Vec3 {
    Vec3::new(
        alpha * current.x + (1.0 - alpha) * previous.x,
        alpha * current.y + (1.0 - alpha) * previous.y,
        alpha * current.z + (1.0 - alpha) * previous.z,
    )
}

/// Horizontal/vertical aim correction produced by the recoil accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecoilOffset {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct FilterState {
    last_output: Vec3,
    recoil: RecoilOffset,
}

/// Head prediction followed by two cascaded exponential blends.
///
/// Both blends use the previous *output* as their reference, so the second stage pulls
/// the first stage's result back toward the same prior value. Neither stage tracks
/// variance; this is plain low-pass smoothing.
#[derive(Debug, Clone)]
pub struct PredictionFilter {
    tuning: FilterTuning,
    state: FilterState,
}

impl PredictionFilter {
    pub fn new(tuning: FilterTuning) -> Self {
        Self {
            tuning,
            state: FilterState::default(),
        }
    }

    pub fn last_output(&self) -> Vec3 {
        self.state.last_output
    }

    pub fn reset(&mut self) {
        self.state = FilterState::default();
    }

    /// Linear extrapolation of the target head by its velocity.
    pub fn predict_head(&self, target: &Target, dt: f64) -> Vec3 {
        target.head + target.candidate.velocity * dt
    }

    /// Raises the aim point by a bias that shrinks with armor level.
    pub fn compensate_armor(&self, head: Vec3, armor_level: f64) -> Vec3 {
        let bias = self.tuning.armor_bias * (1.0 - armor_level * self.tuning.armor_step);
        Vec3::new(head.x, head.y + bias, head.z)
    }

    /// Runs one filter step with the configured prediction horizon.
    pub fn compute(&mut self, target: &Target) -> Vec3 {
        self.compute_target(target, self.tuning.prediction_dt)
    }

    pub fn compute_target(&mut self, target: &Target, dt: f64) -> Vec3 {
        let predicted = self.predict_head(target, dt);
        let compensated = self.compensate_armor(predicted, target.candidate.armor_level);
        self.apply(compensated)
    }

    /// Feeds an already compensated point through both blend stages.
    pub fn apply(&mut self, compensated: Vec3) -> Vec3 {
        let last = self.state.last_output;
        let smoothed = blend(compensated, last, self.tuning.smoothing_alpha);
        let filtered = blend(smoothed, last, self.tuning.stabilizer_alpha);
        self.state.last_output = filtered;
        filtered
    }

    /// Accumulates weapon recoil and returns the opposing correction.
    ///
    /// With `recoil_retain = 0` the accumulator is cleared on every call and the
    /// correction is always zero.
    pub fn recoil_offset(&mut self, recoil: RecoilTuning) -> RecoilOffset {
        let acc = &mut self.state.recoil;
        acc.x = (acc.x + recoil.x) * self.tuning.recoil_retain;
        acc.y = (acc.y + recoil.y) * self.tuning.recoil_retain;
        RecoilOffset {
            x: -acc.x,
            y: -acc.y,
        }
    }
}
