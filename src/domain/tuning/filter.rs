// Tuning for head prediction and smoothing.

use super::{positive, unit_interval};
use crate::domain::errors::ConfigError;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterTuning {
    /// Weight of the new sample in the first blend.
    pub smoothing_alpha: f64,

    /// Weight of the first blend's output in the second blend.
    pub stabilizer_alpha: f64,

    /// Seconds of velocity extrapolation applied to the head.
    pub prediction_dt: f64,

    /// Vertical bias added to the head before armor scaling.
    pub armor_bias: f64,

    /// Fraction of `armor_bias` removed per armor level.
    pub armor_step: f64,

    /// Fraction of accumulated recoil kept between ticks (0 resets every tick).
    pub recoil_retain: f64,
}

impl Default for FilterTuning {
    fn default() -> Self {
        Self {
            smoothing_alpha: 0.65,
            stabilizer_alpha: 0.75,
            prediction_dt: 0.016,
            armor_bias: 0.015,
            armor_step: 0.1,
            recoil_retain: 0.0,
        }
    }
}

impl FilterTuning {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        unit_interval("filter.smoothing_alpha", self.smoothing_alpha)?;
        unit_interval("filter.stabilizer_alpha", self.stabilizer_alpha)?;
        unit_interval("filter.recoil_retain", self.recoil_retain)?;
        positive("filter.prediction_dt", self.prediction_dt)
    }
}
