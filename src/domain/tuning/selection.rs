// Tuning for candidate selection.

use super::{non_negative, positive};
use crate::domain::errors::ConfigError;
use crate::domain::vector::Vec3;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionTuning {
    /// Field-of-view gate in degrees.
    pub fov_degrees: f64,

    /// Compare the deviation against half of `fov_degrees` instead of the full angle.
    pub half_angle_gate: bool,

    /// Score penalty per radian of yaw deviation.
    pub angle_weight: f64,

    /// Offset from a candidate's base position to its head.
    pub head_offset: Vec3,
}

impl Default for SelectionTuning {
    fn default() -> Self {
        Self {
            fov_degrees: 180.0,
            half_angle_gate: false,
            angle_weight: 15.0,
            head_offset: Vec3::new(-0.04089227, 0.00907892, 0.02748467),
        }
    }
}

impl SelectionTuning {
    /// Largest accepted yaw deviation in radians.
    pub fn max_deviation(&self) -> f64 {
        let limit = self.fov_degrees.to_radians();
        if self.half_angle_gate {
            limit / 2.0
        } else {
            limit
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        positive("selection.fov_degrees", self.fov_degrees)?;
        non_negative("selection.angle_weight", self.angle_weight)
    }
}
