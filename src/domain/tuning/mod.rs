// Gameplay tuning for the aim pipeline.
//
// Keep this separate from runtime configuration (tick rate, file paths, log format).
pub mod filter;
pub mod selection;
pub mod weapon;

pub use filter::FilterTuning;
pub use selection::SelectionTuning;
pub use weapon::{DEFAULT_WEAPON, RecoilTuning, WeaponEntry, WeaponGain, WeaponTable};

use crate::domain::errors::ConfigError;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AimTuning {
    pub selection: SelectionTuning,
    pub filter: FilterTuning,
    pub weapons: WeaponTable,

    /// Distance from the camera aim point below which fire is pulsed.
    pub snap_radius: f64,

    /// How long the fire button is held per pulse, in milliseconds.
    pub fire_hold_ms: u64,

    /// Nominal seconds between samples used to derive candidate velocity.
    pub velocity_dt: f64,
}

impl Default for AimTuning {
    fn default() -> Self {
        Self {
            selection: SelectionTuning::default(),
            filter: FilterTuning::default(),
            weapons: WeaponTable::default(),
            snap_radius: 9999.0,
            fire_hold_ms: 55,
            velocity_dt: 0.016,
        }
    }
}

impl AimTuning {
    /// Parses TOML tuning and validates it. Missing sections keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let tuning: AimTuning = toml::from_str(text).map_err(ConfigError::Parse)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.selection.validate()?;
        self.filter.validate()?;
        non_negative("snap_radius", self.snap_radius)?;
        positive("fire_hold_ms", self.fire_hold_ms as f64)?;
        positive("velocity_dt", self.velocity_dt)
    }

    pub fn fire_hold(&self) -> Duration {
        Duration::from_millis(self.fire_hold_ms)
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

pub(crate) fn unit_interval(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::AlphaOutOfRange { name, value })
    }
}
