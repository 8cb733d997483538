use crate::domain::errors::ConfigError;
use crate::domain::tuning::AimTuning;
use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

// Runtime constants (not gameplay tuning).

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 8;
pub const MIN_TICK_INTERVAL_MS: u64 = 8;
pub const MAX_TICK_INTERVAL_MS: u64 = 16;

pub fn tick_interval() -> Result<Duration, ConfigError> {
    let millis = env::var("AIM_TICK_INTERVAL_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TICK_INTERVAL_MS);
    checked_tick_interval(millis)
}

pub fn checked_tick_interval(millis: u64) -> Result<Duration, ConfigError> {
    if (MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&millis) {
        Ok(Duration::from_millis(millis))
    } else {
        Err(ConfigError::TickIntervalOutOfRange { millis })
    }
}

pub fn tuning_path() -> Option<PathBuf> {
    env::var_os("AIM_TUNING_PATH").map(PathBuf::from)
}

pub fn replay_path() -> Option<PathBuf> {
    env::var_os("AIM_REPLAY_PATH").map(PathBuf::from)
}

/// Reads tuning from a TOML file, or returns the defaults when no path is given.
pub async fn load_tuning(path: Option<&Path>) -> Result<AimTuning, ConfigError> {
    let Some(path) = path else {
        return Ok(AimTuning::default());
    };
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(ConfigError::Read)?;
    AimTuning::from_toml(&text)
}
