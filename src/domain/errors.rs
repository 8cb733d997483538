// Domain-level errors. Only configuration and environment edges can fail;
// the per-tick pipeline degrades to a no-op instead.

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    Read(std::io::Error),
    Parse(toml::de::Error),
    MissingDefaultWeapon,
    AlphaOutOfRange { name: &'static str, value: f64 },
    NotPositive { name: &'static str, value: f64 },
    Negative { name: &'static str, value: f64 },
    TickIntervalOutOfRange { millis: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(err) => write!(f, "failed to read tuning file: {err}"),
            ConfigError::Parse(err) => write!(f, "failed to parse tuning file: {err}"),
            ConfigError::MissingDefaultWeapon => {
                write!(f, "weapon table must contain a \"default\" entry")
            }
            ConfigError::AlphaOutOfRange { name, value } => {
                write!(f, "{name} must be within [0, 1], got {value}")
            }
            ConfigError::NotPositive { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            ConfigError::Negative { name, value } => {
                write!(f, "{name} must not be negative, got {value}")
            }
            ConfigError::TickIntervalOutOfRange { millis } => {
                write!(f, "tick interval must be within 8..=16 ms, got {millis} ms")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug)]
pub enum SourceError {
    Read(std::io::Error),
    Decode(serde_json::Error),
    EmptyReplay,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Read(err) => write!(f, "failed to read replay: {err}"),
            SourceError::Decode(err) => write!(f, "failed to decode replay: {err}"),
            SourceError::EmptyReplay => write!(f, "replay contains no frames"),
        }
    }
}

impl std::error::Error for SourceError {}
