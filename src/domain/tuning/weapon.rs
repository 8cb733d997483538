// Per-weapon gain and recoil table.

use crate::domain::errors::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Key of the entry every unknown weapon falls back to.
pub const DEFAULT_WEAPON: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeaponGain {
    pub yaw: f64,
    pub pitch: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecoilTuning {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeaponEntry {
    pub gain: WeaponGain,
    pub recoil: RecoilTuning,
}

/// Weapon lookup table. Always holds a `"default"` entry, so resolving never fails.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "BTreeMap<String, WeaponEntry>")]
pub struct WeaponTable {
    fallback: WeaponEntry,
    entries: BTreeMap<String, WeaponEntry>,
}

impl WeaponTable {
    pub fn new(fallback: WeaponEntry) -> Self {
        Self {
            fallback,
            entries: BTreeMap::new(),
        }
    }

    pub fn with_weapon(mut self, name: impl Into<String>, entry: WeaponEntry) -> Self {
        let name = name.into();
        if name == DEFAULT_WEAPON {
            self.fallback = entry;
        } else {
            self.entries.insert(name, entry);
        }
        self
    }

    /// Entry for `weapon`, or the default entry when it is not listed.
    pub fn resolve(&self, weapon: &str) -> &WeaponEntry {
        self.entries.get(weapon).unwrap_or(&self.fallback)
    }

    pub fn gain(&self, weapon: &str) -> WeaponGain {
        self.resolve(weapon).gain
    }

    pub fn recoil(&self, weapon: &str) -> RecoilTuning {
        self.resolve(weapon).recoil
    }

    pub fn contains(&self, weapon: &str) -> bool {
        weapon == DEFAULT_WEAPON || self.entries.contains_key(weapon)
    }
}

impl TryFrom<BTreeMap<String, WeaponEntry>> for WeaponTable {
    type Error = ConfigError;

    fn try_from(mut entries: BTreeMap<String, WeaponEntry>) -> Result<Self, Self::Error> {
        let fallback = entries
            .remove(DEFAULT_WEAPON)
            .ok_or(ConfigError::MissingDefaultWeapon)?;
        Ok(Self { fallback, entries })
    }
}

impl Default for WeaponTable {
    fn default() -> Self {
        // Every weapon shares the same values for now; the names stay so tuning files can
        // override them one by one.
        let entry = WeaponEntry {
            gain: WeaponGain {
                yaw: 999.0,
                pitch: 999.0,
            },
            recoil: RecoilTuning { x: 100.0, y: 100.0 },
        };
        ["m1887", "mp40", "awm", "ak", "ump", "m1014", "m590", "mac10"]
            .into_iter()
            .fold(WeaponTable::new(entry), |table, name| {
                table.with_weapon(name, entry)
            })
    }
}
