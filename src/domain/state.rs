// Domain-level snapshots of the observer and candidate targets.

use super::vector::{Mat3x4, Vec3};
use serde::{Deserialize, Serialize};

/// Observer pose as reported by the environment for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    pub position: Vec3,
    /// Point the camera currently looks at; used by the trigger zone.
    pub aim_point: Vec3,
    /// Facing yaw in radians.
    pub yaw: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Stable entity id when the source has one.
    #[serde(default)]
    pub id: Option<u64>,
    pub position: Vec3,
    pub head: Vec3,

    // Derived each tick from head movement; whatever the source sends is overwritten.
    #[serde(default)]
    pub velocity: Vec3,

    pub health: i32,
    pub armor_level: f64,

    /// Head-bone bindpose. When present, `head` is bone-local and resolved through it.
    #[serde(default)]
    pub bindpose: Option<Mat3x4>,
}

impl Candidate {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// A selected candidate with its resolved aim head.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub candidate: Candidate,
    pub head: Vec3,
    pub score: f64,
}

/// Everything the environment reports for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub observer: Option<Observer>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub weapon: String,
}

/// Yaw/pitch movement handed to the input sink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AimDelta {
    pub dx: f64,
    pub dy: f64,
}
