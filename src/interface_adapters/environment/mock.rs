use async_trait::async_trait;

use crate::domain::errors::SourceError;
use crate::domain::ports::EnvironmentSource;
use crate::domain::state::{Candidate, Observer, Snapshot};
use crate::domain::vector::{Mat3x4, Vec3};

/// Fixed scene: one standing observer, one armored enemy, the same every tick.
///
/// The enemy carries no entity id, so velocity tracking falls back to the quantized
/// position key. Its head is bone-local and comes with the rig's bindpose.
#[derive(Debug, Clone)]
pub struct MockEnvironment {
    snapshot: Snapshot,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot {
                observer: Some(Observer {
                    position: Vec3::new(0.0, 1.7, 0.0),
                    aim_point: Vec3::new(-0.0456970781, -0.004478302, -0.0200432576),
                    yaw: 0.0,
                }),
                candidates: vec![Candidate {
                    id: None,
                    position: Vec3::new(2.0, 1.7, 5.0),
                    head: Vec3::new(-0.0456970781, -0.004478302, -0.0200432576),
                    velocity: Vec3::ZERO,
                    health: 500,
                    armor_level: 2.0,
                    bindpose: Some(Mat3x4::from_rows([
                        [-1.34559613E-13, 8.881784E-14, -1.0, 0.487912],
                        [-2.84512817E-06, -1.0, 8.881784E-14, -2.842171E-14],
                        [-1.0, 2.84512817E-06, -1.72951931E-13, 0.0],
                    ])),
                }],
                weapon: "m1887".to_string(),
            },
        }
    }
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EnvironmentSource for MockEnvironment {
    async fn snapshot(&self) -> Result<Snapshot, SourceError> {
        Ok(self.snapshot.clone())
    }
}
