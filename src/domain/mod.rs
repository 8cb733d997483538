// Domain layer: vector math, aim pipeline rules and tuning.

pub mod errors;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;
pub mod vector;

pub use errors::{ConfigError, SourceError};
pub use state::{AimDelta, Candidate, Observer, Snapshot, Target};
pub use tuning::AimTuning;
pub use vector::{CameraBasis, Mat3x4, Vec3};
