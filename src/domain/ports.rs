use async_trait::async_trait;

use crate::domain::errors::SourceError;
use crate::domain::state::{AimDelta, Snapshot};

// Port for reading the observer, candidates and equipped weapon once per tick.
#[async_trait]
pub trait EnvironmentSource: Send + Sync {
    async fn snapshot(&self) -> Result<Snapshot, SourceError>;
}

// Port for the device that receives aim movement.
pub trait InputSink: Send + Sync {
    fn send(&self, delta: AimDelta);
}

// Port for querying and driving the fire button.
pub trait FireControl: Send + Sync {
    fn is_firing(&self) -> bool;
    fn start_fire(&self);
    fn stop_fire(&self);
}
