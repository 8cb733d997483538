use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::errors::SourceError;
use crate::domain::ports::EnvironmentSource;
use crate::domain::state::Snapshot;

/// Plays back recorded snapshots in order, wrapping at the end.
///
/// The JSON form is an array of snapshots:
/// `[{"observer": {...}, "candidates": [...], "weapon": "ak"}, ...]`.
#[derive(Debug)]
pub struct ReplayEnvironment {
    frames: Vec<Snapshot>,
    cursor: AtomicUsize,
}

impl ReplayEnvironment {
    pub fn from_frames(frames: Vec<Snapshot>) -> Result<Self, SourceError> {
        if frames.is_empty() {
            return Err(SourceError::EmptyReplay);
        }
        Ok(Self {
            frames,
            cursor: AtomicUsize::new(0),
        })
    }

    pub fn from_json(text: &str) -> Result<Self, SourceError> {
        let frames: Vec<Snapshot> = serde_json::from_str(text).map_err(SourceError::Decode)?;
        Self::from_frames(frames)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(SourceError::Read)?;
        Self::from_json(&text)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[async_trait]
impl EnvironmentSource for ReplayEnvironment {
    async fn snapshot(&self) -> Result<Snapshot, SourceError> {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.frames.len();
        Ok(self.frames[index].clone())
    }
}
