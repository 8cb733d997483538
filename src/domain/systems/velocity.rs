use crate::domain::state::Candidate;
use crate::domain::vector::Vec3;
use std::collections::{HashMap, HashSet};

/// Identity used to pair a candidate with its head from the previous tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrackKey {
    Entity(u64),
    /// Base position rounded to 3 decimals, for sources without entity ids.
    Quantized(String),
}

impl TrackKey {
    pub fn for_candidate(candidate: &Candidate) -> Self {
        match candidate.id {
            Some(id) => TrackKey::Entity(id),
            None => {
                // `+ 0.0` turns -0.0 into 0.0 so both format as "0.000".
                let p = candidate.position;
                TrackKey::Quantized(format!(
                    "{:.3}_{:.3}_{:.3}",
                    p.x + 0.0,
                    p.y + 0.0,
                    p.z + 0.0
                ))
            }
        }
    }
}

/// Derives candidate velocity from head movement between ticks.
#[derive(Debug, Default)]
pub struct VelocityTracker {
    previous_heads: HashMap<TrackKey, Vec3>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites each candidate's velocity with `(head - previous_head) / dt`.
    ///
    /// Unknown candidates get zero velocity. Entries not seen in this call are dropped.
    pub fn update(&mut self, candidates: &mut [Candidate], dt: f64) {
        let mut seen = HashSet::with_capacity(candidates.len());

        for candidate in candidates.iter_mut() {
            let key = TrackKey::for_candidate(candidate);
            let previous = self
                .previous_heads
                .get(&key)
                .copied()
                .unwrap_or(candidate.head);
            candidate.velocity = (candidate.head - previous) * (1.0 / dt);
            self.previous_heads.insert(key.clone(), candidate.head);
            seen.insert(key);
        }

        self.previous_heads.retain(|key, _| seen.contains(key));
    }

    pub fn tracked(&self) -> usize {
        self.previous_heads.len()
    }

    pub fn previous_head(&self, key: &TrackKey) -> Option<Vec3> {
        self.previous_heads.get(key).copied()
    }
}
