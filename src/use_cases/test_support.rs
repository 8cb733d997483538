use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::ports::{FireControl, InputSink};
use crate::domain::state::{AimDelta, Candidate, Observer, Snapshot};
use crate::domain::tuning::{AimTuning, RecoilTuning, WeaponEntry, WeaponGain, WeaponTable};
use crate::domain::vector::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FireEvent {
    Start,
    Stop,
}

#[derive(Default)]
pub(crate) struct RecordingFireControl {
    events: Mutex<Vec<FireEvent>>,
    firing: AtomicBool,
}

impl RecordingFireControl {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn firing(self, firing: bool) -> Self {
        self.firing.store(firing, Ordering::SeqCst);
        self
    }

    pub(crate) fn events(&self) -> Vec<FireEvent> {
        self.events.lock().expect("events mutex poisoned").clone()
    }
}

impl FireControl for RecordingFireControl {
    fn is_firing(&self) -> bool {
        self.firing.load(Ordering::SeqCst)
    }

    fn start_fire(&self) {
        self.events
            .lock()
            .expect("events mutex poisoned")
            .push(FireEvent::Start);
    }

    fn stop_fire(&self) {
        self.events
            .lock()
            .expect("events mutex poisoned")
            .push(FireEvent::Stop);
    }
}

#[derive(Default)]
pub(crate) struct RecordingInputSink {
    deltas: Mutex<Vec<AimDelta>>,
}

impl RecordingInputSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn deltas(&self) -> Vec<AimDelta> {
        self.deltas.lock().expect("deltas mutex poisoned").clone()
    }
}

impl InputSink for RecordingInputSink {
    fn send(&self, delta: AimDelta) {
        self.deltas
            .lock()
            .expect("deltas mutex poisoned")
            .push(delta);
    }
}

pub(crate) type Recorders = (Arc<RecordingInputSink>, Arc<RecordingFireControl>);

pub(crate) fn recorders() -> Recorders {
    (
        Arc::new(RecordingInputSink::new()),
        Arc::new(RecordingFireControl::new()),
    )
}

/// Tuning with unit gains, no head offset and a tiny snap radius.
pub(crate) fn unit_tuning() -> AimTuning {
    let unit = WeaponEntry {
        gain: WeaponGain {
            yaw: 1.0,
            pitch: 1.0,
        },
        recoil: RecoilTuning { x: 0.0, y: 0.0 },
    };
    let mut tuning = AimTuning {
        weapons: WeaponTable::new(unit),
        snap_radius: 0.01,
        ..AimTuning::default()
    };
    tuning.selection.head_offset = Vec3::ZERO;
    tuning
}

pub(crate) fn standing_observer() -> Observer {
    Observer {
        position: Vec3::new(0.0, 1.7, 0.0),
        aim_point: Vec3::new(0.0, 1.7, 1.0),
        yaw: 0.0,
    }
}

pub(crate) fn enemy(id: u64, position: Vec3) -> Candidate {
    Candidate {
        id: Some(id),
        position,
        head: position,
        velocity: Vec3::ZERO,
        health: 500,
        armor_level: 2.0,
        bindpose: None,
    }
}

pub(crate) fn snapshot(observer: Option<Observer>, candidates: Vec<Candidate>) -> Snapshot {
    Snapshot {
        observer,
        candidates,
        weapon: "default".to_string(),
    }
}
