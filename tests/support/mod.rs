// Shared recorders and scene builders for the aim loop integration tests.
#![allow(dead_code)]

use aim_engine::domain::ports::{FireControl, InputSink};
use aim_engine::domain::{AimDelta, AimTuning, Candidate, Observer, Snapshot, Vec3};
use aim_engine::domain::tuning::{RecoilTuning, WeaponEntry, WeaponGain, WeaponTable};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireEvent {
    Start,
    Stop,
}

// Records aim deltas in arrival order.
#[derive(Default)]
pub struct RecordingInput {
    deltas: Mutex<Vec<AimDelta>>,
}

impl RecordingInput {
    pub fn deltas(&self) -> Vec<AimDelta> {
        self.deltas.lock().expect("deltas mutex poisoned").clone()
    }
}

impl InputSink for RecordingInput {
    fn send(&self, delta: AimDelta) {
        self.deltas
            .lock()
            .expect("deltas mutex poisoned")
            .push(delta);
    }
}

// Records fire presses and reports itself as firing while held.
#[derive(Default)]
pub struct RecordingTrigger {
    events: Mutex<Vec<FireEvent>>,
    held: AtomicBool,
}

impl RecordingTrigger {
    pub fn events(&self) -> Vec<FireEvent> {
        self.events.lock().expect("events mutex poisoned").clone()
    }
}

impl FireControl for RecordingTrigger {
    fn is_firing(&self) -> bool {
        self.held.load(Ordering::SeqCst)
    }

    fn start_fire(&self) {
        self.held.store(true, Ordering::SeqCst);
        self.events
            .lock()
            .expect("events mutex poisoned")
            .push(FireEvent::Start);
    }

    fn stop_fire(&self) {
        self.held.store(false, Ordering::SeqCst);
        self.events
            .lock()
            .expect("events mutex poisoned")
            .push(FireEvent::Stop);
    }
}

// Unit gains, no head offset, tiny snap radius.
pub fn unit_tuning() -> AimTuning {
    let mut tuning = AimTuning {
        weapons: WeaponTable::new(WeaponEntry {
            gain: WeaponGain {
                yaw: 1.0,
                pitch: 1.0,
            },
            recoil: RecoilTuning { x: 0.0, y: 0.0 },
        }),
        snap_radius: 0.01,
        ..AimTuning::default()
    };
    tuning.selection.head_offset = Vec3::ZERO;
    tuning
}

pub fn observer() -> Observer {
    Observer {
        position: Vec3::new(0.0, 1.7, 0.0),
        aim_point: Vec3::new(0.0, 1.7, 1.0),
        yaw: 0.0,
    }
}

pub fn enemy_ahead(id: u64) -> Candidate {
    let p = Vec3::new(0.0, 1.7, 5.0);
    Candidate {
        id: Some(id),
        position: p,
        head: p,
        velocity: Vec3::ZERO,
        health: 500,
        armor_level: 2.0,
        bindpose: None,
    }
}

pub fn frame(observer: Option<Observer>, candidates: Vec<Candidate>) -> Snapshot {
    Snapshot {
        observer,
        candidates,
        weapon: "default".to_string(),
    }
}
