// Output adapters that only log; no device is driven.

use crate::domain::ports::{FireControl, InputSink};
use crate::domain::state::AimDelta;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

#[derive(Debug, Default)]
pub struct LoggingInputSink;

impl InputSink for LoggingInputSink {
    fn send(&self, delta: AimDelta) {
        info!(dx = delta.dx, dy = delta.dy, "aim move");
    }
}

/// Logs fire presses and remembers whether fire is held.
#[derive(Debug, Default)]
pub struct LoggingFireControl {
    held: AtomicBool,
}

impl FireControl for LoggingFireControl {
    fn is_firing(&self) -> bool {
        self.held.load(Ordering::SeqCst)
    }

    fn start_fire(&self) {
        self.held.store(true, Ordering::SeqCst);
        info!("fire down");
    }

    fn stop_fire(&self) {
        self.held.store(false, Ordering::SeqCst);
        info!("fire up");
    }
}
