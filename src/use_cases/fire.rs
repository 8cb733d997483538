// Fire pulse scheduling: press now, release after a fixed hold.

use crate::domain::ports::FireControl;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// Fire was pressed and a release is scheduled.
    Fired,
    /// The control already reported firing; nothing was sent.
    AlreadyFiring,
    /// No tokio runtime to schedule the release on; fire was left untouched.
    NoRuntime,
}

/// Owns at most one pending release. A new pulse replaces the pending release instead
/// of stacking another one.
pub struct FireTrigger {
    control: Arc<dyn FireControl>,
    hold: Duration,
    pending_stop: Option<JoinHandle<()>>,
}

impl FireTrigger {
    pub fn new(control: Arc<dyn FireControl>, hold: Duration) -> Self {
        Self {
            control,
            hold,
            pending_stop: None,
        }
    }

    /// Presses fire unless already firing.
    ///
    /// The release runs on the current tokio runtime. Outside a runtime fire is never
    /// pressed, since nothing could release it.
    pub fn trigger(&mut self) -> FireOutcome {
        if self.control.is_firing() {
            return FireOutcome::AlreadyFiring;
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!("no tokio runtime for fire release; not firing");
            return FireOutcome::NoRuntime;
        };

        if let Some(previous) = self.pending_stop.take() {
            previous.abort();
            debug!("replaced pending fire release");
        }

        self.control.start_fire();

        let control = Arc::clone(&self.control);
        let hold = self.hold;
        self.pending_stop = Some(runtime.spawn(async move {
            tokio::time::sleep(hold).await;
            control.stop_fire();
        }));

        FireOutcome::Fired
    }

    pub fn has_pending_stop(&self) -> bool {
        self.pending_stop
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Drops the pending release and releases fire immediately if one was pending.
    pub fn release(&mut self) {
        if let Some(handle) = self.pending_stop.take() {
            if !handle.is_finished() {
                handle.abort();
                self.control.stop_fire();
            }
        }
    }
}

impl Drop for FireTrigger {
    fn drop(&mut self) {
        self.release();
    }
}
