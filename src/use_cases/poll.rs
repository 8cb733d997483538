use super::engine::AimEngine;
use super::types::PollSummary;
use crate::domain::ports::EnvironmentSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Drives the engine at a fixed cadence until `shutdown` is notified.
///
/// One task owns the engine, so ticks never overlap. Ticks that fall behind are skipped
/// rather than bunched. Use `Notify::notify_one` to stop the loop; the permit is kept
/// if the loop is mid-tick.
pub async fn poll_task(
    source: Arc<dyn EnvironmentSource>,
    mut engine: AimEngine,
    tick_interval: Duration,
    shutdown: Arc<Notify>,
) -> PollSummary {
    let mut summary = PollSummary::default();

    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(
        tick_interval_ms = tick_interval.as_millis() as u64,
        "aim loop started"
    );

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            _ = interval.tick() => {}
        }

        let snapshot = match source.snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "environment snapshot failed; skipping tick");
                summary.record_failure();
                continue;
            }
        };

        let outcome = engine.tick(snapshot);
        summary.record(&outcome);
        debug!(tick = summary.ticks, ?outcome, "tick");
    }

    engine.shutdown();
    info!(
        ticks = summary.ticks,
        aimed = summary.aimed,
        fire_pulses = summary.fire_pulses,
        "aim loop stopped"
    );
    summary
}
