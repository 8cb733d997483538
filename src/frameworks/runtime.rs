// Framework bootstrap for the aim loop.

use crate::domain::ports::{EnvironmentSource, FireControl, InputSink};
use crate::domain::tuning::AimTuning;
use crate::frameworks::config;
use crate::interface_adapters::{
    LoggingFireControl, LoggingInputSink, MockEnvironment, ReplayEnvironment,
};
use crate::use_cases::{AimEngine, PollSummary, poll_task};

use std::{io::Result, sync::Arc, time::Duration};
use tokio::sync::Notify;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Everything the loop needs, already built and validated.
pub struct Wiring {
    pub source: Arc<dyn EnvironmentSource>,
    pub input: Arc<dyn InputSink>,
    pub fire_control: Arc<dyn FireControl>,
    pub tuning: AimTuning,
    pub tick_interval: Duration,
}

pub async fn run(wiring: Wiring, shutdown: Arc<Notify>) -> Result<PollSummary> {
    let engine = AimEngine::new(wiring.tuning, wiring.input, wiring.fire_control)
        .map_err(|e| std::io::Error::other(format!("invalid tuning: {e}")))?;

    Ok(poll_task(wiring.source, engine, wiring.tick_interval, shutdown).await)
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let wiring = build_wiring().await.inspect_err(|e| {
        tracing::error!(error = %e, "failed to start");
    })?;

    // Stop on Ctrl-C.
    let shutdown = Arc::new(Notify::new());
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            return;
        }
        tracing::info!("shutdown requested");
        signal_shutdown.notify_one();
    });

    run(wiring, shutdown).await.map(|_| ())
}

async fn build_wiring() -> Result<Wiring> {
    let tick_interval = config::tick_interval().map_err(std::io::Error::other)?;

    let tuning_path = config::tuning_path();
    let tuning = config::load_tuning(tuning_path.as_deref())
        .await
        .map_err(std::io::Error::other)?;
    tracing::debug!(
        tuning_path = ?tuning_path,
        snap_radius = tuning.snap_radius,
        fov_degrees = tuning.selection.fov_degrees,
        "tuning loaded"
    );

    let source: Arc<dyn EnvironmentSource> = match config::replay_path() {
        Some(path) => {
            let replay = ReplayEnvironment::load(&path)
                .await
                .map_err(std::io::Error::other)?;
            tracing::info!(path = %path.display(), frames = replay.len(), "replaying snapshots");
            Arc::new(replay)
        }
        None => {
            tracing::info!("using mock environment");
            Arc::new(MockEnvironment::new())
        }
    };

    Ok(Wiring {
        source,
        input: Arc::new(LoggingInputSink),
        fire_control: Arc::new(LoggingFireControl::default()),
        tuning,
        tick_interval,
    })
}
