//! Tick driver - the one cooperative tick source while a session runs.
//!
//! Each session gets its own task and [`CancellationToken`]. Stopping cancels
//! the token and joins the task, so no tick can land after `stop` returns.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::application::services::SharedWidgetService;

struct RunningTicker {
    cancel_token: CancellationToken,
    handle: JoinHandle<()>,
}

pub struct TickDriver {
    interval: Duration,
    running: Option<RunningTicker>,
}

impl TickDriver {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.running.is_some()
    }

    /// Spawn the tick task. Does nothing if one is already active.
    pub fn start(&mut self, service: SharedWidgetService) {
        if self.running.is_some() {
            return;
        }
        let cancel_token = CancellationToken::new();
        let handle = tokio::spawn(tick_worker(service, self.interval, cancel_token.clone()));
        self.running = Some(RunningTicker {
            cancel_token,
            handle,
        });
    }

    /// Cancel the tick task and wait for it to finish.
    pub async fn stop(&mut self) {
        let Some(ticker) = self.running.take() else {
            return;
        };
        ticker.cancel_token.cancel();
        if let Err(e) = ticker.handle.await {
            tracing::warn!(error = %e, "Tick task ended abnormally");
        }
    }
}

async fn tick_worker(
    service: SharedWidgetService,
    interval: Duration,
    cancel_token: CancellationToken,
) {
    tracing::debug!(interval_ms = interval.as_millis() as u64, "Tick task started");
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick of an interval completes immediately.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => {
                tracing::debug!("Tick task shutting down");
                break;
            }
            _ = ticker.tick() => {
                service.lock().await.tick();
            }
        }
    }
}
