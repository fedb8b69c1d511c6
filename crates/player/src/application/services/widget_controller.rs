//! Async front door to the widget.
//!
//! Pairs the shared [`WidgetService`] with its tick driver and deferred saver
//! and enforces their ordering: the tick task is joined before a session
//! stops or time is reset, and shutdown leaves nothing unsaved.

use std::sync::Arc;
use std::time::Duration;

use rlrpg_domain::{
    DailyGoal, DomainError, JobClass, JobClassChange, PlayerState, SessionStopped, TaskId,
};
use tokio::sync::Mutex;

use crate::application::services::{
    DeferredSave, SharedWidgetService, TickDriver, WidgetService,
};

pub struct WidgetController {
    service: SharedWidgetService,
    ticker: TickDriver,
    saver: DeferredSave,
}

impl WidgetController {
    pub fn new(service: WidgetService, tick_interval: Duration, save_delay: Duration) -> Self {
        let service = Arc::new(Mutex::new(service));
        Self {
            ticker: TickDriver::new(tick_interval),
            saver: DeferredSave::new(Arc::clone(&service), save_delay),
            service,
        }
    }

    /// Read the current state under the lock.
    pub async fn inspect<R>(&self, f: impl FnOnce(&PlayerState) -> R) -> R {
        f(self.service.lock().await.state())
    }

    pub async fn is_running(&self) -> bool {
        self.inspect(PlayerState::is_running).await
    }

    // =========================================================================
    // Timer
    // =========================================================================

    pub async fn start(&mut self) -> Result<(), DomainError> {
        self.service.lock().await.start_session()?;
        self.ticker.start(Arc::clone(&self.service));
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<SessionStopped, DomainError> {
        self.ticker.stop().await;
        self.service.lock().await.stop_session()
    }

    /// Returns whether the timer now runs.
    pub async fn toggle_timer(&mut self) -> Result<bool, DomainError> {
        if self.is_running().await {
            self.stop().await.map(|_| false)
        } else {
            self.start().await.map(|()| true)
        }
    }

    // =========================================================================
    // Settings and resets (saved immediately)
    // =========================================================================

    pub async fn select_job_class(&self, class: JobClass) -> JobClassChange {
        self.service.lock().await.select_job_class(class)
    }

    pub async fn set_daily_goal(&self, minutes: u32) -> Result<DailyGoal, DomainError> {
        self.service.lock().await.set_daily_goal(minutes)
    }

    pub async fn reset_daily(&self) {
        self.service.lock().await.reset_daily();
    }

    /// Returns whether a session was running.
    pub async fn reset_all(&mut self) -> bool {
        self.ticker.stop().await;
        self.service.lock().await.reset_all()
    }

    /// Write once now; an armed task save is absorbed into this write.
    pub async fn save(&self) {
        self.saver.disarm();
        self.service.lock().await.save();
    }

    // =========================================================================
    // Tasks (deferred save)
    // =========================================================================

    pub async fn add_task(&self, name: &str) -> Option<TaskId> {
        let id = self.service.lock().await.add_task(name);
        if id.is_some() {
            self.saver.schedule();
        }
        id
    }

    pub async fn toggle_task(&self, id: TaskId) -> Option<bool> {
        let toggled = self.service.lock().await.toggle_task(id);
        if toggled.is_some() {
            self.saver.schedule();
        }
        toggled
    }

    pub async fn delete_task(&self, id: TaskId) -> bool {
        let deleted = self.service.lock().await.delete_task(id);
        if deleted {
            self.saver.schedule();
        }
        deleted
    }

    /// Stop the tick task, stop a running session (which saves) and flush any
    /// pending task save.
    pub async fn shutdown(mut self) {
        self.ticker.stop().await;
        {
            let mut service = self.service.lock().await;
            if service.state().is_running() {
                if let Err(e) = service.stop_session() {
                    tracing::warn!(error = %e, "Failed to stop session on shutdown");
                }
            }
        }
        self.saver.shutdown().await;
        tracing::info!("Widget shut down");
    }
}
