//! Deferred saves for task-list edits.
//!
//! The first edit arms a timer; edits arriving before it fires ride along, so
//! a burst of changes produces one write of the latest state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::application::services::SharedWidgetService;

pub struct DeferredSave {
    service: SharedWidgetService,
    delay: Duration,
    pending: Arc<AtomicBool>,
    cancel_token: CancellationToken,
}

impl DeferredSave {
    pub fn new(service: SharedWidgetService, delay: Duration) -> Self {
        Self {
            service,
            delay,
            pending: Arc::new(AtomicBool::new(false)),
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Arm a save `delay` from now unless one is already armed.
    pub fn schedule(&self) {
        if self.pending.swap(true, Ordering::SeqCst) {
            return;
        }

        let service = Arc::clone(&self.service);
        let pending = Arc::clone(&self.pending);
        let cancel_token = self.cancel_token.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel_token.cancelled() => return,
                _ = tokio::time::sleep(delay) => {}
            }
            // A flush may have beaten us to it.
            if pending.swap(false, Ordering::SeqCst) {
                service.lock().await.save();
            }
        });
    }

    /// Write now if a save is armed.
    pub async fn flush(&self) {
        if self.pending.swap(false, Ordering::SeqCst) {
            tracing::debug!("Flushing pending save");
            self.service.lock().await.save();
        }
    }

    /// Drop an armed save without writing. Returns whether one was armed.
    ///
    /// The timer task still wakes but finds nothing to do.
    pub fn disarm(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }

    /// Cancel armed timers and flush whatever they would have written.
    pub async fn shutdown(&self) {
        self.cancel_token.cancel();
        self.flush().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rlrpg_domain::DailyGoal;
    use tokio::sync::Mutex;

    use crate::application::services::{PersistenceGateway, WidgetService};
    use crate::infrastructure::testing::{test_platform, InMemoryStorage, ManualClock};
    use crate::ports::outbound::storage_keys;

    const DELAY: Duration = Duration::from_millis(100);

    fn setup() -> (SharedWidgetService, InMemoryStorage) {
        let clock = ManualClock::default();
        let storage = InMemoryStorage::new();
        let platform = test_platform(&clock, &storage);
        let gateway = PersistenceGateway::new(
            platform.storage(),
            storage_keys::PLAYER_SNAPSHOT,
            DailyGoal::default(),
        );
        let service = WidgetService::load(platform, gateway);
        (Arc::new(Mutex::new(service)), storage)
    }

    #[tokio::test(start_paused = true)]
    async fn burst_of_edits_saves_once_with_latest_state() {
        let (service, storage) = setup();
        let saver = DeferredSave::new(Arc::clone(&service), DELAY);

        for name in ["One", "Two", "Three"] {
            service.lock().await.add_task(name);
            saver.schedule();
        }
        assert!(saver.is_pending());
        assert_eq!(storage.save_count(), 0);

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(storage.save_count(), 1);
        assert!(!saver.is_pending());
        let raw = storage.get(storage_keys::PLAYER_SNAPSHOT).expect("saved");
        assert!(raw.contains("Three"));
    }

    #[tokio::test(start_paused = true)]
    async fn later_edit_arms_a_new_save() {
        let (service, storage) = setup();
        let saver = DeferredSave::new(Arc::clone(&service), DELAY);

        saver.schedule();
        tokio::time::sleep(DELAY * 2).await;
        saver.schedule();
        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(storage.save_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_flushes_pending_save_once() {
        let (service, storage) = setup();
        let saver = DeferredSave::new(Arc::clone(&service), DELAY);

        saver.schedule();
        saver.shutdown().await;
        assert_eq!(storage.save_count(), 1);

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(storage.save_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn disarmed_save_never_fires() {
        let (service, storage) = setup();
        let saver = DeferredSave::new(Arc::clone(&service), DELAY);

        saver.schedule();
        assert!(saver.disarm());
        assert!(!saver.is_pending());
        assert!(!saver.disarm());

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(storage.save_count(), 0);
    }

    #[tokio::test]
    async fn flush_without_pending_writes_nothing() {
        let (service, storage) = setup();
        let saver = DeferredSave::new(service, DELAY);
        saver.flush().await;
        assert_eq!(storage.save_count(), 0);
    }
}
