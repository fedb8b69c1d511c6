//! Widget service - every user action and tick against the player state.
//!
//! Owns the single [`PlayerState`] together with the persistence gateway and
//! platform clock. All methods are synchronous and run to completion; the
//! async tick driver and front end share the service behind a
//! `tokio::sync::Mutex`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rlrpg_domain::{
    DailyGoal, DomainError, JobClass, JobClassChange, LevelUpCause, PlayerState, SessionStopped,
    TaskId, TickOutcome,
};

use crate::application::services::PersistenceGateway;
use crate::state::Platform;

/// The service as shared between the tick task and the front end.
pub type SharedWidgetService = Arc<tokio::sync::Mutex<WidgetService>>;

pub struct WidgetService {
    state: PlayerState,
    gateway: PersistenceGateway,
    platform: Platform,
}

impl WidgetService {
    /// Restore the player state through the gateway.
    pub fn load(platform: Platform, gateway: PersistenceGateway) -> Self {
        let state = gateway.load();
        Self::with_state(platform, gateway, state)
    }

    pub fn with_state(platform: Platform, gateway: PersistenceGateway, state: PlayerState) -> Self {
        Self {
            state,
            gateway,
            platform,
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    // =========================================================================
    // Timer
    // =========================================================================

    /// # Errors
    ///
    /// `InvalidStateTransition` if a session is already running.
    pub fn start_session(&mut self) -> Result<(), DomainError> {
        let now = self.platform.now();
        self.state.start_session(now)?;
        tracing::info!(started_at = %now, "Timer started");
        Ok(())
    }

    /// Apply a last tick, stop the session and save.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` if no session is running.
    pub fn stop_session(&mut self) -> Result<SessionStopped, DomainError> {
        if !self.state.is_running() {
            return Err(DomainError::invalid_state_transition(
                "timer is not running",
            ));
        }
        self.tick();
        let stopped = self.state.stop_session()?;
        tracing::info!(
            session_seconds = stopped.session_seconds,
            total_seconds = stopped.total_tracked_seconds,
            "Timer stopped"
        );
        self.save();
        Ok(stopped)
    }

    /// Start when stopped, stop when running. Returns whether the timer now runs.
    pub fn toggle_timer(&mut self) -> Result<bool, DomainError> {
        if self.state.is_running() {
            self.stop_session().map(|_| false)
        } else {
            self.start_session().map(|()| true)
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        let now = self.platform.now();
        self.tick_at(now)
    }

    pub fn tick_at(&mut self, now: DateTime<Utc>) -> TickOutcome {
        let outcome = self.state.tick(now);
        for boundary in &outcome.boundaries {
            tracing::debug!(
                minute = boundary.minute,
                five_minute_mark = boundary.five_minute_mark,
                "Minute boundary"
            );
        }
        for level_up in &outcome.level_ups {
            let cause = match level_up.cause {
                LevelUpCause::ExperienceOverflow => "experience",
                LevelUpCause::FiveMinuteMark => "five-minute mark",
            };
            tracing::info!(
                level = level_up.level.value(),
                job = level_up.job_title,
                cause,
                "Level up"
            );
            if level_up.title_changed {
                tracing::info!(job = level_up.job_title, "New job title");
            }
        }
        outcome
    }

    // =========================================================================
    // Progression settings
    // =========================================================================

    /// Switch class; a change is saved right away.
    pub fn select_job_class(&mut self, class: JobClass) -> JobClassChange {
        let change = self.state.select_job_class(class);
        if let JobClassChange::Changed { from, to, job_title } = &change {
            tracing::info!(%from, %to, job = *job_title, "Job class changed");
            self.save();
        }
        change
    }

    /// # Errors
    ///
    /// `Validation` when `minutes` is zero; the goal is left unchanged.
    pub fn set_daily_goal(&mut self, minutes: u32) -> Result<DailyGoal, DomainError> {
        let goal = DailyGoal::new(minutes)?;
        self.state.set_daily_goal(goal);
        self.save();
        Ok(goal)
    }

    pub fn reset_daily(&mut self) {
        self.gateway.reset_daily(&mut self.state);
        tracing::info!("Daily progress reset");
    }

    /// Returns whether a session was running.
    pub fn reset_all(&mut self) -> bool {
        let was_running = self.gateway.reset_all(&mut self.state);
        tracing::info!(was_running, "Tracked time reset");
        was_running
    }

    // =========================================================================
    // Tasks (not saved here; callers schedule a deferred save)
    // =========================================================================

    pub fn add_task(&mut self, name: &str) -> Option<TaskId> {
        let id = self.state.add_task(name, self.platform.now_millis());
        match id {
            Some(id) => tracing::debug!(%id, "Task added"),
            None => tracing::debug!("Blank task name ignored"),
        }
        id
    }

    pub fn toggle_task(&mut self, id: TaskId) -> Option<bool> {
        self.state.toggle_task(id)
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        self.state.delete_task(id)
    }

    pub fn save(&self) {
        self.gateway.save(&self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::{test_platform, InMemoryStorage, ManualClock};
    use crate::ports::outbound::{storage_keys, TimeProvider};

    struct Harness {
        clock: ManualClock,
        storage: InMemoryStorage,
        service: WidgetService,
    }

    fn harness() -> Harness {
        let clock = ManualClock::default();
        let storage = InMemoryStorage::new();
        let platform = test_platform(&clock, &storage);
        let gateway = PersistenceGateway::new(
            platform.storage(),
            storage_keys::PLAYER_SNAPSHOT,
            DailyGoal::default(),
        );
        let service = WidgetService::load(platform, gateway);
        Harness {
            clock,
            storage,
            service,
        }
    }

    mod timer {
        use super::*;

        #[test]
        fn start_twice_is_rejected() {
            let mut h = harness();
            h.service.start_session().expect("start");
            assert!(matches!(
                h.service.start_session(),
                Err(DomainError::InvalidStateTransition(_))
            ));
        }

        #[test]
        fn stop_without_session_is_rejected() {
            let mut h = harness();
            assert!(h.service.stop_session().is_err());
            assert_eq!(h.storage.save_count(), 0);
        }

        #[test]
        fn stop_applies_final_tick_and_saves() {
            let mut h = harness();
            h.service.start_session().expect("start");
            h.clock.advance_secs(300);

            let stopped = h.service.stop_session().expect("stop");
            assert_eq!(stopped.session_seconds, 300);
            assert_eq!(stopped.total_tracked_seconds, 300);
            assert_eq!(h.service.state().progression().level().value(), 3);
            assert_eq!(h.storage.save_count(), 1);
        }

        #[test]
        fn toggle_alternates() {
            let mut h = harness();
            assert!(h.service.toggle_timer().expect("start"));
            h.clock.advance_secs(5);
            assert!(!h.service.toggle_timer().expect("stop"));
            assert_eq!(h.service.state().display_seconds(), 5);
        }

        #[test]
        fn ticks_follow_the_clock() {
            let mut h = harness();
            h.service.start_session().expect("start");
            for _ in 0..60 {
                h.clock.advance_secs(1);
                h.service.tick();
            }
            assert_eq!(h.service.state().progression().experience().value(), 20);
            assert_eq!(h.service.state().display_seconds(), 60);
        }
    }

    mod settings {
        use super::*;

        #[test]
        fn class_change_saves_once() {
            let mut h = harness();
            assert!(matches!(
                h.service.select_job_class(JobClass::Merchant),
                JobClassChange::Changed { .. }
            ));
            assert!(matches!(
                h.service.select_job_class(JobClass::Merchant),
                JobClassChange::Unchanged { .. }
            ));
            assert_eq!(h.storage.save_count(), 1);
        }

        #[test]
        fn zero_goal_is_rejected_without_change() {
            let mut h = harness();
            assert!(matches!(
                h.service.set_daily_goal(0),
                Err(DomainError::Validation(_))
            ));
            assert_eq!(h.service.state().time().daily_goal().minutes(), 180);
            assert_eq!(h.storage.save_count(), 0);
        }

        #[test]
        fn goal_change_is_saved() {
            let mut h = harness();
            h.service.set_daily_goal(30).expect("valid");
            let raw = h.storage.get(storage_keys::PLAYER_SNAPSHOT).expect("saved");
            assert!(raw.contains("\"dailyGoalMinutes\":30"));
        }

        #[test]
        fn reset_all_stops_running_session() {
            let mut h = harness();
            h.service.start_session().expect("start");
            h.clock.advance_secs(90);
            h.service.tick();
            assert!(h.service.reset_all());
            assert!(!h.service.state().is_running());
            assert_eq!(h.service.state().display_seconds(), 0);
        }
    }

    mod tasks {
        use super::*;

        #[test]
        fn add_uses_clock_millis_and_does_not_save() {
            let mut h = harness();
            let id = h.service.add_task("  Stretch  ").expect("added");
            assert_eq!(id.get(), h.clock.now_millis());
            let task = h.service.state().tasks().get(id).expect("present");
            assert_eq!(task.name().as_str(), "Stretch");
            assert_eq!(h.storage.save_count(), 0);
        }

        #[test]
        fn blank_name_is_ignored() {
            let mut h = harness();
            assert!(h.service.add_task("   ").is_none());
            assert_eq!(h.service.state().tasks().len(), 4);
        }

        #[test]
        fn toggle_and_delete_missing_ids_are_no_ops() {
            let mut h = harness();
            assert_eq!(h.service.toggle_task(TaskId::new(99)), None);
            assert!(!h.service.delete_task(TaskId::new(99)));
            assert_eq!(h.service.state().tasks().len(), 4);
        }
    }
}
