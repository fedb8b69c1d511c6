//! Render-ready view of the widget state.

use rlrpg_domain::{common::format_hms, PlayerState, Task, EXPERIENCE_PER_LEVEL};

use super::character_image::{character_image_path, next_job_slug};

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: u64,
    pub name: String,
    pub completed: bool,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().get(),
            name: task.name().as_str().to_string(),
            completed: task.is_completed(),
        }
    }
}

/// Everything the widget shows, derived from one state snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
    pub job_title: String,
    pub job_class: String,
    pub level: u32,
    /// `experience/100`
    pub experience_text: String,
    pub experience_percentage: u32,
    pub time_display: String,
    pub running: bool,
    pub daily_minutes: u32,
    pub daily_goal_minutes: u32,
    pub daily_percentage: f64,
    pub levels_gained_today: u32,
    pub next_job_title: String,
    pub next_job_level: u32,
    pub job_progress_percentage: f64,
    pub image_path: String,
    pub next_image_slug: Option<String>,
    /// Incomplete tasks first, each group in insertion order.
    pub tasks: Vec<TaskRow>,
}

impl WidgetView {
    pub fn from_state(state: &PlayerState) -> Self {
        let progression = state.progression();
        let time = state.time();
        let next_job = progression.next_job();
        let job_title = progression.job_title();

        Self {
            job_title: job_title.to_string(),
            job_class: progression.job_class().to_string(),
            level: progression.level().value(),
            experience_text: format!(
                "{}/{}",
                progression.experience().value(),
                EXPERIENCE_PER_LEVEL
            ),
            experience_percentage: progression.experience().percentage(),
            time_display: format_hms(state.display_seconds()),
            running: state.is_running(),
            daily_minutes: time.daily_tracked_minutes(),
            daily_goal_minutes: time.daily_goal().minutes(),
            daily_percentage: time.daily_progress_percentage(),
            levels_gained_today: time.levels_gained_today(),
            next_job_title: next_job.title.to_string(),
            next_job_level: next_job.level,
            job_progress_percentage: progression.job_progress_percentage(),
            image_path: character_image_path(job_title),
            next_image_slug: next_job_slug(job_title, progression.job_class()),
            tasks: state
                .tasks()
                .display_order()
                .into_iter()
                .map(TaskRow::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use rlrpg_domain::{Experience, JobClass, Level, Progression, TaskList, TimeTracking};

    #[test]
    fn fresh_state_view() {
        let view = WidgetView::from_state(&PlayerState::default());
        assert_eq!(view.job_title, "Novice");
        assert_eq!(view.job_class, "Swordsman");
        assert_eq!(view.level, 1);
        assert_eq!(view.experience_text, "0/100");
        assert_eq!(view.time_display, "00:00:00");
        assert!(!view.running);
        assert_eq!(view.daily_goal_minutes, 180);
        assert_eq!(view.next_job_title, "Swordsman");
        assert_eq!(view.next_job_level, 11);
        assert_eq!(view.image_path, "/images/characters/novice.png");
        assert_eq!(view.next_image_slug.as_deref(), Some("swordsman"));

        let ids: Vec<u64> = view.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 2]);
    }

    #[test]
    fn running_session_view() {
        let t0 = Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp");
        let mut state = PlayerState::from_parts(
            Progression::restore(
                Level::new(31).expect("valid"),
                Experience::new(40).expect("valid"),
                JobClass::Swordsman,
            ),
            TimeTracking::default(),
            TaskList::new(),
        );
        state.start_session(t0).expect("start");
        state.tick(t0 + Duration::seconds(125));

        let view = WidgetView::from_state(&state);
        assert_eq!(view.job_title, "Knight");
        assert_eq!(view.image_path, "/images/characters/knight.png");
        assert_eq!(view.next_job_title, "Lord Knight");
        assert!(view.running);
        assert_eq!(view.time_display, "00:02:05");
        assert_eq!(view.experience_text, "80/100");
        assert_eq!(view.daily_minutes, 2);
        assert!(view.tasks.is_empty());
    }
}
