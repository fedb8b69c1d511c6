//! TaskList aggregate - the checklist, independent of progression
//!
//! Tasks are kept in insertion order. Display order is a stable partition:
//! every incomplete task first, then every completed one.

use crate::entities::Task;
use crate::value_objects::TaskName;
use crate::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    /// Highest id ever handed out or loaded; ids are never reissued.
    last_issued: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from stored tasks, keeping their order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let last_issued = tasks.iter().map(|t| t.id().get()).max().unwrap_or(0);
        Self { tasks, last_issued }
    }

    /// The four starter tasks shown on first launch.
    pub fn sample() -> Self {
        let seeds = [
            (1, "Complete project proposal", false),
            (2, "Exercise for 30 minutes", true),
            (3, "Read 20 pages", false),
            (4, "Learn React hooks", false),
        ];
        let tasks = seeds
            .into_iter()
            .filter_map(|(id, name, completed)| {
                TaskName::new(name)
                    .ok()
                    .map(|name| Task::restore(TaskId::new(id), name, completed))
            })
            .collect();
        Self::from_tasks(tasks)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Incomplete tasks first, then completed, each group in insertion order.
    pub fn display_order(&self) -> Vec<&Task> {
        let (pending, done): (Vec<&Task>, Vec<&Task>) =
            self.tasks.iter().partition(|t| !t.is_completed());
        pending.into_iter().chain(done).collect()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a task named `name`, or do nothing if it is blank.
    ///
    /// The id is time-derived (`now_millis`) but always above every id issued
    /// so far, so two adds within the same millisecond still differ.
    pub fn add(&mut self, name: &str, now_millis: u64) -> Option<TaskId> {
        let name = TaskName::new(name).ok()?;
        let id = TaskId::new(now_millis.max(self.last_issued.saturating_add(1)));
        self.last_issued = id.get();
        self.tasks.push(Task::new(id, name));
        Some(id)
    }

    /// Flip completion on the matching task; `None` when absent.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        self.tasks
            .iter_mut()
            .filter(|t| t.id() == id)
            .map(Task::toggle)
            .last()
    }

    /// Remove the matching task; `None` when absent.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id() == id)?;
        Some(self.tasks.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.name().to_string()).collect()
    }

    mod add {
        use super::*;

        #[test]
        fn blank_names_leave_list_unchanged() {
            let mut list = TaskList::sample();
            let before = list.clone();
            assert!(list.add("", 1_000).is_none());
            assert!(list.add("   ", 1_000).is_none());
            assert_eq!(list, before);
        }

        #[test]
        fn appends_incomplete_task() {
            let mut list = TaskList::new();
            let id = list.add("Water plants", 1_700_000_000_000).expect("added");
            assert_eq!(id.get(), 1_700_000_000_000);
            let task = list.get(id).expect("present");
            assert!(!task.is_completed());
            assert_eq!(task.name().as_str(), "Water plants");
        }

        #[test]
        fn ids_stay_unique_within_one_millisecond() {
            let mut list = TaskList::new();
            let a = list.add("A", 500).expect("added");
            let b = list.add("B", 500).expect("added");
            assert_eq!(a.get(), 500);
            assert_eq!(b.get(), 501);
        }

        #[test]
        fn ids_are_not_reissued_after_delete() {
            let mut list = TaskList::new();
            let a = list.add("A", 10).expect("added");
            list.delete(a);
            let b = list.add("B", 10).expect("added");
            assert_ne!(a, b);
        }

        #[test]
        fn ids_exceed_loaded_ids_when_clock_is_behind() {
            let mut list = TaskList::sample();
            let id = list.add("Late", 0).expect("added");
            assert_eq!(id.get(), 5);
        }
    }

    mod toggle_and_delete {
        use super::*;

        #[test]
        fn toggle_twice_restores_original_value() {
            let mut list = TaskList::sample();
            let id = TaskId::new(2);
            assert_eq!(list.toggle(id), Some(false));
            assert_eq!(list.toggle(id), Some(true));
            assert!(list.get(id).map(Task::is_completed).unwrap_or(false));
        }

        #[test]
        fn unknown_id_is_a_no_op() {
            let mut list = TaskList::sample();
            let before = list.clone();
            assert_eq!(list.toggle(TaskId::new(99)), None);
            assert!(list.delete(TaskId::new(99)).is_none());
            assert_eq!(list, before);
        }

        #[test]
        fn delete_removes_only_matching_task() {
            let mut list = TaskList::sample();
            let removed = list.delete(TaskId::new(3)).expect("removed");
            assert_eq!(removed.name().as_str(), "Read 20 pages");
            assert_eq!(list.len(), 3);
            assert!(list.get(TaskId::new(3)).is_none());
        }
    }

    mod display_order {
        use super::*;

        #[test]
        fn incomplete_before_completed_preserving_insertion_order() {
            let mut list = TaskList::new();
            let a = list.add("A", 1).expect("added");
            list.add("B", 2);
            list.add("C", 3);
            list.toggle(a);
            assert_eq!(names(&list.display_order()), vec!["B", "C", "A"]);
        }

        #[test]
        fn sample_tasks_put_exercise_last() {
            let list = TaskList::sample();
            assert_eq!(
                names(&list.display_order()),
                vec![
                    "Complete project proposal",
                    "Read 20 pages",
                    "Learn React hooks",
                    "Exercise for 30 minutes",
                ]
            );
            assert_eq!(list.completed_count(), 1);
        }
    }
}
