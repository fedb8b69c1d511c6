//! Task entity - a checklist item with no effect on progression

use serde::{Deserialize, Serialize};

use crate::value_objects::TaskName;
use crate::TaskId;

/// A user-created checklist item.
///
/// The only mutation is [`Task::toggle`]; a task is otherwise replaced by
/// deleting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    completed: bool,
}

impl Task {
    /// Create a new, incomplete task.
    pub fn new(id: TaskId, name: TaskName) -> Self {
        Self {
            id,
            name,
            completed: false,
        }
    }

    /// Rebuild a task from stored state.
    pub fn restore(id: TaskId, name: TaskName, completed: bool) -> Self {
        Self {
            id,
            name,
            completed,
        }
    }

    #[inline]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &TaskName {
        &self.name
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Flip completion, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
