use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved prompt text shown in the empty entry field.
/// Never valid as task text.
pub const PLACEHOLDER: &str = "Type Note";

/// Stable opaque task identifier, assigned by the store at creation.
///
/// Ids are session-local: they are not persisted and are reassigned on
/// load. Complete/delete are keyed by id so duplicate-text tasks stay
/// distinguishable; the sorted display order is purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, non-empty, never the placeholder sentinel
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Create a new pending task
    pub fn new(id: TaskId, text: String) -> Self {
        Task {
            id,
            text,
            completed: false,
        }
    }
}

/// Persisted form of a task: one record in `tasks.json`.
/// Ids are session-local and deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub text: String,
    pub completed: bool,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        TaskRecord {
            text: task.text.clone(),
            completed: task.completed,
        }
    }
}
