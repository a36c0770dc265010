use std::path::PathBuf;

use crate::io::store_io::{self, StoreIoError};
use crate::model::task::{PLACEHOLDER, Task, TaskId, TaskRecord};

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task text is empty")]
    EmptyText,
    #[error("task text is the reserved placeholder")]
    PlaceholderText,
    #[error("no such task: {0}")]
    NotFound(TaskId),
    #[error(transparent)]
    Io(#[from] StoreIoError),
}

/// Aggregate task counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
}

/// Ordered collection of tasks with write-through persistence.
///
/// The list is kept sorted by ascending task text at all times; completion
/// state is not part of the sort key, so completed and pending tasks
/// interleave purely by text order. Every mutation re-sorts and rewrites
/// the task file in full.
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    path: PathBuf,
}

impl TaskStore {
    /// Open the store backed by the task file at `path`.
    /// A missing file starts an empty list; malformed content is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreIoError> {
        let path = path.into();
        let records = store_io::read_tasks(&path)?;
        let mut store = TaskStore {
            tasks: Vec::new(),
            next_id: 0,
            path,
        };
        for record in records {
            let id = store.alloc_id();
            store.tasks.push(Task {
                id,
                text: record.text,
                completed: record.completed,
            });
        }
        store.sort();
        Ok(store)
    }

    /// The tasks in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Add a pending task. The text is trimmed; empty or placeholder text
    /// is rejected without touching the list. Returns the new task's id.
    pub fn add(&mut self, text: &str) -> Result<TaskId, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        if text == PLACEHOLDER {
            return Err(StoreError::PlaceholderText);
        }
        let id = self.alloc_id();
        self.tasks.push(Task::new(id, text.to_string()));
        self.sort();
        self.persist()?;
        Ok(id)
    }

    /// Mark a task completed. Completion is one-way; completing an
    /// already-completed task is a no-op and skips the file rewrite.
    pub fn complete(&mut self, id: TaskId) -> Result<(), StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        if task.completed {
            return Ok(());
        }
        task.completed = true;
        self.sort();
        self.persist()?;
        Ok(())
    }

    /// Remove a task
    pub fn delete(&mut self, id: TaskId) -> Result<(), StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.tasks.remove(index);
        self.sort();
        self.persist()?;
        Ok(())
    }

    /// Count all tasks and the completed subset
    pub fn summary(&self) -> Summary {
        let mut completed = 0;
        for task in &self.tasks {
            if task.completed {
                completed += 1;
            }
        }
        Summary {
            total: self.tasks.len(),
            completed,
        }
    }

    /// Rewrite the task file with the full ordered list
    pub fn persist(&self) -> Result<(), StoreIoError> {
        let records: Vec<TaskRecord> = self.tasks.iter().map(TaskRecord::from).collect();
        store_io::write_tasks(&self.path, &records)
    }

    fn alloc_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Ascending text order, id as tie-break for duplicate text.
    /// Completion state is deliberately not part of the key.
    fn sort(&mut self) {
        self.tasks
            .sort_by(|a, b| a.text.cmp(&b.text).then(a.id.cmp(&b.id)));
    }
}
