use crate::model::task::TaskId;
use crate::ops::store::{StoreError, Summary, TaskStore};

/// The full mutation surface of the UI. Every user action that touches the
/// store maps to exactly one of these, dispatched synchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a task with the given raw entry text
    Add(String),
    /// Complete the selected task (None = nothing selected)
    Complete(Option<TaskId>),
    /// Delete the selected task (None = nothing selected)
    Delete(Option<TaskId>),
    /// Compute aggregate counts
    Summary,
}

/// What a successfully dispatched command produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A task was added (and the list persisted)
    Added(TaskId),
    /// The list changed (and was persisted)
    Changed,
    Summary(Summary),
}

/// Error type for command dispatch
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("no task selected")]
    NoSelection,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Apply a command to the store.
/// Complete/Delete with no selection fail before touching the store.
pub fn dispatch(store: &mut TaskStore, command: Command) -> Result<Outcome, CommandError> {
    match command {
        Command::Add(text) => Ok(Outcome::Added(store.add(&text)?)),
        Command::Complete(None) | Command::Delete(None) => Err(CommandError::NoSelection),
        Command::Complete(Some(id)) => {
            store.complete(id)?;
            Ok(Outcome::Changed)
        }
        Command::Delete(Some(id)) => {
            store.delete(id)?;
            Ok(Outcome::Changed)
        }
        Command::Summary => Ok(Outcome::Summary(store.summary())),
    }
}
