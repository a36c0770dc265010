//! jot — a tiny single-window to-do list with a terminal UI.
//!
//! The store (`ops::store`) owns the task list, its sort rule, and
//! write-through persistence to `tasks.json`; the TUI (`tui`) is a thin
//! shell that turns key events into commands and repaints from the store's
//! ordered view.

pub mod io;
pub mod model;
pub mod ops;
pub mod tui;
