//! # TaskMinder
//!
//! Personal task manager core: an ordered task collection with single-timer
//! time tracking, list and kanban reordering, tags, on-demand analytics and
//! calendar sync, plus the `taskminder` command-line front end.
//!
//! ## Usage
//!
//! ```rust
//! use taskminder::libs::notify::RecordingSink;
//! use taskminder::libs::preferences::Preferences;
//! use taskminder::libs::task::TaskDraft;
//! use taskminder::libs::workspace::Workspace;
//!
//! let mut workspace = Workspace::new(Preferences::default(), RecordingSink::new());
//! let task = workspace.create_task(TaskDraft::new("Write release notes"));
//! workspace.toggle_tracking(&task.id);
//! assert_eq!(workspace.tracked_task().map(|t| t.id.as_str()), Some(task.id.as_str()));
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
