//! Task dispatch module
//!
//! A free-text task description is lowercased and tested against a fixed,
//! ordered list of substrings; the first match runs one of the hard-coded
//! file-processing routines. No match is a "task not recognized" failure
//! with no side effects.

mod contacts;
mod dates;
mod email;
mod logs;
mod markdown;
mod shell;
mod tickets;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while dispatching or running a task
///
/// Nothing is retried or recovered; every failure surfaces directly to the
/// caller with its message.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task not recognized")]
    NotRecognized,

    #[error("invalid file path: {0}")]
    InvalidPath(String),

    #[error("date format not recognized: {0}")]
    DateFormat(String),

    #[error("contact missing field '{0}'")]
    MissingField(&'static str),

    #[error("no sender address found in email")]
    NoSender,

    #[error("command '{command}' failed: {message}")]
    Command { command: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Db(#[from] rusqlite::Error),
}

/// Dispatch a task description to its routine.
///
/// Matching is ordered; each routine is a one-shot read-transform-write over
/// files beneath `data_dir`.
pub async fn dispatch(task: &str, data_dir: &Path) -> Result<(), TaskError> {
    let task = task.to_lowercase();

    if task.contains("install uv") && task.contains("datagen.py") {
        shell::run_setup().await
    } else if task.contains("format") && task.contains("prettier") {
        shell::format_markdown(data_dir).await
    } else if task.contains("count wednesdays") {
        dates::count_wednesdays(data_dir)
    } else if task.contains("sort contacts") {
        contacts::sort_contacts(data_dir)
    } else if task.contains("total sales of gold tickets") {
        tickets::gold_ticket_sales(data_dir)
    } else if task.contains("recent log files") {
        logs::collect_recent(data_dir)
    } else if task.contains("markdown index") {
        markdown::build_index(data_dir)
    } else if task.contains("extract email sender") {
        email::extract_sender(data_dir)
    } else {
        Err(TaskError::NotRecognized)
    }
}

/// Resolve a task input file, failing when it is missing.
///
/// Inputs are fixed names joined under the data directory, so existence is
/// the only check needed before I/O.
pub(crate) fn require_input(data_dir: &Path, name: &str) -> Result<PathBuf, TaskError> {
    let path = data_dir.join(name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(TaskError::InvalidPath(name.to_string()))
    }
}
