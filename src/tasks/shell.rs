//! Subprocess-backed tasks
//!
//! Two routines shell out to host tooling: the setup task (`pip install uv`
//! then `python datagen.py <email>`) and the prettier formatting task. A
//! missing binary or a non-zero exit is a task failure.

use std::path::Path;
use tokio::process::Command;

use super::{require_input, TaskError};

/// Install uv with pip, then run the data generator with the user's email
pub async fn run_setup() -> Result<(), TaskError> {
    run_command("pip", &["install", "uv"]).await?;

    let email = std::env::var("USER_EMAIL").unwrap_or_else(|_| "test@example.com".to_string());
    run_command("python", &["datagen.py", &email]).await
}

/// Format `format.md` in place with prettier
pub async fn format_markdown(data_dir: &Path) -> Result<(), TaskError> {
    let target = require_input(data_dir, "format.md")?;
    let target = target.to_string_lossy().into_owned();
    run_command("npx", &["prettier", "--write", &target]).await
}

async fn run_command(program: &str, args: &[&str]) -> Result<(), TaskError> {
    let status = Command::new(program)
        .args(args)
        .status()
        .await
        .map_err(|e| TaskError::Command {
            command: program.to_string(),
            message: e.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(TaskError::Command {
            command: program.to_string(),
            message: format!("exited with {status}"),
        })
    }
}
