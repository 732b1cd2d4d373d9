//! Recent log files task
//!
//! Lists `logs/*.log` under the data directory, orders by modification time
//! descending, takes the first 10, and writes each file's first line to
//! `logs-recent.txt`.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::TaskError;

const RECENT_LIMIT: usize = 10;

pub fn collect_recent(data_dir: &Path) -> Result<(), TaskError> {
    let logs_dir = data_dir.join("logs");

    let mut entries: Vec<(SystemTime, PathBuf)> = Vec::new();
    if logs_dir.is_dir() {
        for entry in fs::read_dir(&logs_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().and_then(OsStr::to_str) == Some("log") {
                let modified = entry.metadata()?.modified()?;
                entries.push((modified, path));
            }
        }
    }

    // Newest first
    entries.sort_by(|a, b| b.0.cmp(&a.0));

    let mut output = String::new();
    for (_, path) in entries.into_iter().take(RECENT_LIMIT) {
        let content = fs::read_to_string(&path)?;
        let first_line = content.lines().next().unwrap_or("").trim();
        output.push_str(first_line);
        output.push('\n');
    }

    fs::write(data_dir.join("logs-recent.txt"), output)?;
    Ok(())
}
