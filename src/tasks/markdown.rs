//! Markdown index task
//!
//! For each `docs/*.md` under the data directory, records the first H1 title
//! keyed by filename, and writes the mapping as pretty JSON to
//! `docs/index.json`.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use super::TaskError;

pub fn build_index(data_dir: &Path) -> Result<(), TaskError> {
    let docs_dir = data_dir.join("docs");

    let mut index: BTreeMap<String, String> = BTreeMap::new();
    for entry in fs::read_dir(&docs_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(OsStr::to_str) != Some("md") {
            continue;
        }

        let content = fs::read_to_string(&path)?;
        if let Some(title) = content.lines().find_map(|line| line.strip_prefix("# ")) {
            let name = entry.file_name().to_string_lossy().into_owned();
            index.insert(name, title.trim().to_string());
        }
    }

    fs::write(
        docs_dir.join("index.json"),
        serde_json::to_string_pretty(&index)?,
    )?;
    Ok(())
}
