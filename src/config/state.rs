// Application state module
// Read-only state shared across request-handling tasks

use std::io;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::types::Config;

/// Application state
///
/// Built once at startup and shared behind an `Arc`; nothing in here is
/// mutated by request handlers.
pub struct AppState {
    pub config: Config,
    /// Canonicalized data directory, the confinement root for all file access
    pub data_dir: PathBuf,

    // Cached config value for fast access without locks
    pub cached_access_log: Arc<AtomicBool>,
}

impl AppState {
    /// Create `AppState`, creating and canonicalizing the data directory.
    ///
    /// The directory must exist before canonicalization, and path confinement
    /// checks require a canonical root.
    pub fn new(config: &Config) -> io::Result<Self> {
        let raw_dir = PathBuf::from(&config.data.dir);
        std::fs::create_dir_all(&raw_dir)?;
        let data_dir = raw_dir.canonicalize()?;

        Ok(Self {
            config: config.clone(),
            data_dir,
            cached_access_log: Arc::new(AtomicBool::new(config.logging.access_log)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_data_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("data");

        let mut cfg = Config::load_from("nonexistent-config").unwrap();
        cfg.data.dir = dir.to_string_lossy().into_owned();

        let state = AppState::new(&cfg).unwrap();
        assert!(dir.is_dir());
        assert!(state.data_dir.is_absolute());
    }
}
