//! JSON snapshot persistence for the event store.
//!
//! The whole mapping is written as one pretty-printed JSON file on every
//! committed mutation; there is no incremental diffing and no schema version.
//! Loading fails open: a missing, unreadable, or corrupt snapshot yields an
//! empty store and a warning in the log, never an error to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use super::EventStore;

/// File name of the single snapshot slot.
const SNAPSHOT_FILE: &str = "events.json";

/// Resolves the snapshot location under the platform app-data directory,
/// falling back to the current directory when none is available.
pub fn snapshot_path() -> PathBuf {
    match ProjectDirs::from("", "", "minical") {
        Some(dirs) => dirs.data_dir().join(SNAPSHOT_FILE),
        None => {
            log::warn!("No platform data directory available, storing snapshot beside the binary");
            PathBuf::from(SNAPSHOT_FILE)
        }
    }
}

/// Loads the event store from `path`, substituting an empty store on any
/// failure.
pub fn load_snapshot(path: &Path) -> EventStore {
    match try_load(path) {
        Ok(store) => {
            log::info!(
                "Loaded {} events from {}",
                store.total_events(),
                path.display()
            );
            store
        }
        Err(err) => {
            log::warn!("Discarding snapshot, starting empty: {:#}", err);
            EventStore::new()
        }
    }
}

fn try_load(path: &Path) -> Result<EventStore> {
    if !path.exists() {
        return Ok(EventStore::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let store = serde_json::from_str(&data)
        .with_context(|| format!("failed to deserialize events from {}", path.display()))?;
    Ok(store)
}

/// Writes the full store to `path` as pretty JSON, creating parent
/// directories as needed.
pub fn save_snapshot(path: &Path, store: &EventStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
    }

    let data = serde_json::to_string_pretty(store)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write events to {}", path.display()))?;
    Ok(())
}
