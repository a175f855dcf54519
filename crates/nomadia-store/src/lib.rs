//! Persistence for the last generated route.
//!
//! One JSON snapshot per data directory under a fixed storage key. Loading
//! is absorbing: a missing, unreadable, or corrupt snapshot reads as "no
//! saved route" rather than an error, so a bad file can never wedge the
//! host. Saving is a plain write; callers must not assume atomicity.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use nomadia_core::Route;

/// Storage key for the last generated route; the snapshot file is
/// `<data_dir>/nomadia_last_route.json`.
pub const LAST_ROUTE_KEY: &str = "nomadia_last_route";

/// Snapshot envelope wrapping the serialized route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRoute {
    pub saved_at: DateTime<Utc>,
    pub route: Route,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write snapshot at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize route snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn snapshot_path(data_dir: &Path) -> PathBuf {
    data_dir.join(format!("{LAST_ROUTE_KEY}.json"))
}

/// Persist `route` as the last-route snapshot in `data_dir`, creating the
/// directory if needed. Returns the path written.
///
/// # Errors
///
/// Returns `StoreError::Io` if the directory or file cannot be written, and
/// `StoreError::Serialize` if the route cannot be encoded.
pub fn save_last_route(data_dir: &Path, route: &Route) -> Result<PathBuf, StoreError> {
    fs::create_dir_all(data_dir).map_err(|e| StoreError::Io {
        path: data_dir.display().to_string(),
        source: e,
    })?;
    let snapshot = SavedRoute {
        saved_at: Utc::now(),
        route: route.clone(),
    };
    let json = serde_json::to_string_pretty(&snapshot)?;
    let path = snapshot_path(data_dir);
    fs::write(&path, json).map_err(|e| StoreError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "saved route snapshot");
    Ok(path)
}

/// Load the last-route snapshot from `data_dir`, if a readable one exists.
///
/// Read and parse failures are absorbed: corruption logs a warning and
/// reads as `None`, absence logs at debug.
#[must_use]
pub fn load_last_route(data_dir: &Path) -> Option<SavedRoute> {
    let path = snapshot_path(data_dir);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no route snapshot");
            return None;
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable route snapshot");
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt route snapshot");
            None
        }
    }
}
