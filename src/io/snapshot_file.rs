use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Error;
use crate::io::snapshot_dtos::MetricsSnapshot;
use crate::prelude::*;

/// Reads and parses one snapshot document.
pub fn load(path: &Path) -> AppResult<MetricsSnapshot> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::SnapshotNotFound {
            path: path.display().to_string(),
        },
        _ => Error::SnapshotUnreadable {
            path: path.display().to_string(),
            source,
        },
    })?;

    let snapshot: MetricsSnapshot =
        serde_json::from_str(&content).map_err(|source| Error::InvalidSnapshot {
            path: path.display().to_string(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        service = %snapshot.service,
        metrics = snapshot.metrics.len(),
        "Loaded snapshot"
    );

    Ok(snapshot)
}
