//! Server state and configuration.

use chrono::{DateTime, Local};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;

/// Snapshot bookkeeping older than this is dropped by the cleanup task.
pub const SNAPSHOT_EXPIRATION_SECS: u64 = 60;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8000")
    pub listen_addr: String,
    /// Where uploaded files are written and served from under /uploads
    pub upload_dir: PathBuf,
    /// Files served under /static
    pub static_dir: PathBuf,
    /// Where state snapshots are written
    pub state_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            upload_dir: PathBuf::from("uploads"),
            static_dir: PathBuf::from("static"),
            state_dir: PathBuf::from("estados"),
        }
    }
}

/// Last snapshot accepted for a file name.
pub struct SnapshotEntry {
    pub state: Value,
    pub saved_at: Instant,
}

/// Result of offering a snapshot to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotOutcome {
    /// Same content as the snapshot already accepted under this name
    Unchanged,
    /// New content; the caller should write it to this path
    Accepted(PathBuf),
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Unix timestamp of server boot for cache busting.
    pub boot_time: u64,
    /// Snapshots accepted recently, keyed by target path.
    pub snapshots: RwLock<HashMap<PathBuf, SnapshotEntry>>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let boot_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self {
            config,
            boot_time,
            snapshots: RwLock::new(HashMap::new()),
        }
    }

    /// Record `state` as the snapshot for the second `now` falls in.
    ///
    /// Posting identical content twice within the same second is a no-op.
    pub async fn record_snapshot(&self, state: &Value, now: DateTime<Local>) -> SnapshotOutcome {
        let path = snapshot_path(&self.config.state_dir, now);
        let mut snapshots = self.snapshots.write().await;

        if let Some(previous) = snapshots.get(&path) {
            if previous.state == *state {
                return SnapshotOutcome::Unchanged;
            }
        }

        snapshots.insert(
            path.clone(),
            SnapshotEntry {
                state: state.clone(),
                saved_at: Instant::now(),
            },
        );
        SnapshotOutcome::Accepted(path)
    }
}

/// `estado_<YYYYmmdd-HHMMSS>.json` under `dir`.
pub fn snapshot_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("estado_{}.json", now.format("%Y%m%d-%H%M%S")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn at(sec: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 18, 30, sec).single().unwrap()
    }

    #[test]
    fn test_snapshot_path_format() {
        assert_eq!(
            snapshot_path(Path::new("estados"), at(5)),
            PathBuf::from("estados/estado_20240309-183005.json")
        );
    }

    #[tokio::test]
    async fn test_identical_snapshot_in_same_second_is_unchanged() {
        let state = AppState::new(ServerConfig::default());
        let body = json!({ "cards": [1, 2, 3] });

        let first = state.record_snapshot(&body, at(1)).await;
        assert!(matches!(first, SnapshotOutcome::Accepted(_)));
        assert_eq!(state.record_snapshot(&body, at(1)).await, SnapshotOutcome::Unchanged);
    }

    #[tokio::test]
    async fn test_changed_snapshot_in_same_second_is_accepted() {
        let state = AppState::new(ServerConfig::default());
        state.record_snapshot(&json!({ "v": 1 }), at(1)).await;
        let outcome = state.record_snapshot(&json!({ "v": 2 }), at(1)).await;
        assert_eq!(
            outcome,
            SnapshotOutcome::Accepted(PathBuf::from("estados/estado_20240309-183001.json"))
        );
    }

    #[tokio::test]
    async fn test_same_content_in_new_second_is_accepted() {
        let state = AppState::new(ServerConfig::default());
        let body = json!({ "v": 1 });
        state.record_snapshot(&body, at(1)).await;
        assert!(matches!(
            state.record_snapshot(&body, at(2)).await,
            SnapshotOutcome::Accepted(_)
        ));
        assert_eq!(state.snapshots.read().await.len(), 2);
    }
}
