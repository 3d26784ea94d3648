//! Domain event log
//!
//! Append-only text log of user-visible bot events, one timestamped
//! line per event. Logging failures are silently swallowed; the event
//! log must never interfere with message processing.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use tracing::debug;

/// Logging collaborator accepting (event kind, user id, detail).
pub trait EventLog: Send + Sync {
    fn record(&self, kind: &str, user_id: i64, detail: &str);
}

/// File-backed event log with `[ts] [KIND] User:{id} detail` lines.
#[derive(Debug, Clone)]
pub struct FileEventLog {
    path: PathBuf,
}

impl FileEventLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EventLog for FileEventLog {
    fn record(&self, kind: &str, user_id: i64, detail: &str) {
        let line = format!(
            "[{}] [{}] User:{} {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S"),
            kind,
            user_id,
            detail
        );
        debug!(kind = kind, user_id = user_id, detail = detail, "Event");

        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(file, "{line}");
        }
    }
}

/// No-op event log, for tests.
#[derive(Debug, Clone, Default)]
pub struct NullEventLog;

impl EventLog for NullEventLog {
    fn record(&self, _kind: &str, _user_id: i64, _detail: &str) {}
}
