//! Periodic results backup
//!
//! Copies the results file into a timestamped file under the backup
//! directory. Invoked from the polling loop on a coarse wall-clock
//! schedule; failures are logged and swallowed by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::utils::errors::Result;

/// Back up the results file. Returns the backup path, or `None` when
/// there is nothing to back up yet.
pub fn backup_results(results_path: &Path, backup_dir: &Path) -> Result<Option<PathBuf>> {
    fs::create_dir_all(backup_dir)?;

    if !results_path.exists() {
        return Ok(None);
    }

    let stamp = Utc::now().format("%Y%m%d_%H%M");
    let file_name = results_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("results");
    let target = backup_dir.join(format!("{file_name}_{stamp}.csv"));
    fs::copy(results_path, &target)?;
    Ok(Some(target))
}
