use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::error::Error;
use crate::progress::ProgressReporter;

/// Deletion log file name, written under the run's logs directory.
pub const DELETION_LOG_FILE: &str = "folders_to_delete.log";

/// Directories marked empty-of-media during the current run.
///
/// Purely in-memory accumulation: the walk appends, nothing is deleted
/// until the full candidate set has been logged, so the operator can see
/// every path before any destructive action.
#[derive(Debug, Default)]
pub struct PurgeList {
    marked: Vec<PathBuf>,
}

impl PurgeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, path: &Path) {
        debug!("Marked for deletion: {}", path.display());
        self.marked.push(path.to_path_buf());
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.marked
    }

    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }
}

/// Outcome of one deletion batch.
#[derive(Debug, Default)]
pub struct PurgeStats {
    pub deleted: usize,
    pub failed: usize,
}

/// Phase 1: persist the candidate list, one path per line, and flush it to
/// disk before any deletion starts. The written log is the recovery
/// checkpoint: a run that dies mid-deletion leaves it behind for a later
/// run to pick up.
pub fn write_deletion_log(list: &PurgeList, logs_dir: &Path) -> Result<PathBuf, Error> {
    fs::create_dir_all(logs_dir)?;
    let log_path = logs_dir.join(DELETION_LOG_FILE);

    let mut contents = String::new();
    for path in list.paths() {
        contents.push_str(&path.to_string_lossy());
        contents.push('\n');
    }

    let mut file = fs::File::create(&log_path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;

    info!("Wrote list of folders to delete: {}", log_path.display());
    Ok(log_path)
}

/// Read a deletion log back as the work list for phase 2.
pub fn read_deletion_log(log_path: &Path) -> Result<Vec<PathBuf>, Error> {
    let raw = fs::read_to_string(log_path)?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Phase 2: delete every directory listed in the log, in order.
///
/// The log on disk, not the in-memory list, is the authoritative work
/// list, so a stale log from a crashed run can drive deletions without
/// re-walking the drives. Individual failures are logged and counted,
/// never aborting the batch. The log file is left in place afterwards;
/// phase 1 always rewrites it before the next phase 2.
pub fn execute_deletions(
    log_path: &Path,
    reporter: &dyn ProgressReporter,
) -> Result<PurgeStats, Error> {
    let folders = read_deletion_log(log_path)?;
    let mut stats = PurgeStats::default();

    if folders.is_empty() {
        return Ok(stats);
    }

    info!("Deleting {} folders...", folders.len());

    let total = folders.len();
    for (index, folder) in folders.iter().enumerate() {
        reporter.update(index + 1, total, &folder.display().to_string());

        match fs::remove_dir_all(folder) {
            Ok(()) => {
                debug!("Deleted {}", folder.display());
                stats.deleted += 1;
            }
            Err(err) => {
                error!("Failed to delete {}: {}", folder.display(), err);
                stats.failed += 1;
            }
        }
    }

    reporter.finish();
    info!(
        "Folder deletion completed: {} deleted, {} failed",
        stats.deleted, stats.failed
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::SilentReporter;
    use tempfile::tempdir;

    #[test]
    fn test_log_roundtrip_preserves_order() {
        let tmp = tempdir().unwrap();
        let mut list = PurgeList::new();
        list.mark(&tmp.path().join("b"));
        list.mark(&tmp.path().join("a"));

        let log_path = write_deletion_log(&list, &tmp.path().join("logs")).unwrap();
        let read_back = read_deletion_log(&log_path).unwrap();
        assert_eq!(read_back, list.paths());
    }

    #[test]
    fn test_empty_log_deletes_nothing() {
        let tmp = tempdir().unwrap();
        let log_path = write_deletion_log(&PurgeList::new(), tmp.path()).unwrap();
        let stats = execute_deletions(&log_path, &SilentReporter).unwrap();
        assert_eq!(stats.deleted, 0);
        assert_eq!(stats.failed, 0);
    }
}
