use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::classify;
use crate::drive::Drive;
use crate::inbox::MediaBackup;
use crate::purge::PurgeList;

/// Import one drive: a single depth-first traversal that routes media files
/// to the backup collaborator and, when the descriptor asks for it, marks
/// media-empty leaf directories for purge.
///
/// Directories are evaluated top-down against their listing at visit time.
/// Nothing is deleted during the walk, so a parent whose children are
/// deleted at the end of the run only becomes eligible on a later run.
pub fn import(drive: &Drive, backup: &dyn MediaBackup, purge: &mut PurgeList) {
    info!("Processing drive: {}", drive.name);

    let purge_enabled = drive.purge_requested();
    debug!(
        "Purge flag for {} ({}): {}",
        drive.name,
        drive.path.display(),
        purge_enabled
    );

    for entry in WalkDir::new(&drive.path) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                // One unreadable entry must not stop the walk.
                debug!("Cannot read entry under {}: {}", drive.path.display(), err);
                continue;
            }
        };

        if entry.file_type().is_file() {
            let file_name = entry.file_name().to_string_lossy();
            if classify::is_media(&file_name) {
                if !backup.backup(entry.path(), drive) {
                    debug!("Backup reported failure for {}", entry.path().display());
                }
            }
        } else if entry.file_type().is_dir() && purge_enabled {
            // The mount root itself is never a purge candidate.
            if paths_equal(entry.path(), &drive.path) {
                debug!("Skipping mount root {}", entry.path().display());
                continue;
            }

            match classify::is_purge_eligible(entry.path()) {
                Ok(true) => purge.mark(entry.path()),
                Ok(false) => {}
                Err(err) => {
                    debug!("Cannot access {}: {}", entry.path().display(), err);
                }
            }
        }
    }
}

/// Path equality on normalized components, so `E:\` and `E:` compare equal.
/// Windows paths compare case-insensitively.
fn paths_equal(a: &Path, b: &Path) -> bool {
    let a: PathBuf = a.components().collect();
    let b: PathBuf = b.components().collect();

    if cfg!(windows) {
        a.to_string_lossy()
            .eq_ignore_ascii_case(&b.to_string_lossy())
    } else {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_equal_ignores_trailing_separator() {
        assert!(paths_equal(Path::new("/mnt/sd"), Path::new("/mnt/sd/")));
    }

    #[test]
    fn test_paths_equal_distinct_paths() {
        assert!(!paths_equal(Path::new("/mnt/sd"), Path::new("/mnt/sd2")));
    }

    #[cfg(windows)]
    #[test]
    fn test_paths_equal_is_case_insensitive_on_windows() {
        assert!(paths_equal(Path::new("E:\\DCIM"), Path::new("e:\\dcim")));
    }
}
