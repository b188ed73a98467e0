use std::path::{Path, PathBuf};
use tracing::info;

use crate::drive::Drive;

/// Backup/copy collaborator invoked for every media file found on a drive.
///
/// Returns whether the copy succeeded; the import walk records the outcome
/// but never stops on it.
pub trait MediaBackup {
    fn backup(&self, file: &Path, drive: &Drive) -> bool;
}

/// Placeholder inbox copier. Reports what it would do and claims success.
// TODO: hash-verified copy into a free 00-99 inbox slot.
pub struct InboxBackup {
    inbox: PathBuf,
}

impl InboxBackup {
    pub fn new(inbox: &Path) -> Self {
        Self {
            inbox: inbox.to_path_buf(),
        }
    }
}

impl MediaBackup for InboxBackup {
    fn backup(&self, file: &Path, drive: &Drive) -> bool {
        info!(
            "[DRY RUN] Would backup: {} from {} into {}",
            file.display(),
            drive.name,
            self.inbox.display()
        );
        true
    }
}

/// List loose files sitting in the root folder.
pub fn gather_root_files(root: &Path) -> Vec<PathBuf> {
    info!("Getting files in root folder: {}", root.display());
    Vec::new()
}

/// Move loose files into free inbox slots.
pub fn move_to_inbox(files: &[PathBuf]) {
    info!("Moving {} files to inbox folders...", files.len());
}

/// Top the root folder back up from the inbox when it runs low.
pub fn refill_from_inbox() {
    info!("Refilling root folder from inbox...");
}

/// Retry copies that a previous run logged as failed.
// TODO: scan the triage log and retry the files it lists.
pub fn recover_failed_copies() {
    info!("Attempting recovery of failed copies from log...");
}
