#[cfg(windows)]
mod windows;

use std::path::PathBuf;

/// Mount roots of removable-class volumes currently attached.
#[cfg(windows)]
pub fn removable_drive_roots() -> Vec<PathBuf> {
    windows::removable_drive_roots()
}

/// Non-Windows hosts have no removable-class volume query wired up.
/// Candidate mount roots come from the `TRIAGE_DRIVE_ROOTS` environment
/// variable (platform path-list syntax); descriptor gating still decides
/// which of them are actually used.
#[cfg(not(windows))]
pub fn removable_drive_roots() -> Vec<PathBuf> {
    match std::env::var_os("TRIAGE_DRIVE_ROOTS") {
        Some(roots) => std::env::split_paths(&roots).collect(),
        None => Vec::new(),
    }
}
