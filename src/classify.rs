use lazy_static::lazy_static;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

lazy_static! {
    /// Recognized media extensions, lower-case. Both `is_media` and
    /// `is_purge_eligible` must classify against this one set.
    static ref MEDIA_EXTENSIONS: HashSet<&'static str> = [
        "jpg", "jpeg", "png", "gif", "bmp", "heic", "mp4", "mov", "avi", "mkv",
    ]
    .into_iter()
    .collect();
}

/// True iff the file name carries a recognized media extension,
/// case-insensitively.
pub fn is_media(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| MEDIA_EXTENSIONS.contains(ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// True iff the directory's immediate children contain no media files and
/// no subdirectories. Non-media files (sidecar text and the like) do not
/// block eligibility. Only the current listing is inspected; subfolders
/// deleted later in the same run are not re-evaluated here.
pub fn is_purge_eligible(dir: &Path) -> io::Result<bool> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            return Ok(false);
        }
        if file_type.is_file() && is_media(&entry.file_name().to_string_lossy()) {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_is_media_known_extensions() {
        assert!(is_media("IMG_1.JPG"));
        assert!(is_media("clip.mov"));
        assert!(is_media("frame.HeIc"));
        assert!(!is_media("notes.txt"));
        assert!(!is_media("archive.zip"));
        assert!(!is_media("no_extension"));
    }

    #[test]
    fn test_empty_directory_is_eligible() {
        let tmp = tempdir().unwrap();
        assert!(is_purge_eligible(tmp.path()).unwrap());
    }

    #[test]
    fn test_media_file_blocks_eligibility() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("IMG_0001.jpg"), "x").unwrap();
        assert!(!is_purge_eligible(tmp.path()).unwrap());
    }

    #[test]
    fn test_subdirectory_blocks_eligibility() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        assert!(!is_purge_eligible(tmp.path()).unwrap());
    }

    #[test]
    fn test_sidecar_files_do_not_block() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("readme.txt"), "sidecar").unwrap();
        fs::write(tmp.path().join("index.db"), "sidecar").unwrap();
        assert!(is_purge_eligible(tmp.path()).unwrap());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let tmp = tempdir().unwrap();
        let gone = tmp.path().join("never_created");
        assert!(is_purge_eligible(&gone).is_err());
    }
}
