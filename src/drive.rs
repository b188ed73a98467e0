use rand::seq::SliceRandom;
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::Error;
use crate::platform;

/// Descriptor file expected at the root of every source drive.
pub const DESCRIPTOR_FILE: &str = "drive.json";

const DRIVE_ADJECTIVES: &[&str] = &[
    "Silver", "Crimson", "Midnight", "Blue", "Quiet", "Stormy", "Velvet",
];
const DRIVE_ANIMALS: &[&str] = &[
    "Falcon", "Goose", "Panther", "Fox", "Whale", "Wolf", "Jackal",
];

/// An eligible, provisioned removable drive.
///
/// `descriptor` is the raw on-disk mapping; fields beyond `source`, `purge`,
/// `id` and `name` pass through rewrites unmodified.
#[derive(Debug, Clone)]
pub struct Drive {
    pub path: PathBuf,
    pub id: String,
    pub name: String,
    pub descriptor: Map<String, Value>,
}

impl Drive {
    /// Whether the descriptor asks for empty folders to be purged after
    /// import. Defaults to false when absent or not a boolean.
    pub fn purge_requested(&self) -> bool {
        matches!(self.descriptor.get("purge"), Some(Value::Bool(true)))
    }
}

/// Enumerate removable volumes and return the eligible, provisioned drives.
pub fn discover() -> Vec<Drive> {
    info!("Detecting external sources");

    let roots = platform::removable_drive_roots();
    if roots.is_empty() {
        warn!("No removable drives detected");
    }

    discover_in(&roots)
}

/// Run discovery over an explicit set of candidate mount roots.
///
/// Failures are isolated per volume: a drive that cannot be read or
/// provisioned is dropped from the result set, never aborting discovery.
pub fn discover_in(roots: &[PathBuf]) -> Vec<Drive> {
    let mut drives = Vec::new();

    for root in roots {
        info!("Found drive: {}", root.display());
        let descriptor_path = root.join(DESCRIPTOR_FILE);

        if !descriptor_path.exists() {
            info!("No {} found, skipping", DESCRIPTOR_FILE);
            continue;
        }

        let mut descriptor = match read_descriptor(&descriptor_path) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                error!("Failed to read {}: {}", descriptor_path.display(), err);
                continue;
            }
        };

        // `source` must be exactly boolean true for the drive to be eligible.
        if descriptor.get("source") != Some(&Value::Bool(true)) {
            warn!(
                "'source' is not set to true, skipping drive {}",
                root.display()
            );
            continue;
        }

        // Baptize on first encounter only. An id or name already on disk is
        // never regenerated, whatever its shape.
        let mut updated = false;
        if !descriptor.contains_key("id") {
            descriptor.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
            updated = true;
        }
        if !descriptor.contains_key("name") {
            descriptor.insert("name".to_string(), Value::String(generate_drive_name()));
            updated = true;
        }

        let id = display_field(&descriptor, "id");
        let name = display_field(&descriptor, "name");

        if updated {
            if let Err(err) = write_descriptor(&descriptor_path, &descriptor) {
                error!(
                    "Failed to write updated {}: {}",
                    descriptor_path.display(),
                    err
                );
                continue;
            }
            info!("Drive baptized as: {} ({})", name, id);
        } else {
            info!("Drive already baptized: {} ({})", name, id);
        }

        debug!("Drive descriptor for {}: {:?}", root.display(), descriptor);

        drives.push(Drive {
            path: root.clone(),
            id,
            name,
            descriptor,
        });
    }

    drives
}

fn read_descriptor(path: &Path) -> Result<Map<String, Value>, Error> {
    let raw = fs::read_to_string(path)?;
    let descriptor: Map<String, Value> = serde_json::from_str(&raw)?;
    Ok(descriptor)
}

/// Write the descriptor back via temp-file-and-rename so an eject mid-write
/// cannot leave a half-written `drive.json` behind.
fn write_descriptor(path: &Path, descriptor: &Map<String, Value>) -> Result<(), Error> {
    let payload = serde_json::to_string_pretty(descriptor)?;
    let tmp_path = path.with_extension("json.tmp");

    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(payload.as_bytes())?;
    file.sync_all()?;
    drop(file);

    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn display_field(descriptor: &Map<String, Value>, key: &str) -> String {
    match descriptor.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn generate_drive_name() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{} {}",
        DRIVE_ADJECTIVES.choose(&mut rng).unwrap(),
        DRIVE_ANIMALS.choose(&mut rng).unwrap()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generated_name_uses_vocabularies() {
        let name = generate_drive_name();
        let mut parts = name.splitn(2, ' ');
        let adjective = parts.next().unwrap();
        let animal = parts.next().unwrap();
        assert!(DRIVE_ADJECTIVES.contains(&adjective));
        assert!(DRIVE_ANIMALS.contains(&animal));
    }

    #[test]
    fn test_descriptor_roundtrip_is_atomic_rename() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(DESCRIPTOR_FILE);

        let mut descriptor = Map::new();
        descriptor.insert("source".to_string(), Value::Bool(true));
        write_descriptor(&path, &descriptor).unwrap();

        // No temp file left behind after a successful write.
        assert!(path.exists());
        assert!(!tmp.path().join("drive.json.tmp").exists());

        let read_back = read_descriptor(&path).unwrap();
        assert_eq!(read_back, descriptor);
    }

    #[test]
    fn test_malformed_descriptor_is_an_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(DESCRIPTOR_FILE);
        fs::write(&path, "{not json").unwrap();
        assert!(read_descriptor(&path).is_err());
    }
}
