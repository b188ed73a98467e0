use ::config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::error::Error;

/// Directory for run artifacts: the debug log and the deletion log.
pub const LOGS_DIR: &str = "logs";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub python_path: String,
    pub triage_script: String,
    pub log_file: String,
    pub inbox_path: String,
}

/// Paths resolved at startup, after validation.
#[derive(Debug, Clone)]
pub struct RuntimePaths {
    pub root: PathBuf,
    pub inbox: PathBuf,
    pub logs: PathBuf,
}

/// Load `config.json` from the working directory.
pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("config"))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}

/// Check that every configured path exists. `log_file` only needs an
/// existing parent directory. Any miss is fatal to the run.
pub fn validate_paths(config: &AppConfig) -> Result<(), Error> {
    info!("Preloading configuration paths");

    let log_file_parent = Path::new(&config.log_file)
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    let paths_to_check = [
        ("python_path", config.python_path.as_str()),
        ("triage_script", config.triage_script.as_str()),
        ("log_file (parent dir)", log_file_parent.as_str()),
        ("inbox_path", config.inbox_path.as_str()),
    ];

    let mut missing = false;
    for (name, path) in paths_to_check {
        if path.is_empty() || !Path::new(path).exists() {
            error!("Path missing or invalid: {} -> {}", name, path);
            missing = true;
        } else {
            info!("Valid path: {} -> {}", name, path);
        }
    }

    if missing {
        return Err(Error::Other(
            "one or more required paths are missing".to_string(),
        ));
    }
    Ok(())
}

/// Create the inbox and logs directories if absent and resolve the
/// runtime paths the rest of the run works against.
pub fn initialize(config: &AppConfig) -> Result<RuntimePaths, Error> {
    let inbox = PathBuf::from(&config.inbox_path);
    let root = inbox
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| inbox.clone());

    info!("Starting Media Triage");
    info!("Root path: {}", root.display());
    info!("Inbox path: {}", inbox.display());

    if !inbox.exists() {
        fs::create_dir_all(&inbox)?;
        info!("Created inbox folder at: {}", inbox.display());
    } else {
        info!("Inbox folder already exists");
    }

    let logs = PathBuf::from(LOGS_DIR);
    fs::create_dir_all(&logs)?;
    info!("Logs folder verified: {}", logs.display());

    Ok(RuntimePaths { root, inbox, logs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_with_paths(dir: &Path) -> AppConfig {
        AppConfig {
            python_path: dir.join("python.exe").to_string_lossy().into_owned(),
            triage_script: dir.join("triage.py").to_string_lossy().into_owned(),
            log_file: dir.join("triage.log").to_string_lossy().into_owned(),
            inbox_path: dir.join("INBOX").to_string_lossy().into_owned(),
        }
    }

    #[test]
    fn test_validate_paths_all_present() {
        let tmp = tempdir().unwrap();
        let config = config_with_paths(tmp.path());
        fs::write(&config.python_path, "").unwrap();
        fs::write(&config.triage_script, "").unwrap();
        fs::create_dir_all(&config.inbox_path).unwrap();
        // log_file itself does not exist; its parent (the tempdir) does.

        assert!(validate_paths(&config).is_ok());
    }

    #[test]
    fn test_validate_paths_missing_is_error() {
        let tmp = tempdir().unwrap();
        let config = config_with_paths(tmp.path());
        // None of the files created.
        assert!(validate_paths(&config).is_err());
    }

    #[test]
    fn test_initialize_creates_inbox() {
        let tmp = tempdir().unwrap();
        let config = config_with_paths(tmp.path());

        let paths = initialize(&config).unwrap();
        assert!(paths.inbox.is_dir());
        assert_eq!(paths.root, tmp.path());
    }
}
