use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Descriptor error: {0}")]
    Descriptor(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
