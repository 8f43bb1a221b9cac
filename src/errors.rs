use tally_config::ConfigError;
use tally_domain::DomainError;
use thiserror::Error;

/// Error type for the record source and command-line front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unsupported payload: {0}")]
    Payload(String),
    #[error("Record {position}: unparseable date `{value}`")]
    InvalidDate { position: usize, value: String },
    #[error("Record {position}: {source}")]
    InvalidRecord {
        position: usize,
        #[source]
        source: DomainError,
    },
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Usage(String),
}
