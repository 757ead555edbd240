// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid locale snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Malformed path: {0}")]
    MalformedPath(String),

    #[error("Internal error: search prefix {prefix} composed from {path} does not parse")]
    BadPrefix { path: String, prefix: String },

    #[error("Internal error: colliding path {0} has no header")]
    Unlabelled(String),

    #[error("Unknown phase: {0}")]
    UnknownPhase(String),
}

pub type Result<T> = std::result::Result<T, CheckError>;

// Allow `?` on std::io::Error by converting to CheckError::Io with unknown path.
impl From<std::io::Error> for CheckError {
    fn from(source: std::io::Error) -> Self {
        CheckError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for CheckError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map_or_else(|| PathBuf::from("<unknown>"), ToOwned::to_owned);
        let source = e
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
        CheckError::Io { source, path }
    }
}
