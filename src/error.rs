//! Error types for the download pipeline, one variant per failure stage.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad or inconsistent command-line input
    #[error("invalid argument: {0}")]
    Argument(String),

    /// Video metadata or stream listing could not be fetched or parsed
    #[error("failed to resolve video: {0}")]
    NetworkOrParse(String),

    /// Selection policy found no matching stream
    #[error("no matching stream available (audio only: {only_audio})")]
    NoStreamAvailable { only_audio: bool },

    /// Destination directory or output file could not be written
    #[error("filesystem error at {}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network fault while the stream was being transferred
    #[error("transfer failed: {0}")]
    Transfer(String),

    /// Written file does not match the size the resolver reported
    #[error("file size mismatch for {}: expected {expected} bytes, got {actual} bytes", .path.display())]
    SizeMismatch {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    /// Status output could not be written
    #[error("failed to write status output: {0}")]
    Output(#[source] std::io::Error),
}

impl Error {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::NetworkOrParse(format!("unexpected player response: {err}"))
    }
}
