//! Error types for archivum-content

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

#[derive(Error, Debug)]
pub enum ContentError {
    /// Reading or writing a content file failed
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The name is not one of the configured news files
    #[error("The file {0} is not a valid news file")]
    InvalidNewsFile(String),

    /// Cached state could not be accessed
    #[error("State error: {0}")]
    State(String),
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ContentError::Io {
            path: path.into(),
            source,
        }
    }
}
