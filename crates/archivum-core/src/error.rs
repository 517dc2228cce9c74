//! Error types for archivum-core

use thiserror::Error;
use uuid::Uuid;

use archivum_content::ContentError;
use archivum_domain::ObjectType;
use archivum_identifiers::LookupError;

use crate::config::ConfigError;

/// Result type alias for archivum operations
pub type Result<T> = std::result::Result<T, ArchivumError>;

/// Main error type for archivum operations
#[derive(Error, Debug)]
pub enum ArchivumError {
    /// Identifier lookup failed
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// URI export of one object failed
    #[error("Export of {object_type} {id} failed: {source}")]
    Export {
        object_type: ObjectType,
        id: Uuid,
        #[source]
        source: LookupError,
    },

    /// License or news content error
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Object manifest could not be read
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// IO error outside the content services
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ArchivumError {
    fn from(err: serde_json::Error) -> Self {
        ArchivumError::Manifest(err.to_string())
    }
}
