//! Identifier classification and URI resolution for repository objects
//!
//! This crate decides which single URI to export for a repository object:
//! - DOI validation and normalization
//! - Scheme classifiers that turn a raw candidate into a canonical URI
//! - Metadata providers that list an object's candidate identifiers
//! - URI strategies (priority, local handle-based) and strategy chains

pub mod classifier;
pub mod error;
pub mod metadata;
pub mod uri;
pub mod validators;

pub use classifier::*;
pub use error::*;
pub use metadata::*;
pub use uri::*;
pub use validators::*;
