//! Archivum Core - identifier export and repository content services
//!
//! This crate wires the archivum building blocks together:
//!
//! - **Config**: repository location, URI bases, eligible object types, news files
//! - **Services**: the URI strategy chain (DOI first, then handle-derived
//!   local URIs) and the license/news content services
//! - **Error**: one error type across lookup, content and configuration failures
//!
//! # Resolution order
//!
//! ```text
//! StrategyChain → PriorityUriStrategy (DOI) → LocalUriStrategy (handle)
//! ```

pub mod config;
pub mod error;
pub mod services;

pub use config::{ArchivumConfig, ConfigError, LicenseConfig, NewsConfig, UriConfig};
pub use error::{ArchivumError, Result};
pub use services::{Archivum, ExportedUri};

pub use archivum_domain::{Context, ObjectRef, ObjectType};
pub use archivum_identifiers::{LookupError, ObjectMetadata, UriStrategy};
