//! Plain-text repository content
//!
//! - License: the site-wide deposit license submitters must grant
//! - News: the small set of editable news snippets shown by the front end
//!
//! Both live as UTF-8 files under `<repository_dir>/config/`. Invalid UTF-8
//! is decoded lossily on read.

pub mod error;
pub mod license;
pub mod news;
mod text;

pub use error::{ContentError, Result};
pub use license::{LicenseService, DEFAULT_LICENSE_FILE};
pub use news::NewsService;

use std::path::{Path, PathBuf};

/// Directory holding editable content files for a repository
pub fn config_dir(repository_dir: &Path) -> PathBuf {
    repository_dir.join("config")
}
