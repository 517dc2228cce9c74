//! Deposit license storage

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{ContentError, Result};
use crate::text::read_lines_lossy;

/// File name of the default deposit license inside the config directory
pub const DEFAULT_LICENSE_FILE: &str = "default.license";

/// Reads and writes license texts and caches the site-wide default
#[derive(Debug)]
pub struct LicenseService {
    default_path: PathBuf,
    license: RwLock<Option<String>>,
}

impl LicenseService {
    /// Service for `<repository_dir>/config/default.license`
    pub fn new(repository_dir: impl AsRef<Path>) -> Self {
        Self::with_file_name(repository_dir, DEFAULT_LICENSE_FILE)
    }

    /// Service for `<repository_dir>/config/<file_name>`
    pub fn with_file_name(repository_dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self {
            default_path: crate::config_dir(repository_dir.as_ref()).join(file_name),
            license: RwLock::new(None),
        }
    }

    /// Location of the default license file
    pub fn default_license_path(&self) -> &Path {
        &self.default_path
    }

    /// Write `text` verbatim to `path` and make it the cached default license
    pub fn write_license_file(&self, path: impl AsRef<Path>, text: &str) -> Result<()> {
        let path = path.as_ref();
        if let Err(e) = fs::write(path, text) {
            tracing::warn!("license_write: {}: {}", path.display(), e);
            return Err(ContentError::io(path, e));
        }
        *self.cache_mut()? = Some(text.to_string());
        Ok(())
    }

    /// Read a license file, terminating every line with `\n`
    pub fn license_text(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        read_lines(path).map_err(|e| {
            tracing::error!("Can't load license {}: {}", path.display(), e);
            ContentError::io(path, e)
        })
    }

    /// The site-wide default license submitters need to grant
    ///
    /// Loaded from disk on first use and cached afterwards.
    pub fn default_submission_license(&self) -> Result<String> {
        if let Some(license) = self.cache()?.as_ref() {
            return Ok(license.clone());
        }

        let mut cache = self.cache_mut()?;
        if let Some(license) = cache.as_ref() {
            return Ok(license.clone());
        }
        let license = self.license_text(&self.default_path)?;
        tracing::debug!("Loaded default license from {}", self.default_path.display());
        *cache = Some(license.clone());
        Ok(license)
    }

    fn cache(&self) -> Result<std::sync::RwLockReadGuard<'_, Option<String>>> {
        self.license
            .read()
            .map_err(|e| ContentError::State(format!("License cache poisoned: {}", e)))
    }

    fn cache_mut(&self) -> Result<std::sync::RwLockWriteGuard<'_, Option<String>>> {
        self.license
            .write()
            .map_err(|e| ContentError::State(format!("License cache poisoned: {}", e)))
    }
}

fn read_lines(path: &Path) -> std::io::Result<String> {
    let mut text = String::new();
    for line in read_lines_lossy(path)? {
        text.push_str(&line);
        text.push('\n');
    }
    Ok(text)
}
