//! Configuration for archivum-core
//!
//! Loaded from TOML (or JSON) with every field optional:
//!
//! ```toml
//! repository_dir = "/srv/repository"
//!
//! [uri]
//! local_base = "http://localhost:8080/rdf/resource/"
//! doi_resolver = "https://doi.org/"
//! eligible_types = ["site", "community", "collection", "item"]
//!
//! [news]
//! acceptable_filenames = ["news-top.html", "news-side.html"]
//!
//! [license]
//! file_name = "default.license"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use archivum_domain::ObjectType;
use archivum_identifiers::DEFAULT_DOI_RESOLVER;

/// System-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchivumConfig {
    /// Root of the repository installation; content lives in its `config/`
    pub repository_dir: PathBuf,
    /// URI export settings
    pub uri: UriConfig,
    /// News file settings
    pub news: NewsConfig,
    /// Deposit license settings
    pub license: LicenseConfig,
}

impl Default for ArchivumConfig {
    fn default() -> Self {
        Self {
            repository_dir: PathBuf::from("."),
            uri: UriConfig::default(),
            news: NewsConfig::default(),
            license: LicenseConfig::default(),
        }
    }
}

/// URI export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UriConfig {
    /// Base under which handle-derived URIs are minted
    pub local_base: String,
    /// Resolver prefix for DOI external forms
    pub doi_resolver: String,
    /// Object types that get an exported URI
    pub eligible_types: Vec<ObjectType>,
}

impl Default for UriConfig {
    fn default() -> Self {
        Self {
            local_base: "http://localhost:8080/rdf/resource/".to_string(),
            doi_resolver: DEFAULT_DOI_RESOLVER.to_string(),
            eligible_types: ObjectType::uri_eligible().to_vec(),
        }
    }
}

/// News file configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// The only file names the news service will touch
    pub acceptable_filenames: Vec<String>,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            acceptable_filenames: vec!["news-top.html".to_string(), "news-side.html".to_string()],
        }
    }
}

/// Deposit license configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseConfig {
    /// Default license file name inside the config directory
    pub file_name: String,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            file_name: archivum_content::DEFAULT_LICENSE_FILE.to_string(),
        }
    }
}

impl ArchivumConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults rooted at `repository_dir`
    pub fn for_repository(repository_dir: impl Into<PathBuf>) -> Self {
        Self {
            repository_dir: repository_dir.into(),
            ..Self::default()
        }
    }

    /// Standard location of the user's config file, if the platform has one
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("archivum").join("config.toml"))
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a config file; `.json` files are read as JSON, anything else as TOML
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&text)?,
            _ => Self::from_toml(&text)?,
        };
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_http_url("uri.local_base", &self.uri.local_base)?;
        check_http_url("uri.doi_resolver", &self.uri.doi_resolver)?;

        if self.uri.eligible_types.is_empty() {
            return Err(ConfigError::MissingField("uri.eligible_types".to_string()));
        }
        if let Some(t) = self
            .uri
            .eligible_types
            .iter()
            .find(|t| !t.is_uri_eligible())
        {
            return Err(ConfigError::OutOfRange(format!(
                "uri.eligible_types: {} cannot be given a URI",
                t
            )));
        }

        if self.license.file_name.trim().is_empty() {
            return Err(ConfigError::MissingField("license.file_name".to_string()));
        }
        check_plain_file_name("license.file_name", &self.license.file_name)?;
        for name in &self.news.acceptable_filenames {
            check_plain_file_name("news.acceptable_filenames", name)?;
        }

        Ok(())
    }
}

fn check_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUri {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    };
    let parsed = url::Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme {}", other))),
    }
}

fn check_plain_file_name(field: &str, name: &str) -> Result<(), ConfigError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(ConfigError::OutOfRange(format!(
            "{}: {:?} is not a plain file name",
            field, name
        )));
    }
    Ok(())
}

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A base URI does not parse or is not http(s)
    #[error("Invalid URI for {field}: {value} ({reason})")]
    InvalidUri {
        field: String,
        value: String,
        reason: String,
    },

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Required field is missing
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Config text could not be parsed or serialized
    #[error("Parse error: {0}")]
    Parse(String),

    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(String),
}
