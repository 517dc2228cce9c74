//! Object metadata providers
//!
//! A metadata provider answers "which identifier strings are attached to
//! this object", in the order the store keeps them.

use std::collections::HashMap;
use std::sync::RwLock;

use archivum_domain::{Context, ObjectRef};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LookupError;

/// Source of an object's candidate identifiers
pub trait ObjectMetadata: Send + Sync {
    /// Candidate identifiers for `object`, in store order
    fn identifiers(&self, ctx: &Context, object: &ObjectRef) -> Result<Vec<String>, LookupError>;
}

/// One object and its identifiers, as listed in a JSON manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    #[serde(flatten)]
    pub object: ObjectRef,
    #[serde(default)]
    pub identifiers: Vec<String>,
}

/// Parse a JSON manifest (an array of [`ManifestEntry`])
pub fn parse_manifest(json: &str) -> Result<Vec<ManifestEntry>, serde_json::Error> {
    serde_json::from_str(json)
}

/// In-memory metadata provider
///
/// Objects that were never registered have no identifiers.
#[derive(Debug, Default)]
pub struct InMemoryMetadata {
    entries: RwLock<HashMap<Uuid, Vec<String>>>,
}

impl InMemoryMetadata {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a provider from manifest entries
    ///
    /// An id listed twice is rejected rather than letting one entry
    /// replace the other.
    pub fn from_manifest(entries: &[ManifestEntry]) -> Result<Self, LookupError> {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            if map
                .insert(entry.object.id, entry.identifiers.clone())
                .is_some()
            {
                return Err(LookupError::Store(format!(
                    "Duplicate manifest entry for {} {}",
                    entry.object.object_type, entry.object.id
                )));
            }
        }
        Ok(Self {
            entries: RwLock::new(map),
        })
    }

    /// Replace the identifiers recorded for an object
    pub fn insert(&self, id: Uuid, identifiers: Vec<String>) -> Result<(), LookupError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| LookupError::Store(format!("Lock poisoned: {}", e)))?;
        entries.insert(id, identifiers);
        Ok(())
    }

    /// Number of registered objects
    pub fn len(&self) -> Result<usize, LookupError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| LookupError::Store(format!("Lock poisoned: {}", e)))?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool, LookupError> {
        Ok(self.len()? == 0)
    }
}

impl ObjectMetadata for InMemoryMetadata {
    fn identifiers(&self, _ctx: &Context, object: &ObjectRef) -> Result<Vec<String>, LookupError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| LookupError::Store(format!("Lock poisoned: {}", e)))?;
        Ok(entries.get(&object.id).cloned().unwrap_or_default())
    }
}
