//! Handle-derived local URIs

use archivum_domain::{Context, ObjectType};
use uuid::Uuid;

use super::{EligibleTypes, UriStrategy};
use crate::error::LookupError;

/// Split a handle into its prefix and suffix
///
/// Accepts `prefix/suffix` with an optional `hdl:` marker. The suffix may
/// itself contain slashes. Returns `None` for blank or malformed handles.
pub fn parse_handle(handle: &str) -> Option<(&str, &str)> {
    let mut handle = handle.trim();
    if handle
        .get(..4)
        .is_some_and(|head| head.eq_ignore_ascii_case("hdl:"))
    {
        handle = handle[4..].trim_start();
    }

    let (prefix, suffix) = handle.split_once('/')?;
    if prefix.is_empty() || suffix.is_empty() || suffix.split('/').any(str::is_empty) {
        return None;
    }
    Some((prefix, suffix))
}

/// Derives a URI from an object's handle under a local base URI
///
/// The result is `<base><prefix>/<suffix>` with every path segment
/// percent-encoded. Candidates and the object id are ignored, so the
/// same handle always yields the same URI. Objects without a usable handle
/// get no URI.
#[derive(Debug, Clone)]
pub struct LocalUriStrategy {
    base: String,
    eligible: EligibleTypes,
}

impl LocalUriStrategy {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self {
            base,
            eligible: EligibleTypes::default(),
        }
    }

    /// Restrict the object types this strategy serves
    pub fn with_eligible(mut self, eligible: EligibleTypes) -> Self {
        self.eligible = eligible;
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// The URI for a handle, if it is well-formed
    pub fn uri_for_handle(&self, handle: &str) -> Option<String> {
        let (prefix, suffix) = parse_handle(handle)?;
        let mut uri = self.base.clone();
        uri.push_str(&urlencoding::encode(prefix));
        for segment in suffix.split('/') {
            uri.push('/');
            uri.push_str(&urlencoding::encode(segment));
        }
        Some(uri)
    }
}

impl UriStrategy for LocalUriStrategy {
    fn accepts(&self, object_type: ObjectType) -> bool {
        self.eligible.contains(object_type)
    }

    fn generate(
        &self,
        _ctx: &Context,
        object_type: ObjectType,
        id: Uuid,
        handle: Option<&str>,
        _identifiers: &[String],
    ) -> Result<Option<String>, LookupError> {
        if !self.accepts(object_type) {
            return Ok(None);
        }
        let uri = handle.and_then(|h| self.uri_for_handle(h));
        if uri.is_none() {
            tracing::debug!("No usable handle for {} {}, no local URI", object_type, id);
        }
        Ok(uri)
    }
}
