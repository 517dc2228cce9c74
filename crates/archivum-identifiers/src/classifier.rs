//! Scheme classifiers
//!
//! A classifier decides whether a raw candidate string belongs to one
//! identifier scheme and, if so, renders it in that scheme's canonical
//! external (URI) form.

use crate::error::LookupError;
use crate::validators::{is_valid_doi, normalize_doi};

/// Default resolver for DOI external forms
pub const DEFAULT_DOI_RESOLVER: &str = "https://doi.org/";

/// Converts candidates of one identifier scheme into canonical URIs
pub trait SchemeClassifier: Send + Sync {
    /// Short scheme name used in log lines (e.g. "DOI")
    fn scheme(&self) -> &str;

    /// Canonical external form of `candidate`
    ///
    /// `Ok(None)` means the candidate is not of this scheme. `Err` is
    /// reserved for failures of whatever backs the classifier.
    fn to_external_form(&self, candidate: &str) -> Result<Option<String>, LookupError>;
}

/// Classifier for Digital Object Identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoiClassifier {
    resolver: String,
}

impl DoiClassifier {
    /// Classifier rendering DOIs against `https://doi.org/`
    pub fn new() -> Self {
        Self::with_resolver(DEFAULT_DOI_RESOLVER)
    }

    /// Classifier rendering DOIs against a custom resolver base
    pub fn with_resolver(resolver: impl Into<String>) -> Self {
        let mut resolver = resolver.into();
        if !resolver.ends_with('/') {
            resolver.push('/');
        }
        Self { resolver }
    }

    pub fn resolver(&self) -> &str {
        &self.resolver
    }
}

impl Default for DoiClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemeClassifier for DoiClassifier {
    fn scheme(&self) -> &str {
        "DOI"
    }

    fn to_external_form(&self, candidate: &str) -> Result<Option<String>, LookupError> {
        let doi = normalize_doi(candidate);
        if !is_valid_doi(&doi) {
            return Ok(None);
        }
        Ok(Some(format!("{}{}", self.resolver, doi)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("10.1234/xyz", "https://doi.org/10.1234/xyz")]
    #[case("doi:10.1038/nature12373", "https://doi.org/10.1038/nature12373")]
    #[case("http://dx.doi.org/10.1038/nature12373", "https://doi.org/10.1038/nature12373")]
    fn test_doi_external_form(#[case] candidate: &str, #[case] expected: &str) {
        let classifier = DoiClassifier::new();
        assert_eq!(
            classifier.to_external_form(candidate).unwrap(),
            Some(expected.to_string())
        );
    }

    #[rstest]
    #[case("not-a-doi")]
    #[case("123/456")]
    #[case("http://hdl.handle.net/123/456")]
    #[case("")]
    #[case("10.١٢٣٤/abc")]
    fn test_non_doi_is_soft_miss(#[case] candidate: &str) {
        let classifier = DoiClassifier::new();
        assert_eq!(classifier.to_external_form(candidate).unwrap(), None);
    }

    #[test]
    fn test_custom_resolver() {
        let classifier = DoiClassifier::with_resolver("https://dx.doi.org");
        assert_eq!(classifier.resolver(), "https://dx.doi.org/");
        assert_eq!(
            classifier.to_external_form("10.1234/xyz").unwrap().as_deref(),
            Some("https://dx.doi.org/10.1234/xyz")
        );
    }
}
