//! Priority strategy: prefer a globally unique scheme, fall back otherwise

use std::sync::Arc;

use archivum_domain::{Context, ObjectType};
use uuid::Uuid;

use super::{EligibleTypes, UriStrategy};
use crate::classifier::SchemeClassifier;
use crate::error::LookupError;

/// Exports the first candidate its classifier accepts
///
/// Candidates are tried in the order given and the first match wins.
/// When nothing matches, the whole request is handed to the fallback
/// strategy and its answer is returned as-is, errors included.
pub struct PriorityUriStrategy {
    classifier: Arc<dyn SchemeClassifier>,
    fallback: Arc<dyn UriStrategy>,
    eligible: EligibleTypes,
}

impl PriorityUriStrategy {
    pub fn new(classifier: Arc<dyn SchemeClassifier>, fallback: Arc<dyn UriStrategy>) -> Self {
        Self {
            classifier,
            fallback,
            eligible: EligibleTypes::default(),
        }
    }

    /// Restrict the object types this strategy serves
    pub fn with_eligible(mut self, eligible: EligibleTypes) -> Self {
        self.eligible = eligible;
        self
    }
}

impl UriStrategy for PriorityUriStrategy {
    fn accepts(&self, object_type: ObjectType) -> bool {
        self.eligible.contains(object_type)
    }

    fn generate(
        &self,
        ctx: &Context,
        object_type: ObjectType,
        id: Uuid,
        handle: Option<&str>,
        identifiers: &[String],
    ) -> Result<Option<String>, LookupError> {
        if !self.accepts(object_type) {
            return Ok(None);
        }

        for candidate in identifiers {
            if let Some(uri) = self.classifier.to_external_form(candidate)? {
                return Ok(Some(uri));
            }
        }

        tracing::info!(
            "Didn't find a {} for {} {}, will use fallback URI strategy",
            self.classifier.scheme(),
            object_type,
            id
        );
        self.fallback
            .generate(ctx, object_type, id, handle, identifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::DoiClassifier;
    use crate::uri::LocalUriStrategy;

    const BASE: &str = "http://localhost:8080/rdf/resource/";

    fn doi_strategy() -> PriorityUriStrategy {
        PriorityUriStrategy::new(
            Arc::new(DoiClassifier::new()),
            Arc::new(LocalUriStrategy::new(BASE)),
        )
    }

    #[test]
    fn test_first_doi_wins() {
        let strategy = doi_strategy();
        let ids = vec![
            "not-a-doi".to_string(),
            "10.1234/xyz".to_string(),
            "10.1234/older".to_string(),
        ];
        let uri = strategy
            .generate(&Context::new(), ObjectType::Item, Uuid::new_v4(), Some("123/456"), &ids)
            .unwrap();
        assert_eq!(uri.as_deref(), Some("https://doi.org/10.1234/xyz"));
    }

    #[test]
    fn test_no_doi_uses_fallback() {
        let strategy = doi_strategy();
        let ids = vec!["123/456".to_string()];
        let uri = strategy
            .generate(&Context::new(), ObjectType::Community, Uuid::new_v4(), Some("123/1"), &ids)
            .unwrap();
        assert_eq!(uri.as_deref(), Some("http://localhost:8080/rdf/resource/123/1"));
    }

    #[test]
    fn test_fallback_absence_is_returned() {
        let strategy = doi_strategy();
        let uri = strategy
            .generate(&Context::new(), ObjectType::Item, Uuid::new_v4(), None, &[])
            .unwrap();
        assert!(uri.is_none());
    }

    /// Fallback returning a fixed outcome and recording what it was asked
    struct ScriptedFallback {
        outcome: fn() -> Result<Option<String>, LookupError>,
        requests: std::sync::Mutex<Vec<(Option<String>, Vec<String>)>>,
    }

    impl ScriptedFallback {
        fn new(outcome: fn() -> Result<Option<String>, LookupError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                requests: std::sync::Mutex::new(Vec::new()),
            })
        }
    }

    impl UriStrategy for ScriptedFallback {
        fn generate(
            &self,
            _ctx: &Context,
            _object_type: ObjectType,
            _id: Uuid,
            handle: Option<&str>,
            identifiers: &[String],
        ) -> Result<Option<String>, LookupError> {
            self.requests
                .lock()
                .unwrap()
                .push((handle.map(str::to_string), identifiers.to_vec()));
            (self.outcome)()
        }
    }

    #[test]
    fn test_fallback_failure_is_returned() {
        let fallback = ScriptedFallback::new(|| Err(LookupError::Unavailable("db down".into())));
        let strategy = PriorityUriStrategy::new(Arc::new(DoiClassifier::new()), fallback.clone());
        let ids = vec!["not-a-doi".to_string(), "123/456".to_string()];

        let result =
            strategy.generate(&Context::new(), ObjectType::Item, Uuid::new_v4(), Some("123/456"), &ids);

        assert!(matches!(result, Err(LookupError::Unavailable(ref m)) if m == "db down"));
        assert_eq!(
            *fallback.requests.lock().unwrap(),
            vec![(Some("123/456".to_string()), ids)]
        );
    }

    #[test]
    fn test_fallback_uri_is_returned_unchanged() {
        let fallback = ScriptedFallback::new(|| Ok(Some("urn:local:abc".to_string())));
        let strategy = PriorityUriStrategy::new(Arc::new(DoiClassifier::new()), fallback.clone());

        let uri = strategy
            .generate(&Context::new(), ObjectType::Site, Uuid::new_v4(), None, &[])
            .unwrap();

        assert_eq!(uri.as_deref(), Some("urn:local:abc"));
        assert_eq!(fallback.requests.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_doi_match_skips_fallback() {
        let fallback = ScriptedFallback::new(|| Err(LookupError::Unavailable("db down".into())));
        let strategy = PriorityUriStrategy::new(Arc::new(DoiClassifier::new()), fallback.clone());
        let ids = vec!["10.1234/xyz".to_string()];

        let uri = strategy
            .generate(&Context::new(), ObjectType::Item, Uuid::new_v4(), None, &ids)
            .unwrap();

        assert_eq!(uri.as_deref(), Some("https://doi.org/10.1234/xyz"));
        assert!(fallback.requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_ineligible_type() {
        let strategy = doi_strategy();
        let ids = vec!["10.1234/xyz".to_string()];
        let uri = strategy
            .generate(&Context::new(), ObjectType::Bundle, Uuid::new_v4(), Some("1/2"), &ids)
            .unwrap();
        assert!(uri.is_none());
    }
}
