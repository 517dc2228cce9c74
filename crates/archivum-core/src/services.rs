//! Service wiring
//!
//! Builds every archivum service once from an [`ArchivumConfig`]. The
//! resulting [`Archivum`] is shared by reference (or `Arc`) across callers.

use std::sync::Arc;

use archivum_content::{LicenseService, NewsService};
use archivum_domain::{Context, ObjectRef, ObjectType};
use archivum_identifiers::{
    DoiClassifier, EligibleTypes, LocalUriStrategy, ObjectMetadata, PriorityUriStrategy,
    StrategyChain, UriStrategy,
};
use serde::Serialize;
use uuid::Uuid;

use crate::config::ArchivumConfig;
use crate::error::{ArchivumError, Result};

/// Outcome of exporting one object's URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedUri {
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub id: Uuid,
    /// `None` when the object legitimately has no exported identifier
    pub uri: Option<String>,
}

/// The wired-up archivum services
pub struct Archivum {
    config: ArchivumConfig,
    uri: StrategyChain,
    license: LicenseService,
    news: NewsService,
}

impl Archivum {
    /// Validate `config` and build all services from it
    pub fn from_config(config: ArchivumConfig) -> Result<Self> {
        config.validate()?;

        let eligible = EligibleTypes::new(config.uri.eligible_types.iter().copied());
        let local: Arc<dyn UriStrategy> = Arc::new(
            LocalUriStrategy::new(config.uri.local_base.clone()).with_eligible(eligible.clone()),
        );
        let doi = PriorityUriStrategy::new(
            Arc::new(DoiClassifier::with_resolver(config.uri.doi_resolver.clone())),
            local.clone(),
        )
        .with_eligible(eligible);
        let uri = StrategyChain::new().with(Arc::new(doi)).with(local);

        let license =
            LicenseService::with_file_name(&config.repository_dir, &config.license.file_name);
        let news = NewsService::new(
            &config.repository_dir,
            config.news.acceptable_filenames.clone(),
        );

        tracing::info!(
            "Archivum services ready for {} (local URIs under {})",
            config.repository_dir.display(),
            config.uri.local_base
        );

        Ok(Self {
            config,
            uri,
            license,
            news,
        })
    }

    pub fn config(&self) -> &ArchivumConfig {
        &self.config
    }

    /// The URI strategy chain used for export
    pub fn uri_strategy(&self) -> &StrategyChain {
        &self.uri
    }

    pub fn license(&self) -> &LicenseService {
        &self.license
    }

    pub fn news(&self) -> &NewsService {
        &self.news
    }

    /// Resolve the exported URI for one object
    pub fn resolve(
        &self,
        ctx: &Context,
        object: &ObjectRef,
        metadata: &dyn ObjectMetadata,
    ) -> Result<Option<String>> {
        self.uri
            .generate_for_object(ctx, object, metadata)
            .map_err(|source| ArchivumError::Export {
                object_type: object.object_type,
                id: object.id,
                source,
            })
    }

    /// Resolve URIs for a batch of objects, in order
    ///
    /// Stops at the first hard failure; objects without an identifier are
    /// reported with `uri: None`.
    pub fn export_uris(
        &self,
        ctx: &Context,
        objects: &[ObjectRef],
        metadata: &dyn ObjectMetadata,
    ) -> Result<Vec<ExportedUri>> {
        objects
            .iter()
            .map(|object| -> Result<ExportedUri> {
                Ok(ExportedUri {
                    object_type: object.object_type,
                    id: object.id,
                    uri: self.resolve(ctx, object, metadata)?,
                })
            })
            .collect()
    }
}
