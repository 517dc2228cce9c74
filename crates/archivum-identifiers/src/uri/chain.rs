//! Ordered composition of URI strategies

use std::sync::Arc;

use archivum_domain::{Context, ObjectType};
use uuid::Uuid;

use super::UriStrategy;
use crate::error::LookupError;

/// Strategies evaluated in order until one produces a URI
///
/// A strategy that does not apply lets evaluation continue. A hard failure
/// stops the chain immediately; later strategies are never consulted.
#[derive(Clone, Default)]
pub struct StrategyChain {
    strategies: Vec<Arc<dyn UriStrategy>>,
}

impl StrategyChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a strategy to the end of the chain
    pub fn with(mut self, strategy: Arc<dyn UriStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn push(&mut self, strategy: Arc<dyn UriStrategy>) {
        self.strategies.push(strategy);
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl UriStrategy for StrategyChain {
    fn accepts(&self, object_type: ObjectType) -> bool {
        self.strategies.iter().any(|s| s.accepts(object_type))
    }

    fn generate(
        &self,
        ctx: &Context,
        object_type: ObjectType,
        id: Uuid,
        handle: Option<&str>,
        identifiers: &[String],
    ) -> Result<Option<String>, LookupError> {
        for (position, strategy) in self.strategies.iter().enumerate() {
            match strategy.generate(ctx, object_type, id, handle, identifiers) {
                Ok(Some(uri)) => return Ok(Some(uri)),
                Ok(None) => {
                    tracing::debug!(
                        "Strategy {} produced no URI for {} {}",
                        position,
                        object_type,
                        id
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "URI resolution for {} {} aborted at strategy {}: {}",
                        object_type,
                        id,
                        position,
                        e
                    );
                    return Err(e);
                }
            }
        }
        Ok(None)
    }
}
