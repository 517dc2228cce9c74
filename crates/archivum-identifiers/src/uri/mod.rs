//! URI strategies
//!
//! A strategy decides which single URI to export for a repository object.
//! Strategies are stateless and shared across concurrent resolutions; they
//! are composed through [`StrategyChain`] rather than by layering types.
//!
//! Every strategy reports three outcomes:
//! - `Ok(Some(uri))`: a URI was produced
//! - `Ok(None)`: the strategy does not apply (ineligible type, no match)
//! - `Err(LookupError)`: the backing store or classifier failed

pub mod chain;
pub mod local;
pub mod priority;

pub use chain::StrategyChain;
pub use local::{parse_handle, LocalUriStrategy};
pub use priority::PriorityUriStrategy;

use archivum_domain::{Context, ObjectRef, ObjectType};
use uuid::Uuid;

use crate::error::LookupError;
use crate::metadata::ObjectMetadata;

/// Produces the exported URI for a repository object
pub trait UriStrategy: Send + Sync {
    /// Whether this strategy can ever produce a URI for `object_type`
    fn accepts(&self, object_type: ObjectType) -> bool {
        object_type.is_uri_eligible()
    }

    /// Resolve a URI from the object's parts and its candidate identifiers
    fn generate(
        &self,
        ctx: &Context,
        object_type: ObjectType,
        id: Uuid,
        handle: Option<&str>,
        identifiers: &[String],
    ) -> Result<Option<String>, LookupError>;

    /// Resolve a URI for `object`, fetching its identifiers from `metadata`
    ///
    /// Ineligible types return `Ok(None)` before `metadata` is consulted.
    fn generate_for_object(
        &self,
        ctx: &Context,
        object: &ObjectRef,
        metadata: &dyn ObjectMetadata,
    ) -> Result<Option<String>, LookupError> {
        if !self.accepts(object.object_type) {
            return Ok(None);
        }
        let identifiers = metadata.identifiers(ctx, object)?;
        self.generate(
            ctx,
            object.object_type,
            object.id,
            object.handle(),
            &identifiers,
        )
    }
}

/// The set of object types a strategy serves
///
/// Always a subset of [`ObjectType::uri_eligible`]; out-of-domain types
/// passed to [`EligibleTypes::new`] are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleTypes {
    types: Vec<ObjectType>,
}

impl EligibleTypes {
    pub fn new(types: impl IntoIterator<Item = ObjectType>) -> Self {
        let mut types: Vec<ObjectType> = types
            .into_iter()
            .filter(|t| t.is_uri_eligible())
            .collect();
        types.sort();
        types.dedup();
        Self { types }
    }

    pub fn contains(&self, object_type: ObjectType) -> bool {
        self.types.contains(&object_type)
    }

    pub fn as_slice(&self) -> &[ObjectType] {
        &self.types
    }
}

impl Default for EligibleTypes {
    fn default() -> Self {
        Self::new(ObjectType::uri_eligible().iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_eligible_types() {
        let eligible = EligibleTypes::default();
        assert_eq!(eligible.as_slice().len(), 4);
        assert!(eligible.contains(ObjectType::Site));
        assert!(!eligible.contains(ObjectType::Bitstream));
    }

    #[test]
    fn test_eligible_types_drop_out_of_domain() {
        let eligible = EligibleTypes::new([
            ObjectType::Item,
            ObjectType::Group,
            ObjectType::Item,
            ObjectType::Collection,
        ]);
        assert_eq!(
            eligible.as_slice(),
            &[ObjectType::Item, ObjectType::Collection]
        );
    }
}
