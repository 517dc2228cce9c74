//! Reference to a managed repository object

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ObjectType;

/// A repository object as seen by identifier export
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub id: Uuid,
    #[serde(default)]
    pub handle: Option<String>,
}

impl ObjectRef {
    /// Create a reference without a handle
    pub fn new(object_type: ObjectType, id: Uuid) -> Self {
        Self {
            object_type,
            id,
            handle: None,
        }
    }

    /// Attach a handle
    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn handle(&self) -> Option<&str> {
        self.handle.as_deref()
    }
}
