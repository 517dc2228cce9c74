//! Object-type registry for repository objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Types of objects managed by the repository
///
/// The numeric codes are stable and shared with the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// A stored file
    Bitstream,
    /// A group of bitstreams inside an item
    Bundle,
    /// A single archived work
    Item,
    /// A set of items
    Collection,
    /// A set of collections and sub-communities
    Community,
    /// The repository as a whole
    Site,
    /// A group of users
    Group,
    /// A user account
    EPerson,
}

impl ObjectType {
    /// Get all object types, ordered by code
    pub fn all() -> &'static [ObjectType] {
        &[
            ObjectType::Bitstream,
            ObjectType::Bundle,
            ObjectType::Item,
            ObjectType::Collection,
            ObjectType::Community,
            ObjectType::Site,
            ObjectType::Group,
            ObjectType::EPerson,
        ]
    }

    /// The object types that can be given an exported URI
    pub fn uri_eligible() -> &'static [ObjectType] {
        &[
            ObjectType::Site,
            ObjectType::Community,
            ObjectType::Collection,
            ObjectType::Item,
        ]
    }

    /// Whether this type can be given an exported URI at all
    pub fn is_uri_eligible(self) -> bool {
        Self::uri_eligible().contains(&self)
    }

    /// Numeric code of this type
    pub fn code(self) -> u8 {
        match self {
            ObjectType::Bitstream => 0,
            ObjectType::Bundle => 1,
            ObjectType::Item => 2,
            ObjectType::Collection => 3,
            ObjectType::Community => 4,
            ObjectType::Site => 5,
            ObjectType::Group => 6,
            ObjectType::EPerson => 7,
        }
    }

    /// Look up a type by its numeric code
    pub fn from_code(code: u8) -> Option<ObjectType> {
        Self::all().iter().copied().find(|t| t.code() == code)
    }

    /// Upper-case name used in log lines and reports
    pub fn type_text(self) -> &'static str {
        match self {
            ObjectType::Bitstream => "BITSTREAM",
            ObjectType::Bundle => "BUNDLE",
            ObjectType::Item => "ITEM",
            ObjectType::Collection => "COLLECTION",
            ObjectType::Community => "COMMUNITY",
            ObjectType::Site => "SITE",
            ObjectType::Group => "GROUP",
            ObjectType::EPerson => "EPERSON",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_text())
    }
}

/// Error for an object type name that is not in the registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown object type: {0}")]
pub struct UnknownObjectType(pub String);

impl FromStr for ObjectType {
    type Err = UnknownObjectType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.type_text().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownObjectType(wanted.to_string()))
    }
}
