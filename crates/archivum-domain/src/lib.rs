//! Repository domain types shared across the archivum crates
//!
//! This crate provides the canonical models the other crates agree on:
//! - ObjectType: the repository's object-type registry (item, collection, ...)
//! - ObjectRef: a managed object's type, id and handle
//! - Context: one logical session against the repository store

pub mod context;
pub mod object;
pub mod object_type;

pub use context::*;
pub use object::*;
pub use object_type::*;
