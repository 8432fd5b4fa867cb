//! Field metadata catalog abstraction
//!
//! This crate provides:
//! - The `MetadataCatalog` trait the autobucket pass reads type info through
//! - An in-memory catalog registry loadable from JSON
//! - An empty catalog for callers with no field metadata

pub mod provider;
pub mod registry;

pub use provider::*;
pub use registry::*;
