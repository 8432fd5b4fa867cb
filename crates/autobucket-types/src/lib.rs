//! Autobucket type system
//!
//! This crate defines:
//! - The field type taxonomy (base and semantic types with parent links)
//! - Type info records as returned by the field metadata catalog
//! - The date-like classifier used to decide which fields get bucketed

pub mod field_type;
pub mod type_info;

pub use field_type::*;
pub use type_info::*;
