//! Query Abstract Syntax Tree definitions
//!
//! This crate defines the subset of the structured query language the
//! autobucket pass reads and rewrites: field references, filter clauses,
//! filter values, and the query envelope that carries everything else
//! through untouched.

mod field;
mod filter;
mod query;
mod unit;
mod value;

pub use field::*;
pub use filter::*;
pub use query::*;
pub use unit::*;
pub use value::*;

pub use autobucket_types::{FieldType, TypeInfo};
