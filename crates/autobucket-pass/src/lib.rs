//! Automatic day bucketing of unqualified temporal fields
//!
//! Queries written before explicit temporal bucketing existed expect a bare
//! date or datetime field in a breakout or a date filter to be grouped or
//! compared at day granularity. This pass makes that explicit by wrapping
//! such references in a `datetime-field ... :day` clause before execution.
//!
//! # Example
//!
//! ```ignore
//! use autobucket_pass::auto_bucket;
//!
//! let rewritten = auto_bucket(query, &catalog)?;
//! ```

pub mod error;
pub mod guard;
pub mod pass;
pub mod resolver;
pub mod rewriter;

pub use error::*;
pub use guard::{must_not_rewrite, Node};
pub use pass::*;
pub use resolver::{resolve_type_info, TypeInfoMap};
pub use rewriter::Rewriter;
