//! CLI functionality for the autobucket tool
//!
//! This module contains:
//! - Query rewriting
//! - Query checking
//! - Catalog loading
//! - Output formatting

pub mod catalog;
pub mod check;
pub mod output;
pub mod rewrite;
