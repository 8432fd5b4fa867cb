//! Tree rewriter
//!
//! Walks breakouts and the filter tree, wrapping every eligible date-like
//! reference in `datetime-field ... :day`. A reference reached through a
//! `joined-field` is wrapped at the join level, so the result reads
//! `[:datetime-field [:joined-field "J" [:field-id 1]] :day]` and never the
//! other way round.

use crate::guard::{must_not_rewrite, Node};
use crate::resolver::TypeInfoMap;
use autobucket_ast::{FieldRef, Filter};
use autobucket_types::is_date_like;
use log::trace;
use std::cell::Cell;

/// Position of a reference relative to join indirection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Enclosing {
    TopLevel,
    Joined,
}

/// Result of visiting one field reference
enum Visit {
    Unchanged(FieldRef),
    Bucketed(FieldRef),
    /// Date-like, but the enclosing join must be wrapped instead
    Deferred(FieldRef),
}

/// Rewrites a query tree against resolved type info
#[derive(Debug)]
pub struct Rewriter<'a> {
    types: &'a TypeInfoMap,
    bucketed: Cell<usize>,
}

impl<'a> Rewriter<'a> {
    pub fn new(types: &'a TypeInfoMap) -> Self {
        Self {
            types,
            bucketed: Cell::new(0),
        }
    }

    /// Number of references wrapped so far
    pub fn bucketed_count(&self) -> usize {
        self.bucketed.get()
    }

    /// Rewrite breakouts, keeping their order
    pub fn rewrite_breakouts(&self, breakouts: Vec<FieldRef>) -> Vec<FieldRef> {
        breakouts
            .into_iter()
            .map(|field| self.rewrite_field(field))
            .collect()
    }

    /// Rewrite a filter tree
    ///
    /// Compound clauses keep their children in order; guarded leaves are
    /// returned untouched along with everything beneath them.
    pub fn rewrite_filter(&self, filter: Filter) -> Filter {
        if must_not_rewrite(Node::Filter(&filter)) {
            return filter;
        }
        match filter {
            Filter::And(children) => Filter::And(self.rewrite_children(children)),
            Filter::Or(children) => Filter::Or(self.rewrite_children(children)),
            Filter::Not(inner) => Filter::Not(Box::new(self.rewrite_filter(*inner))),
            Filter::Compare { op, field, values } => Filter::Compare {
                op,
                field: self.rewrite_field(field),
                values,
            },
            other => other,
        }
    }

    /// Rewrite a single top-level field reference
    pub fn rewrite_field(&self, field: FieldRef) -> FieldRef {
        match self.visit(field, Enclosing::TopLevel) {
            Visit::Unchanged(field) | Visit::Bucketed(field) => field,
            Visit::Deferred(field) => self.bucket(field),
        }
    }

    fn rewrite_children(&self, children: Vec<Filter>) -> Vec<Filter> {
        children
            .into_iter()
            .map(|child| self.rewrite_filter(child))
            .collect()
    }

    fn visit(&self, field: FieldRef, enclosing: Enclosing) -> Visit {
        if must_not_rewrite(Node::Field(&field)) {
            return Visit::Unchanged(field);
        }
        match field {
            FieldRef::Joined { alias, field: inner } => {
                match self.visit(*inner, Enclosing::Joined) {
                    Visit::Unchanged(inner) | Visit::Bucketed(inner) => {
                        Visit::Unchanged(FieldRef::joined(alias, inner))
                    }
                    Visit::Deferred(inner) => {
                        self.settle(FieldRef::joined(alias, inner), enclosing)
                    }
                }
            }
            FieldRef::Id(_) | FieldRef::Literal { .. } if self.is_date_like(&field) => {
                self.settle(field, enclosing)
            }
            other => Visit::Unchanged(other),
        }
    }

    fn settle(&self, field: FieldRef, enclosing: Enclosing) -> Visit {
        match enclosing {
            Enclosing::TopLevel => Visit::Bucketed(self.bucket(field)),
            Enclosing::Joined => Visit::Deferred(field),
        }
    }

    fn is_date_like(&self, field: &FieldRef) -> bool {
        field
            .key()
            .is_some_and(|key| is_date_like(self.types.get(&key)))
    }

    fn bucket(&self, field: FieldRef) -> FieldRef {
        trace!("bucketing {} by day", field);
        self.bucketed.set(self.bucketed.get() + 1);
        field.bucket_by_day()
    }
}
