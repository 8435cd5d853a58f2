//! callsearch - conjunctive multi-predicate search over a sorted
//! call-analytics index
//!
//! Given independent filter predicates (time range, sentiment bucket,
//! entity tags, language, free-text), issues one scan per predicate against
//! a sorted secondary index, paginates each to completion, and intersects
//! the results by primary identity, preserving the first scan's order.

pub mod api;
pub mod cli;
pub mod index;
pub mod observability;
pub mod search;
