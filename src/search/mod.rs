//! Conjunctive multi-predicate search core
//!
//! One request flows through four stages:
//!
//! 1. Predicate builder: validated parameters → ordered scan descriptors
//! 2. Paginated scanner: one descriptor → full result set across pages
//! 3. Intersection aggregator: AND on identity, first scan's order kept
//! 4. Result materializer: surviving payloads → decoded bodies
//!
//! # Invariants
//!
//! - An empty predicate set never scans the store
//! - Response order equals the first-constructed descriptor's scan order
//! - A scan or decode failure aborts the request with nothing returned

mod engine;
mod errors;
mod intersect;
mod materialize;
mod params;
mod predicate;
mod scanner;

pub use engine::SearchEngine;
pub use errors::{SearchError, SearchResult};
pub use intersect::{intersect, IdentitySet};
pub use materialize::materialize;
pub use params::{SearchParams, SentimentDirection, SentimentWhat, SentimentWho};
pub use predicate::build_descriptors;
pub use scanner::RecordScan;
