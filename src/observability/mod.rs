//! Observability
//!
//! Structured logging for scans and requests. Logs are synchronous,
//! single-line JSON with deterministic key ordering.

mod logger;

pub use logger::{Logger, Severity};
