//! # Response Envelope
//!
//! The fixed success envelope for the search endpoint: status 200, the
//! permitted-methods header, and a JSON array of decoded call bodies. An
//! empty predicate set produces the same envelope with an empty array.

use axum::http::header::ACCESS_CONTROL_ALLOW_METHODS;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

/// Methods the search endpoint permits.
pub const ALLOWED_METHODS: &str = "OPTIONS,GET";

/// Successful search response
#[derive(Debug, Clone)]
pub struct SearchResponse {
    /// Decoded call bodies, in the first scan's order
    pub body: Vec<Value>,
}

impl SearchResponse {
    pub fn new(body: Vec<Value>) -> Self {
        Self { body }
    }

    /// The designed short-circuit envelope for an empty predicate set.
    pub fn empty() -> Self {
        Self { body: Vec::new() }
    }
}

impl IntoResponse for SearchResponse {
    fn into_response(self) -> Response {
        (
            [(ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS)],
            Json(self.body),
        )
            .into_response()
    }
}
