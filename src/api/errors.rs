//! # API Errors
//!
//! Error types for the HTTP search endpoint. Parameter rejections are client
//! errors; anything the search core surfaces is a server error, passed
//! through unmodified.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::search::SearchError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP search endpoint errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// A recognized parameter carried an invalid value
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// The query string carried a parameter this endpoint does not know
    #[error("Unrecognized query parameter: {0}")]
    UnknownParam(String),

    /// Scan or decode failure inside the search core
    #[error("Search failed: {0}")]
    Search(#[from] SearchError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownParam(_) => StatusCode::BAD_REQUEST,
            ApiError::Search(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::StoreError;

    #[test]
    fn test_parameter_errors_are_client_errors() {
        assert_eq!(
            ApiError::InvalidQueryParam("timestampFrom".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UnknownParam("limit".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_search_failures_are_server_errors() {
        let err = ApiError::from(SearchError::from(StoreError::scan_failed("call", "down")));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("call"));
    }
}
