//! # HTTP Search Server
//!
//! Axum router exposing the search endpoint over an injected store. The
//! store is constructed once per process and shared by reference into each
//! request's engine invocation.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

use crate::index::IndexStore;
use crate::observability::{Logger, Severity};
use crate::search::SearchEngine;

use super::config::ServerConfig;
use super::errors::ApiError;
use super::params::parse_params;
use super::response::SearchResponse;

/// HTTP server for the search endpoint
pub struct SearchServer<S: IndexStore> {
    config: ServerConfig,
    store: Arc<S>,
}

impl<S: IndexStore + Send + Sync + 'static> SearchServer<S> {
    /// Create a server over a shared store with default configuration.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, ServerConfig::default())
    }

    /// Create a server with explicit configuration.
    pub fn with_config(store: Arc<S>, config: ServerConfig) -> Self {
        Self { config, store }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/search", get(search_handler::<S>))
            .with_state(self.store.clone())
            .layer(cors)
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        Logger::log(
            Severity::Info,
            "server_start",
            &[("addr", &addr.to_string())],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}

/// GET /search
async fn search_handler<S: IndexStore + Send + Sync + 'static>(
    State(store): State<Arc<S>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<SearchResponse, ApiError> {
    let request_id = Uuid::new_v4().to_string();
    Logger::log(
        Severity::Info,
        "search_request",
        &[
            ("request_id", request_id.as_str()),
            ("params", &query.len().to_string()),
        ],
    );

    let params = parse_params(&query)?;
    if params.is_empty() {
        // Designed short circuit: no predicates means empty body, no scan.
        Logger::log(
            Severity::Info,
            "search_short_circuit",
            &[("request_id", request_id.as_str())],
        );
        return Ok(SearchResponse::empty());
    }

    let engine = SearchEngine::new(store.as_ref());
    let body = engine.search(&params).map_err(|err| {
        Logger::log_stderr(
            Severity::Error,
            "search_failed",
            &[
                ("request_id", request_id.as_str()),
                ("reason", &err.to_string()),
            ],
        );
        ApiError::from(err)
    })?;

    Logger::log(
        Severity::Info,
        "search_response",
        &[
            ("request_id", request_id.as_str()),
            ("results", &body.len().to_string()),
        ],
    );
    Ok(SearchResponse::new(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{CallDocument, MemoryIndexStore};
    use axum::body::Body;
    use axum::http::header::ACCESS_CONTROL_ALLOW_METHODS;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn seeded_server() -> SearchServer<MemoryIndexStore> {
        let store = MemoryIndexStore::new();
        let doc = CallDocument {
            identity: "job-1".to_string(),
            timestamp: 150.0,
            language: Some("en".to_string()),
            entities: vec!["billing".to_string()],
            sentiment: None,
            attributes: Value::Null,
        };
        store.extend(doc.fan_out().unwrap());
        SearchServer::new(Arc::new(store))
    }

    async fn get(server: &SearchServer<MemoryIndexStore>, uri: &str) -> axum::response::Response {
        server
            .router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_search_returns_envelope() {
        let server = seeded_server();
        let response = get(&server, "/search?language=en").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(ACCESS_CONTROL_ALLOW_METHODS)
                .and_then(|v| v.to_str().ok()),
            Some("OPTIONS,GET")
        );
    }

    #[tokio::test]
    async fn test_no_params_short_circuits_to_ok() {
        let server = seeded_server();
        let response = get(&server, "/search").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_param_is_bad_request() {
        let server = seeded_server();
        let response = get(&server, "/search?limit=10").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_sentiment_value_is_bad_request() {
        let server = seeded_server();
        let response = get(&server, "/search?sentimentWho=supervisor").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
