//! HTTP adapter for the search core
//!
//! Thin layer around the engine: query-string validation, the fixed
//! response envelope, and the axum server. Scan and decode failures pass
//! through unmodified and map to 500; parameter rejections map to 400.

mod config;
mod errors;
mod params;
mod response;
mod server;

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use params::parse_params;
pub use response::{SearchResponse, ALLOWED_METHODS};
pub use server::SearchServer;
