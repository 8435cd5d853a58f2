//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

use crate::api::ApiError;
use crate::search::SearchError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Seed file could not be read
    #[error("cannot read seed file {}: {source}", path.display())]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not a valid call document array
    #[error("invalid seed file {}: {source}", path.display())]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Predicate flags failed validation
    #[error(transparent)]
    Params(#[from] ApiError),

    /// The search itself failed
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Server could not start
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}
