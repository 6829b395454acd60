//! CLI error types.

use docmap_config::ConfigError;
use docmap_site::{NotFoundError, ValidationError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Check(String),
}
