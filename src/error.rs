//! Error types
//!
//! `ContentError` covers reading the content tree; `ApiError` is what the
//! pipeline and CLI surface to callers.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading the content tree.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk content tree: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Top-level error returned by the pipeline and CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write output {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
