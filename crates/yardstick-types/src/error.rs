//! Error types for yardstick

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Errors raised while reading the content document
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Failed to parse content JSON: {0}")]
    InvalidJson(String),

    #[error("Failed to parse content TOML: {0}")]
    InvalidToml(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
