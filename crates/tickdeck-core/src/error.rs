//! Error types for tickdeck-core.
//!
//! The engines themselves never fail; rejected input simply leaves state
//! unchanged. These types cover the fallible edges: configuration files
//! and the quote fetcher.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not determine or create the config directory
    #[error("Config directory unavailable: {0}")]
    NoDataDir(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Quote fetching errors. Never surfaced past the fallback chain.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status code
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// Response body did not have the expected shape
    #[error("Malformed quote response: {0}")]
    Malformed(String),

    /// Endpoint URL could not be built
    #[error("Invalid quote URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}
