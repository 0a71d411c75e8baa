use std::io;
use thiserror::Error;

/// Custom error types for the localtime application
#[derive(Error, Debug)]
pub enum AppError {
    /// Error when no API key could be resolved from any source
    #[error(
        "API key not found: add API_KEY=<value> to ./.env, add `export API_KEY=\"<value>\"` to \
         ~/.bashrc, set the API_KEY environment variable, or pass --api_key"
    )]
    ApiKeyNotFound,

    /// Error when API request returns an unsuccessful status code
    #[error("API request failed: {0}")]
    ApiRequestFailed(String),

    /// Wrapper for reqwest errors
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Wrapper for I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Wrapper for JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
