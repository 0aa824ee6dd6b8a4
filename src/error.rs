//! Error types for ledgr
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in ledgr
#[derive(Debug, Error)]
pub enum LedgrError {
    /// Configuration problem (bad file, missing token, duplicate catalog entry)
    #[error("Config error: {0}")]
    Config(String),

    /// Remote API failure (transport error or non-success HTTP status)
    #[error("API error: {0}")]
    Api(String),

    /// Invalid request that was rejected before hitting the network
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Tool registry construction error
    #[error("Registry error: {0}")]
    Registry(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ledgr operations
pub type Result<T> = std::result::Result<T, LedgrError>;
