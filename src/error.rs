//! Error types for the customer store
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using CrmError
pub type Result<T> = std::result::Result<T, CrmError>;

/// Unified error type for customer store operations
#[derive(Debug, Error)]
pub enum CrmError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("customer id {0} not found")]
    NotFound(i64),

    #[error("no customer ids left to assign")]
    IdsExhausted,

    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    Decode(String),

    #[error("invalid id {0}")]
    InvalidId(String),

    #[error("Encode error: {0}")]
    Encode(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CrmError {
    fn from(err: serde_json::Error) -> Self {
        CrmError::Decode(err.to_string())
    }
}
