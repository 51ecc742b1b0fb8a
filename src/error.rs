//! Error types for txstream
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for txstream
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Invalid page size: {page_size} (must be greater than zero)")]
    InvalidPageSize { page_size: u32 },

    #[error("Transaction is missing the transport metadata required for cursoring")]
    MissingTransactionId,

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid page size error
    pub fn invalid_page_size(page_size: u32) -> Self {
        Self::InvalidPageSize { page_size }
    }

    /// Create a missing transaction id error
    pub fn missing_transaction_id() -> Self {
        Self::MissingTransactionId
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error originated in the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::HttpStatus { .. })
    }
}

/// Result type alias for txstream
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_page_size(0);
        assert_eq!(
            err.to_string(),
            "Invalid page size: 0 (must be greater than zero)"
        );

        let err = Error::http_status(502, "Bad gateway");
        assert_eq!(err.to_string(), "HTTP 502: Bad gateway");

        let err = Error::missing_transaction_id();
        assert!(err.to_string().contains("transport metadata"));
    }

    #[test]
    fn test_is_transport() {
        assert!(Error::http_status(500, "").is_transport());
        assert!(!Error::invalid_page_size(0).is_transport());
        assert!(!Error::missing_transaction_id().is_transport());
    }
}
