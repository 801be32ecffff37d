//! Error types for the Jenkins client.
//!
//! The crate applies one result discipline everywhere: transport
//! failures are surfaced as [`Error::Http`], a response body that does
//! not decode into the expected shape is always
//! [`Error::MalformedResponse`], a non-success status on a read maps to
//! `Ok(None)` at the call site, and a non-success status on a write
//! maps to `Ok(false)` — job creation being the one write that signals
//! failure through [`Error::JobAlreadyExists`] instead.

use thiserror::Error;

/// Result type alias for Jenkins client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Jenkins client.
#[derive(Error, Debug)]
pub enum Error {
    // ===== Transport Errors =====
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    // ===== Protocol Errors =====
    #[error("Malformed response: {context}")]
    MalformedResponse { context: String },

    #[error("Job already exists: {0}")]
    JobAlreadyExists(String),

    // ===== Configuration Errors =====
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a malformed-response error with decode context.
    pub fn malformed(context: impl Into<String>) -> Self {
        Self::MalformedResponse {
            context: context.into(),
        }
    }
}
