//! Error types for Azure DevOps Task Agent API operations.
//!
//! This module defines the error type shared by all SDK operations, with
//! HTTP status classification and comprehensive context for debugging.

use thiserror::Error;

/// Errors during Azure DevOps REST API operations.
///
/// These errors represent failures when communicating with the Azure DevOps
/// API, including HTTP errors, authentication failures, and parsing failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP error response from the Azure DevOps API.
    #[error("HTTP error: {status} - {message}")]
    HttpError { status: u16, message: String },

    /// The request was invalid (client error).
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Authentication to the Azure DevOps API failed.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Authorization check failed (insufficient permissions).
    #[error("Authorization failed")]
    AuthorizationFailed,

    /// The requested resource was not found.
    #[error("Resource not found")]
    NotFound,

    /// Failed to parse a JSON response from the Azure DevOps API.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// HTTP client error (network, TLS, timeout).
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    /// Client-side configuration problem (bad URL, client construction).
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ApiError {
    /// Check whether this error is the not-found response.
    ///
    /// Resource controllers treat not-found as a signal rather than a
    /// failure: a refresh that hits it clears local state instead of
    /// propagating an error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
