//! Error types for guestbook-relay

use std::fmt;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Upstream API call that produced a failing response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamCall {
    /// Listing forms (account-wide or site-scoped)
    ListForms,
    /// Listing submissions for a resolved form
    ListSubmissions,
}

impl fmt::Display for UpstreamCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListForms => f.write_str("Failed to list forms"),
            Self::ListSubmissions => f.write_str("Failed to list submissions"),
        }
    }
}

/// Errors raised while resolving guestbook entries
#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration is absent
    #[error("{0}")]
    Config(String),

    /// Upstream answered with a non-success status
    #[error("{call}")]
    Upstream {
        /// Which call failed
        call: UpstreamCall,
        /// Upstream HTTP status code
        status: u16,
        /// Upstream response body, verbatim
        body: String,
    },

    /// Transport-level failure talking to the upstream
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Local I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// HTTP status the handler should answer with for this error
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Upstream { status, .. } => *status,
            Self::Config(_)
            | Self::Http(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Upstream body attached as detail, if any
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::Upstream { body, .. } => Some(body),
            _ => None,
        }
    }
}
