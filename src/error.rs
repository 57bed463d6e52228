//! Error taxonomy for fetching and decoding dashboard data.

use reqwest::StatusCode;

/// Coarse classification used when a pipeline reports a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be completed or returned a non-success status.
    NetworkFailure,
    /// The response body is not the document we expected.
    ParseFailure,
}

/// Errors that can occur while loading case or boundary data.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("{url} responded with status {status}")]
    HttpStatus { url: String, status: StatusCode },

    /// Source location is not a usable URL.
    #[error("invalid source URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Local source could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Body is not valid JSON or does not match the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, wrong kind of document.
    #[error("malformed document: {message}")]
    Malformed { message: String },
}

impl DashboardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DashboardError::Network(_)
            | DashboardError::HttpStatus { .. }
            | DashboardError::InvalidUrl { .. }
            | DashboardError::Io(_) => ErrorKind::NetworkFailure,
            DashboardError::Json(_) | DashboardError::Malformed { .. } => ErrorKind::ParseFailure,
        }
    }
}
