//! Error types for the remote API boundary.

use newsdesk_core::error::NewsdeskError;

/// Errors from remote content API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("not found: {0}")]
    NotFound(String),
}

impl From<ApiError> for NewsdeskError {
    fn from(err: ApiError) -> Self {
        NewsdeskError::Api(err.to_string())
    }
}
