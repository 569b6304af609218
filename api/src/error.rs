//! Error type for backend calls.

use thiserror::Error;

/// Failure of a single backend request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, body decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend rejected the bearer token. The global sign-out policy has
    /// already fired by the time the caller sees this.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-2xx response, with the backend's message when it sent one.
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// HTTP status of the failed response, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            ApiError::Unauthorized => Some(401),
            ApiError::Status { status, .. } => Some(*status),
        }
    }
}
