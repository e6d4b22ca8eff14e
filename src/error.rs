use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the resource clients.
///
/// The taxonomy is transport-level only: either the request never produced a
/// usable response (connect failure, the 100s timeout, a body that failed to
/// decode) or the server answered with a non-success status. Domain outcomes
/// such as a declined payment arrive inside `PaymentResponse`, not here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: StatusCode, message: String },
}

impl ApiError {
    /// Status code of the server response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Transport(e) => e.status(),
            ApiError::Status { status, .. } => Some(*status),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport(e) if e.is_timeout())
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
