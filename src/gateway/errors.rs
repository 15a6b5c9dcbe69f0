//! The single error shape every backend failure is normalized into.

use thiserror::Error;

/// Failure of one gateway call. The display form is the user-visible message:
/// the backend's structured `message` field when present, otherwise the HTTP
/// status description, otherwise "Unknown error".
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response from the backend.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Connection-level failure before any response arrived.
    #[error("{0}")]
    Transport(String),

    /// 2xx response whose payload could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
