use crate::errors::error::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl HttpError {
    /// Builds the error for a non-2xx response, preferring the backend's
    /// `message` field over the raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|response| response.message)
            .unwrap_or_else(|_| body.trim().to_string());

        match status {
            404 => HttpError::NotFound(message),
            _ => HttpError::Status { status, message },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, HttpError::NotFound(_))
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return HttpError::Decode(err.to_string());
        }

        match err.status() {
            Some(status) => HttpError::from_status(status.as_u16(), &err.to_string()),
            None => HttpError::Transport(err.to_string()),
        }
    }
}
