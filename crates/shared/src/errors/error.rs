use serde::Deserialize;

/// Failure body returned by the backend, e.g.
/// `{ "success": false, "message": "..." }`. Only the message is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
