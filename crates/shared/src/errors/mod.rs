mod error;
mod http;

pub use self::error::ErrorResponse;
pub use self::http::HttpError;
