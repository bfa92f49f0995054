pub const GENERIC_ERROR_MESSAGE: &str =
    "Something went wrong. Check the backend console for more details";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Error,
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub variant: Variant,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: Variant::Error,
        }
    }

    /// The fixed notice shown for any backend or transport failure.
    pub fn backend_failure() -> Self {
        Self::error(GENERIC_ERROR_MESSAGE)
    }
}
