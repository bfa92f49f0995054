use serde::Serialize;

/// Query string for the search endpoint, encoded as `?value=<text>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchProducts {
    pub value: String,
}

impl From<&str> for SearchProducts {
    fn from(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}
