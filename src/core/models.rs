use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound `summarizeMeeting` payload.
///
/// `text` is kept as a raw JSON value so that a wrong type is reported as an
/// invalid argument instead of a decode failure.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

impl SummarizeRequest {
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(Value::String(text.into())),
        }
    }

    /// Reads a request out of the callable `data` field. Anything that is not
    /// a JSON object yields an empty request.
    #[must_use]
    pub fn from_data(data: &Value) -> Self {
        if data.is_object() {
            serde_json::from_value(data.clone()).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn text_str(&self) -> Option<&str> {
        self.text.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}
