//! `generateContent` request and response payloads.

use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content fragment. Non-text parts (inline data, function calls) decode
/// with `text: None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single-turn user request carrying only `prompt`.
    #[must_use]
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Convenience constructor for a response holding one candidate with one text part.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some("model".to_string()),
                    parts: vec![Part {
                        text: Some(text.into()),
                    }],
                }),
                finish_reason: Some("STOP".to_string()),
            }],
        }
    }

    /// Text of the first part of the first candidate.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::MalformedResponse` when there is no candidate,
    /// no part, or the first part carries no text.
    pub fn first_text(&self) -> Result<&str, ProviderError> {
        let candidate = self.candidates.first().ok_or_else(|| {
            ProviderError::MalformedResponse("response contained no candidates".to_string())
        })?;

        let part = candidate
            .content
            .as_ref()
            .and_then(|content| content.parts.first())
            .ok_or_else(|| {
                ProviderError::MalformedResponse(format!(
                    "first candidate has no content parts (finish reason: {})",
                    candidate.finish_reason.as_deref().unwrap_or("unknown")
                ))
            })?;

        part.text.as_deref().ok_or_else(|| {
            ProviderError::MalformedResponse("first content part has no text".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("hello")).unwrap();
        assert_eq!(
            body,
            json!({"contents": [{"role": "user", "parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn test_first_text_uses_first_candidate_and_part() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "first"}, {"text": "second"}]},
                 "finishReason": "STOP"},
                {"content": {"parts": [{"text": "other candidate"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 12}
        }))
        .unwrap();
        assert_eq!(resp.first_text().unwrap(), "first");
    }

    #[test]
    fn test_no_candidates_is_malformed() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            resp.first_text(),
            Err(ProviderError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_no_parts_is_malformed() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();
        let err = resp.first_text().unwrap_err();
        assert!(err.to_string().contains("SAFETY"));

        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"role": "model", "parts": []}}]
        }))
        .unwrap();
        assert!(resp.first_text().is_err());
    }

    #[test]
    fn test_non_text_part_is_malformed() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": ""}}]}}]
        }))
        .unwrap();
        assert!(matches!(
            resp.first_text(),
            Err(ProviderError::MalformedResponse(_))
        ));
    }
}
