//! The `summarizeMeeting` operation.

use tracing::{error, info};

use crate::ai::GenerativeModel;
use crate::core::auth::AuthContext;
use crate::core::models::{SummarizeRequest, SummarizeResponse};
use crate::errors::SummarizeError;
use crate::prompt::build_prompt;

pub const OPERATION_NAME: &str = "summarizeMeeting";

pub const UNAUTHENTICATED_MESSAGE: &str = "The function must be called while authenticated.";
pub const INVALID_TEXT_MESSAGE: &str = "The function must be called with a 'text' argument.";
pub const INTERNAL_MESSAGE: &str = "Failed to generate summary.";

/// Input bounds applied before any provider call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummarizeLimits {
    pub max_text_chars: Option<usize>,
}

/// Checks the request and returns the notes to summarize.
///
/// # Errors
///
/// `InvalidArgument` when `text` is missing, not a string, empty, or longer
/// than the configured bound.
pub fn validate_text<'a>(
    request: &'a SummarizeRequest,
    limits: SummarizeLimits,
) -> Result<&'a str, SummarizeError> {
    let text = request
        .text_str()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| SummarizeError::InvalidArgument(INVALID_TEXT_MESSAGE.to_string()))?;

    if let Some(max) = limits.max_text_chars {
        let chars = text.chars().count();
        if chars > max {
            return Err(SummarizeError::InvalidArgument(format!(
                "The 'text' argument exceeds the maximum length of {max} characters ({chars} given)."
            )));
        }
    }

    Ok(text)
}

/// Summarizes one block of meeting notes for an authenticated caller.
///
/// Authentication is checked before the arguments, and the provider is
/// called at most once.
///
/// # Errors
///
/// `Unauthenticated` without an auth context, `InvalidArgument` for a bad
/// `text`, and `Internal` for any provider failure.
pub async fn summarize_meeting(
    model: &dyn GenerativeModel,
    request: &SummarizeRequest,
    auth: Option<&AuthContext>,
    limits: SummarizeLimits,
) -> Result<SummarizeResponse, SummarizeError> {
    let Some(auth) = auth else {
        return Err(SummarizeError::Unauthenticated(
            UNAUTHENTICATED_MESSAGE.to_string(),
        ));
    };

    let text = validate_text(request, limits)?;
    let prompt = build_prompt(text);

    info!(uid = %auth.uid, text_chars = text.chars().count(), "Generating meeting summary");

    let summary = model
        .generate_content(&prompt)
        .await
        .and_then(|resp| resp.first_text().map(ToString::to_string))
        .map_err(|e| {
            error!("Error calling Gemini API: {}", e);
            SummarizeError::Internal {
                message: INTERNAL_MESSAGE.to_string(),
                details: Some(e.to_string()),
            }
        })?;

    Ok(SummarizeResponse { summary })
}
