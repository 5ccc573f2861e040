//! Lambda handler for `summarizeMeeting`.
//!
//! This module handles:
//! - CORS preflight
//! - Caller authentication (read from the platform authorizer)
//! - Callable envelope decoding (`{"data": ...}`)
//! - Delegation to `features::summarize` and callable response encoding

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use super::{helpers, parsing};
use crate::ai::{GenerativeModel, VertexClient};
use crate::core::auth::AuthContext;
use crate::core::config::AppConfig;
use crate::core::models::SummarizeRequest;
use crate::errors::{ProviderError, SummarizeError};
use crate::features::summarize::{
    OPERATION_NAME, SummarizeLimits, UNAUTHENTICATED_MESSAGE, summarize_meeting,
};

pub use self::function_handler as handler;

/// Process-wide dependencies shared by every invocation.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn GenerativeModel>,
    pub limits: SummarizeLimits,
}

impl AppState {
    #[must_use]
    pub fn new(model: Arc<dyn GenerativeModel>, limits: SummarizeLimits) -> Self {
        Self { model, limits }
    }

    /// Builds the Vertex AI client once for the lifetime of the process.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ProviderError> {
        let client = VertexClient::new(config)?;
        Ok(Self::new(
            Arc::new(client),
            SummarizeLimits {
                max_text_chars: config.max_text_chars,
            },
        ))
    }
}

/// Lambda handler for the `summarizeMeeting` callable.
///
/// Every outcome, including failures, is rendered as a callable response.
///
/// # Errors
///
/// Never returns `Err` in practice; the signature matches `lambda_runtime`.
#[tracing::instrument(
    level = "info",
    skip(state, event),
    fields(operation = OPERATION_NAME, request_id = %event.context.request_id)
)]
pub async fn function_handler(
    state: &AppState,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let payload = &event.payload;
    let method = parsing::http_method(payload);

    info!(
        method = method.as_deref().unwrap_or("unknown"),
        path = parsing::request_path(payload).unwrap_or(""),
        "API Lambda received request"
    );

    if method.as_deref() == Some("OPTIONS") {
        return Ok(helpers::preflight());
    }

    let auth = AuthContext::from_event(payload);
    if auth.is_none() {
        return Ok(helpers::err_response(&SummarizeError::Unauthenticated(
            UNAUTHENTICATED_MESSAGE.to_string(),
        )));
    }

    let request = match decode_request(payload, method.as_deref()) {
        Ok(request) => request,
        Err(reason) => {
            warn!("Rejecting malformed callable request: {}", reason);
            return Ok(helpers::err_response(&SummarizeError::InvalidArgument(
                reason,
            )));
        }
    };

    match summarize_meeting(state.model.as_ref(), &request, auth.as_ref(), state.limits).await {
        Ok(response) => Ok(helpers::ok_result(&response)),
        Err(e) => Ok(helpers::err_response(&e)),
    }
}

fn decode_request(payload: &Value, method: Option<&str>) -> Result<SummarizeRequest, String> {
    match method {
        Some(method) if method != "POST" => {
            return Err(format!("Request method must be POST, got {method}"));
        }
        _ => {}
    }

    let body = parsing::extract_body(payload)?;
    let data = parsing::parse_callable_data(&body)?;
    Ok(SummarizeRequest::from_data(&data))
}
