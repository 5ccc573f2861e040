//! Response builders for the callable protocol.
//!
//! Success bodies are `{"result": ...}`; failures are
//! `{"error": {"status", "message", "details"?}}` with a matching HTTP status.

use serde::Serialize;
use serde_json::{Value, json};

use crate::errors::SummarizeError;

fn headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Headers": "Authorization, Content-Type",
        "Access-Control-Allow-Methods": "POST, OPTIONS"
    })
}

/// Returns a 200 OK response wrapping `result`.
#[must_use]
pub fn ok_result<T: Serialize>(result: &T) -> Value {
    let result = serde_json::to_value(result).unwrap_or(Value::Null);
    json!({
        "statusCode": 200,
        "headers": headers(),
        "body": json!({ "result": result }).to_string()
    })
}

/// Returns the callable error envelope for `error`.
#[must_use]
pub fn err_response(error: &SummarizeError) -> Value {
    let code = error.code();
    let mut body = json!({
        "status": code.status(),
        "message": error.to_string(),
    });
    if let Some(details) = error.details() {
        body["details"] = Value::String(details.to_string());
    }

    json!({
        "statusCode": code.http_status(),
        "headers": headers(),
        "body": json!({ "error": body }).to_string()
    })
}

/// Returns a 204 response for CORS preflight requests.
#[must_use]
pub fn preflight() -> Value {
    json!({ "statusCode": 204, "headers": headers(), "body": "" })
}
