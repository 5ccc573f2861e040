use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of an API Gateway (v1 or v2) / Function URL event, upper-cased.
pub fn http_method(payload: &Value) -> Option<String> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .map(str::to_ascii_uppercase)
}

pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

/// Returns the request body as text, decoding it when `isBase64Encoded` is set.
pub fn extract_body(payload: &Value) -> Result<String, String> {
    let body = payload
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| "Missing body".to_string())?;

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(body.to_string());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| format!("Failed to decode base64 body: {e}"))?;
    String::from_utf8(bytes).map_err(|e| format!("Body is not valid UTF-8: {e}"))
}

/// Reads the callable `data` field out of a JSON request body.
pub fn parse_callable_data(body: &str) -> Result<Value, String> {
    let json: Value =
        serde_json::from_str(body).map_err(|e| format!("Request body is not valid JSON: {e}"))?;
    match json.get("data") {
        Some(data) if !data.is_null() => Ok(data.clone()),
        _ => Err("Request body is missing the 'data' field".to_string()),
    }
}
