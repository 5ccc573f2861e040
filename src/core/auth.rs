//! Caller identity supplied by the platform authorizer.
//!
//! Token verification happens upstream (API Gateway JWT authorizer or a Lambda
//! authorizer); this module only reads the verified identity off the event.

use serde_json::Value;

use crate::api::parsing::v_str;

const UID_PATHS: [&[&str]; 4] = [
    &["requestContext", "authorizer", "jwt", "claims", "sub"],
    &["requestContext", "authorizer", "claims", "sub"],
    &["requestContext", "authorizer", "lambda", "uid"],
    &["requestContext", "authorizer", "principalId"],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub uid: String,
}

impl AuthContext {
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }

    /// Returns `None` when the event carries no authenticated caller.
    #[must_use]
    pub fn from_event(payload: &Value) -> Option<Self> {
        UID_PATHS
            .iter()
            .find_map(|path| v_str(payload, path))
            .map(str::trim)
            .filter(|uid| !uid.is_empty())
            .map(Self::new)
    }
}
