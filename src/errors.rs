use thiserror::Error;

/// Caller-visible error kinds for `summarizeMeeting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Unauthenticated,
    InvalidArgument,
    Internal,
}

impl ErrorCode {
    /// Wire name of the error kind (`unauthenticated`, `invalid-argument`, `internal`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Unauthenticated => "unauthenticated",
            ErrorCode::InvalidArgument => "invalid-argument",
            ErrorCode::Internal => "internal",
        }
    }

    /// Status name used in the callable error envelope.
    #[must_use]
    pub const fn status(self) -> &'static str {
        match self {
            ErrorCode::Unauthenticated => "UNAUTHENTICATED",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::Internal => "INTERNAL",
        }
    }

    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            ErrorCode::Unauthenticated => 401,
            ErrorCode::InvalidArgument => 400,
            ErrorCode::Internal => 500,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    InvalidArgument(String),

    /// `message` is what the caller sees; `details` carries the underlying failure.
    #[error("{message}")]
    Internal {
        message: String,
        details: Option<String>,
    },
}

impl SummarizeError {
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            SummarizeError::Unauthenticated(_) => ErrorCode::Unauthenticated,
            SummarizeError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            SummarizeError::Internal { .. } => ErrorCode::Internal,
        }
    }

    #[must_use]
    pub fn details(&self) -> Option<&str> {
        match self {
            SummarizeError::Internal { details, .. } => details.as_deref(),
            _ => None,
        }
    }
}

/// Failures talking to the generative-text provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Provider returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to decode provider response: {0}")]
    Decode(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Invalid provider endpoint: {0}")]
    Endpoint(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ProviderError::Decode(error.to_string())
        } else {
            ProviderError::Http(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(error: serde_json::Error) -> Self {
        ProviderError::Decode(error.to_string())
    }
}
