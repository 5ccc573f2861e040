//! Minutes - a serverless endpoint that summarizes meeting notes with Gemini.
//!
//! The crate exposes a single callable operation, `summarizeMeeting`, deployed
//! as an AWS Lambda behind an authorizer:
//! 1. The authorizer verifies the caller before the Lambda runs
//! 2. The handler validates the `text` argument and builds a fixed prompt
//! 3. One `generateContent` call is made to Vertex AI
//! 4. The first generated text fragment is returned as the summary
//!
//! # Example
//!
//! ```no_run
//! use minutes::ai::VertexClient;
//! use minutes::core::auth::AuthContext;
//! use minutes::core::config::AppConfig;
//! use minutes::core::models::SummarizeRequest;
//! use minutes::features::{SummarizeLimits, summarize_meeting};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     minutes::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let client = VertexClient::new(&config)?;
//!
//!     let request = SummarizeRequest::with_text("Alice and Bob agreed to launch Friday.");
//!     let auth = AuthContext::new("user-123");
//!     let response =
//!         summarize_meeting(&client, &request, Some(&auth), SummarizeLimits::default()).await?;
//!
//!     println!("Summary: {}", response.summary);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;
pub mod prompt;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. Calling it more than once is harmless; later calls are ignored.
///
/// # Example
///
/// ```
/// minutes::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
