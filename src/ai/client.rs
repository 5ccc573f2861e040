//! Vertex AI (Gemini) client.
//!
//! The client is built once per process and shared across invocations; it
//! holds no per-request state.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::core::config::AppConfig;
use crate::errors::ProviderError;

/// A hosted text generator that answers a single prompt.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Sends one `generateContent` call for `prompt`.
    async fn generate_content(
        &self,
        prompt: &str,
    ) -> Result<GenerateContentResponse, ProviderError>;
}

/// Builds the `:generateContent` URL for a publisher model.
///
/// `base` overrides the regional `https://{location}-aiplatform.googleapis.com/` host.
///
/// # Errors
///
/// Returns `ProviderError::Endpoint` if the resulting URL does not parse.
pub fn generate_content_url(
    base: Option<&str>,
    project_id: &str,
    location: &str,
    model: &str,
) -> Result<Url, ProviderError> {
    let mut base = base.map_or_else(
        || format!("https://{location}-aiplatform.googleapis.com/"),
        ToString::to_string,
    );
    if !base.ends_with('/') {
        base.push('/');
    }

    let base = Url::parse(&base).map_err(|e| ProviderError::Endpoint(format!("{base}: {e}")))?;
    base.join(&format!(
        "v1/projects/{project_id}/locations/{location}/publishers/google/models/{model}:generateContent"
    ))
    .map_err(|e| ProviderError::Endpoint(e.to_string()))
}

pub struct VertexClient {
    http: Client,
    endpoint: Url,
    access_token: String,
    model: String,
}

impl VertexClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the endpoint is invalid.
    pub fn new(config: &AppConfig) -> Result<Self, ProviderError> {
        let endpoint = generate_content_url(
            config.api_endpoint.as_deref(),
            &config.project_id,
            &config.location,
            &config.model,
        )?;

        let mut builder = Client::builder();
        if let Some(secs) = config.provider_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ProviderError::Http(format!("Failed to build Vertex AI HTTP client: {e}")))?;

        info!(model = %config.model, location = %config.location, "Vertex AI client ready");

        Ok(Self {
            http,
            endpoint,
            access_token: config.access_token.clone(),
            model: config.model.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl GenerativeModel for VertexClient {
    async fn generate_content(
        &self,
        prompt: &str,
    ) -> Result<GenerateContentResponse, ProviderError> {
        #[cfg(feature = "debug-logs")]
        debug!("Using Gemini prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        debug!(prompt_chars = prompt.chars().count(), "Calling generateContent");

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.access_token)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }
}
