use minutes::api::{AppState, handler};
use minutes::core::config::AppConfig;
use std::sync::Arc;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    minutes::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        lambda_runtime::Error::from(e)
    })?;
    let state = Arc::new(AppState::from_config(&config).map_err(|e| {
        error!("Failed to initialize Vertex AI client: {}", e);
        lambda_runtime::Error::from(e.to_string())
    })?);

    lambda_runtime::run(lambda_runtime::service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(&state, event).await }
    }))
    .await
}
