use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use minutes::ai::{GenerateContentResponse, GenerativeModel};
use minutes::errors::ProviderError;

enum Reply {
    Text(String),
    Raw(GenerateContentResponse),
    Fail(String),
}

/// Records every prompt it receives and answers with a canned reply.
#[derive(Clone)]
pub struct MockModel {
    reply: Arc<Reply>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockModel {
    pub fn new(summary: &str) -> Self {
        Self::with_reply(Reply::Text(summary.to_string()))
    }

    pub fn raw(response: GenerateContentResponse) -> Self {
        Self::with_reply(Reply::Raw(response))
    }

    pub fn failing(msg: &str) -> Self {
        Self::with_reply(Reply::Fail(msg.to_string()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply: Arc::new(reply),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn generate_content(
        &self,
        prompt: &str,
    ) -> Result<GenerateContentResponse, ProviderError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        match self.reply.as_ref() {
            Reply::Text(text) => Ok(GenerateContentResponse::from_text(text.clone())),
            Reply::Raw(response) => Ok(response.clone()),
            Reply::Fail(msg) => Err(ProviderError::Http(msg.clone())),
        }
    }
}
