use async_trait::async_trait;
use reqwest::Client;
use textlens_common::{Result, TextLensError};
use tracing::{debug, info};

use crate::types::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};

/// Seam for the remote-API analyzer; implemented by [`ChatClient`] and by
/// stubs in tests.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Run one chat completion and return the reply content
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Client for an OpenAI-compatible chat-completion API
#[derive(Debug, Clone)]
pub struct ChatClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: Client,
}

impl ChatClient {
    /// Create new chat client
    ///
    /// A missing credential is accepted here; it surfaces as a failure at
    /// call time.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Chat client initialized: {}", base_url);
        Ok(Self {
            base_url,
            api_key,
            model: model.into(),
            client,
        })
    }
}

#[async_trait]
impl ChatBackend for ChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| TextLensError::chat("OPENAI_API_KEY is not set"))?;

        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            response_format: ResponseFormat::json_object(),
        };

        debug!(
            "Sending chat completion request - Model: {}, Prompt length: {}",
            request.model,
            user.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TextLensError::network(format!("Failed to reach chat API: {}", e)))?
            .error_for_status()
            .map_err(|e| TextLensError::chat(format!("Chat API error: {}", e)))?;

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| TextLensError::chat(format!("Failed to parse chat response: {}", e)))?;

        let choice = result
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| TextLensError::chat("Chat response contained no choices"))?;

        debug!(
            "Received chat completion - Length: {}",
            choice.message.content.len()
        );

        Ok(choice.message.content)
    }
}
