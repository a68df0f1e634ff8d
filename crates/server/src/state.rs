use std::sync::Arc;

use textlens_common::{AppConfig, Result};
use textlens_llm::{
    ChatBackend, ChatClient, InferenceBackend, InferenceClient, ModelAnalyzer, RemoteAnalyzer,
};

/// Shared application state
///
/// Client handles are constructed once here and owned for the process
/// lifetime; nothing is lazily initialized.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Model-backed analyzer (local inference server)
    pub local: ModelAnalyzer,

    /// Remote-API analyzer (chat completions)
    pub remote: RemoteAnalyzer,
}

impl AppState {
    /// Create new application state with real clients
    pub fn new(config: AppConfig) -> Result<Self> {
        let inference = Arc::new(InferenceClient::new(
            config.inference_base_url.clone(),
            config.summarization_model.clone(),
            config.sentiment_model.clone(),
        )?);
        let chat = Arc::new(ChatClient::new(
            config.openai_api_base.clone(),
            config.openai_api_key.clone(),
            config.openai_model.clone(),
        )?);

        Ok(Self::with_backends(config, inference, chat))
    }

    /// Create application state over explicit backends (used by tests)
    pub fn with_backends(
        config: AppConfig,
        inference: Arc<dyn InferenceBackend>,
        chat: Arc<dyn ChatBackend>,
    ) -> Self {
        let local = ModelAnalyzer::new(inference, config.max_chunk_words);
        let remote = RemoteAnalyzer::new(chat);

        Self {
            config,
            local,
            remote,
        }
    }
}
