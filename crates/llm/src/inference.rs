use async_trait::async_trait;
use reqwest::Client;
use textlens_common::{Result, TextLensError};
use tracing::{debug, info};

use crate::types::{InferenceRequest, Sentiment, SummarizationParameters, SummaryOutput};

/// Seam for the model-backed analyzer; implemented by [`InferenceClient`]
/// and by stubs in tests.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Summarize a single chunk of text
    async fn summarize(&self, text: &str) -> Result<String>;

    /// Classify the sentiment of a single chunk of text
    async fn classify_sentiment(&self, text: &str) -> Result<Sentiment>;
}

/// Client for an inference server hosting the summarization and sentiment
/// models
///
/// Explicitly constructed and owned by the host application; model handles
/// live on the server side, so there is no process-global state here.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    base_url: String,
    summarization_model: String,
    sentiment_model: String,
    client: Client,
}

impl InferenceClient {
    /// Create new inference client
    pub fn new(
        base_url: impl Into<String>,
        summarization_model: impl Into<String>,
        sentiment_model: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(300)) // 5 minutes for model calls
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Inference client initialized: {}", base_url);
        Ok(Self {
            base_url,
            summarization_model: summarization_model.into(),
            sentiment_model: sentiment_model.into(),
            client,
        })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url, model)
    }

    async fn post(&self, model: &str, request: &InferenceRequest) -> Result<reqwest::Response> {
        self.client
            .post(self.model_url(model))
            .json(request)
            .send()
            .await
            .map_err(|e| TextLensError::network(format!("Failed to reach inference server: {}", e)))?
            .error_for_status()
            .map_err(|e| TextLensError::inference(format!("Inference server error: {}", e)))
    }
}

#[async_trait]
impl InferenceBackend for InferenceClient {
    async fn summarize(&self, text: &str) -> Result<String> {
        debug!(
            "Sending summarization request - Model: {}, Input length: {}",
            self.summarization_model,
            text.len()
        );

        let request = InferenceRequest {
            inputs: text.to_string(),
            parameters: Some(SummarizationParameters::default()),
        };

        let outputs: Vec<SummaryOutput> = self
            .post(&self.summarization_model, &request)
            .await?
            .json()
            .await
            .map_err(|e| {
                TextLensError::inference(format!("Failed to parse summarization response: {}", e))
            })?;

        let output = outputs
            .into_iter()
            .next()
            .ok_or_else(|| TextLensError::inference("Empty summarization response"))?;

        Ok(output.summary_text)
    }

    async fn classify_sentiment(&self, text: &str) -> Result<Sentiment> {
        debug!(
            "Sending sentiment request - Model: {}, Input length: {}",
            self.sentiment_model,
            text.len()
        );

        let request = InferenceRequest {
            inputs: text.to_string(),
            parameters: None,
        };

        let outputs: Vec<Sentiment> = self
            .post(&self.sentiment_model, &request)
            .await?
            .json()
            .await
            .map_err(|e| {
                TextLensError::inference(format!("Failed to parse sentiment response: {}", e))
            })?;

        outputs
            .into_iter()
            .next()
            .ok_or_else(|| TextLensError::inference("Empty sentiment response"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = InferenceClient::new(
            "http://localhost:9000",
            "facebook/bart-large-cnn",
            "distilbert-base-uncased-finetuned-sst-2-english",
        )
        .unwrap();
        assert_eq!(
            client.model_url("facebook/bart-large-cnn"),
            "http://localhost:9000/models/facebook/bart-large-cnn"
        );
    }
}
