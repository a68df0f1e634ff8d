use crate::error::TextLensError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// TextLens application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Single origin allowed for cross-origin requests
    pub cors_origin: String,

    /// Directory with the static analysis page
    pub static_dir: PathBuf,

    /// Chat-completion API base URL (OpenAI-compatible)
    pub openai_api_base: String,

    /// Chat-completion API credential.
    /// Absence is not validated here; it surfaces as a failure at call time.
    pub openai_api_key: Option<String>,

    /// Chat-completion model name
    pub openai_model: String,

    /// Local inference server base URL
    pub inference_base_url: String,

    /// Summarization model name
    pub summarization_model: String,

    /// Sentiment classification model name
    pub sentiment_model: String,

    /// Maximum chunk size in words
    pub max_chunk_words: usize,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8000,
            cors_origin: "http://localhost:5173".to_string(),
            static_dir: PathBuf::from("./static"),
            openai_api_base: "https://api.openai.com/v1".to_string(),
            openai_api_key: None,
            openai_model: "gpt-3.5-turbo".to_string(),
            inference_base_url: "http://localhost:9000".to_string(),
            summarization_model: "facebook/bart-large-cnn".to_string(),
            sentiment_model: "distilbert-base-uncased-finetuned-sst-2-english".to_string(),
            max_chunk_words: 500,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, TextLensError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();

        let config = Self {
            server_host: std::env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            cors_origin: std::env::var("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            static_dir: Self::get_env_path("STATIC_DIR").unwrap_or(defaults.static_dir),
            openai_api_base: std::env::var("OPENAI_API_BASE").unwrap_or(defaults.openai_api_base),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            openai_model: std::env::var("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            inference_base_url: std::env::var("INFERENCE_BASE_URL")
                .unwrap_or(defaults.inference_base_url),
            summarization_model: std::env::var("SUMMARIZATION_MODEL")
                .unwrap_or(defaults.summarization_model),
            sentiment_model: std::env::var("SENTIMENT_MODEL").unwrap_or(defaults.sentiment_model),
            max_chunk_words: std::env::var("MAX_CHUNK_WORDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_chunk_words),
            log_dir: Self::get_env_path("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), TextLensError> {
        if !self.openai_api_base.starts_with("http://")
            && !self.openai_api_base.starts_with("https://")
        {
            return Err(TextLensError::config(
                "Chat API base URL must start with http:// or https://",
            ));
        }

        if !self.inference_base_url.starts_with("http://")
            && !self.inference_base_url.starts_with("https://")
        {
            return Err(TextLensError::config(
                "Inference base URL must start with http:// or https://",
            ));
        }

        if self.summarization_model.is_empty() {
            return Err(TextLensError::config(
                "Summarization model name cannot be empty",
            ));
        }

        if self.sentiment_model.is_empty() {
            return Err(TextLensError::config("Sentiment model name cannot be empty"));
        }

        if self.max_chunk_words == 0 {
            return Err(TextLensError::config("Max chunk size cannot be 0"));
        }

        if self.server_port == 0 {
            return Err(TextLensError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
