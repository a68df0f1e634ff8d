use serde::{Deserialize, Serialize};

/// Inference server request
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest {
    /// Input text
    pub inputs: String,

    /// Task parameters (summarization only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<SummarizationParameters>,
}

/// Summarization parameters
#[derive(Debug, Clone, Serialize)]
pub struct SummarizationParameters {
    /// Maximum summary length in tokens
    pub max_length: u32,

    /// Minimum summary length in tokens
    pub min_length: u32,

    /// Whether to sample during generation
    pub do_sample: bool,
}

impl Default for SummarizationParameters {
    fn default() -> Self {
        Self {
            max_length: 130,
            min_length: 30,
            do_sample: false,
        }
    }
}

/// One summarization output from the inference server
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryOutput {
    /// Generated summary
    pub summary_text: String,
}

/// One sentiment classification from the inference server
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Sentiment {
    /// Sentiment label (e.g. "POSITIVE", "NEGATIVE")
    pub label: String,

    /// Confidence score (0.0 - 1.0)
    pub score: f64,
}

/// Chat-completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model name
    pub model: String,

    /// Conversation messages
    pub messages: Vec<ChatMessage>,

    /// Response format constraint
    pub response_format: ResponseFormat,
}

/// One chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("system", "user", "assistant")
    pub role: String,

    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response format constraint ("json_object" forces a JSON reply)
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ResponseFormat {
    /// JSON object response format
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object".to_string(),
        }
    }
}

/// Chat-completion response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices
    pub choices: Vec<ChatChoice>,
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// Generated message
    pub message: ChatResponseMessage,
}

/// Generated message content
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponseMessage {
    /// Message text
    pub content: String,
}
