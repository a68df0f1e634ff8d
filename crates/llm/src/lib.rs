//! TextLens model integration
//!
//! Inference-server and chat-completion clients plus the two analyzers
//! built on top of them.

mod analyzer;
mod chat;
mod inference;
mod prompts;
mod remote;
mod types;

pub use analyzer::ModelAnalyzer;
pub use chat::{ChatBackend, ChatClient};
pub use inference::{InferenceBackend, InferenceClient};
pub use prompts::{analysis_prompt, ANALYSIS_SYSTEM_PROMPT};
pub use remote::RemoteAnalyzer;
pub use types::{ChatMessage, Sentiment, SummarizationParameters};
