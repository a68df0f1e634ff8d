use std::sync::Arc;

use serde::Deserialize;
use textlens_common::{Result, TextLensError};
use textlens_text::{reading_time, word_count, AnalysisResult};
use tracing::info;

use crate::chat::ChatBackend;
use crate::prompts::{analysis_prompt, ANALYSIS_SYSTEM_PROMPT};

/// Default summary when the remote reply omits one
const DEFAULT_SUMMARY: &str = "No summary available";

/// Default sentiment when the remote reply omits one
const DEFAULT_SENTIMENT: &str = "Neutral";

/// Fields the remote model is instructed to return
///
/// Every field is optional; missing keys get documented defaults. The reply
/// is decoded strictly with serde, never evaluated.
#[derive(Debug, Deserialize)]
struct RemoteAnalysis {
    summary: Option<String>,
    sentiment: Option<String>,
    key_points: Option<Vec<String>>,
}

/// Remote-API analyzer
///
/// Sends the whole unchunked text to a chat-completion API and reshapes the
/// JSON reply into an [`AnalysisResult`]. Metrics are computed locally.
pub struct RemoteAnalyzer {
    backend: Arc<dyn ChatBackend>,
}

impl RemoteAnalyzer {
    /// Create new analyzer over a chat backend
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    /// Analyze text via the remote API
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let word_count = word_count(text);
        let reading_time = reading_time(word_count);

        info!("Starting remote analysis - {} words", word_count);

        let content = self
            .backend
            .complete(ANALYSIS_SYSTEM_PROMPT, &analysis_prompt(text))
            .await?;

        let analysis = parse_analysis(&content)?;

        Ok(AnalysisResult {
            summary: analysis
                .summary
                .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
            sentiment: analysis
                .sentiment
                .unwrap_or_else(|| DEFAULT_SENTIMENT.to_string()),
            key_points: analysis.key_points.unwrap_or_default(),
            word_count,
            reading_time,
        })
    }
}

/// Decode the remote reply strictly as JSON
fn parse_analysis(content: &str) -> Result<RemoteAnalysis> {
    serde_json::from_str(content)
        .map_err(|e| TextLensError::Serialization(format!("Malformed analysis payload: {}", e)))
}
