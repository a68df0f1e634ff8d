use serde::{Deserialize, Serialize};

/// Result of a single text analysis
///
/// One stateless record per analysis; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Summary text produced by a model or API
    pub summary: String,

    /// Sentiment label, with a confidence annotation in the model-backed path
    pub sentiment: String,

    /// Key points in original order
    pub key_points: Vec<String>,

    /// Whitespace-delimited word count
    pub word_count: usize,

    /// Estimated reading time, e.g. "1 min" or "3 mins"
    pub reading_time: String,
}
