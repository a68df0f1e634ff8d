use std::sync::Arc;

use textlens_common::{Result, TextLensError};
use textlens_text::{
    chunk_text, extract_key_points, reading_time, word_count, AnalysisResult,
    DEFAULT_MAX_KEY_POINTS,
};
use tracing::{debug, info};

use crate::inference::InferenceBackend;
use crate::types::Sentiment;

const POSITIVE_LABEL: &str = "POSITIVE";
const NEGATIVE_LABEL: &str = "NEGATIVE";

/// Model-backed analyzer
///
/// Chunks the input to respect the models' input-length limits, summarizes
/// the first chunk, classifies sentiment per chunk, and reduces the chunk
/// sentiments by majority vote and averaged confidence.
pub struct ModelAnalyzer {
    backend: Arc<dyn InferenceBackend>,
    max_chunk_words: usize,
}

impl ModelAnalyzer {
    /// Create new analyzer over an inference backend
    pub fn new(backend: Arc<dyn InferenceBackend>, max_chunk_words: usize) -> Self {
        Self {
            backend,
            max_chunk_words,
        }
    }

    /// Analyze text with the local models
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let word_count = word_count(text);
        let reading_time = reading_time(word_count);

        let chunks = chunk_text(text, self.max_chunk_words);
        let first_chunk = chunks
            .first()
            .ok_or_else(|| TextLensError::invalid_input("Text contains no sentences to analyze"))?;

        info!(
            "Starting model-backed analysis - {} words, {} chunks",
            word_count,
            chunks.len()
        );

        // Only the first chunk is summarized; later chunks are not merged.
        let summary = self.backend.summarize(first_chunk).await?;

        let mut sentiments = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            debug!("Classifying sentiment for chunk {}/{}", i + 1, chunks.len());
            sentiments.push(self.backend.classify_sentiment(chunk).await?);
        }

        let sentiment = aggregate_sentiment(&sentiments);
        let key_points = extract_key_points(text, DEFAULT_MAX_KEY_POINTS);

        Ok(AnalysisResult {
            summary,
            sentiment,
            key_points,
            word_count,
            reading_time,
        })
    }
}

/// Reduce per-chunk sentiments to one label with averaged confidence
///
/// Majority vote on the positive label; ties go to negative.
fn aggregate_sentiment(sentiments: &[Sentiment]) -> String {
    let total = sentiments.len();
    let positive = sentiments
        .iter()
        .filter(|s| s.label == POSITIVE_LABEL)
        .count();
    let avg_score = sentiments.iter().map(|s| s.score).sum::<f64>() / total as f64;

    let overall = if positive * 2 > total {
        POSITIVE_LABEL
    } else {
        NEGATIVE_LABEL
    };

    format!(
        "{} ({}% confidence)",
        overall,
        (avg_score * 100.0).round() as i64
    )
}
