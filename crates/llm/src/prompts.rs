//! Prompt templates for the remote analysis request

/// System prompt instructing the model to reply with JSON only
pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are a helpful assistant that analyzes text and \
provides summaries, sentiment analysis, and key points. Respond with a JSON object containing \
\"summary\", \"sentiment\", and \"key_points\". Respond with JSON only.";

/// User prompt carrying the text to analyze
pub fn analysis_prompt(text: &str) -> String {
    format!(
        "Analyze the following text and provide a summary, sentiment analysis, and key points: {}",
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_prompt_embeds_text() {
        let prompt = analysis_prompt("hello world");
        assert!(prompt.ends_with("hello world"));
    }
}
