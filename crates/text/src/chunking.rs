/// Default maximum chunk size, counted in words
pub const DEFAULT_MAX_CHUNK_WORDS: usize = 500;

/// Split text into word-count-bounded chunks on sentence boundaries
///
/// Newlines are collapsed to spaces, the text is split on literal periods,
/// and the resulting sentences are greedily packed into chunks of at most
/// `max_words` words. A single sentence longer than the bound is emitted
/// alone and may exceed it. Never fails; degenerate input yields an empty
/// vector.
pub fn chunk_text(text: &str, max_words: usize) -> Vec<String> {
    let normalized = text.replace('\n', " ");

    let mut chunks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_words = 0;

    for segment in normalized.split('.') {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            continue;
        }

        let sentence = format!("{}.", trimmed);
        let sentence_words = sentence.split_whitespace().count();

        if current_words + sentence_words > max_words {
            if !current.is_empty() {
                chunks.push(current.join(" "));
            }
            current = vec![sentence];
            current_words = sentence_words;
        } else {
            current.push(sentence);
            current_words += sentence_words;
        }
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_chunk() {
        let text = "AI is transforming software. It enables automation. It raises new risks.";
        let chunks = chunk_text(text, DEFAULT_MAX_CHUNK_WORDS);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text);
    }

    #[test]
    fn test_greedy_packing_respects_bound() {
        let text = "a b c d. e f g h. i j k l. m n o p.";
        // Four 4-word sentences: a bound of 7 fits one per chunk, a bound of 8
        // fits two.
        let chunks = chunk_text(text, 7);
        assert_eq!(chunks.len(), 4);
        for chunk in &chunks {
            assert!(chunk.split_whitespace().count() <= 7);
        }

        let chunks = chunk_text(text, 8);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], "a b c d. e f g h.");
        assert_eq!(chunks[1], "i j k l. m n o p.");
    }

    #[test]
    fn test_overlong_sentence_emitted_alone() {
        let long = (0..20).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        let text = format!("short one. {}. short two.", long);
        let chunks = chunk_text(&text, 5);
        assert_eq!(chunks.len(), 3);
        assert!(chunks[1].split_whitespace().count() > 5);
        assert_eq!(chunks[0], "short one.");
        assert_eq!(chunks[2], "short two.");
    }

    #[test]
    fn test_whitespace_only_yields_no_chunks() {
        assert!(chunk_text("   ", DEFAULT_MAX_CHUNK_WORDS).is_empty());
        assert!(chunk_text("", DEFAULT_MAX_CHUNK_WORDS).is_empty());
        assert!(chunk_text(" . . ", DEFAULT_MAX_CHUNK_WORDS).is_empty());
    }

    #[test]
    fn test_newlines_collapsed_to_spaces() {
        let chunks = chunk_text("First line\nsecond line. Next sentence.", 500);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], "First line second line. Next sentence.");
    }

    #[test]
    fn test_tokens_preserved_in_order() {
        let text = "alpha beta gamma. delta epsilon. zeta eta theta iota. kappa.";
        for bound in [2, 3, 5, 100] {
            let chunks = chunk_text(text, bound);
            let rejoined: Vec<&str> = chunks
                .iter()
                .flat_map(|c| c.split_whitespace())
                .collect();
            let expected: Vec<&str> = text.split_whitespace().collect();
            assert_eq!(rejoined, expected, "bound {}", bound);
        }
    }
}
