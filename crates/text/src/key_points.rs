/// Default maximum number of key points returned
pub const DEFAULT_MAX_KEY_POINTS: usize = 5;

/// Minimum sentence length (in characters) to qualify as a key point
const MIN_SENTENCE_CHARS: usize = 11;

/// Select the first `max_points` sufficiently-long sentences as key points
///
/// Purely positional: sentences are split on periods, trimmed, and kept in
/// original order. Not an importance ranking.
pub fn extract_key_points(text: &str, max_points: usize) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .take(max_points)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_at_max_points_in_order() {
        let text = "first long sentence here. second long sentence here. \
                    third long sentence here. fourth long sentence here. \
                    fifth long sentence here. sixth long sentence here.";
        let points = extract_key_points(text, DEFAULT_MAX_KEY_POINTS);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], "first long sentence here");
        assert_eq!(points[4], "fifth long sentence here");
    }

    #[test]
    fn test_short_sentences_discarded() {
        let points = extract_key_points("too short. tiny. no.", DEFAULT_MAX_KEY_POINTS);
        assert!(points.is_empty());
    }

    #[test]
    fn test_degenerate_input() {
        assert!(extract_key_points("", DEFAULT_MAX_KEY_POINTS).is_empty());
        assert!(extract_key_points("...", DEFAULT_MAX_KEY_POINTS).is_empty());
    }

    #[test]
    fn test_eleven_char_boundary() {
        // 10 characters is discarded, 11 survives
        assert!(extract_key_points("abcdefghij.", 5).is_empty());
        assert_eq!(extract_key_points("abcdefghijk.", 5), vec!["abcdefghijk"]);
    }
}
