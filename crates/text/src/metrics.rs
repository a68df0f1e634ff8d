/// Words-per-minute constant for the reading-time estimate
const WORDS_PER_MINUTE: f64 = 200.0;

/// Count whitespace-delimited words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimate reading time from a word count
///
/// Rounds to the nearest minute, floors at 1, and pluralizes the unit.
pub fn reading_time(word_count: usize) -> String {
    let minutes = ((word_count as f64 / WORDS_PER_MINUTE).round() as u64).max(1);
    if minutes == 1 {
        "1 min".to_string()
    } else {
        format!("{} mins", minutes)
    }
}
