//! Lyrics normalization.

/// Lyrics reduced to lowercase words separated by single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CleanedLyrics {
    /// Normalized text; empty when nothing countable remained.
    pub text: String,
    /// Number of words, counted before lowercasing.
    pub word_count: usize,
}

/// Strip ASCII punctuation, split on whitespace and lowercase each word.
///
/// Line breaks and runs of spaces are not preserved. Text made only of
/// punctuation and whitespace cleans to an empty string.
pub fn clean_lyrics(raw: &str) -> CleanedLyrics {
    let stripped: String = raw.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    let words: Vec<&str> = stripped.split_whitespace().collect();
    let word_count = words.len();
    let text = words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    CleanedLyrics { text, word_count }
}

/// Number of words in cleaned lyrics, splitting on single spaces.
pub fn word_count(cleaned: &str) -> usize {
    if cleaned.is_empty() {
        0
    } else {
        cleaned.split(' ').count()
    }
}
