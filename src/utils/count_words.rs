/// Counts whitespace-delimited tokens. Splitting on Unicode whitespace keeps
/// the count correct for scripts without ascii word boundaries that are still
/// space-delimited.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
