/// Result of one reading time estimation. Computed per render and never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingEstimate {
    pub word_count: usize,
    pub raw_minutes: f64,
    /// Ceiling of `raw_minutes` for estimates of a minute or more, 0 below
    /// that (the less-than-a-minute formats take over there and no number is
    /// displayed).
    pub display_minutes: u32,
}

impl ReadingEstimate {
    pub fn from_word_count(word_count: usize, words_per_minute: u32) -> ReadingEstimate {
        // The calculation never runs with a rate below 1.
        let words_per_minute = words_per_minute.max(1);
        let raw_minutes = word_count as f64 / words_per_minute as f64;
        let display_minutes = if raw_minutes < 1.0 {
            0
        } else {
            // Always round up: a 1.01 minute article reads as 2 minutes,
            // exactly 1.0 stays 1.
            raw_minutes.ceil() as u32
        };

        ReadingEstimate {
            word_count,
            raw_minutes,
            display_minutes,
        }
    }

    pub fn is_less_than_a_minute(&self) -> bool {
        self.raw_minutes < 1.0
    }
}
