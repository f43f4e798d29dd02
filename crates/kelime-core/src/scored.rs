// Scored suggestion type

use std::cmp::Ordering;
use std::fmt;

/// A dictionary word paired with the edit penalty it was reached at.
///
/// Lower penalties indicate closer matches.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    /// The matched dictionary word.
    pub word: String,
    /// Accumulated edit penalty of the best alignment found.
    pub penalty: f32,
}

impl ScoredWord {
    pub fn new(word: impl Into<String>, penalty: f32) -> Self {
        Self {
            word: word.into(),
            penalty,
        }
    }

    /// Ordering used for ranked output: ascending penalty, then word.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.penalty
            .total_cmp(&other.penalty)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.word, self.penalty)
    }
}

/// Sort scored words best-first.
pub fn sort_by_penalty(words: &mut [ScoredWord]) {
    words.sort_by(ScoredWord::rank_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_orders_by_penalty_then_word() {
        let mut words = vec![
            ScoredWord::new("kapı", 1.0),
            ScoredWord::new("kitap", 0.0),
            ScoredWord::new("kalem", 0.5),
            ScoredWord::new("kale", 1.0),
        ];
        sort_by_penalty(&mut words);
        let order: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(order, ["kitap", "kalem", "kale", "kapı"]);
    }

    #[test]
    fn display_shows_two_decimals() {
        assert_eq!(ScoredWord::new("kitap", 0.5).to_string(), "kitap (0.50)");
    }
}
