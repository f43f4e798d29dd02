// Decode results: matched word -> minimal penalty

use hashbrown::HashMap;

use kelime_core::ScoredWord;
use kelime_core::scored::sort_by_penalty;

/// Words reached by one decode call, each with the smallest penalty found.
///
/// Iteration order is unspecified; use [`Suggestions::into_sorted`] for a
/// ranked view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suggestions {
    scores: HashMap<String, f32>,
}

impl Suggestions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word` at `penalty`, keeping the smaller penalty if the word
    /// is already present. Returns `true` if the stored value changed.
    pub fn record(&mut self, word: &str, penalty: f32) -> bool {
        match self.scores.get_mut(word) {
            Some(existing) if penalty < *existing => {
                *existing = penalty;
                true
            }
            Some(_) => false,
            None => {
                self.scores.insert(word.to_string(), penalty);
                true
            }
        }
    }

    /// Smallest penalty found for `word`.
    pub fn get(&self, word: &str) -> Option<f32> {
        self.scores.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.scores.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> + '_ {
        self.scores.iter().map(|(w, &p)| (w.as_str(), p))
    }

    /// Matched words, unranked.
    pub fn words(&self) -> Vec<String> {
        self.scores.keys().cloned().collect()
    }

    /// Matched words with penalties, best first; ties ordered by word.
    pub fn into_sorted(self) -> Vec<ScoredWord> {
        let mut ranked: Vec<ScoredWord> = self
            .scores
            .into_iter()
            .map(|(word, penalty)| ScoredWord { word, penalty })
            .collect();
        sort_by_penalty(&mut ranked);
        ranked
    }

    pub fn into_map(self) -> HashMap<String, f32> {
        self.scores
    }
}

impl<'a> IntoIterator for &'a Suggestions {
    type Item = (&'a str, f32);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, f32)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
