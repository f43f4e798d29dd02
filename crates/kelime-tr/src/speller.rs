// SpellChecker: Turkish vocabulary + fuzzy decoder
//
// Owns the trie built from a normalized vocabulary and the decoder
// configuration. A Decoder is created per call; it only borrows the trie and
// the configuration, so a per-call matcher override never touches shared
// state.

use kelime_core::ScoredWord;
use kelime_trie::config::DEFAULT_MAX_PENALTY;
use kelime_trie::{
    Alignment, CharMatcher, Decoder, DecoderConfig, ProximityTable, Suggestions, Trie,
};

use crate::SpellerError;
use crate::normalize::normalize_word;

/// Fuzzy spell checker over a Turkish vocabulary.
///
/// Dictionary words are lowercased with Turkish rules and stripped of
/// apostrophes and periods before insertion. Query input is passed to the
/// decoder verbatim.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    trie: Trie,
    config: DecoderConfig,
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self {
            trie: Trie::new(),
            config: DecoderConfig::new(DEFAULT_MAX_PENALTY),
        }
    }
}

impl SpellChecker {
    /// Create an empty spell checker with default costs and no near-key
    /// discount.
    pub fn new(max_penalty: f32) -> Result<Self, SpellerError> {
        Self::from_config(DecoderConfig::new(max_penalty))
    }

    /// Create an empty spell checker that discounts substitutions between
    /// keyboard neighbors.
    pub fn with_near_keys(max_penalty: f32, table: ProximityTable) -> Result<Self, SpellerError> {
        Self::from_config(DecoderConfig::new(max_penalty).with_proximity(table))
    }

    pub fn from_config(config: DecoderConfig) -> Result<Self, SpellerError> {
        config.validate()?;
        Ok(Self {
            trie: Trie::new(),
            config,
        })
    }

    // -----------------------------------------------------------------------
    // Dictionary
    // -----------------------------------------------------------------------

    /// Normalize `word` and add it to the vocabulary.
    pub fn add_word(&mut self, word: &str) {
        let normalized = normalize_word(word);
        self.trie.insert(&normalized);
    }

    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref());
        }
    }

    /// Add a whole vocabulary and log the resulting trie size.
    pub fn build_dictionary<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_words(words);
        log::debug!(
            "dictionary built: {} words, {} trie nodes",
            self.trie.word_count(),
            self.trie.len()
        );
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    fn decoder(&self) -> Result<Decoder<'_>, SpellerError> {
        Ok(Decoder::new(&self.trie, &self.config)?)
    }

    /// Every vocabulary word within the penalty budget of `input`, with its
    /// smallest penalty.
    pub fn decode(&self, input: &str) -> Result<Suggestions, SpellerError> {
        Ok(self.decoder()?.decode(input))
    }

    /// Best alignment per matched word, best first.
    pub fn decode_alignments(&self, input: &str) -> Result<Vec<Alignment>, SpellerError> {
        Ok(self.decoder()?.decode_alignments(input))
    }

    /// Matched words in no particular order.
    pub fn get_suggestions(&self, input: &str) -> Result<Vec<String>, SpellerError> {
        Ok(self.decode(input)?.words())
    }

    /// Matched words, best first; ties ordered by word.
    pub fn get_suggestions_sorted(&self, input: &str) -> Result<Vec<String>, SpellerError> {
        Ok(self
            .get_suggestions_with_scores(input)?
            .into_iter()
            .map(|scored| scored.word)
            .collect())
    }

    /// Matched words with penalties, best first; ties ordered by word.
    pub fn get_suggestions_with_scores(
        &self,
        input: &str,
    ) -> Result<Vec<ScoredWord>, SpellerError> {
        Ok(self.decode(input)?.into_sorted())
    }

    /// Like [`SpellChecker::get_suggestions_with_scores`], but matching
    /// input characters through `matcher` for this call only.
    pub fn get_suggestions_with_scores_using(
        &self,
        input: &str,
        matcher: &dyn CharMatcher,
    ) -> Result<Vec<ScoredWord>, SpellerError> {
        let decoder = Decoder::with_matcher(&self.trie, &self.config, matcher)?;
        Ok(decoder.decode(input).into_sorted())
    }
}
