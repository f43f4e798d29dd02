// Penalty-bounded wavefront search over the trie
//
// The search starts from a single hypothesis at the trie root and expands
// the whole frontier one round at a time. Every successor either consumes
// input or pays a strictly positive cost, and penalties are capped by the
// budget, so the set of reachable states is finite and the frontier
// eventually empties.

use hashbrown::HashMap;

use crate::ConfigError;
use crate::config::DecoderConfig;
use crate::hypothesis::{Hypothesis, HypothesisArena, HypothesisId, Operation, StateKey};
use crate::matcher::{CharMatcher, EXACT_MATCHER};
use crate::suggestions::Suggestions;
use crate::trie::Trie;

/// Best alignment found for one dictionary word.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    pub word: String,
    pub penalty: f32,
    /// Trie characters matched along the alignment.
    pub path: String,
    /// Edit operations in input order.
    pub operations: Vec<Operation>,
}

/// Fuzzy decoder bound to one trie, one configuration and one matcher.
///
/// Construction validates the configuration; decoding is infallible.
/// A decoder holds only shared references, so it is cheap to build one per
/// call (e.g. to override the matcher) and safe to use from many threads.
#[derive(Clone, Copy)]
pub struct Decoder<'a> {
    trie: &'a Trie,
    config: &'a DecoderConfig,
    matcher: &'a dyn CharMatcher,
}

impl<'a> Decoder<'a> {
    /// Create a decoder using exact character matching.
    pub fn new(trie: &'a Trie, config: &'a DecoderConfig) -> Result<Self, ConfigError> {
        Self::with_matcher(trie, config, &EXACT_MATCHER)
    }

    /// Create a decoder with a custom character equivalence policy.
    ///
    /// Fails if the configuration is invalid or if `matcher` yields no
    /// candidates for some character of the trie's alphabet. The alphabet is
    /// only scanned for matchers that do not report
    /// [`CharMatcher::never_empty`].
    pub fn with_matcher(
        trie: &'a Trie,
        config: &'a DecoderConfig,
        matcher: &'a dyn CharMatcher,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if !matcher.never_empty() {
            if let Some(c) = trie.alphabet().find(|&c| matcher.matches(c).is_empty()) {
                return Err(ConfigError::EmptyMatch(c));
            }
        }
        Ok(Self {
            trie,
            config,
            matcher,
        })
    }

    pub fn trie(&self) -> &'a Trie {
        self.trie
    }

    pub fn config(&self) -> &'a DecoderConfig {
        self.config
    }

    /// Every vocabulary word reachable from `input` within the penalty
    /// budget, with the smallest penalty found for it.
    pub fn decode(&self, input: &str) -> Suggestions {
        let search = self.search(input);
        let mut suggestions = Suggestions::new();
        for (word, &(penalty, _)) in &search.finished {
            suggestions.record(word, penalty);
        }
        suggestions
    }

    /// Like [`Decoder::decode`], but also reports the path and operations
    /// of the best alignment per word. Sorted best-first, ties by word.
    pub fn decode_alignments(&self, input: &str) -> Vec<Alignment> {
        let search = self.search(input);
        let mut alignments: Vec<Alignment> = search
            .finished
            .iter()
            .map(|(&word, &(penalty, id))| Alignment {
                word: word.to_string(),
                penalty,
                path: search.arena.backtrack(id, self.trie),
                operations: search.arena.operations(id),
            })
            .collect();
        alignments.sort_by(|a, b| {
            a.penalty
                .total_cmp(&b.penalty)
                .then_with(|| a.word.cmp(&b.word))
        });
        alignments
    }

    fn search(&self, input: &str) -> Search<'a> {
        let mut search = Search::new(*self, input);
        search.run();
        log::debug!(
            "decoded {input:?}: {} rounds, {} hypotheses, {} matches",
            search.rounds,
            search.arena.len(),
            search.finished.len()
        );
        search
    }
}

/// State of one decode call.
struct Search<'a> {
    decoder: Decoder<'a>,
    input: Vec<char>,
    arena: HypothesisArena,
    /// Best (penalty, hypothesis) per finished dictionary word.
    finished: HashMap<&'a str, (f32, HypothesisId)>,
    /// Frontier being built for the next round.
    next: Vec<HypothesisId>,
    /// Representatives of the states already in `next`.
    seen: HashMap<StateKey, HypothesisId>,
    rounds: usize,
}

impl<'a> Search<'a> {
    fn new(decoder: Decoder<'a>, input: &str) -> Self {
        Self {
            decoder,
            input: input.chars().collect(),
            arena: HypothesisArena::new(),
            finished: HashMap::new(),
            next: Vec::new(),
            seen: HashMap::new(),
            rounds: 0,
        }
    }

    fn run(&mut self) {
        let root = self.arena.push(Hypothesis::initial(Trie::ROOT));
        let mut frontier = vec![root];
        while !frontier.is_empty() {
            for &id in &frontier {
                self.expand(id);
            }
            self.seen.clear();
            frontier = std::mem::take(&mut self.next);
            self.rounds += 1;
            log::trace!("round {}: frontier of {}", self.rounds, frontier.len());
        }
    }

    /// Add `hypothesis` to the next frontier unless an equivalent state is
    /// already there. Returns the id of the representative.
    fn offer(&mut self, hypothesis: Hypothesis) -> HypothesisId {
        let key = hypothesis.key();
        if let Some(&existing) = self.seen.get(&key) {
            return existing;
        }
        let id = self.arena.push(hypothesis);
        self.seen.insert(key, id);
        self.next.push(id);
        id
    }

    /// Record `id` as a match if its node ends a dictionary word.
    fn finish(&mut self, id: HypothesisId) {
        let trie: &'a Trie = self.decoder.trie;
        let penalty = self.arena.get(id).penalty;
        let Some(word) = trie.word(self.arena.get(id).node) else {
            return;
        };
        match self.finished.get_mut(word) {
            Some(best) if penalty < best.0 => *best = (penalty, id),
            Some(_) => {}
            None => {
                self.finished.insert(word, (penalty, id));
            }
        }
    }

    /// Record a successor that consumed the last input character on a
    /// terminal node; anything else joins the next frontier.
    fn finish_or_offer(&mut self, hypothesis: Hypothesis) {
        let trie = self.decoder.trie;
        if hypothesis.consumed == self.input.len() && trie.node(hypothesis.node).is_terminal() {
            let id = self.arena.push(hypothesis);
            self.finish(id);
        } else {
            self.offer(hypothesis);
        }
    }

    fn expand(&mut self, id: HypothesisId) {
        let h = *self.arena.get(id);
        let Decoder {
            trie,
            config,
            matcher,
        } = self.decoder;
        let costs = config.penalties;
        let max = config.max_penalty;
        let len = self.input.len();
        let next = h.consumed;
        let next_char = self.input.get(next).copied();

        // No error: the next input character matches an edge.
        match next_char {
            Some(nc) => {
                for &c in matcher.matches(nc).as_slice() {
                    if let Some(child) = trie.child(h.node, c) {
                        let sid = self.offer(h.successor(id, child, 1, 0.0, Operation::NoError));
                        if next + 1 == len {
                            self.finish(sid);
                        }
                    }
                }
            }
            None => self.finish(id),
        }

        if h.penalty >= max {
            return;
        }

        // Substitution: the next input character is read as any edge.
        if let Some(nc) = next_char {
            for (c, child) in trie.children(h.node) {
                let cost = match &config.proximity {
                    Some(_) if c == nc => 0.0,
                    Some(table) if table.is_near(c, nc) => costs.near_key_substitution,
                    _ => costs.substitution,
                };
                if cost > 0.0 && h.penalty + cost <= max {
                    self.finish_or_offer(h.successor(id, child, 1, cost, Operation::Substitution));
                }
            }
        }

        // Deletion: the next input character is extraneous.
        if next_char.is_some() && h.penalty + costs.deletion <= max {
            self.offer(h.successor(id, h.node, 1, costs.deletion, Operation::Deletion));
        }

        // Insertion: an edge is taken without consuming input.
        if h.penalty + costs.insertion <= max {
            for (_, child) in trie.children(h.node) {
                self.offer(h.successor(id, child, 0, costs.insertion, Operation::Insertion));
            }
        }

        // Transposition: the next two input characters are swapped.
        if next + 1 < len && h.penalty + costs.transposition <= max {
            let first = self.input[next];
            let second = self.input[next + 1];
            for &t in matcher.matches(second).as_slice() {
                let Some(middle) = trie.child(h.node, t) else {
                    continue;
                };
                for &c in matcher.matches(first).as_slice() {
                    let Some(end) = trie.child(middle, c) else {
                        continue;
                    };
                    self.finish_or_offer(h.successor(
                        id,
                        end,
                        2,
                        costs.transposition,
                        Operation::Transposition,
                    ));
                }
            }
        }
    }
}
