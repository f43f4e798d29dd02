// Character equivalence policies
//
// A matcher decides which trie-edge characters an input character may be
// read as without penalty. The decoder asks for candidates on every
// no-error and transposition step, so candidate sets are returned without
// allocating in the common cases.

/// Candidate characters an input character may match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidates {
    /// Exactly one candidate (usually the input character itself).
    Single(char),
    /// A fixed set, typically from a static folding table.
    Static(&'static [char]),
    /// A set computed at call time.
    Owned(Vec<char>),
}

impl Candidates {
    #[inline]
    pub fn as_slice(&self) -> &[char] {
        match self {
            Candidates::Single(c) => std::slice::from_ref(c),
            Candidates::Static(cs) => cs,
            Candidates::Owned(cs) => cs,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.as_slice().contains(&c)
    }
}

/// Character equivalence policy used by the decoder.
///
/// Implementations must return at least one candidate for every character
/// of the dictionary alphabet; this is checked when a decoder is built.
/// Matchers are shared across threads together with the trie.
pub trait CharMatcher: Send + Sync {
    fn matches(&self, c: char) -> Candidates;

    /// Returns `true` if [`CharMatcher::matches`] yields at least one
    /// candidate for every character. Decoders then skip the alphabet check
    /// at construction.
    fn never_empty(&self) -> bool {
        false
    }
}

impl<F> CharMatcher for F
where
    F: Fn(char) -> Candidates + Send + Sync,
{
    fn matches(&self, c: char) -> Candidates {
        self(c)
    }
}

/// Matches every character only with itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl CharMatcher for ExactMatcher {
    #[inline]
    fn matches(&self, c: char) -> Candidates {
        Candidates::Single(c)
    }

    fn never_empty(&self) -> bool {
        true
    }
}

/// Shared instance of the default policy.
pub static EXACT_MATCHER: ExactMatcher = ExactMatcher;
