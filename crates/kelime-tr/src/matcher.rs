// ASCII-tolerant character matching for Turkish
//
// Text typed on keyboards without Turkish letters replaces ç ğ ı ö ş ü with
// their ASCII look-alikes. This matcher lets such input match the Turkish
// forms at no cost.

use kelime_trie::{Candidates, CharMatcher};

const C: &[char] = &['c', 'ç'];
const G: &[char] = &['g', 'ğ'];
const I: &[char] = &['ı', 'i'];
const O: &[char] = &['o', 'ö'];
const S: &[char] = &['s', 'ş'];
const U: &[char] = &['u', 'ü'];

/// Matches an ASCII letter with itself and its Turkish counterpart.
///
/// Both `i` and `ı` match either form. Other characters, including the
/// Turkish letters themselves, only match exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiTolerantMatcher;

impl CharMatcher for AsciiTolerantMatcher {
    fn matches(&self, c: char) -> Candidates {
        match c {
            'c' => Candidates::Static(C),
            'g' => Candidates::Static(G),
            'i' | 'ı' => Candidates::Static(I),
            'o' => Candidates::Static(O),
            's' => Candidates::Static(S),
            'u' => Candidates::Static(U),
            _ => Candidates::Single(c),
        }
    }

    fn never_empty(&self) -> bool {
        true
    }
}

/// Shared instance of [`AsciiTolerantMatcher`].
pub static ASCII_TOLERANT_MATCHER: AsciiTolerantMatcher = AsciiTolerantMatcher;
