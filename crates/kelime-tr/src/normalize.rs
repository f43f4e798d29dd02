// Dictionary word normalization with Turkish casing rules

use kelime_core::character::{is_word_punctuation, simple_lower};

/// Lowercase a character using Turkish rules.
///
/// Turkish distinguishes dotted and dotless i: `I` lowercases to `ı` and
/// `İ` to `i`. Every other character uses its simple lowercase mapping.
pub fn turkish_lower(c: char) -> char {
    match c {
        'I' => '\u{0131}',
        '\u{0130}' => 'i',
        _ => simple_lower(c),
    }
}

/// Lowercase `word` with Turkish rules and drop apostrophes and periods.
///
/// `Ankara'da` becomes `ankarada`, `İSTANBUL` becomes `istanbul`,
/// `Dr.` becomes `dr`.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|&c| !is_word_punctuation(c))
        .map(turkish_lower)
        .collect()
}
