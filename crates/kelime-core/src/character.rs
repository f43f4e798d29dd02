// Character classification and simple case mapping

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase produces an iterator
// because some characters map to multiple characters. Dictionary keys are
// built one character per trie edge, so only the first character of the
// mapping is kept.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions (e.g. `İ`,
/// which lowercases to `i` + combining dot), returns only the first
/// character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

// ---------------------------------------------------------------------------
// Punctuation inside words
// ---------------------------------------------------------------------------

/// Check whether a character is an apostrophe.
///
/// Recognizes the ASCII apostrophe and U+2019 RIGHT SINGLE QUOTATION MARK,
/// which word processors commonly substitute for it (`Ankara'da`,
/// `Ankara’da`).
pub fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

/// Check whether a character is punctuation that may appear inside a
/// dictionary token and carries no lexical content: apostrophes (suffix
/// separators on proper nouns) and periods (abbreviations).
pub fn is_word_punctuation(c: char) -> bool {
    c == '.' || is_apostrophe(c)
}
