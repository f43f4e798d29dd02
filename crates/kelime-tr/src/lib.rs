//! Turkish single-word spell checker.
//!
//! Wraps the [`kelime_trie`] decoder with the pieces a Turkish vocabulary
//! needs: dictionary normalization with Turkish casing rules, near-key tables
//! for the Turkish F and Q keyboard layouts, and a character matcher that
//! tolerates input typed without Turkish letters.
//!
//! # Architecture
//!
//! - [`normalize`] -- Turkish lowercasing and in-word punctuation removal
//! - [`keyboard`] -- Turkish F / Q near-key tables
//! - [`matcher`] -- ASCII-tolerant character matching
//! - [`speller`] -- [`SpellChecker`] facade: dictionary building and suggestions

pub mod keyboard;
pub mod matcher;
pub mod normalize;
pub mod speller;

pub use keyboard::KeyboardLayout;
pub use matcher::{ASCII_TOLERANT_MATCHER, AsciiTolerantMatcher};
pub use speller::SpellChecker;

/// Error type for spell checker construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpellerError {
    /// The decoder configuration was rejected.
    #[error("invalid decoder configuration: {0}")]
    Config(#[from] kelime_trie::ConfigError),

    /// A keyboard layout name was not recognized.
    #[error("unknown keyboard layout: {0}")]
    UnknownLayout(String),
}
