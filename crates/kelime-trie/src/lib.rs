//! Prefix-tree dictionary and penalty-bounded fuzzy decoder.
//!
//! Given a vocabulary stored in a [`Trie`] and an input token, the
//! [`Decoder`] finds every vocabulary word reachable from the input within a
//! maximum total edit penalty, together with the smallest penalty found for
//! each word.
//!
//! # Architecture
//!
//! - [`trie`] -- Arena-backed prefix tree (node identity = arena index)
//! - [`matcher`] -- Character equivalence policies ([`CharMatcher`])
//! - [`proximity`] -- Keyboard near-key tables
//! - [`config`] -- Edit costs, penalty budget and validation
//! - [`hypothesis`] -- Search states and the per-call hypothesis arena
//! - [`decoder`] -- Wavefront expansion over the trie
//! - [`suggestions`] -- Word -> minimal penalty result map and ranked views

pub mod config;
pub mod decoder;
pub mod hypothesis;
pub mod matcher;
pub mod proximity;
pub mod suggestions;
pub mod trie;

pub use config::{DecoderConfig, Penalties};
pub use decoder::{Alignment, Decoder};
pub use hypothesis::Operation;
pub use matcher::{Candidates, CharMatcher, EXACT_MATCHER, ExactMatcher};
pub use proximity::ProximityTable;
pub use suggestions::Suggestions;
pub use trie::{NodeId, Trie, TrieNode};

/// Error type for decoder configuration validation.
///
/// These are precondition violations detected when a [`Decoder`] is
/// constructed; decoding itself never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("max penalty must be a finite non-negative number, got {0}")]
    InvalidMaxPenalty(f32),
    #[error("{operation} penalty must be a finite positive number, got {value}")]
    InvalidPenalty { operation: Operation, value: f32 },
    #[error("character matcher returned no candidates for {0:?}")]
    EmptyMatch(char),
}
