//! Shared types and character utilities for the kelime workspace.
//!
//! - [`character`] -- Simple case mapping and punctuation classification
//! - [`scored`] -- Scored suggestion type shared by the decoder and its callers

pub mod character;
pub mod scored;

pub use scored::ScoredWord;
