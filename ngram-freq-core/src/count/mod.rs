//! N-gram counting and ranking.
//!
//! This module provides:
//! - The n-gram key type and single-length counter (`NGram`, `NGramCounter`)
//! - Fan-out cursors sharing one pass over a word stream (`fan_out`)
//! - Multi-length counting over a half-open length range (`count_ngram_range`)
//! - Top-N selection (`top_n`, `top_ngrams`, `top_ngrams_range`)

/// N-gram key type and the sliding-window counter for one length.
pub mod ngram;

/// Splits a single-pass source into independent cursors.
///
/// Used by the range counter so every length reads the same words.
pub mod fanout;

/// Counting and ranking over a range of lengths.
pub mod range;

/// Top-N selection over a frequency mapping.
pub mod top;

pub use fanout::{Cursor, fan_out};
pub use ngram::{FrequencyMap, NGram, NGramCounter, count_ngrams};
pub use range::{RangeRanking, RangeResult, count_ngram_range, top_ngrams_range};
pub use top::{RankedEntry, top_n, top_ngrams};
