//! Word-tuple frequency counting library.
//!
//! This crate turns a stream of text lines into n-gram frequency tables:
//! - Tokenizing lines into words, with optional lowercasing
//! - Clustering spelling variants by LCS similarity
//! - Counting n-grams over a range of lengths in a single pass
//! - Selecting the most frequent n-grams per length
//!
//! Output formatting and argument handling live in the front-end binary.

/// Error taxonomy and the crate-wide `Result` alias.
pub mod error;

/// Word-stream stages: tokenizer, canonicalizer, similarity, merger.
pub mod text;

/// N-gram counting, fan-out cursors and top-N selection.
pub mod count;

/// Run options and length-range parsing.
pub mod config;

/// Line source over an already-open reader.
pub mod io;

pub use config::{CountOptions, LengthRange, parse_top_n};
pub use count::{
	FrequencyMap, NGram, RangeRanking, RangeResult, RankedEntry, count_ngram_range, count_ngrams,
	top_n, top_ngrams, top_ngrams_range,
};
pub use error::{FreqError, Result};
pub use text::{canonicalize, merge_similar, similarity, tokenize};
