//! Word-stream stages that run before counting.
//!
//! Every stage is a forward-only iterator adapter:
//! - Tokenizer (`tokenize`): lines to words
//! - Canonicalizer (`canonicalize`): lowercase folding
//! - Word merger (`merge_similar`): spelling-variant clustering,
//!   built on the LCS `similarity` scorer

/// Splits lines into alphanumeric word tokens.
pub mod tokenizer;

/// Lowercase folding of word tokens.
pub mod canonical;

/// LCS-based similarity between two words.
pub mod similarity;

/// Online clustering of similar words onto a representative.
pub mod merge;

pub use canonical::{Lowercase, canonicalize};
pub use merge::{
	DEFAULT_MERGE_THRESHOLD, MergeSimilar, WordMerger, merge_similar, merge_similar_with,
};
pub use similarity::similarity;
pub use tokenizer::{Words, tokenize};
