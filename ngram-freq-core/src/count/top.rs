use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use super::ngram::{NGram, count_ngrams};
use crate::error::Result;

/// An n-gram together with its number of occurrences.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RankedEntry {
	pub ngram: NGram,
	pub count: usize,
}

impl From<(NGram, usize)> for RankedEntry {
	fn from((ngram, count): (NGram, usize)) -> Self {
		Self { ngram, count }
	}
}

/// Ranking order: highest count first, then smallest key first.
fn by_rank<K: Ord>(a: &(&K, usize), b: &(&K, usize)) -> Ordering {
	b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Returns the `n` entries of `freq` with the highest counts, best first.
///
/// Equal counts are ordered by ascending key, so the result does not depend
/// on the map's iteration order. When `n` is at least the number of entries,
/// every entry is returned; when `n` is zero, none are.
///
/// # Notes
/// Partitions around the `n`-th entry before sorting, so only the returned
/// entries are fully sorted and cloned.
pub fn top_n<K>(freq: &HashMap<K, usize>, n: usize) -> Vec<(K, usize)>
where
	K: Ord + Clone,
{
	if n == 0 {
		return Vec::new();
	}

	let mut entries: Vec<(&K, usize)> = freq.iter().map(|(key, &count)| (key, count)).collect();
	if n < entries.len() {
		entries.select_nth_unstable_by(n - 1, by_rank);
		entries.truncate(n);
	}
	entries.sort_unstable_by(by_rank);

	entries.into_iter().map(|(key, count)| (key.clone(), count)).collect()
}

/// Most frequent n-grams of a single length.
///
/// # Errors
/// Returns `FreqError::InvalidLength` if `length < 1`.
pub fn top_ngrams<I>(words: I, length: usize, top: usize) -> Result<Vec<RankedEntry>>
where
	I: IntoIterator<Item = String>,
{
	let freq = count_ngrams(words, length)?;
	Ok(top_n(&freq, top).into_iter().map(RankedEntry::from).collect())
}
