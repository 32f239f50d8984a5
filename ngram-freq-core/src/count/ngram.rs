use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{FreqError, Result};

/// An ordered, fixed-length tuple of consecutive words.
///
/// Equality and hashing are element-wise and case-sensitive.
/// Serializes as a plain array of words.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NGram(Vec<String>);

impl NGram {
	/// Builds an n-gram from its words.
	pub fn new<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(words.into_iter().map(Into::into).collect())
	}

	pub fn words(&self) -> &[String] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Lets the counter look up a window slice without allocating a key.
impl Borrow<[String]> for NGram {
	fn borrow(&self) -> &[String] {
		&self.0
	}
}

impl fmt::Display for NGram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.join(" "))
	}
}

/// Occurrence count of every n-gram of one length.
pub type FrequencyMap = HashMap<NGram, usize>;

/// Streaming n-gram counter for a single length `n`.
///
/// Words are pushed one at a time into a sliding window of the last `n`
/// words. Once the window is full, every push records the window as one
/// occurrence.
///
/// # Invariants
/// - `n` is always >= 1
/// - The window never holds more than `n` words
/// - After `W` pushes, the counts sum to `max(0, W - n + 1)`
#[derive(Debug, Clone)]
pub struct NGramCounter {
	n: usize,
	window: VecDeque<String>,
	counts: FrequencyMap,
	/// Number of full windows recorded so far.
	total: usize,
}

impl NGramCounter {
	/// Creates a counter for n-grams of length `n`.
	///
	/// # Errors
	/// Returns `FreqError::InvalidLength` if `n < 1`.
	pub fn new(n: usize) -> Result<Self> {
		if n < 1 {
			return Err(FreqError::invalid_length(n));
		}
		Ok(Self::for_length(n))
	}

	/// Counter for a length the caller has already validated.
	pub(crate) fn for_length(n: usize) -> Self {
		debug_assert!(n >= 1, "n-gram length must be >= 1");
		// The window grows with the input, never with `n` alone.
		Self { n, window: VecDeque::new(), counts: HashMap::new(), total: 0 }
	}

	pub fn n(&self) -> usize {
		self.n
	}

	/// Number of n-gram occurrences recorded so far.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Slides the window forward by one word.
	pub fn push(&mut self, word: String) {
		if self.window.len() == self.n {
			self.window.pop_front();
		}
		self.window.push_back(word);
		if self.window.len() < self.n {
			// Not enough words seen yet for a full window
			return;
		}

		let key: &[String] = self.window.make_contiguous();
		match self.counts.get_mut(key) {
			Some(count) => *count += 1,
			None => {
				self.counts.insert(NGram(key.to_vec()), 1);
			}
		}
		self.total += 1;
	}

	/// Consumes the counter and returns the frequencies.
	pub fn finish(self) -> FrequencyMap {
		debug!(
			length = self.n,
			distinct = self.counts.len(),
			total = self.total,
			"Counted n-grams"
		);
		self.counts
	}
}

/// Counts every n-gram of length `n` in a single pass over `words`.
///
/// # Errors
/// Returns `FreqError::InvalidLength` if `n < 1`.
pub fn count_ngrams<I>(words: I, n: usize) -> Result<FrequencyMap>
where
	I: IntoIterator<Item = String>,
{
	let mut counter = NGramCounter::new(n)?;
	for word in words {
		counter.push(word);
	}
	Ok(counter.finish())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn cat_sat() -> Vec<String> {
		"a cat sat on a mat "
			.repeat(9)
			.split(' ')
			.filter(|w| !w.is_empty())
			.map(str::to_owned)
			.collect()
	}

	#[test]
	fn test_unigrams() {
		let freq = count_ngrams(cat_sat(), 1).unwrap();
		assert_eq!(freq.len(), 5);
		assert_eq!(freq[&NGram::new(["cat"])], 9);
		assert_eq!(freq[&NGram::new(["a"])], 18);
	}

	#[test]
	fn test_bigrams() {
		let freq = count_ngrams(cat_sat(), 2).unwrap();
		assert_eq!(freq.len(), 6);
		for (ngram, count) in &freq {
			let expect = if *ngram == NGram::new(["mat", "a"]) { 8 } else { 9 };
			assert_eq!(*count, expect, "count of {ngram}");
		}
	}

	#[test]
	fn test_zero_length_is_rejected() {
		assert!(matches!(count_ngrams(cat_sat(), 0), Err(FreqError::InvalidLength { length: 0 })));
		assert!(NGramCounter::new(0).is_err());
	}

	#[test]
	fn test_fewer_words_than_length() {
		let words = vec!["only".to_owned(), "two".to_owned()];
		assert!(count_ngrams(words.clone(), 3).unwrap().is_empty());
		assert_eq!(count_ngrams(words, 2).unwrap().len(), 1);
		assert!(count_ngrams(Vec::new(), 1).unwrap().is_empty());
	}

	#[test]
	fn test_huge_length_on_short_input() {
		let words = vec!["only".to_owned(), "two".to_owned()];
		assert!(count_ngrams(words, 1usize << 40).unwrap().is_empty());

		let mut counter = NGramCounter::new(usize::MAX).unwrap();
		counter.push("word".to_owned());
		assert_eq!(counter.total(), 0);
		assert!(counter.finish().is_empty());
	}

	#[test]
	fn test_counter_total_tracks_windows() {
		let mut counter = NGramCounter::new(3).unwrap();
		for (i, word) in ["a", "b", "c", "d", "e"].iter().enumerate() {
			counter.push(word.to_string());
			assert_eq!(counter.total(), (i + 1).saturating_sub(2));
		}
		let freq = counter.finish();
		assert_eq!(freq.values().sum::<usize>(), 3);
		assert!(freq.contains_key(&NGram::new(["c", "d", "e"])));
	}

	#[test]
	fn test_keys_are_case_sensitive() {
		let words: Vec<String> = ["The", "the", "THE"].iter().map(|w| w.to_string()).collect();
		assert_eq!(count_ngrams(words, 1).unwrap().len(), 3);
	}

	#[test]
	fn test_display_joins_with_spaces() {
		assert_eq!(NGram::new(["very", "long"]).to_string(), "very long");
	}
}
