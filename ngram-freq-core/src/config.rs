use std::ops::Range;
use std::str::FromStr;

use crate::error::{FreqError, Result};
use crate::text::{
	DEFAULT_MERGE_THRESHOLD, WordMerger, canonicalize, merge_similar_with, tokenize,
};

/// Half-open range of n-gram lengths, `[min, max)`.
///
/// Parsed from the human-facing inclusive form:
/// - `"3"` → `[3, 4)`
/// - `"2:5"` → `[2, 6)`
///
/// # Notes
/// - A range with `max <= min` is valid and simply empty.
/// - A range starting at 0 is also treated as empty by the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
	min: usize,
	max: usize,
}

impl LengthRange {
	/// Lengths 2 to 4, used when no length is given.
	pub const DEFAULT: Self = Self { min: 2, max: 5 };

	/// Creates the half-open range `[min, max)`.
	pub fn new(min: usize, max: usize) -> Self {
		Self { min, max }
	}

	/// Creates the inclusive range `[min, max]`.
	pub fn inclusive(min: usize, max: usize) -> Self {
		Self { min, max: max.saturating_add(1) }
	}

	pub fn min(&self) -> usize {
		self.min
	}

	pub fn max(&self) -> usize {
		self.max
	}

	/// True when no length would be counted.
	pub fn is_empty(&self) -> bool {
		self.min < 1 || self.max <= self.min
	}

	/// Number of lengths that would be counted.
	pub fn len(&self) -> usize {
		if self.is_empty() { 0 } else { self.max - self.min }
	}

	/// The lengths themselves, ascending.
	pub fn lengths(&self) -> Range<usize> {
		if self.is_empty() { 0..0 } else { self.min..self.max }
	}
}

impl Default for LengthRange {
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl FromStr for LengthRange {
	type Err = FreqError;

	/// Accepts `N` or `N:M` where both are plain decimal numbers.
	fn from_str(s: &str) -> Result<Self> {
		let parse = |part: &str| -> Result<usize> {
			if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
				return Err(FreqError::malformed_length(s));
			}
			part.parse().map_err(|_| FreqError::malformed_length(s))
		};

		match s.split_once(':') {
			None => {
				let n = parse(s)?;
				Ok(Self::inclusive(n, n))
			}
			Some((min, max)) => Ok(Self::inclusive(parse(min)?, parse(max)?)),
		}
	}
}

/// Parses the `N` of a top-N request.
///
/// # Errors
/// Returns `FreqError::MalformedNumber` unless `s` is a plain decimal number.
pub fn parse_top_n(s: &str) -> Result<usize> {
	if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
		return Err(FreqError::malformed_number(s));
	}
	s.parse().map_err(|_| FreqError::malformed_number(s))
}

/// Word-stream options applied before counting.
///
/// # Responsibilities
/// - Track whether words are lowercased (`clean`) and clustered (`merge`)
/// - Hold the similarity threshold used when clustering
///
/// # Invariants
/// - `merge_threshold` is always within `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountOptions {
	/// Put words into canonical (lowercase) form.
	pub clean: bool,

	/// Replace spelling variants by their cluster representative.
	pub merge: bool,

	merge_threshold: f64,
}

impl Default for CountOptions {
	fn default() -> Self {
		Self { clean: false, merge: false, merge_threshold: DEFAULT_MERGE_THRESHOLD }
	}
}

impl CountOptions {
	pub fn with_clean(mut self, clean: bool) -> Self {
		self.clean = clean;
		self
	}

	pub fn with_merge(mut self, merge: bool) -> Self {
		self.merge = merge;
		self
	}

	/// Sets the similarity a word must strictly exceed to join a cluster.
	///
	/// # Errors
	/// Returns an error if `threshold` is not between 0.0 and 1.0.
	pub fn with_merge_threshold(mut self, threshold: f64) -> Result<Self> {
		if !(0.0..=1.0).contains(&threshold) {
			return Err(FreqError::invalid_threshold(threshold));
		}
		self.merge_threshold = threshold;
		Ok(self)
	}

	pub fn merge_threshold(&self) -> f64 {
		self.merge_threshold
	}

	/// Builds the word stream for a sequence of lines.
	///
	/// Lines are tokenized, then lowercased if `clean` is set, then
	/// clustered if `merge` is set. The stream is lazy and single-pass.
	pub fn words<'a, I, S>(&self, lines: I) -> Box<dyn Iterator<Item = String> + 'a>
	where
		I: IntoIterator<Item = S>,
		I::IntoIter: 'a,
		S: AsRef<str> + 'a,
	{
		let mut words: Box<dyn Iterator<Item = String> + 'a> = Box::new(tokenize(lines));
		if self.clean {
			words = Box::new(canonicalize(words));
		}
		if self.merge {
			words = Box::new(merge_similar_with(words, WordMerger::new(self.merge_threshold)));
		}
		words
	}
}
