use std::collections::HashMap;

use tracing::{debug, trace};

use super::similarity::similarity;

/// Similarity a word must strictly exceed to join an existing cluster.
pub const DEFAULT_MERGE_THRESHOLD: f64 = 0.5;

/// Online clustering of spelling variants.
///
/// Each word seen for the first time is compared against every cluster
/// representative chosen so far. It joins the most similar one if that
/// similarity is strictly above the threshold, otherwise it founds a new
/// cluster and becomes its representative.
///
/// # Responsibilities
/// - Remember, for every word seen, the representative it was assigned
/// - Keep the representatives in the order they were created
///
/// # Invariants
/// - Once assigned, a word's representative never changes
/// - The set of representatives only grows
/// - Every representative maps to itself
///
/// # Notes
/// Each new distinct word costs one similarity computation per existing
/// representative, so a stream of `R` unrelated words costs O(R²) in total.
#[derive(Debug, Clone)]
pub struct WordMerger {
	threshold: f64,
	/// Mapping from observed words to their representative.
	roots: HashMap<String, String>,
	/// Representatives in creation order. Ties are resolved in this order.
	representatives: Vec<String>,
}

impl Default for WordMerger {
	fn default() -> Self {
		Self::new(DEFAULT_MERGE_THRESHOLD)
	}
}

impl WordMerger {
	/// Creates an empty merger with the given similarity threshold.
	pub fn new(threshold: f64) -> Self {
		Self { threshold, roots: HashMap::new(), representatives: Vec::new() }
	}

	/// Representatives in the order their clusters were created.
	pub fn representatives(&self) -> &[String] {
		&self.representatives
	}

	/// Returns the representative already assigned to `word`, if any.
	pub fn representative_of(&self, word: &str) -> Option<&str> {
		self.roots.get(word).map(String::as_str)
	}

	/// Maps a word to its cluster representative, assigning one on first sight.
	pub fn merge(&mut self, word: String) -> String {
		if let Some(root) = self.roots.get(&word) {
			return root.clone();
		}

		match self.closest_representative(&word) {
			Some((root, score)) => {
				let root = root.to_owned();
				trace!(word = %word, root = %root, score, "Merged word into cluster");
				self.roots.insert(word, root.clone());
				root
			}
			None => {
				debug!(word = %word, clusters = self.representatives.len() + 1, "New cluster");
				self.representatives.push(word.clone());
				self.roots.insert(word.clone(), word.clone());
				word
			}
		}
	}

	/// Finds the representative with the strictly highest similarity above
	/// the threshold. The first one scanned wins on equal scores.
	fn closest_representative(&self, word: &str) -> Option<(&str, f64)> {
		let mut best: Option<(&str, f64)> = None;
		for root in &self.representatives {
			let score = similarity(word, root);
			if score <= self.threshold {
				continue;
			}
			if best.is_none_or(|(_, best_score)| score > best_score) {
				best = Some((root.as_str(), score));
			}
		}
		best
	}
}

/// Word stream in which similar words are replaced by their cluster representative.
pub struct MergeSimilar<I> {
	words: I,
	merger: WordMerger,
}

impl<I> MergeSimilar<I> {
	/// The clustering state built so far.
	pub fn merger(&self) -> &WordMerger {
		&self.merger
	}

	pub fn into_merger(self) -> WordMerger {
		self.merger
	}
}

impl<I> Iterator for MergeSimilar<I>
where
	I: Iterator<Item = String>,
{
	type Item = String;

	fn next(&mut self) -> Option<String> {
		let word = self.words.next()?;
		Some(self.merger.merge(word))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.words.size_hint()
	}
}

/// Clusters spelling variants using the default threshold.
pub fn merge_similar<I>(words: I) -> MergeSimilar<I::IntoIter>
where
	I: IntoIterator<Item = String>,
{
	merge_similar_with(words, WordMerger::default())
}

/// Clusters spelling variants with a caller-supplied merger.
pub fn merge_similar_with<I>(words: I, merger: WordMerger) -> MergeSimilar<I::IntoIter>
where
	I: IntoIterator<Item = String>,
{
	MergeSimilar { words: words.into_iter(), merger }
}
