use std::collections::BTreeMap;

use tracing::debug;

use super::fanout::fan_out;
use super::ngram::{FrequencyMap, NGramCounter};
use super::top::{RankedEntry, top_n};

/// Frequencies for every length of a range, keyed by length.
pub type RangeResult = BTreeMap<usize, FrequencyMap>;

/// Top entries for every length of a range, keyed by length.
pub type RangeRanking = BTreeMap<usize, Vec<RankedEntry>>;

/// Counts n-grams for every length in `[min, max)` over one pass of `words`.
///
/// The word stream is fanned out into one cursor per length, and the
/// cursors are stepped round-robin so each length sees the same words from
/// the same position while at most one word per length is buffered.
///
/// An empty range (`max <= min`) or one starting below 1 produces no
/// lengths; this is not an error.
pub fn count_ngram_range<I>(words: I, min: usize, max: usize) -> RangeResult
where
	I: IntoIterator<Item = String>,
{
	if min < 1 || max <= min {
		debug!(min, max, "Empty length range");
		return RangeResult::new();
	}

	let (result, peak_buffered) = count_in_lockstep(words, min, max);
	debug!(min, max, peak_buffered, "Counted length range");
	result
}

/// Feeds one word to every length per round.
///
/// Returns the frequencies and the largest number of words any cursor had
/// waiting when its turn came.
fn count_in_lockstep<I>(words: I, min: usize, max: usize) -> (RangeResult, usize)
where
	I: IntoIterator<Item = String>,
{
	let mut lanes: Vec<_> = fan_out(words, max - min)
		.into_iter()
		.zip(min..max)
		.map(|(cursor, n)| (cursor, NGramCounter::for_length(n)))
		.collect();

	let mut peak = 0;
	loop {
		let mut advanced = false;
		for (cursor, counter) in lanes.iter_mut() {
			peak = peak.max(cursor.buffered());
			if let Some(word) = cursor.next() {
				counter.push(word);
				advanced = true;
			}
		}
		if !advanced {
			break;
		}
	}

	let result = lanes
		.into_iter()
		.map(|(_, counter)| (counter.n(), counter.finish()))
		.collect();
	(result, peak)
}

/// Most frequent n-grams for every length in `[min, max)`.
///
/// Each length keeps at most `top` entries, ranked as by [`top_n`].
pub fn top_ngrams_range<I>(words: I, min: usize, max: usize, top: usize) -> RangeRanking
where
	I: IntoIterator<Item = String>,
{
	count_ngram_range(words, min, max)
		.into_iter()
		.map(|(length, freq)| {
			let ranked = top_n(&freq, top).into_iter().map(RankedEntry::from).collect();
			(length, ranked)
		})
		.collect()
}
