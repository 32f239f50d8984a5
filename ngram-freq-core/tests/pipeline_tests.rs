// End-to-end tests through the public API: lines in, rankings out.

use std::collections::HashMap;
use std::io::Cursor;

use ngram_freq_core::io::read_lines;
use ngram_freq_core::text::{WordMerger, merge_similar_with};
use ngram_freq_core::{
	CountOptions, LengthRange, NGram, count_ngram_range, count_ngrams, merge_similar, tokenize,
	top_n, top_ngrams_range,
};

const HAMLET: &str = "\
Alas, poor Yorick! I knew him, Horatio: a fellow
of infinite jest, of most excellent fancy: he hath
borne me on his back a thousand times; and now, how
abhorred in my imagination it is! my gorge rims at it.
";

fn words(text: &str) -> Vec<String> {
	text.split(' ').filter(|w| !w.is_empty()).map(str::to_owned).collect()
}

// ============================================================
// Counting
// ============================================================

#[test]
fn cat_sat_on_a_mat() {
	let words = words(&"a cat sat on a mat ".repeat(9));

	let freq1 = count_ngrams(words.clone(), 1).unwrap();
	assert_eq!(freq1.len(), 5);
	assert_eq!(freq1[&NGram::new(["a"])], 18);
	assert_eq!(freq1[&NGram::new(["cat"])], 9);

	let freq2 = count_ngrams(words, 2).unwrap();
	assert_eq!(freq2.len(), 6);
	for (ngram, count) in &freq2 {
		let expect = if ngram.words() == ["mat", "a"] { 8 } else { 9 };
		assert_eq!(*count, expect, "{ngram}");
	}
}

#[test]
fn range_over_tokenized_lines() {
	let lines = vec!["a plague on both your houses "; 5];
	let ans = count_ngram_range(tokenize(lines), 2, 5);
	assert_eq!(ans.len(), 3);
	for (length, freq) in &ans {
		assert_eq!(freq.values().sum::<usize>(), 30 + 1 - length);
	}
}

#[test]
fn range_from_a_reader() {
	let (lines, status) = read_lines(Cursor::new(HAMLET));
	let options = CountOptions::default().with_clean(true);
	let ans = count_ngram_range(options.words(lines), 1, 3);
	status.finish().unwrap();

	assert_eq!(ans[&1][&NGram::new(["of"])], 2);
	assert_eq!(ans[&1][&NGram::new(["my"])], 2);
	assert_eq!(ans[&2][&NGram::new(["poor", "yorick"])], 1);
	// Words join across line breaks.
	assert_eq!(ans[&2][&NGram::new(["fellow", "of"])], 1);
}

// ============================================================
// Ranking
// ============================================================

#[test]
fn top_two_numbers() {
	let freq = HashMap::from([("nine", 9), ("one", 1), ("seven", 7)]);
	assert_eq!(top_n(&freq, 2), vec![("nine", 9), ("seven", 7)]);
}

#[test]
fn top_range_ranks_repeated_phrase_first() {
	let text = format!("{} the end", "to be or not to be ".repeat(3));
	let ans = top_ngrams_range(tokenize([text]), 2, 3, 1);
	assert_eq!(ans[&2][0].ngram, NGram::new(["to", "be"]));
	assert_eq!(ans[&2][0].count, 6);
}

#[test]
fn top_range_empty_when_range_is_empty() {
	let range: LengthRange = "4:2".parse().unwrap();
	assert!(range.is_empty());
	assert!(top_ngrams_range(tokenize(["a b c d e"]), range.min(), range.max(), 5).is_empty());
}

// ============================================================
// Tokenizing and merging
// ============================================================

#[test]
fn plague_tokenizes_to_thirty_words() {
	let text = "a plague on both your houses ".repeat(5);
	let tokens: Vec<String> = tokenize([text.as_str()]).collect();
	assert_eq!(tokens.len(), 30);
	assert!(tokens.iter().all(|w| !w.is_empty() && !w.contains(' ')));
}

#[test]
fn tree_merges_into_the() {
	let merged: Vec<String> = merge_similar(tokenize(["the tree monkeypuzzletree tree"])).collect();
	assert_eq!(merged, vec!["the", "the", "monkeypuzzletree", "the"]);
}

#[test]
fn merge_then_count() {
	let options = CountOptions::default().with_clean(true).with_merge(true);
	let ans = count_ngram_range(options.words(["Colour color COLOR colours"]), 1, 2);
	assert_eq!(ans[&1].len(), 1);
	assert_eq!(ans[&1][&NGram::new(["colour"])], 4);
}

#[test]
fn custom_threshold_keeps_words_apart() {
	let strict = WordMerger::new(0.95);
	let merged: Vec<String> = merge_similar_with(tokenize(["colour color"]), strict).collect();
	assert_eq!(merged, vec!["colour", "color"]);
}
