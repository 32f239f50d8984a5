use std::collections::VecDeque;
use std::sync::LazyLock;

use regex_lite::Regex;

/// A word is a maximal run of ASCII letters, digits or underscores.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// Lazy word stream over a sequence of text lines.
///
/// Lines are pulled one at a time from the underlying source; the words of
/// the current line are buffered until consumed. Punctuation and whitespace
/// are discarded, so no emitted token is ever empty or contains a separator.
///
/// # Notes
/// - Forward-only: restarting requires a fresh line source.
/// - Memory use is bounded by the longest line, not by the input.
pub struct Words<I> {
	lines: I,
	pending: VecDeque<String>,
}

impl<I, S> Iterator for Words<I>
where
	I: Iterator<Item = S>,
	S: AsRef<str>,
{
	type Item = String;

	fn next(&mut self) -> Option<String> {
		loop {
			if let Some(word) = self.pending.pop_front() {
				return Some(word);
			}
			let line = self.lines.next()?;
			self.pending
				.extend(WORD.find_iter(line.as_ref()).map(|m| m.as_str().to_owned()));
		}
	}
}

/// Turns lines of text into a lazy sequence of word tokens.
pub fn tokenize<I, S>(lines: I) -> Words<I::IntoIter>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	Words { lines: lines.into_iter(), pending: VecDeque::new() }
}
