/// Lowercasing adapter over a word stream.
///
/// Stateless; preserves the length and order of the stream.
pub struct Lowercase<I> {
	words: I,
}

impl<I> Iterator for Lowercase<I>
where
	I: Iterator<Item = String>,
{
	type Item = String;

	fn next(&mut self) -> Option<String> {
		self.words.next().map(|word| word.to_lowercase())
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.words.size_hint()
	}
}

/// Puts every word into canonical (lowercase) form.
pub fn canonicalize<I>(words: I) -> Lowercase<I::IntoIter>
where
	I: IntoIterator<Item = String>,
{
	Lowercase { words: words.into_iter() }
}
