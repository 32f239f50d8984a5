/// Computes the similarity of two words from their longest common subsequence.
///
/// ```text
///      2 * LCS(word1, word2)
///   ---------------------------
///    len(word1) + len(word2)
/// ```
///
/// The result lies in `[0.0, 1.0]`: identical words score `1.0`, words with
/// no character in common score `0.0`. The measure is symmetric.
///
/// # Notes
/// - Lengths are counted in characters, not bytes.
/// - Runs in O(len1 * len2) time. Only two rows of the dynamic programming
///   grid are kept alive at once.
/// - Two empty words are treated as identical (`1.0`).
pub fn similarity(word1: &str, word2: &str) -> f64 {
	let a: Vec<char> = word1.chars().collect();
	let b: Vec<char> = word2.chars().collect();

	let total = a.len() + b.len();
	if total == 0 {
		return 1.0;
	}

	2.0 * lcs_length(&a, &b) as f64 / total as f64
}

/// Length of the longest common subsequence of two character slices.
///
/// `prev[j]` holds the LCS of `a[..i-1]` and `b[..j]`, `row[j]` that of
/// `a[..i]` and `b[..j]`.
fn lcs_length(a: &[char], b: &[char]) -> usize {
	let mut prev = vec![0usize; b.len() + 1];
	let mut row = vec![0usize; b.len() + 1];

	for &ca in a {
		for (j, &cb) in b.iter().enumerate() {
			row[j + 1] = if ca == cb {
				prev[j] + 1
			} else {
				row[j].max(prev[j + 1])
			};
		}
		std::mem::swap(&mut prev, &mut row);
	}

	prev[b.len()]
}
