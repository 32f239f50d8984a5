use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FreqError>;

/// Errors reported by the counting core.
///
/// An empty length range is not an error: it simply produces no lengths.
/// A top-N of zero is not an error either: it produces no entries.
#[derive(Error, Debug)]
pub enum FreqError {
	/// An n-gram length below 1 was requested.
	#[error("Invalid n-gram length {length}: length must be >= 1")]
	InvalidLength { length: usize },

	/// A length argument was neither `N` nor `N:M`.
	#[error("Malformed length should be min:max e.g. 1:3 not {input}")]
	MalformedLength { input: String },

	/// A top-N argument was not a non-negative integer.
	#[error("Malformed number: {input}")]
	MalformedNumber { input: String },

	/// A merge threshold outside `[0.0, 1.0]`.
	#[error("Merge threshold must be between 0.0 and 1.0, got {value}")]
	InvalidThreshold { value: f64 },

	/// The line source failed while reading.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

impl FreqError {
	pub fn invalid_length(length: usize) -> Self {
		Self::InvalidLength { length }
	}

	pub fn malformed_length(input: impl Into<String>) -> Self {
		Self::MalformedLength { input: input.into() }
	}

	pub fn malformed_number(input: impl Into<String>) -> Self {
		Self::MalformedNumber { input: input.into() }
	}

	pub fn invalid_threshold(value: f64) -> Self {
		Self::InvalidThreshold { value }
	}

	/// True for errors caused by bad user input rather than a failing reader.
	pub fn is_input_error(&self) -> bool {
		!matches!(self, Self::Io(_))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		let err = FreqError::invalid_length(0);
		assert!(err.to_string().contains("length 0"));

		let err = FreqError::malformed_length("2-5");
		assert!(err.to_string().contains("not 2-5"));

		let err = FreqError::malformed_number("-3");
		assert!(err.to_string().contains("-3"));
	}

	#[test]
	fn test_is_input_error() {
		assert!(FreqError::invalid_threshold(1.5).is_input_error());

		let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
		assert!(!FreqError::from(io).is_input_error());
	}
}
