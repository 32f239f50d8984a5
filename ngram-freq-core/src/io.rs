use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::rc::Rc;

use crate::error::Result;

/// Opens the input to count.
///
/// - `Some(path)` opens the file, buffered
/// - `None` reads from standard input
pub fn open_input<P: AsRef<Path>>(path: Option<P>) -> io::Result<Box<dyn BufRead>> {
	match path {
		Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
		None => Ok(Box::new(io::stdin().lock())),
	}
}

/// Forward-only sequence of lines over an already-open reader.
///
/// - Splits on `\n` / `\r\n`
/// - Decodes each line as UTF-8, replacing invalid sequences
/// - Stops at the first read error and hands it to the paired `ReadStatus`
pub struct LineSource<R> {
	reader: R,
	buf: Vec<u8>,
	error: Rc<RefCell<Option<io::Error>>>,
	done: bool,
}

/// Outcome of a `LineSource`, checked once the pipeline has drained it.
pub struct ReadStatus {
	error: Rc<RefCell<Option<io::Error>>>,
}

impl ReadStatus {
	/// Returns the read error that ended the line source early, if any.
	pub fn finish(self) -> Result<()> {
		match self.error.borrow_mut().take() {
			Some(err) => Err(err.into()),
			None => Ok(()),
		}
	}
}

impl<R: BufRead> Iterator for LineSource<R> {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		if self.done {
			return None;
		}

		self.buf.clear();
		match self.reader.read_until(b'\n', &mut self.buf) {
			Ok(0) => {
				self.done = true;
				None
			}
			Ok(_) => {
				let line = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf);
				let line = line.strip_suffix(b"\r").unwrap_or(line);
				Some(String::from_utf8_lossy(line).into_owned())
			}
			Err(err) => {
				self.done = true;
				*self.error.borrow_mut() = Some(err);
				None
			}
		}
	}
}

/// Wraps a reader into a line source and the handle reporting its read errors.
pub fn read_lines<R: BufRead>(reader: R) -> (LineSource<R>, ReadStatus) {
	let error = Rc::new(RefCell::new(None));
	let source = LineSource { reader, buf: Vec::new(), error: Rc::clone(&error), done: false };
	(source, ReadStatus { error })
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::{Cursor, Read};

	#[test]
	fn test_splits_lines() {
		let (lines, status) = read_lines(Cursor::new("one\r\ntwo\n\nthree"));
		assert_eq!(lines.collect::<Vec<_>>(), vec!["one", "two", "", "three"]);
		assert!(status.finish().is_ok());
	}

	#[test]
	fn test_invalid_utf8_is_replaced() {
		let (lines, _) = read_lines(Cursor::new(b"ok\xffok\n".to_vec()));
		assert_eq!(lines.collect::<Vec<_>>(), vec!["ok\u{fffd}ok"]);
	}

	struct Failing;

	impl Read for Failing {
		fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
			Err(io::Error::other("disk on fire"))
		}
	}

	#[test]
	fn test_read_error_is_reported() {
		let (lines, status) = read_lines(BufReader::new(Failing));
		assert_eq!(lines.count(), 0);
		let err = status.finish().unwrap_err();
		assert!(err.to_string().contains("disk on fire"));
	}

	#[test]
	fn test_missing_file() {
		assert!(open_input(Some("/definitely/not/here.txt")).is_err());
	}
}
