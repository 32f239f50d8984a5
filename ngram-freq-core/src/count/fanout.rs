use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// State shared by all cursors of one fan-out.
///
/// `queues[i]` holds the items read from the source that cursor `i` has not
/// consumed yet. A dropped cursor's queue is set to `None` so it stops
/// buffering.
struct Shared<I: Iterator> {
	source: I,
	exhausted: bool,
	queues: Vec<Option<VecDeque<I::Item>>>,
}

/// One independent read position over a fanned-out source.
///
/// Every cursor yields every element of the source exactly once, in order,
/// at its own pace. Whichever cursor is furthest ahead pulls from the source
/// and leaves a copy in the queue of every other live cursor.
///
/// # Notes
/// - Memory use is the gap between the fastest and the slowest live cursor.
///   Consumers that advance all cursors in lockstep keep it at one item.
/// - Cursors share state through `Rc`, so they stay on one thread.
pub struct Cursor<I: Iterator> {
	shared: Rc<RefCell<Shared<I>>>,
	index: usize,
}

impl<I: Iterator> Cursor<I> {
	/// Number of items read from the source but not yet consumed by this cursor.
	pub fn buffered(&self) -> usize {
		self.shared.borrow().queues[self.index].as_ref().map_or(0, VecDeque::len)
	}
}

impl<I> Iterator for Cursor<I>
where
	I: Iterator,
	I::Item: Clone,
{
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		let mut shared = self.shared.borrow_mut();

		if let Some(item) = shared.queues[self.index].as_mut().and_then(VecDeque::pop_front) {
			return Some(item);
		}
		if shared.exhausted {
			return None;
		}

		let Some(item) = shared.source.next() else {
			shared.exhausted = true;
			return None;
		};
		for (i, queue) in shared.queues.iter_mut().enumerate() {
			if i == self.index {
				continue;
			}
			if let Some(queue) = queue {
				queue.push_back(item.clone());
			}
		}
		Some(item)
	}
}

impl<I: Iterator> Drop for Cursor<I> {
	fn drop(&mut self) {
		if let Ok(mut shared) = self.shared.try_borrow_mut() {
			shared.queues[self.index] = None;
		}
	}
}

/// Splits a single-pass source into `count` independent cursors.
///
/// Each cursor sees the whole source from its current position, as if it
/// had its own copy, while the source itself is read only once.
pub fn fan_out<I>(source: I, count: usize) -> Vec<Cursor<I::IntoIter>>
where
	I: IntoIterator,
{
	let shared = Rc::new(RefCell::new(Shared {
		source: source.into_iter(),
		exhausted: false,
		queues: (0..count).map(|_| Some(VecDeque::new())).collect(),
	}));

	(0..count).map(|index| Cursor { shared: Rc::clone(&shared), index }).collect()
}
