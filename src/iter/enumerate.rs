use std::iter::FusedIterator;

use super::{Sequence, as_sequence};

/// Yields `(index, item)` pairs, created by [`enumerate`].
#[derive(Debug, Clone)]
pub struct Enumerate<I> {
    source: Sequence<I>,
    /// [`None`] once the index has passed [`i64::MAX`].
    index: Option<i64>,
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = (i64, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index?;
        let item = self.source.next()?;
        self.index = index.checked_add(1);
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(index) = self.index else {
            return (0, Some(0));
        };
        let room = usize::try_from(i64::MAX as i128 - index as i128 + 1).unwrap_or(usize::MAX);
        let (low, high) = self.source.size_hint();
        (low.min(room), Some(high.map_or(room, |high| high.min(room))))
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Enumerate<I> {}

impl<I: Iterator> FusedIterator for Enumerate<I> {}

/// Pairs every item of `iterable` with an index counting up from `start`, modelled on Python's
/// [`enumerate()`]. Unlike [`Iterator::enumerate`], the index may start anywhere, including below
/// zero. Iteration ends early rather than wrap if the index would pass [`i64::MAX`].
///
/// [`enumerate()`]: https://docs.python.org/3/library/functions.html#enumerate
///
/// # Examples
/// ```
/// # use skink::iter::enumerate;
/// let pairs: Vec<_> = enumerate(["a", "b", "c"], -1).collect();
/// assert_eq!(pairs, [(-1, "a"), (0, "b"), (1, "c")]);
/// ```
pub fn enumerate<S: IntoIterator>(iterable: S, start: i64) -> Enumerate<S::IntoIter> {
    Enumerate {
        source: as_sequence(iterable),
        index: Some(start),
    }
}
