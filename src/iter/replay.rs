use std::iter::FusedIterator;

use super::error::NonPositiveCountError;
use super::{Sequence, as_sequence};

/// Records the first pass over a source, then replays the recording. Shared by [`Cycle`] and
/// [`Repeat`].
#[derive(Debug, Clone)]
struct Replay<I, T> {
    source: Sequence<I>,
    buffer: Vec<T>,
    pos: usize,
    /// Replays still to start after the first pass, [`None`] meaning forever.
    passes_left: Option<usize>,
}

impl<I: Iterator<Item = T>, T: Clone> Replay<I, T> {
    fn new(source: Sequence<I>, passes_left: Option<usize>) -> Replay<I, T> {
        Replay {
            source,
            buffer: Vec::new(),
            pos: 0,
            passes_left,
        }
    }

    fn next(&mut self) -> Option<T> {
        if let Some(item) = self.source.next() {
            self.buffer.push(item.clone());
            return Some(item);
        }

        if self.buffer.is_empty() {
            return None;
        }

        if self.pos == 0 {
            match &mut self.passes_left {
                Some(0) => {
                    self.buffer = Vec::new();
                    return None;
                }
                Some(passes) => *passes -= 1,
                None => {}
            }
        }

        let item = self.buffer[self.pos].clone();
        self.pos = (self.pos + 1) % self.buffer.len();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(passes) = self.passes_left else {
            if !self.buffer.is_empty() {
                return (usize::MAX, None);
            }
            // Nothing recorded yet, so the source decides whether there is anything to cycle.
            return match self.source.size_hint() {
                (0, Some(0)) => (0, Some(0)),
                (0, _) => (0, None),
                _ => (usize::MAX, None),
            };
        };

        let len = self.buffer.len();
        if self.source.is_live() {
            let (low, high) = self.source.size_hint();
            let total = |unseen: usize| {
                len.checked_add(unseen)?
                    .checked_mul(passes)?
                    .checked_add(unseen)
            };
            (total(low).unwrap_or(usize::MAX), high.and_then(total))
        } else {
            let current = if self.pos == 0 { 0 } else { len - self.pos };
            let remaining = len
                .checked_mul(passes)
                .and_then(|replays| replays.checked_add(current));
            (remaining.unwrap_or(usize::MAX), remaining)
        }
    }
}

/// Repeats the contents of a source forever, created by [`cycle`].
#[derive(Debug, Clone)]
pub struct Cycle<I: Iterator> {
    inner: Replay<I, I::Item>,
}

impl<I: Iterator> Iterator for Cycle<I>
where
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: Iterator> FusedIterator for Cycle<I> where I::Item: Clone {}

/// Repeats the contents of a source a fixed number of times, created by [`repeat`].
#[derive(Debug, Clone)]
pub struct Repeat<I: Iterator> {
    inner: Replay<I, I::Item>,
}

impl<I: Iterator> Iterator for Repeat<I>
where
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: Iterator> FusedIterator for Repeat<I> where I::Item: Clone {}

/// Repeats the passed iterable forever, modelled on Python's [`itertools.cycle()`].
///
/// Items are yielded as they are pulled from the source and recorded, then the recording is
/// replayed in order. The result never runs out unless the source was empty, so bound it with
/// something like [`Iterator::take`].
///
/// [`itertools.cycle()`]: https://docs.python.org/3/library/itertools.html#itertools.cycle
///
/// # Examples
/// ```
/// # use skink::iter::cycle;
/// let seasons = cycle(["Winter", "Spring", "Summer", "Autumn"]);
/// assert_eq!(seasons.skip(4).next(), Some("Winter"));
///
/// assert_eq!(cycle(Vec::<u8>::new()).next(), None);
/// ```
pub fn cycle<S>(iterable: S) -> Cycle<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    tracing::trace!("created cycle");
    Cycle {
        inner: Replay::new(as_sequence(iterable), None),
    }
}

/// Repeats the items of `iterable` exactly `n` times, yielding `n` times as many items as the
/// source holds.
///
/// # Errors
/// Returns [`NonPositiveCountError`] if `n` is zero.
///
/// # Examples
/// ```
/// # use skink::iter::repeat;
/// assert_eq!(repeat([1, 2, 3], 2).unwrap().collect::<Vec<_>>(), [1, 2, 3, 1, 2, 3]);
/// assert!(repeat([1, 2, 3], 0).is_err());
/// ```
pub fn repeat<S>(iterable: S, n: usize) -> Result<Repeat<S::IntoIter>, NonPositiveCountError>
where
    S: IntoIterator,
    S::Item: Clone,
{
    if n == 0 {
        return Err(NonPositiveCountError { count: 0 });
    }
    tracing::trace!(n, "created repeat");
    Ok(Repeat {
        inner: Replay::new(as_sequence(iterable), Some(n - 1)),
    })
}
