use std::collections::BTreeSet;
use std::iter::FusedIterator;

use super::error::MismatchedLengthsError;
use super::{Sequence, as_sequence};

/// The outcome of advancing every input by one step.
#[derive(Debug)]
enum Round<T> {
    Tuple(Vec<T>),
    /// Every input ran out in the same round.
    Finished,
    /// Some, but not all, inputs ran out in this round.
    Mismatched(usize),
}

/// Advances a list of inputs in lockstep, recording which have run out.
#[derive(Debug, Clone)]
struct Lockstep<I> {
    inputs: Vec<Sequence<I>>,
    /// Indices of exhausted inputs. Indices are only ever added.
    completed: BTreeSet<usize>,
    round: usize,
    done: bool,
}

impl<I: Iterator> Lockstep<I> {
    fn new(inputs: Vec<Sequence<I>>) -> Lockstep<I> {
        let done = inputs.is_empty();
        Lockstep {
            inputs,
            completed: BTreeSet::new(),
            round: 0,
            done,
        }
    }

    fn advance(&mut self) -> Option<Round<I::Item>> {
        if self.done {
            return None;
        }

        let mut tuple = Vec::with_capacity(self.inputs.len());
        for (index, input) in self.inputs.iter_mut().enumerate() {
            match input.next() {
                Some(item) => tuple.push(item),
                None => {
                    self.completed.insert(index);
                }
            }
        }

        let round = self.round;
        self.round += 1;

        if self.completed.is_empty() {
            return Some(Round::Tuple(tuple));
        }

        let count = self.inputs.len();
        self.done = true;
        self.inputs.clear();
        if self.completed.len() == count {
            Some(Round::Finished)
        } else {
            tracing::debug!(
                round,
                completed = self.completed.len(),
                inputs = count,
                "zipped inputs have mismatched lengths"
            );
            Some(Round::Mismatched(round))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        self.inputs
            .iter()
            .map(Iterator::size_hint)
            .fold((usize::MAX, None), |(low, high), (seq_low, seq_high)| {
                let high = match (high, seq_high) {
                    (Some(a), Some(b)) => Some(usize::min(a, b)),
                    (a, b) => a.or(b),
                };
                (low.min(seq_low), high)
            })
    }
}

/// Yields one item from every input per step, stopping with the shortest. Created by [`zip`].
#[derive(Debug, Clone)]
pub struct Zip<I> {
    inner: Lockstep<I>,
}

impl<I: Iterator> Iterator for Zip<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.advance()? {
            Round::Tuple(tuple) => Some(tuple),
            Round::Finished | Round::Mismatched(_) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: Iterator> FusedIterator for Zip<I> {}

/// Like [`Zip`], but yields a [`MismatchedLengthsError`] if the inputs turn out to have different
/// lengths. Created by [`zip_strict`].
#[derive(Debug, Clone)]
pub struct ZipStrict<I> {
    inner: Lockstep<I>,
}

impl<I: Iterator> Iterator for ZipStrict<I> {
    type Item = Result<Vec<I::Item>, MismatchedLengthsError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.advance()? {
            Round::Tuple(tuple) => Some(Ok(tuple)),
            Round::Finished => None,
            Round::Mismatched(round) => Some(Err(MismatchedLengthsError { round })),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.inner.size_hint();
        (low, high.and_then(|high| high.checked_add(1)))
    }
}

impl<I: Iterator> FusedIterator for ZipStrict<I> {}

fn lockstep<S>(iterables: S) -> Lockstep<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    let inputs: Vec<_> = iterables.into_iter().map(as_sequence).collect();
    tracing::trace!(inputs = inputs.len(), "created lockstep zip");
    Lockstep::new(inputs)
}

/// Advances every iterable in lockstep, yielding a [`Vec`] holding one item from each. Modelled on
/// Python's [`zip()`] without `strict=True`, so iteration silently stops with the shortest input.
///
/// [`zip()`]: https://docs.python.org/3/library/functions.html#zip
///
/// # Examples
/// ```
/// # use skink::iter::zip;
/// assert_eq!(zip([vec![1, 2, 3], vec![4, 5]]).collect::<Vec<_>>(), [[1, 4], [2, 5]]);
/// ```
pub fn zip<S>(iterables: S) -> Zip<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Zip {
        inner: lockstep(iterables),
    }
}

/// Like [`zip`] but yields an error once the iterables are found to differ in length, matching
/// Python's `zip(strict=True)`. The cursor is exhausted after the error.
///
/// # Examples
/// ```
/// # use skink::iter::zip_strict;
/// let mut zipped = zip_strict([vec![1, 2, 3], vec![4, 5]]);
/// assert_eq!(zipped.next(), Some(Ok(vec![1, 4])));
/// assert_eq!(zipped.next(), Some(Ok(vec![2, 5])));
/// assert_eq!(zipped.next().unwrap().unwrap_err().round, 2);
/// assert_eq!(zipped.next(), None);
/// ```
pub fn zip_strict<S>(iterables: S) -> ZipStrict<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    ZipStrict {
        inner: lockstep(iterables),
    }
}
