use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::{Sequence, as_sequence};

/// Yields every item of each input in turn, created by [`chain`].
#[derive(Debug, Clone)]
pub struct Chain<I> {
    pending: VecDeque<Sequence<I>>,
}

impl<I: Iterator> Iterator for Chain<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(front) = self.pending.front_mut() {
            match front.next() {
                Some(item) => return Some(item),
                None => {
                    self.pending.pop_front();
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pending.iter().fold((0, Some(0)), |(low, high), seq| {
            let (seq_low, seq_high) = seq.size_hint();
            (
                low.saturating_add(seq_low),
                high.zip(seq_high).and_then(|(a, b)| a.checked_add(b)),
            )
        })
    }
}

impl<I: Iterator> FusedIterator for Chain<I> {}

/// Combines any number of iterables into one, exhausting each before moving on to the next.
/// Modelled on Python's [`itertools.chain()`].
///
/// Inputs must share an iterator type. To chain different sources, box them as
/// `Box<dyn Iterator<Item = T>>` first.
///
/// [`itertools.chain()`]: https://docs.python.org/3/library/itertools.html#itertools.chain
///
/// # Examples
/// ```
/// # use skink::iter::chain;
/// assert_eq!(chain([vec![0], vec![1, 2]]).collect::<Vec<_>>(), [0, 1, 2]);
/// assert_eq!(chain(Vec::<Vec<u8>>::new()).count(), 0);
/// ```
pub fn chain<S>(iterables: S) -> Chain<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    let pending: VecDeque<_> = iterables
        .into_iter()
        .map(as_sequence)
        .filter(|seq| seq.is_live())
        .collect();
    tracing::trace!(live = pending.len(), "created chain");
    Chain { pending }
}
