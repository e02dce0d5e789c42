use std::iter::FusedIterator;

use derive_more::IsVariant;

/// The uniform pull cursor every combinator in this module is built on.
///
/// A Sequence wraps any [`Iterator`] and guarantees that once it has reported exhaustion it stays
/// exhausted, even if the source would have started yielding again. The source is dropped as soon
/// as it runs out.
///
/// Cursors are single-pass and meant for a single consumer.
#[derive(Debug, Clone, IsVariant)]
pub enum Sequence<I> {
    /// The cursor can't yield anything else.
    Exhausted,
    /// The cursor is still pulling from its source.
    Live(I),
}

use Sequence::*;

impl<I> Sequence<I> {
    /// The canonical exhausted cursor.
    pub const fn empty() -> Sequence<I> {
        Exhausted
    }
}

impl<I: Iterator> Iterator for Sequence<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Exhausted => None,
            Live(source) => {
                let item = source.next();
                if item.is_none() {
                    *self = Exhausted;
                }
                item
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Exhausted => (0, Some(0)),
            Live(source) => source.size_hint(),
        }
    }
}

impl<I: Iterator> FusedIterator for Sequence<I> {}

/// Adapts anything [`IntoIterator`] into a [`Sequence`].
///
/// When the source can cheaply tell that it is empty (its [`size_hint`](Iterator::size_hint) is
/// exactly zero), the canonical exhausted cursor is returned without holding on to it.
///
/// # Examples
/// ```
/// # use skink::iter::as_sequence;
/// let mut seq = as_sequence([1, 2]);
/// assert_eq!(seq.next(), Some(1));
/// assert_eq!(seq.next(), Some(2));
/// assert_eq!(seq.next(), None);
///
/// assert!(as_sequence(Vec::<u8>::new()).is_exhausted());
/// ```
pub fn as_sequence<I: IntoIterator>(iterable: I) -> Sequence<I::IntoIter> {
    let source = iterable.into_iter();
    match source.size_hint() {
        (0, Some(0)) => Exhausted,
        _ => Live(source),
    }
}
