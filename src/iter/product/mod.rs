//! Cartesian products via an odometer of digit wheels.
//!
//! Every input is drained into a [`Wheel`] up front. Each step yields the current value of every
//! wheel, then turns the last wheel by one, carrying into the wheel before it whenever a wheel
//! wraps around. The number of steps is fixed at construction as the product of the wheel lengths.

use std::iter::FusedIterator;

use wheel::{Wheel, advance_odometer};

mod wheel;

/// Yields every combination of one item from each input, created by [`product`].
#[derive(Debug, Clone)]
pub struct Product<T> {
    wheels: Vec<Wheel<T>>,
    remaining: u128,
}

impl<T: Clone> Iterator for Product<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let permutation = self.wheels.iter().map(|wheel| wheel.current().clone()).collect();
        self.remaining -= 1;

        if self.remaining == 0 {
            self.wheels = Vec::new();
        } else {
            advance_odometer(&mut self.wheels);
        }
        Some(permutation)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for Product<T> {}

/// Creates an iterator over all combinations of the items in `iterables`, similar to Python's
/// [`itertools.product()`].
///
/// The first iterable varies slowest and the last varies fastest, so for sorted inputs the output
/// is in lexicographic order. Every iterable is collected into memory when this is called, so none
/// of them can be infinite.
///
/// With no iterables, or if any iterable is empty, nothing is yielded.
///
/// [`itertools.product()`]: https://docs.python.org/3/library/itertools.html#itertools.product
///
/// # Examples
/// ```
/// # use skink::iter::{product, range_from};
/// let coords: Vec<_> = product([range_from(0, 2), range_from(0, 2)]).collect();
/// assert_eq!(coords, [[0, 0], [0, 1], [1, 0], [1, 1]]);
/// ```
pub fn product<S>(iterables: S) -> Product<<S::Item as IntoIterator>::Item>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    let wheels: Option<Vec<_>> = iterables
        .into_iter()
        .map(|iterable| Wheel::new(iterable.into_iter().collect()))
        .collect();

    let wheels = match wheels {
        Some(wheels) if !wheels.is_empty() => wheels,
        _ => {
            tracing::trace!(permutations = 0, "created empty product");
            return Product {
                wheels: Vec::new(),
                remaining: 0,
            };
        }
    };

    let remaining = wheels
        .iter()
        .fold(1_u128, |total, wheel| total.saturating_mul(wheel.len() as u128));
    tracing::trace!(inputs = wheels.len(), permutations = remaining, "created product");

    Product { wheels, remaining }
}
