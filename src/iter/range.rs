use std::iter::FusedIterator;

use super::error::ZeroStepError;

/// A lazy arithmetic progression, modelled on Python's [`range()`].
///
/// Yields `begin`, `begin + step`, `begin + 2 * step`, ... stopping strictly before crossing
/// `end`. The direction is given by the sign of `step`, which is never zero.
///
/// [`range()`]: https://docs.python.org/3/library/functions.html#func-range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    next: Option<i64>,
    end: i64,
    step: i64,
}

impl Range {
    /// Creates a Range from all three components.
    ///
    /// # Errors
    /// Returns [`ZeroStepError`] if `step` is zero, since such a range would never terminate.
    pub fn new(begin: i64, end: i64, step: i64) -> Result<Range, ZeroStepError> {
        if step == 0 {
            return Err(ZeroStepError);
        }
        tracing::trace!(begin, end, step, "created range");
        Ok(Range {
            next: Some(begin),
            end,
            step,
        })
    }

    pub const fn end(&self) -> i64 {
        self.end
    }

    pub const fn step(&self) -> i64 {
        self.step
    }

    const fn in_bounds(&self, value: i64) -> bool {
        if self.step > 0 {
            value < self.end
        } else {
            value > self.end
        }
    }

    fn remaining(&self) -> usize {
        match self.next {
            Some(next) if self.in_bounds(next) => {
                let distance = (self.end as i128 - next as i128).abs();
                let step = (self.step as i128).abs();
                usize::try_from((distance + step - 1) / step).unwrap_or(usize::MAX)
            }
            _ => 0,
        }
    }
}

impl Iterator for Range {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|value| self.in_bounds(*value))?;
        // Stepping past i64's bounds also means stepping past `end`.
        self.next = current.checked_add(self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Range {}

impl FusedIterator for Range {}

/// Iterates from `0` up to, but not including, `end`.
///
/// # Examples
/// ```
/// # use skink::iter::range;
/// assert_eq!(range(5).collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
/// assert_eq!(range(-2).count(), 0);
/// ```
pub const fn range(end: i64) -> Range {
    Range {
        next: Some(0),
        end,
        step: 1,
    }
}

/// Iterates from `begin` up to, but not including, `end`.
///
/// # Examples
/// ```
/// # use skink::iter::range_from;
/// assert_eq!(range_from(5, 10).collect::<Vec<_>>(), [5, 6, 7, 8, 9]);
/// ```
pub const fn range_from(begin: i64, end: i64) -> Range {
    Range {
        next: Some(begin),
        end,
        step: 1,
    }
}

/// Iterates from `begin` towards `end` by `step`, stopping before crossing `end`.
///
/// # Errors
/// Returns [`ZeroStepError`] if `step` is zero.
///
/// # Examples
/// ```
/// # use skink::iter::range_step;
/// assert_eq!(range_step(0, -5, -1).unwrap().collect::<Vec<_>>(), [0, -1, -2, -3, -4]);
/// assert_eq!(range_step(0, 10, 3).unwrap().collect::<Vec<_>>(), [0, 3, 6, 9]);
/// assert!(range_step(0, 10, 0).is_err());
/// ```
pub fn range_step(begin: i64, end: i64, step: i64) -> Result<Range, ZeroStepError> {
    Range::new(begin, end, step)
}
