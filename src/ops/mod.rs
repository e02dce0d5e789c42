//! Operators as free functions, akin to Python's [`operator`] module.
//!
//! These exist so that arithmetic can be passed around as a value, e.g. to a fold. Each one is a
//! thin wrapper over the matching [`std::ops`] trait, except for [`positive_mod`] which wraps back
//! into the positive domain rather than following the sign of the dividend.
//!
//! [`operator`]: https://docs.python.org/3/library/operator.html
#![warn(missing_docs)]

use std::ops::{Add, Div, Mul, Rem, Sub};


/// `a + b`
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// `a - b`
pub fn subtract<T: Sub<Output = T>>(a: T, b: T) -> T {
    a - b
}

/// `a * b`
pub fn multiply<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

/// `a / b`
///
/// # Panics
/// Panics under the same conditions as `/` for `T`, i.e. integer division by zero.
pub fn divide<T: Div<Output = T>>(a: T, b: T) -> T {
    a / b
}

/// The remainder of dividing `a` by `b`, with the sign of `a`. For a modulo which wraps into
/// positive values, see [`positive_mod`].
///
/// # Panics
/// Panics under the same conditions as `%` for `T`, i.e. integer division by zero.
pub fn modulo<T: Rem<Output = T>>(a: T, b: T) -> T {
    a % b
}

/// Integers supporting a modulo that always lands in `[0, |b|)`.
pub trait PositiveMod: Sized {
    /// See [`positive_mod`].
    fn positive_mod(self, b: Self) -> Self;
}

macro_rules! impl_positive_mod {
    ($($t:ty),*) => {
        $(
            impl PositiveMod for $t {
                fn positive_mod(self, b: Self) -> Self {
                    self.wrapping_rem_euclid(b)
                }
            }
        )*
    };
}

impl_positive_mod!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// `%` which wraps back into the positive domain, so the result is always in `[0, |b|)` and
/// congruent to `a` modulo `b`.
///
/// Where `a / b` would overflow (`MIN` divided by `-1`), the result is 0.
///
/// # Panics
/// Panics if `b` is zero.
///
/// # Examples
/// ```
/// # use skink::ops::positive_mod;
/// assert_eq!(positive_mod(-4, 2), 0);
/// assert_eq!(positive_mod(-3, 5), 2);
/// assert_eq!(-3 % 5, -3);
/// ```
pub fn positive_mod<T: PositiveMod>(a: T, b: T) -> T {
    a.positive_mod(b)
}
