//! Lazy sequence combinators inspired by Python's built-ins and [`itertools`].
//!
//! # Purpose
//! [`Iterator`] already covers most of this ground, but Python's versions differ in a few useful
//! ways: [`range`] accepts a negative step, [`zip`] takes any number of inputs at once (with a
//! [strict](zip_strict) variant that reports inputs of different lengths) and [`product`] and
//! [`repeat`] have no direct counterpart.
//!
//! # Method
//! Every constructor validates its arguments eagerly and then returns a small state machine
//! implementing [`Iterator`]. Inputs are adapted into a [`Sequence`] first, which fuses them so
//! that no combinator ever pulls from an input after it has run out. All returned iterators are
//! [`FusedIterator`](std::iter::FusedIterator)s.
//!
//! The only error that can occur during iteration is a [`MismatchedLengthsError`] from
//! [`zip_strict`], since lengths aren't known until the inputs are consumed. Everything else fails
//! at construction.
//!
//! [`itertools`]: https://docs.python.org/3/library/itertools.html

pub mod error;

mod chain;
mod enumerate;
mod product;
mod range;
mod replay;
mod sequence;
mod tests;
mod zip;

#[doc(inline)]
pub use chain::{Chain, chain};
#[doc(inline)]
pub use enumerate::{Enumerate, enumerate};
#[doc(inline)]
pub use error::{ErrorKind, IterError, MismatchedLengthsError};
#[doc(inline)]
pub use product::{Product, product};
#[doc(inline)]
pub use range::{Range, range, range_from, range_step};
#[doc(inline)]
pub use replay::{Cycle, Repeat, cycle, repeat};
#[doc(inline)]
pub use sequence::{Sequence, as_sequence};
#[doc(inline)]
pub use zip::{Zip, ZipStrict, zip, zip_strict};
