//! A dynamically typed front end to [`crate::iter`].
//!
//! # Purpose
//! With static types, passing something that can't be iterated to [`iter::chain`] is a compile
//! error and a range can't be given a fractional step. When arguments arrive as data instead, such
//! as JSON, those checks have to happen at runtime. The functions here accept [`Value`]s, check them
//! up front and then hand off to the typed combinators.
//!
//! # Errors
//! Every function returns an [`IterError`] describing the first bad argument:
//! - [`ErrorKind::InvalidArgument`](crate::iter::ErrorKind) when a value isn't iterable or there
//!   are the wrong number of arguments.
//! - [`ErrorKind::Type`](crate::iter::ErrorKind) when a number was expected.
//! - [`ErrorKind::Range`](crate::iter::ErrorKind) when a number isn't an integer or is outside the
//!   accepted domain.

use crate::iter::error::{
    ArityError, InvalidArgumentError, NonIntegerError, NonPositiveCountError, NotANumberError,
};
use crate::iter::{self, Chain, Cycle, Enumerate, IterError, Product, Range, Repeat, Sequence, Zip, ZipStrict};

mod value;

#[doc(inline)]
pub use value::{Elements, Value};

/// Checks whether `value` is iterable.
pub const fn is_iterable(value: &Value) -> bool {
    value.is_iterable()
}

fn elements(value: Value, index: Option<usize>) -> Result<Elements, InvalidArgumentError> {
    value.into_elements().map_err(|value| InvalidArgumentError {
        index,
        value: value.render(),
    })
}

fn all_elements(values: Vec<Value>) -> Result<Vec<Elements>, InvalidArgumentError> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| elements(value, Some(index)))
        .collect()
}

fn integer(value: &Value, index: usize) -> Result<i64, IterError> {
    match *value {
        Value::Int(int) => Ok(int),
        // The upper bound is exclusive since i64::MAX rounds up to 2^63 as an f64.
        Value::Float(float)
            if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 =>
        {
            Ok(float as i64)
        }
        Value::Float(_) => Err(NonIntegerError { index }.into()),
        _ => Err(NotANumberError { index }.into()),
    }
}

/// Wraps an iterable value as a [`Sequence`], short-circuiting to an exhausted one if it is empty.
///
/// # Errors
/// Returns [`InvalidArgumentError`] if `value` isn't iterable.
pub fn as_sequence(value: Value) -> Result<Sequence<Elements>, IterError> {
    Ok(iter::as_sequence(elements(value, None)?))
}

/// Creates a [`Range`] from 1 to 3 integers, interpreted as `(end)`, `(begin, end)` or
/// `(begin, end, step)`.
///
/// Floats are accepted as long as they have no fractional part.
///
/// # Errors
/// - [`ArityError`] if there are fewer than 1 or more than 3 arguments.
/// - [`NotANumberError`] if an argument isn't a number.
/// - [`NonIntegerError`] if an argument has a fractional part.
/// - [`ZeroStepError`](crate::iter::error::ZeroStepError) if the step is zero.
///
/// # Examples
/// ```
/// # use skink::dynamic::{self, Value};
/// let args: Vec<Value> = serde_json::from_str("[10, 0, -3.0]").unwrap();
/// assert_eq!(dynamic::range(&args).unwrap().collect::<Vec<_>>(), [10, 7, 4, 1]);
/// ```
pub fn range(args: &[Value]) -> Result<Range, IterError> {
    let arity = || ArityError {
        min: 1,
        max: 3,
        got: args.len(),
    };
    if !(1..=3).contains(&args.len()) {
        return Err(arity().into());
    }

    let ints = args
        .iter()
        .enumerate()
        .map(|(index, value)| integer(value, index))
        .collect::<Result<Vec<_>, _>>()?;

    match *ints.as_slice() {
        [end] => Ok(iter::range(end)),
        [begin, end] => Ok(iter::range_from(begin, end)),
        [begin, end, step] => Ok(Range::new(begin, end, step)?),
        _ => Err(arity().into()),
    }
}

/// Chains iterable values together. See [`iter::chain`].
///
/// # Errors
/// Returns [`InvalidArgumentError`] naming the first value that isn't iterable.
pub fn chain(values: Vec<Value>) -> Result<Chain<Elements>, IterError> {
    Ok(iter::chain(all_elements(values)?))
}

/// Repeats an iterable value forever. See [`iter::cycle`].
///
/// # Errors
/// Returns [`InvalidArgumentError`] if `value` isn't iterable.
pub fn cycle(value: Value) -> Result<Cycle<Elements>, IterError> {
    Ok(iter::cycle(elements(value, None)?))
}

/// Repeats an iterable value `n` times. See [`iter::repeat`].
///
/// # Errors
/// - [`InvalidArgumentError`] if `value` isn't iterable.
/// - [`NotANumberError`] if `n` isn't a number.
/// - [`NonIntegerError`] if `n` has a fractional part.
/// - [`NonPositiveCountError`] if `n` is zero or negative.
pub fn repeat(value: Value, n: &Value) -> Result<Repeat<Elements>, IterError> {
    let source = elements(value, Some(0))?;
    let count = integer(n, 1)?;
    let n = usize::try_from(count)
        .ok()
        .filter(|n| *n > 0)
        .ok_or(NonPositiveCountError { count })?;
    Ok(iter::repeat(source, n)?)
}

/// Zips iterable values, stopping with the shortest. See [`iter::zip`].
///
/// # Errors
/// Returns [`InvalidArgumentError`] naming the first value that isn't iterable.
pub fn zip(values: Vec<Value>) -> Result<Zip<Elements>, IterError> {
    Ok(iter::zip(all_elements(values)?))
}

/// Zips iterable values, yielding an error if they differ in length. See [`iter::zip_strict`].
///
/// # Errors
/// Returns [`InvalidArgumentError`] naming the first value that isn't iterable.
pub fn zip_strict(values: Vec<Value>) -> Result<ZipStrict<Elements>, IterError> {
    Ok(iter::zip_strict(all_elements(values)?))
}

/// Creates the cartesian product of iterable values. See [`iter::product`].
///
/// # Errors
/// Returns [`InvalidArgumentError`] naming the first value that isn't iterable.
pub fn product(values: Vec<Value>) -> Result<Product<Value>, IterError> {
    Ok(iter::product(all_elements(values)?))
}

/// Pairs the elements of an iterable value with an index counting from `start`, or 0 if no start is
/// given. See [`iter::enumerate`].
///
/// # Errors
/// - [`InvalidArgumentError`] if `value` isn't iterable.
/// - [`NotANumberError`] if `start` isn't a number.
/// - [`NonIntegerError`] if `start` has a fractional part.
pub fn enumerate(value: Value, start: Option<&Value>) -> Result<Enumerate<Elements>, IterError> {
    let source = elements(value, Some(0))?;
    let start = start.map(|start| integer(start, 1)).transpose()?.unwrap_or(0);
    Ok(iter::enumerate(source, start))
}
