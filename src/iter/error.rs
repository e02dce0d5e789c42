use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

/// A value was supplied where something iterable was required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The position of the offending argument, if the call took more than one.
    pub index: Option<usize>,
    /// A rendering of the offending value.
    pub value: String,
}

impl Display for InvalidArgumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "argument {index} does not appear to be iterable: {}", self.value),
            None => write!(f, "expected an iterable, but got {}", self.value),
        }
    }
}

impl Error for InvalidArgumentError {}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("this function takes {min} to {max} arguments, but got {got}")]
pub struct ArityError {
    pub min: usize,
    pub max: usize,
    pub got: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("argument {index} is not a number")]
pub struct NotANumberError {
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("argument {index} is not an integer")]
pub struct NonIntegerError {
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("step must not be zero")]
pub struct ZeroStepError;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("n must be an integer > 0 but got {count}")]
pub struct NonPositiveCountError {
    pub count: i64,
}

/// Raised lazily by [`ZipStrict`](super::ZipStrict) once pulling reveals that its inputs have
/// different lengths.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("iterables stopped early at index {round}")]
pub struct MismatchedLengthsError {
    /// The lockstep round in which some, but not all, inputs were exhausted.
    pub round: usize,
}

/// The broad class of an [`IterError`], following the split between a missing capability, a value
/// of the wrong type and a value of the right type but outside the accepted domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum ErrorKind {
    InvalidArgument,
    Type,
    Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, From, Error, IsVariant)]
pub enum IterError {
    InvalidArgument(InvalidArgumentError),
    Arity(ArityError),
    NotANumber(NotANumberError),
    NonInteger(NonIntegerError),
    ZeroStep(ZeroStepError),
    NonPositiveCount(NonPositiveCountError),
    MismatchedLengths(MismatchedLengthsError),
}

impl IterError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            IterError::InvalidArgument(_) | IterError::Arity(_) => ErrorKind::InvalidArgument,
            IterError::NotANumber(_) => ErrorKind::Type,
            IterError::NonInteger(_)
            | IterError::ZeroStep(_)
            | IterError::NonPositiveCount(_)
            | IterError::MismatchedLengths(_) => ErrorKind::Range,
        }
    }
}
