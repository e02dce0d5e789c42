//! Small utilities borrowed from Python's batteries: lazy iteration helpers, operators as
//! functions and conditional removal from collections.
//!
//! # Modules
//! - [`iter`]: Sequence combinators, such as [`range`](iter::range), [`zip`](iter::zip) and
//!   [`product`](iter::product), built as explicit state machines over [`Iterator`].
//! - [`dynamic`]: The same combinators for dynamically typed [`Value`](dynamic::Value)s, with all
//!   of the argument checking that static types would otherwise provide.
//! - [`ops`]: Arithmetic operators as free functions, including [`positive_mod`](ops::positive_mod).
//! - [`keyed`]: Removal helpers for double-ended collections and maps.
//!
//! Each module sits behind a feature of the same name, all enabled by default.
//!
//! # Error Handling
//! Combinators validate their arguments when they are created and report problems as strongly
//! typed errors: one struct per failure, gathered into [`IterError`](iter::IterError) where a
//! function can fail in more than one way. The only error that can surface mid-iteration is a
//! length mismatch from [`zip_strict`](iter::zip_strict).
//!
//! # Logging
//! Construction of the combinators emits [`tracing`] events at the trace level and a detected length
//! mismatch is logged at the debug level. No subscriber is installed by this crate.
//!
//! # Concurrency
//! Every iterator here is plain owned state intended for a single consumer. None of them are shared
//! or synchronised.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "dynamic")]
pub mod dynamic;
#[cfg(feature = "iter")]
pub mod iter;
#[cfg(feature = "keyed")]
pub mod keyed;
#[cfg(feature = "ops")]
pub mod ops;
