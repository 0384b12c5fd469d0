//! The outcome variant type: construction, queries, and extraction.
//!
//! An [`Outcome`] is exactly one of two variants, fixed at construction and
//! immutable afterwards. Transformations live in `combinators`, dispatch in
//! `dispatch`, and interop with the standard result type in `convert`.

mod combinators;
mod convert;
mod dispatch;

pub use convert::ResultExt;
pub use dispatch::match_outcome;

use crate::errors::Message;
use std::fmt;

/// The outcome of a fallible operation: a success carrying a value, or a
/// failure carrying an error.
///
/// The variant set is closed. An outcome is never both, never neither, and
/// never in a partial or pending state. The held value is set once by [`ok`]
/// or [`err`] and never mutated; every transforming combinator consumes
/// `self` and produces a fresh `Outcome`.
///
/// The error parameter defaults to [`Message`] for callers that only need a
/// textual description of what went wrong.
///
/// ```
/// use outcome_core::prelude::*;
///
/// fn halve(n: u32) -> Outcome<u32> {
///     if n % 2 == 0 {
///         ok(n / 2)
///     } else {
///         err(Message::new("odd input"))
///     }
/// }
///
/// assert_eq!(halve(4).unwrap(), 2);
/// assert!(halve(3).is_err());
/// ```
#[must_use = "this `Outcome` may carry an error, which should be handled"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E = Message> {
    /// The operation succeeded, holding its value.
    Ok(T),
    /// The operation failed, holding its error.
    Err(E),
}

/// Build a success outcome.
#[must_use]
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Build a failure outcome.
#[must_use]
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` iff the outcome is `Ok`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` iff the outcome is `Err`.
    #[must_use]
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Returns `true` iff the outcome is `Ok` and the value satisfies the
    /// predicate. The predicate is never invoked on an `Err`.
    #[must_use]
    pub fn is_ok_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Outcome::Ok(value) => predicate(value),
            Outcome::Err(_) => false,
        }
    }

    /// Returns `true` iff the outcome is `Err` and the error satisfies the
    /// predicate. The predicate is never invoked on an `Ok`.
    #[must_use]
    pub fn is_err_and(self, predicate: impl FnOnce(E) -> bool) -> bool {
        match self {
            Outcome::Ok(_) => false,
            Outcome::Err(error) => predicate(error),
        }
    }

    /// Borrow the contained value.
    ///
    /// Callers are expected to have branched on [`is_ok`](Self::is_ok)
    /// before reaching for this accessor.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is an `Err`.
    #[must_use]
    #[track_caller]
    pub fn ok_value(&self) -> &T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => panic!("called `ok_value()` on an `Err` value"),
        }
    }

    /// Borrow the contained error.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is an `Ok`.
    #[must_use]
    #[track_caller]
    pub fn err_value(&self) -> &E {
        match self {
            Outcome::Ok(_) => panic!("called `err_value()` on an `Ok` value"),
            Outcome::Err(error) => error,
        }
    }

    /// Convert from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E: fmt::Debug> Outcome<T, E> {
    /// Extract the contained value.
    ///
    /// This is a deliberate escape hatch for call sites where a failure is
    /// truly impossible; prefer branching on the variant or
    /// [`match_outcome`] everywhere else.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is an `Err`, with the contained error as part
    /// of the panic message.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => {
                panic!("called `unwrap()` on an `Err` value: {error:?}")
            }
        }
    }

    /// Extract the contained value, panicking with the given context message
    /// on failure.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is an `Err`, with a message of the form
    /// `{message}: {error}`.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => panic!("{message}: {error:?}"),
        }
    }
}

impl<T: fmt::Debug, E> Outcome<T, E> {
    /// Extract the contained error.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is an `Ok`, with the contained value as part of
    /// the panic message.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Outcome::Ok(value) => {
                panic!("called `unwrap_err()` on an `Ok` value: {value:?}")
            }
            Outcome::Err(error) => error,
        }
    }

    /// Extract the contained error, panicking with the given context message
    /// on success.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is an `Ok`, with a message of the form
    /// `{message}: {value}`.
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Outcome::Ok(value) => panic!("{message}: {value:?}"),
            Outcome::Err(error) => error,
        }
    }
}
