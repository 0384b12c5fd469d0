//! Transformation combinators over outcomes
//!
//! Every operation here is pure and non-panicking: a combinator either
//! produces a fresh [`Outcome`] or evaluates to a plain value. A callback
//! that itself panics propagates unmodified.

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Map the success value, leaving a failure untouched.
    ///
    /// The mapper is never invoked on an `Err`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Map the error value, leaving a success untouched.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Map the success value, or fall back to `default` on failure.
    #[must_use]
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(_) => default,
        }
    }

    /// Map the success value, or compute the fallback from the error.
    #[must_use]
    pub fn map_or_else<U>(self, fallback: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error) => fallback(error),
        }
    }

    /// Run a side effect against the value of an `Ok`, passing the outcome
    /// through unchanged.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Outcome::Ok(ref value) = self {
            f(value);
        }
        self
    }

    /// Run a side effect against the error of an `Err`, passing the outcome
    /// through unchanged.
    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Outcome::Err(ref error) = self {
            f(error);
        }
        self
    }
}
