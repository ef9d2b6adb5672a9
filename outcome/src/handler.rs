// outcome - outcome
// Module: Outcome Handler
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The `Handler` returned by [`matching`](crate::matching) and the case table
//! consumed by [`Handler::when`].
//!
//! A handler owns one normalized [`Outcome`] and offers three ways to consume
//! it:
//!
//! - [`Handler::when`] dispatches to an error case and an optional ok case.
//! - [`Handler::unwrap`] returns the value or panics.
//! - [`Handler::when_ok`] runs a follow-up computation on success and passes
//!   a failure through untouched.
//!
//! ```
//! use outcome::{err, matching, ok, Cases, Outcome};
//!
//! fn is_odd(n: u32) -> Outcome<u32, &'static str> {
//!     if n % 2 == 0 {
//!         return err("number is even");
//!     }
//!     ok(n)
//! }
//!
//! let message = matching(is_odd(2)).when(
//!     Cases::on_error(|e: &str| format!("Error: {e}")).on_ok(|v: u32| v.to_string()),
//! );
//! assert_eq!(message, "Error: number is even");
//!
//! // The ok case is optional; the value is returned as-is.
//! let value = matching(is_odd(3)).when(Cases::on_error(|_| 0));
//! assert_eq!(value, 3);
//! ```

use core::fmt;

#[cfg(feature = "std")]
use crate::fault::{capture, Fault};
use crate::Outcome;

/// Ok case used when [`Cases::on_ok`] was never called: returns the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

/// Something that can handle the success value inside [`Handler::when`].
///
/// Implemented by [`Passthrough`] and by every `FnOnce(V) -> T`.
pub trait OkCase<V> {
    /// What the case produces
    type Output;

    /// Handles the success value.
    fn call(self, value: V) -> Self::Output;
}

impl<V> OkCase<V> for Passthrough {
    type Output = V;

    fn call(self, value: V) -> V {
        value
    }
}

impl<V, T, F> OkCase<V> for F
where
    F: FnOnce(V) -> T,
{
    type Output = T;

    fn call(self, value: V) -> T {
        self(value)
    }
}

/// Case table for [`Handler::when`].
///
/// The error case is mandatory and is given first; the ok case is optional.
pub struct Cases<O, F> {
    ok:    O,
    error: F,
}

impl<F> Cases<Passthrough, F> {
    /// Starts a case table with its error case.
    pub const fn on_error(error: F) -> Self {
        Self {
            ok: Passthrough,
            error,
        }
    }
}

impl<O, F> Cases<O, F> {
    /// Adds (or replaces) the ok case.
    #[must_use]
    pub fn on_ok<P>(self, ok: P) -> Cases<P, F> {
        Cases {
            ok,
            error: self.error,
        }
    }
}

impl<O, F> fmt::Debug for Cases<O, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cases").finish_non_exhaustive()
    }
}

/// Dispatch table over one [`Outcome`].
#[must_use = "a `Handler` does nothing until one of its operations is called"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handler<V, E> {
    outcome: Outcome<V, E>,
}

impl<V, E> Handler<V, E> {
    /// Wraps an already built outcome.
    pub const fn new(outcome: Outcome<V, E>) -> Self {
        Self { outcome }
    }

    /// Borrowing view; the returned handler is `Copy`, so every operation
    /// can be called on it any number of times.
    pub const fn as_ref(&self) -> Handler<&V, &E> {
        Handler {
            outcome: self.outcome.as_ref(),
        }
    }

    /// Gives the underlying outcome back.
    pub fn into_outcome(self) -> Outcome<V, E> {
        self.outcome
    }

    /// Runs the case matching the outcome's state and returns its result.
    ///
    /// Without an ok case the success value is returned unchanged. Panics in
    /// either case are not caught.
    pub fn when<O, F>(self, cases: Cases<O, F>) -> O::Output
    where
        O: OkCase<V>,
        F: FnOnce(E) -> O::Output,
    {
        match self.outcome {
            Outcome::Ok(value) => cases.ok.call(value),
            Outcome::Err(error) => (cases.error)(error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `Failed to unwrap: <error>` in the failure state.
    #[allow(clippy::panic)]
    pub fn unwrap(self) -> V
    where
        E: fmt::Display,
    {
        match self.outcome {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => {
                #[cfg(feature = "log")]
                log::error!("unwrap called on a failed outcome: {error}");
                panic!("Failed to unwrap: {error}")
            }
        }
    }

    /// Runs `f` on success and wraps its result; a failure short-circuits
    /// and `f` is never called.
    ///
    /// `f` takes no argument: the previous value is dropped.
    pub fn when_ok<V2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce() -> V2,
    {
        match self.outcome {
            Outcome::Ok(_) => Outcome::Ok(f()),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }
}

#[cfg(feature = "std")]
impl<V> Handler<V, Fault> {
    /// Runs `f` through [`capture`] and wraps the result.
    pub fn from_computation<F>(f: F) -> Self
    where
        F: FnOnce() -> V,
    {
        Self::new(capture(f))
    }
}

impl<V, E> From<Outcome<V, E>> for Handler<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        Self::new(outcome)
    }
}

/// Tags a zero-argument computation for [`matching`](crate::matching).
///
/// The computation runs once, when the handler is built, and a panic inside
/// it becomes `Outcome::Err(Fault)`.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct Computation<F>(pub F);

/// Inputs accepted by [`matching`](crate::matching).
pub trait Matchable {
    /// Success value type
    type Value;
    /// Failure detail type
    type Error;

    /// Normalizes the input into an outcome.
    fn into_outcome(self) -> Outcome<Self::Value, Self::Error>;
}

impl<V, E> Matchable for Outcome<V, E> {
    type Error = E;
    type Value = V;

    fn into_outcome(self) -> Self {
        self
    }
}

impl<V, E> Matchable for Result<V, E> {
    type Error = E;
    type Value = V;

    fn into_outcome(self) -> Outcome<V, E> {
        Outcome::from(self)
    }
}

#[cfg(feature = "std")]
impl<V, F> Matchable for Computation<F>
where
    F: FnOnce() -> V,
{
    type Error = Fault;
    type Value = V;

    fn into_outcome(self) -> Outcome<V, Fault> {
        capture(self.0)
    }
}

#[cfg(all(test, feature = "std"))]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::Absent;

    #[test]
    fn test_when_dispatches_on_state() {
        let on_ok = Handler::new(Outcome::<i32, &str>::Ok(2))
            .when(Cases::on_error(|e: &str| format!("err {e}")).on_ok(|v: i32| format!("ok {v}")));
        assert_eq!(on_ok, "ok 2");

        let on_err = Handler::new(Outcome::<i32, &str>::Err("four"))
            .when(Cases::on_error(|e: &str| format!("err {e}")).on_ok(|v: i32| format!("ok {v}")));
        assert_eq!(on_err, "err four");
    }

    #[test]
    fn test_when_without_ok_case_returns_value() {
        let value = Handler::new(Outcome::<i32, &str>::Ok(5)).when(Cases::on_error(|_| -1));
        assert_eq!(value, 5);
    }

    #[test]
    fn test_on_ok_replaces_previous_case() {
        let cases = Cases::on_error(|_: Absent| 0).on_ok(|v: i32| v + 1).on_ok(|v: i32| v + 2);
        assert_eq!(Handler::new(Outcome::Ok(1)).when(cases), 3);
    }

    #[test]
    fn test_when_ok_discards_previous_value() {
        let chained = Handler::new(Outcome::<i32, Absent>::Ok(1)).when_ok(|| "next");
        assert_eq!(chained, Outcome::Ok("next"));
    }

    #[test]
    fn test_as_ref_allows_repeated_operations() {
        let handler = Handler::new(Outcome::<String, Absent>::Ok(String::from("kept")));
        let view = handler.as_ref();

        assert_eq!(view.unwrap(), "kept");
        assert_eq!(view.unwrap(), "kept");
        assert_eq!(view.when(Cases::on_error(|_| panic!("no error expected"))), "kept");
        assert!(view.when_ok(|| ()).is_ok());
        assert_eq!(handler.into_outcome(), Outcome::Ok(String::from("kept")));
    }

    #[test]
    fn test_result_is_matchable() {
        let outcome = Err::<u8, &str>("io").into_outcome();
        assert_eq!(outcome, Outcome::Err("io"));
    }

    #[test]
    #[should_panic(expected = "Failed to unwrap: undefined")]
    fn test_unwrap_absent_error() {
        let _ = Handler::new(Outcome::<u8, Absent>::Err(Absent)).unwrap();
    }

    #[test]
    fn test_computation_matchable_catches_panic() {
        let outcome = Computation(|| -> u8 { panic!("inner") }).into_outcome();
        assert!(outcome.is_err());
        assert_eq!(outcome.error().and_then(Fault::message), Some("inner"));
    }
}
