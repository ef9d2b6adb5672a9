// outcome - outcome
// Module: Outcome Helpers
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Free-function constructors and the `matching` entry point.

use crate::{
    handler::{Handler, Matchable},
    Outcome,
};

/// Create a success outcome
pub const fn ok<V, E>(value: V) -> Outcome<V, E> {
    Outcome::Ok(value)
}

/// Create a failure outcome
///
/// This only records that the modeled operation failed; building it never
/// fails.
pub const fn err<V, E>(error: E) -> Outcome<V, E> {
    Outcome::Err(error)
}

/// Build a [`Handler`] from an outcome, a `Result`, or a tagged
/// [`Computation`](crate::Computation).
///
/// A computation is run immediately through [`capture`](crate::capture).
///
/// ```
/// use outcome::{matching, Cases, Computation, Fault};
///
/// let nine = matching(Computation(|| 9)).when(Cases::on_error(|_| 0));
/// assert_eq!(nine, 9);
///
/// let message = matching(Computation(|| -> i32 { panic!("boom") }))
///     .when(Cases::on_error(|fault: Fault| fault.to_string()).on_ok(|v: i32| v.to_string()));
/// assert_eq!(message, "boom");
/// ```
pub fn matching<M>(input: M) -> Handler<M::Value, M::Error>
where
    M: Matchable,
{
    Handler::new(input.into_outcome())
}
