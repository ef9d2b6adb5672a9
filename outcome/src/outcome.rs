// outcome - outcome
// Module: Outcome Type
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The `Outcome` value type.
//!
//! An [`Outcome`] is either a success carrying a value or a failure carrying
//! an error. It is immutable once built and holds no resources, so it can be
//! moved, cloned and dropped freely.

use core::fmt;

/// Error detail for failures that carry nothing but the failure flag.
///
/// Renders as `undefined`, which is what `Handler::unwrap` prints for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Absent;

impl fmt::Display for Absent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("undefined")
    }
}

/// Success-with-value or failure-with-error.
///
/// The error type defaults to [`Absent`] so that `Outcome<V>` reads as "a `V`
/// or a bare failure".
#[must_use = "an `Outcome` may be a failure, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<V, E = Absent> {
    /// Success state
    Ok(V),
    /// Failure state
    Err(E),
}

impl<V, E> Outcome<V, E> {
    /// Returns `true` for the success state.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` for the failure state.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The success value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// The failure detail, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Borrows the contents as `Outcome<&V, &E>`.
    pub const fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the success value, leaving a failure untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the failure detail, leaving a success untouched.
    pub fn map_err<G, F>(self, f: F) -> Outcome<V, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Converts into a `core::result::Result`.
    ///
    /// # Errors
    ///
    /// Returns the stored error for the failure state.
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}
