// outcome - outcome
// Module: Fault Capture
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Panic-to-outcome bridge.
//!
//! [`capture`] runs a computation and turns a panic into an
//! `Outcome::Err(Fault)`. Panics are the only faults Rust raises without a
//! return value, so this is where "raised fault" becomes "modeled failure".

use std::{
    any::Any,
    fmt,
    panic::{self, AssertUnwindSafe},
};

use crate::Outcome;

/// A panic caught by [`capture`].
///
/// Holds the panic's message when the payload was a string (the case for
/// `panic!` with a message), otherwise the payload itself.
pub enum Fault {
    /// Human-readable message extracted from the panic
    Message(String),
    /// Payload that carried no message
    Opaque(Box<dyn Any + Send + 'static>),
}

impl Fault {
    /// Builds a fault from a raw panic payload.
    #[must_use]
    pub fn from_payload(payload: Box<dyn Any + Send + 'static>) -> Self {
        match payload.downcast::<&'static str>() {
            Ok(message) => Self::Message(String::from(*message)),
            Err(payload) => match payload.downcast::<String>() {
                Ok(message) => Self::Message(*message),
                Err(payload) => Self::Opaque(payload),
            },
        }
    }

    /// The panic message, if the payload had one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            Self::Opaque(_) => None,
        }
    }

    /// Returns `true` when the payload carried no message.
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }

    /// Downcasts an opaque payload to `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Message(_) => None,
            Self::Opaque(payload) => payload.downcast_ref::<T>(),
        }
    }

    /// Converts back into a panic payload, e.g. for `panic::resume_unwind`.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        match self {
            Self::Message(message) => Box::new(message),
            Self::Opaque(payload) => payload,
        }
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Self::Opaque(_) => f.debug_tuple("Opaque").finish_non_exhaustive(),
        }
    }
}

// Same marker std prints for non-string panic payloads.
impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.write_str(message),
            Self::Opaque(_) => f.write_str("Box<dyn Any>"),
        }
    }
}

impl std::error::Error for Fault {}

impl PartialEq<str> for Fault {
    fn eq(&self, other: &str) -> bool {
        self.message() == Some(other)
    }
}

impl PartialEq<&str> for Fault {
    fn eq(&self, other: &&str) -> bool {
        self.message() == Some(*other)
    }
}

/// Runs `f` and converts its return value or its panic into an [`Outcome`].
///
/// Only a panic raised directly by `f` (or anything it calls) is caught.
///
/// The global panic hook is left alone and still runs before the panic is
/// caught. With the default hook every captured panic therefore writes a
/// `thread '...' panicked at ...` line to stderr; install a quiet hook with
/// `std::panic::set_hook` if that output is unwanted.
pub fn capture<V, F>(f: F) -> Outcome<V, Fault>
where
    F: FnOnce() -> V,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => {
            let fault = Fault::from_payload(payload);
            #[cfg(feature = "log")]
            log::debug!("computation panicked: {fault}");
            Outcome::Err(fault)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_returns_value() {
        let outcome = capture(|| 9);
        assert!(matches!(outcome, Outcome::Ok(9)));
    }

    #[test]
    fn test_capture_static_str_panic() {
        let outcome = capture(|| -> u8 { panic!("boom") });
        let Outcome::Err(fault) = outcome else {
            panic!("expected a fault");
        };
        assert_eq!(fault.message(), Some("boom"));
        assert!(!fault.is_opaque());
        assert_eq!(fault.to_string(), "boom");
    }

    #[test]
    fn test_capture_formatted_panic() {
        let code = 42;
        let outcome = capture(|| -> u8 { panic!("code {code}") });
        let Outcome::Err(fault) = outcome else {
            panic!("expected a fault");
        };
        assert_eq!(fault, "code 42");
    }

    #[test]
    fn test_capture_opaque_payload() {
        let outcome = capture(|| -> u8 { panic::panic_any(17_u32) });
        let Outcome::Err(fault) = outcome else {
            panic!("expected a fault");
        };
        assert!(fault.is_opaque());
        assert_eq!(fault.message(), None);
        assert_eq!(fault.downcast_ref::<u32>(), Some(&17));
        assert_eq!(fault.to_string(), "Box<dyn Any>");
    }

    #[test]
    fn test_payload_round_trip_keeps_message() {
        let fault = Fault::from_payload(Box::new("lost"));
        let again = Fault::from_payload(fault.into_payload());
        assert_eq!(again.message(), Some("lost"));
    }
}
