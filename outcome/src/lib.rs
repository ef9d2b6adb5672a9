// outcome - outcome
// Module: Outcome Combinators
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Outcome combinator library
//!
//! This library provides a small value type, [`Outcome`], for "this operation
//! produced a value or an error", plus combinators to build and consume it
//! without panics on the normal control-flow path.
//!
//! # Building outcomes
//!
//! - [`ok`] / [`err`] build the success and failure states.
//! - [`capture`] runs a computation and turns a panic into a [`Fault`]
//!   (`std` only).
//!
//! # Consuming outcomes
//!
//! [`matching`] accepts an [`Outcome`], a `Result`, or a [`Computation`] and
//! returns a [`Handler`] with three operations:
//!
//! - [`Handler::when`]: explicit error case, optional ok case
//! - [`Handler::unwrap`]: the value, or a `Failed to unwrap: ...` panic
//! - [`Handler::when_ok`]: follow-up computation on success, short-circuit on
//!   failure
//!
//! # Usage
//!
//! ```
//! use outcome::{err, matching, ok, Cases, Computation, Fault, Outcome};
//!
//! fn is_odd(n: u32) -> Outcome<u32, &'static str> {
//!     if n % 2 == 0 {
//!         return err("number is even");
//!     }
//!     ok(n)
//! }
//!
//! let value = matching(is_odd(3)).when(Cases::on_error(|_| 0));
//! assert_eq!(value, 3);
//!
//! let next = matching(is_odd(5)).when_ok(|| "odd");
//! assert_eq!(next, ok("odd"));
//!
//! let caught = matching(Computation(|| -> u32 { panic!("hello, I panic but it is ok") }))
//!     .when(Cases::on_error(|fault: Fault| fault.to_string()).on_ok(|v: u32| v.to_string()));
//! assert_eq!(caught, "hello, I panic but it is ok");
//! ```
//!
//! # Features
//!
//! - `std` (default): [`capture`], [`Fault`] and [`Computation`]
//! - `log`: diagnostics through the `log` crate when a computation panics and
//!   before `unwrap` panics

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![deny(clippy::nursery)]
#![allow(clippy::cargo)]
#![warn(clippy::pedantic)]
#![warn(clippy::missing_panics_doc)]
#![deny(missing_docs)]
#![allow(clippy::negative_feature_names)]
#![allow(clippy::module_name_repetitions)]

/// Panic capture (requires `std`)
#[cfg(feature = "std")]
pub mod fault;
/// Handler and case table
pub mod handler;
/// The outcome value type
pub mod outcome;

pub mod helpers;
pub mod prelude;

#[cfg(feature = "std")]
pub use fault::{capture, Fault};
#[cfg(feature = "std")]
pub use handler::Computation;
pub use handler::{Cases, Handler, Matchable, OkCase, Passthrough};
pub use helpers::*;
pub use outcome::{Absent, Outcome};
