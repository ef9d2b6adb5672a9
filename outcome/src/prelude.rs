// outcome - outcome
// Module: Outcome Prelude
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for outcome
//!
//! `use outcome::prelude::*;` brings the constructors, the `matching` entry
//! point and every type they return into scope, for both std and `no_std`
//! builds.

#[cfg(feature = "std")]
pub use crate::{capture, Computation, Fault};
pub use crate::{
    err,
    matching,
    ok,
    Absent,
    Cases,
    Handler,
    Matchable,
    OkCase,
    Outcome,
    Passthrough,
};
