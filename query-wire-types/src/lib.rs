/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shared types for the query-wire marshaling engine.
//!
//! This crate holds the type vocabulary that the shape model and the decode
//! engine agree on: [`Instant`] for protocol timestamps and [`Value`]/[`Fields`]
//! for typed decode output. It contains no protocol logic.

pub mod instant;
mod value;

pub use crate::instant::Instant;
pub use crate::value::{Fields, Value};
