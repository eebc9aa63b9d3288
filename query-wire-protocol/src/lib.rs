/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Schema-driven response decoding for the query protocol family.
//!
//! Given an immutable [`ShapeModel`](query_wire_model::ShapeModel) and a
//! single response payload, the engine strips the protocol's envelope
//! (`"<Operation>Response"` / `"<Operation>Result"` on success, `"Error"` on
//! failure), resolves each member through the model, and coerces raw JSON
//! scalars into the semantic types their shapes declare.
//!
//! Decoding is a pure, synchronous transformation: it performs no I/O, holds
//! no mutable shared state, and is safe to invoke concurrently against the
//! same model. A decode call either completes or fails synchronously; nothing
//! here is retryable.

pub mod decode;
pub mod serialize;

mod response;

pub use crate::decode::dispatch::ServiceError;
pub use crate::decode::error::DecodeError;
pub use crate::decode::{decode_response, Decoded};
pub use crate::response::{Operation, ParseQueryResponse};
