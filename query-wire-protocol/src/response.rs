/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::decode::error::DecodeError;
use crate::decode::{decode_response, Decoded};
use bytes::Bytes;
use http::Response;
use query_wire_model::{OperationSpec, ShapeModel};

/// `ParseQueryResponse` is the seam between the transport and the decode
/// engine: anything that can turn a fully loaded HTTP response into a typed
/// outcome.
///
/// Parsing is pure and synchronous, which keeps transport code free to load
/// the body however it likes and makes implementations trivial to test.
pub trait ParseQueryResponse {
    /// The parse outcome. For the query protocol this is
    /// `Result<Decoded, DecodeError>`.
    type Output;

    /// Parses a response whose body has been fully read into memory.
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

/// An operation bound to a shape model, ready to parse responses.
///
/// Holds only shared references: the model is read-only after construction,
/// so one model can back any number of concurrently parsing operations.
/// Response headers are passed through untouched — the query protocol carries
/// its type information entirely in the body.
#[derive(Debug, Clone, Copy)]
pub struct Operation<'a> {
    model: &'a ShapeModel,
    spec: &'a OperationSpec,
}

impl<'a> Operation<'a> {
    /// Binds an operation spec to a shape model.
    pub fn new(model: &'a ShapeModel, spec: &'a OperationSpec) -> Self {
        Operation { model, spec }
    }
}

impl ParseQueryResponse for Operation<'_> {
    type Output = Result<Decoded, DecodeError>;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output {
        decode_response(
            self.model,
            self.spec,
            response.status().as_u16(),
            response.body(),
        )
    }
}
