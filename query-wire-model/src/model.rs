/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::shape::{MemberRef, Shape};
use std::collections::HashMap;

/// An arena of shapes indexed by name.
///
/// Cross-references between shapes are resolved by name lookup at decode time
/// rather than embedded ownership, which makes recursive shape graphs (a
/// structure referencing itself transitively) representable without cycles.
///
/// A model is constructed once and then frozen; every accessor takes `&self`
/// and decoding never mutates it.
#[derive(Debug, Clone, Default)]
pub struct ShapeModel {
    shapes: HashMap<String, Shape>,
}

impl ShapeModel {
    /// Creates a `ShapeModel` builder.
    pub fn builder() -> ShapeModelBuilder {
        ShapeModelBuilder::default()
    }

    /// Looks up a shape by name.
    pub fn get(&self, name: &str) -> Option<&Shape> {
        self.shapes.get(name)
    }

    /// Resolves a member reference to its target shape and wire key.
    ///
    /// The wire key is the member's `locationName` when present, otherwise the
    /// member name itself. A reference to a shape that is not in the model is
    /// a configuration error and is reported as [`UnknownShapeError`] rather
    /// than silently ignored.
    pub fn resolve<'a>(
        &'a self,
        member_name: &'a str,
        member: &'a MemberRef,
    ) -> Result<(&'a Shape, &'a str), UnknownShapeError> {
        let shape = self
            .get(member.shape())
            .ok_or_else(|| UnknownShapeError::new(member.shape(), member_name))?;
        let wire_key = member.location_name_override().unwrap_or(member_name);
        Ok((shape, wire_key))
    }
}

/// Builder for [`ShapeModel`].
#[derive(Debug, Default)]
pub struct ShapeModelBuilder {
    shapes: HashMap<String, Shape>,
}

impl ShapeModelBuilder {
    /// Adds a shape to the model, replacing any previous shape with the same
    /// name.
    pub fn shape(mut self, shape: Shape) -> Self {
        self.shapes.insert(shape.name().to_string(), shape);
        self
    }

    /// Creates the model.
    pub fn build(self) -> ShapeModel {
        ShapeModel {
            shapes: self.shapes,
        }
    }
}

/// A reference to a shape name that is not present in the model.
///
/// This is a configuration-time error: it is never expected at decode time
/// against a validated model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("shape `{shape}` referenced by `{referenced_by}` is not in the model")]
pub struct UnknownShapeError {
    shape: String,
    referenced_by: String,
}

impl UnknownShapeError {
    /// Creates an error for a dangling reference to `shape` from
    /// `referenced_by` (a member name or an operation binding).
    pub fn new(shape: impl Into<String>, referenced_by: impl Into<String>) -> Self {
        UnknownShapeError {
            shape: shape.into(),
            referenced_by: referenced_by.into(),
        }
    }

    /// The missing shape's name.
    pub fn shape(&self) -> &str {
        &self.shape
    }
}
