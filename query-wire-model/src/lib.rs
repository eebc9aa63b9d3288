/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Declarative shape model for the query-wire marshaling engine.
//!
//! A [`ShapeModel`] is an arena of named [`Shape`]s. Shapes reference each
//! other by name rather than by ownership, so a structure can reference itself
//! transitively without any cyclic-ownership problems. The model is built once
//! (either through the builders here or via [`loader`]) and is read-only from
//! then on; decoding never mutates it, so a model behind an `Arc` can serve
//! any number of concurrent decode calls.

pub mod loader;
mod model;
mod operation;
mod shape;

pub use crate::model::{ShapeModel, ShapeModelBuilder, UnknownShapeError};
pub use crate::operation::{OperationSpec, OperationSpecBuilder, OutputSpec};
pub use crate::shape::{ListShape, MemberRef, Shape, ShapeKind, StructureShape, StructureShapeBuilder};
