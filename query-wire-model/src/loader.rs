/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Loader for JSON model documents.
//!
//! The input format is the declarative `shapes`/`operations` document
//! produced by an external model build:
//!
//! ```json
//! {
//!     "shapes": {
//!         "OutputShape": {
//!             "type": "structure",
//!             "members": {
//!                 "Str": {"shape": "StringType"},
//!                 "Num": {"shape": "IntegerType", "locationName": "FooNum"}
//!             }
//!         },
//!         "StringType": {"type": "string"}
//!     },
//!     "operations": {
//!         "OperationName": {
//!             "output": {"shape": "OutputShape", "resultWrapper": "OperationNameResult"},
//!             "errors": [{"shape": "ExceptionShape"}]
//!         }
//!     }
//! }
//! ```
//!
//! Loading validates what decoding depends on (every shape kind is known,
//! every list has its element member) and nothing more; dangling shape
//! references surface at resolve time.

use crate::model::ShapeModel;
use crate::operation::{OperationSpec, OutputSpec};
use crate::shape::{MemberRef, Shape, ShapeKind, StructureShape, StructureShapeBuilder};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// A loaded model document: the shape arena plus per-operation bindings.
#[derive(Debug, Clone, Default)]
pub struct LoadedModel {
    shapes: ShapeModel,
    operations: HashMap<String, OperationSpec>,
}

impl LoadedModel {
    /// The shape arena.
    pub fn shapes(&self) -> &ShapeModel {
        &self.shapes
    }

    /// Looks up an operation binding by name.
    pub fn operation(&self, name: &str) -> Option<&OperationSpec> {
        self.operations.get(name)
    }
}

/// Loads a model from a JSON document.
pub fn from_json_str(document: &str) -> Result<LoadedModel, ModelError> {
    let raw: RawModel = serde_json::from_str(document)?;
    convert(raw)
}

/// Loads a model from JSON bytes.
pub fn from_json_slice(document: &[u8]) -> Result<LoadedModel, ModelError> {
    let raw: RawModel = serde_json::from_slice(document)?;
    convert(raw)
}

/// Failure to load a model document.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ModelError {
    /// The document is not well-formed JSON of the expected layout.
    #[error("failed to parse model document")]
    Parse(#[from] serde_json::Error),
    /// A shape declares a type outside the closed kind set.
    #[error("shape `{shape}` has unsupported type `{kind}`")]
    UnsupportedType {
        /// The offending shape name.
        shape: String,
        /// The unrecognized type string.
        kind: String,
    },
    /// A list shape is missing its element member.
    #[error("list shape `{shape}` is missing its member")]
    ListMissingMember {
        /// The offending shape name.
        shape: String,
    },
}

fn convert(raw: RawModel) -> Result<LoadedModel, ModelError> {
    let mut builder = ShapeModel::builder();
    for (name, shape) in raw.shapes {
        builder = builder.shape(convert_shape(name, shape)?);
    }
    let operations = raw
        .operations
        .into_iter()
        .map(|(name, op)| {
            let spec = convert_operation(&name, op);
            (name, spec)
        })
        .collect();
    Ok(LoadedModel {
        shapes: builder.build(),
        operations,
    })
}

fn convert_shape(name: String, raw: RawShape) -> Result<Shape, ModelError> {
    let kind = match raw.kind.as_str() {
        "structure" => {
            // A structure with no members mapping is treated as empty.
            let mut structure: StructureShapeBuilder = StructureShape::builder();
            for (member_name, member) in raw.members {
                structure = match member.location_name {
                    Some(wire_name) => {
                        structure.member_at(member_name, member.shape, wire_name)
                    }
                    None => structure.member(member_name, member.shape),
                };
            }
            if raw.exception {
                structure = structure.exception();
            }
            ShapeKind::Structure(structure.build())
        }
        "list" => {
            let member = raw
                .member
                .ok_or_else(|| ModelError::ListMissingMember {
                    shape: name.clone(),
                })?;
            let mut member_ref = MemberRef::new(member.shape);
            if let Some(wire_name) = member.location_name {
                member_ref = member_ref.location_name(wire_name);
            }
            return Ok(Shape::list(name, member_ref));
        }
        "string" => ShapeKind::String,
        "character" => ShapeKind::Character,
        "integer" => ShapeKind::Integer,
        "long" => ShapeKind::Long,
        "float" => ShapeKind::Float,
        "double" => ShapeKind::Double,
        "boolean" => ShapeKind::Boolean,
        "timestamp" => ShapeKind::Timestamp,
        other => {
            return Err(ModelError::UnsupportedType {
                shape: name,
                kind: other.to_string(),
            })
        }
    };
    Ok(Shape::new(name, kind))
}

fn convert_operation(name: &str, raw: RawOperation) -> OperationSpec {
    let mut builder = OperationSpec::builder(name);
    if let Some(output) = raw.output {
        let mut spec = OutputSpec::new(output.shape);
        if let Some(wrapper) = output.result_wrapper {
            spec = spec.result_wrapper(wrapper);
        }
        builder = builder.output(spec);
    }
    for error in raw.errors {
        builder = builder.error(error.shape);
    }
    builder.build()
}

/// Deserializes a JSON object into a sequence of pairs, preserving document
/// order. `HashMap` would shuffle structure members.
fn ordered_entries<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct EntriesVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a JSON object")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::new();
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}

#[derive(Debug, Deserialize)]
struct RawModel {
    #[serde(default)]
    shapes: HashMap<String, RawShape>,
    #[serde(default)]
    operations: HashMap<String, RawOperation>,
}

#[derive(Debug, Deserialize)]
struct RawShape {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, deserialize_with = "ordered_entries")]
    members: Vec<(String, RawMember)>,
    #[serde(default)]
    member: Option<RawMember>,
    #[serde(default)]
    exception: bool,
}

#[derive(Debug, Deserialize)]
struct RawMember {
    shape: String,
    #[serde(rename = "locationName")]
    location_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawOperation {
    #[serde(default)]
    output: Option<RawOperationOutput>,
    #[serde(default)]
    errors: Vec<RawErrorRef>,
}

#[derive(Debug, Deserialize)]
struct RawOperationOutput {
    shape: String,
    #[serde(rename = "resultWrapper")]
    result_wrapper: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawErrorRef {
    shape: String,
}
