/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Envelope unwrapping and recursive structure/list decoding.

mod coerce;
pub(crate) mod dispatch;
pub(crate) mod error;

use crate::decode::dispatch::ServiceError;
use crate::decode::error::DecodeError;
use query_wire_model::{OperationSpec, Shape, ShapeKind, ShapeModel, StructureShape};
use query_wire_types::{Fields, Value};
use serde_json::Map;

/// The outcome of decoding a response payload.
///
/// Both variants are successful decodes: a non-2xx response decodes to
/// [`Decoded::Error`], typed or generic, rather than failing the decode.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// A 2xx response's typed output fields, keyed by member name.
    Output(Fields),
    /// A non-2xx response's error object.
    Error(ServiceError),
}

impl Decoded {
    /// Converts into a `Result`, for callers that propagate service errors
    /// with `?`.
    pub fn into_result(self) -> Result<Fields, ServiceError> {
        match self {
            Decoded::Output(fields) => Ok(fields),
            Decoded::Error(err) => Err(err),
        }
    }
}

/// Decodes a response payload against an operation's bindings.
///
/// A 2xx status decodes the success envelope
/// (`body["<operation>Response"]["<wrapper>"]`) against the operation's
/// output shape; any other status dispatches the `Error` envelope to the
/// operation's declared exception shapes. Headers are not consumed by this
/// protocol — the type information lives entirely in the body.
pub fn decode_response(
    model: &ShapeModel,
    operation: &OperationSpec,
    status: u16,
    body: &[u8],
) -> Result<Decoded, DecodeError> {
    let success = (200..300).contains(&status);
    if success && body.iter().all(u8::is_ascii_whitespace) {
        // Operations without output legitimately return no body at all.
        return Ok(Decoded::Output(Fields::new()));
    }
    let root: serde_json::Value =
        serde_json::from_slice(body).map_err(DecodeError::malformed_body)?;
    if success {
        decode_output(model, operation, &root).map(Decoded::Output)
    } else {
        dispatch::decode_error(model, operation, &root).map(Decoded::Error)
    }
}

fn decode_output(
    model: &ShapeModel,
    operation: &OperationSpec,
    root: &serde_json::Value,
) -> Result<Fields, DecodeError> {
    let Some(output) = operation.output() else {
        return Ok(Fields::new());
    };
    let shape = model.get(output.shape()).ok_or_else(|| {
        query_wire_model::UnknownShapeError::new(
            output.shape(),
            format!("{} output", operation.name()),
        )
    })?;
    let ShapeKind::Structure(structure) = shape.kind() else {
        return Err(DecodeError::custom(format!(
            "output shape `{}` is not a structure",
            output.shape()
        )));
    };

    let envelope_key = format!("{}Response", operation.name());
    tracing::trace!(
        operation = operation.name(),
        envelope = %envelope_key,
        wrapper = output.wrapper_key(),
        "unwrapping response envelope"
    );
    // `ResponseMetadata` and any other siblings at the envelope level are
    // ignored. An absent envelope or wrapper key is an empty, all-optional
    // result, not an error.
    match root.get(&envelope_key).and_then(|v| v.get(output.wrapper_key())) {
        Some(serde_json::Value::Object(map)) => decode_structure(model, structure, map),
        Some(other) => Err(DecodeError::coercion("structure", other)),
        None => Ok(Fields::new()),
    }
}

/// Decodes a wire map against a structure shape.
///
/// Members absent from the wire map (or carried as JSON `null`) are omitted
/// from the result — no default substitution, no error. Wire keys the shape
/// does not declare are ignored.
pub(crate) fn decode_structure(
    model: &ShapeModel,
    structure: &StructureShape,
    wire_map: &Map<String, serde_json::Value>,
) -> Result<Fields, DecodeError> {
    let mut fields = Fields::new();
    for (member_name, member_ref) in structure.members() {
        let (target, wire_key) = model.resolve(member_name, member_ref)?;
        match wire_map.get(wire_key) {
            None | Some(serde_json::Value::Null) => continue,
            Some(raw) => fields.insert(member_name, decode_value(model, target, raw)?),
        }
    }
    Ok(fields)
}

fn decode_value(
    model: &ShapeModel,
    shape: &Shape,
    raw: &serde_json::Value,
) -> Result<Value, DecodeError> {
    match shape.kind() {
        ShapeKind::Structure(structure) => match raw {
            serde_json::Value::Object(map) => {
                Ok(Value::Structure(decode_structure(model, structure, map)?))
            }
            _ => Err(DecodeError::coercion("structure", raw)),
        },
        ShapeKind::List(list) => match raw {
            serde_json::Value::Array(items) => {
                let (element, _) = model.resolve("member", list.member())?;
                let values = items
                    .iter()
                    .map(|item| decode_value(model, element, item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::List(values))
            }
            _ => Err(DecodeError::coercion("list", raw)),
        },
        kind => coerce::coerce(kind, raw),
    }
}

#[cfg(test)]
mod test {
    use super::{decode_response, Decoded};
    use query_wire_model::{
        MemberRef, OperationSpec, OutputSpec, Shape, ShapeKind, ShapeModel, StructureShape,
    };
    use query_wire_types::Value;

    fn model() -> ShapeModel {
        ShapeModel::builder()
            .shape(Shape::new("StringType", ShapeKind::String))
            .shape(Shape::list("StringList", MemberRef::new("StringType")))
            .shape(Shape::structure(
                "NestedShape",
                StructureShape::builder().member("Inner", "StringType").build(),
            ))
            .shape(Shape::structure(
                "OutputShape",
                StructureShape::builder()
                    .member("Str", "StringType")
                    .member("Items", "StringList")
                    .member("Nested", "NestedShape")
                    .build(),
            ))
            .build()
    }

    fn operation() -> OperationSpec {
        OperationSpec::builder("OperationName")
            .output(OutputSpec::new("OutputShape").result_wrapper("OperationNameResult"))
            .build()
    }

    fn decode_ok(body: &str) -> Decoded {
        decode_response(&model(), &operation(), 200, body.as_bytes()).unwrap()
    }

    #[test]
    fn missing_wrapper_is_an_empty_result() {
        let Decoded::Output(fields) = decode_ok(r#"{"SomethingElse": {}}"#) else {
            panic!("expected output");
        };
        assert!(fields.is_empty());
    }

    #[test]
    fn empty_success_body_is_an_empty_result() {
        let Decoded::Output(fields) =
            decode_response(&model(), &operation(), 200, b"").unwrap()
        else {
            panic!("expected output");
        };
        assert!(fields.is_empty());
    }

    #[test]
    fn operation_without_output_decodes_to_empty_fields() {
        let op = OperationSpec::builder("OperationName").build();
        let Decoded::Output(fields) =
            decode_response(&model(), &op, 200, br#"{"anything": "at all"}"#).unwrap()
        else {
            panic!("expected output");
        };
        assert!(fields.is_empty());
    }

    #[test]
    fn unparseable_body_is_malformed() {
        let err = decode_response(&model(), &operation(), 200, b"{not json").unwrap_err();
        assert!(err.is_malformed_body());
    }

    #[test]
    fn null_members_are_omitted() {
        let Decoded::Output(fields) = decode_ok(
            r#"{"OperationNameResponse": {"OperationNameResult": {"Str": null}}}"#,
        ) else {
            panic!("expected output");
        };
        assert!(!fields.contains("Str"));
    }

    #[test]
    fn empty_list_decodes_to_empty_sequence() {
        let Decoded::Output(fields) = decode_ok(
            r#"{"OperationNameResponse": {"OperationNameResult": {"Items": []}}}"#,
        ) else {
            panic!("expected output");
        };
        // Present-but-empty is not the same as omitted.
        assert_eq!(fields.get("Items"), Some(&Value::List(vec![])));
    }

    #[test]
    fn nested_structures_recurse() {
        let Decoded::Output(fields) = decode_ok(
            r#"{"OperationNameResponse": {"OperationNameResult": {"Nested": {"Inner": "deep"}}}}"#,
        ) else {
            panic!("expected output");
        };
        let nested = fields.get("Nested").and_then(Value::as_structure).unwrap();
        assert_eq!(nested.get("Inner").and_then(Value::as_str), Some("deep"));
    }

    #[test]
    fn unknown_wire_keys_are_ignored() {
        let Decoded::Output(fields) = decode_ok(
            r#"{"OperationNameResponse": {"OperationNameResult": {"Str": "a", "Unmodeled": 1}}}"#,
        ) else {
            panic!("expected output");
        };
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn mistyped_list_is_a_coercion_error() {
        let err = decode_response(
            &model(),
            &operation(),
            200,
            br#"{"OperationNameResponse": {"OperationNameResult": {"Items": "not-a-list"}}}"#,
        )
        .unwrap_err();
        assert!(err.is_coercion());
    }

    #[test]
    fn dangling_output_shape_is_reported() {
        let op = OperationSpec::builder("OperationName")
            .output(OutputSpec::new("NoSuchShape"))
            .build();
        let err = decode_response(&model(), &op, 200, b"{}").unwrap_err();
        assert!(err.is_unknown_shape());
    }
}
