/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Dispatch of error payloads to modeled exception shapes.

use crate::decode::decode_structure;
use crate::decode::error::DecodeError;
use query_wire_model::{OperationSpec, ShapeKind, ShapeModel};
use query_wire_types::{Fields, Value};
use std::fmt;

/// The error envelope keys that are metadata, not exception members.
const ENVELOPE_KEYS: [&str; 3] = ["Type", "Code", "Message"];

/// A typed service error decoded from a non-2xx response.
///
/// Callers always receive a `ServiceError` for a non-2xx response: when the
/// error `Code` matches a declared exception shape the remaining payload is
/// decoded as that shape's members; otherwise the error is generic, carrying
/// only the raw code and message.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceError {
    code: String,
    message: String,
    fields: Fields,
    shape: Option<String>,
}

impl ServiceError {
    /// The error code from the `Error` envelope.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The error message; empty when the envelope carried none.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The decoded exception members. Empty for generic errors.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Looks up a decoded exception member by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The matched exception shape's name, or `None` for a generic error.
    pub fn shape(&self) -> Option<&str> {
        self.shape.as_deref()
    }

    /// True when the error matched a declared exception shape.
    pub fn is_modeled(&self) -> bool {
        self.shape.is_some()
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ServiceError {}

/// Decodes a non-2xx response body into a [`ServiceError`].
pub(crate) fn decode_error(
    model: &ShapeModel,
    operation: &OperationSpec,
    root: &serde_json::Value,
) -> Result<ServiceError, DecodeError> {
    let envelope = root
        .get("Error")
        .and_then(serde_json::Value::as_object)
        .ok_or_else(|| DecodeError::malformed_error("body has no `Error` object"))?;
    let code = envelope
        .get("Code")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| DecodeError::malformed_error("`Error` object has no string `Code`"))?;
    // A missing `Message` is tolerated as empty; a missing `Code` is not.
    let message = envelope
        .get("Message")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("")
        .to_string();

    // Exact, case-sensitive match of `Code` against the declared exception
    // shape names. Exception shape names are unique per operation in a valid
    // model; if duplicates match anyway, report it rather than silently
    // picking one.
    let mut matched = None;
    for declared in operation.errors() {
        if declared == code {
            if matched.is_some() {
                return Err(DecodeError::model_ambiguity(code));
            }
            matched = Some(declared.as_str());
        }
    }

    let Some(shape_name) = matched else {
        tracing::debug!(
            operation = operation.name(),
            %code,
            "no modeled exception shape for error code, returning generic error"
        );
        return Ok(ServiceError {
            code: code.to_string(),
            message,
            fields: Fields::new(),
            shape: None,
        });
    };

    let shape = model.get(shape_name).ok_or_else(|| {
        query_wire_model::UnknownShapeError::new(
            shape_name,
            format!("{} errors", operation.name()),
        )
    })?;
    let ShapeKind::Structure(structure) = shape.kind() else {
        return Err(DecodeError::custom(format!(
            "exception shape `{shape_name}` is not a structure"
        )));
    };

    // The remaining siblings of the envelope keys are the exception members.
    let mut members = envelope.clone();
    for key in ENVELOPE_KEYS {
        members.remove(key);
    }
    let fields = decode_structure(model, structure, &members)?;
    Ok(ServiceError {
        code: code.to_string(),
        message,
        fields,
        shape: Some(shape_name.to_string()),
    })
}

#[cfg(test)]
mod test {
    use super::decode_error;
    use query_wire_model::{OperationSpec, Shape, ShapeKind, ShapeModel, StructureShape};
    use query_wire_types::Value;
    use serde_json::json;

    fn model() -> ShapeModel {
        ShapeModel::builder()
            .shape(Shape::new("StringType", ShapeKind::String))
            .shape(Shape::structure(
                "ExceptionShape",
                StructureShape::builder()
                    .member("BodyMember", "StringType")
                    .exception()
                    .build(),
            ))
            .build()
    }

    fn operation() -> OperationSpec {
        OperationSpec::builder("OperationName")
            .error("ExceptionShape")
            .build()
    }

    #[test]
    fn modeled_error_decodes_members() {
        let body = json!({
            "Error": {
                "Type": "Sender",
                "Code": "ExceptionShape",
                "Message": "mymessage",
                "BodyMember": "mybody"
            },
            "RequestId": "request-id"
        });
        let err = decode_error(&model(), &operation(), &body).unwrap();
        assert_eq!(err.code(), "ExceptionShape");
        assert_eq!(err.message(), "mymessage");
        assert_eq!(err.field("BodyMember").and_then(Value::as_str), Some("mybody"));
        assert_eq!(err.shape(), Some("ExceptionShape"));
        assert!(err.is_modeled());
    }

    #[test]
    fn undeclared_code_decodes_to_generic_error() {
        let body = json!({"Error": {"Code": "SomethingUnexpected", "Message": "oh no"}});
        let err = decode_error(&model(), &operation(), &body).unwrap();
        assert_eq!(err.code(), "SomethingUnexpected");
        assert_eq!(err.message(), "oh no");
        assert!(err.fields().is_empty());
        assert!(!err.is_modeled());
    }

    #[test]
    fn code_matching_is_case_sensitive() {
        let body = json!({"Error": {"Code": "exceptionshape", "Message": "m"}});
        let err = decode_error(&model(), &operation(), &body).unwrap();
        assert!(!err.is_modeled());
    }

    #[test]
    fn missing_message_is_tolerated_as_empty() {
        let body = json!({"Error": {"Code": "ExceptionShape"}});
        let err = decode_error(&model(), &operation(), &body).unwrap();
        assert_eq!(err.message(), "");
        assert_eq!(err.to_string(), "ExceptionShape");
    }

    #[test]
    fn missing_code_is_malformed() {
        let body = json!({"Error": {"Message": "mymessage"}});
        let err = decode_error(&model(), &operation(), &body).unwrap_err();
        assert!(err.is_malformed_error());
    }

    #[test]
    fn missing_error_object_is_malformed() {
        let body = json!({"RequestId": "request-id"});
        let err = decode_error(&model(), &operation(), &body).unwrap_err();
        assert!(err.is_malformed_error());
    }

    #[test]
    fn duplicate_declared_shapes_are_ambiguous() {
        let op = OperationSpec::builder("OperationName")
            .error("ExceptionShape")
            .error("ExceptionShape")
            .build();
        let body = json!({"Error": {"Code": "ExceptionShape", "Message": "m"}});
        let err = decode_error(&model(), &op, &body).unwrap_err();
        assert!(err.is_model_ambiguity());
    }

    #[test]
    fn envelope_keys_are_not_decoded_as_members() {
        let model = ShapeModel::builder()
            .shape(Shape::new("StringType", ShapeKind::String))
            .shape(Shape::structure(
                "ExceptionShape",
                StructureShape::builder()
                    .member("Message", "StringType")
                    .exception()
                    .build(),
            ))
            .build();
        // The shape declares a `Message` member, but the envelope's `Message`
        // key belongs to the envelope, not the members.
        let body = json!({"Error": {"Code": "ExceptionShape", "Message": "mymessage"}});
        let err = decode_error(&model, &operation(), &body).unwrap();
        assert_eq!(err.message(), "mymessage");
        assert!(err.fields().is_empty());
    }
}
