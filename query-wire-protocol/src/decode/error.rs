/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use query_wire_model::UnknownShapeError;
use std::borrow::Cow;
use std::fmt;

#[derive(Debug)]
pub(crate) enum DecodeErrorKind {
    Custom(Cow<'static, str>),
    Coercion {
        kind: &'static str,
        raw: String,
    },
    MalformedBody(serde_json::Error),
    MalformedError(Cow<'static, str>),
    ModelAmbiguity {
        code: String,
    },
    UnknownShape(UnknownShapeError),
}

/// Failure to decode a response payload.
///
/// Every variant is either a caller-input problem (the payload) or a
/// configuration problem (the model); none is transient or retryable. The
/// only conditions decoding tolerates silently are the documented protocol
/// leniencies: absent optional members and error codes with no modeled shape.
#[derive(Debug)]
pub struct DecodeError {
    kind: DecodeErrorKind,
}

impl DecodeError {
    pub(crate) fn new(kind: DecodeErrorKind) -> Self {
        Self { kind }
    }

    /// Returns a custom error.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(DecodeErrorKind::Custom(message.into()))
    }

    pub(crate) fn coercion(kind: &'static str, raw: &serde_json::Value) -> Self {
        Self::new(DecodeErrorKind::Coercion {
            kind,
            raw: raw.to_string(),
        })
    }

    pub(crate) fn malformed_body(source: serde_json::Error) -> Self {
        Self::new(DecodeErrorKind::MalformedBody(source))
    }

    pub(crate) fn malformed_error(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(DecodeErrorKind::MalformedError(message.into()))
    }

    pub(crate) fn model_ambiguity(code: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::ModelAmbiguity { code: code.into() })
    }

    /// True when a wire value's native JSON type disagreed with its shape.
    pub fn is_coercion(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::Coercion { .. })
    }

    /// True when the payload was not parseable JSON.
    pub fn is_malformed_body(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::MalformedBody(_))
    }

    /// True when an error payload was missing its required envelope keys.
    pub fn is_malformed_error(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::MalformedError(_))
    }

    /// True when the model declared duplicate exception shapes for one code.
    pub fn is_model_ambiguity(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::ModelAmbiguity { .. })
    }

    /// True when a member referenced a shape absent from the model.
    pub fn is_unknown_shape(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::UnknownShape(_))
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use DecodeErrorKind::*;
        match &self.kind {
            MalformedBody(source) => Some(source),
            UnknownShape(source) => Some(source),
            Custom(_) | Coercion { .. } | MalformedError(_) | ModelAmbiguity { .. } => None,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DecodeErrorKind::*;
        match &self.kind {
            Custom(msg) => write!(f, "failed to decode response: {msg}"),
            Coercion { kind, raw } => {
                write!(f, "cannot coerce {raw} to a value of kind `{kind}`")
            }
            MalformedBody(_) => write!(f, "response body is not well-formed JSON"),
            MalformedError(msg) => write!(f, "malformed error payload: {msg}"),
            ModelAmbiguity { code } => write!(
                f,
                "model declares more than one exception shape matching error code `{code}`"
            ),
            UnknownShape(_) => write!(f, "model misconfiguration"),
        }
    }
}

impl From<UnknownShapeError> for DecodeError {
    fn from(err: UnknownShapeError) -> Self {
        Self::new(DecodeErrorKind::UnknownShape(err))
    }
}

#[cfg(test)]
mod test {
    use super::DecodeError;
    use serde_json::json;

    #[test]
    fn coercion_display_names_kind_and_raw_value() {
        let err = DecodeError::coercion("boolean", &json!("true"));
        assert_eq!(
            err.to_string(),
            "cannot coerce \"true\" to a value of kind `boolean`"
        );
        assert!(err.is_coercion());
    }

    #[test]
    fn unknown_shape_keeps_source() {
        use std::error::Error;
        let err: DecodeError =
            query_wire_model::UnknownShapeError::new("MissingType", "Str").into();
        assert!(err.is_unknown_shape());
        assert!(err.source().is_some());
    }
}
