/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Coercion of raw JSON scalars into the semantic types their shapes declare.

use crate::decode::error::DecodeError;
use query_wire_model::ShapeKind;
use query_wire_types::{Instant, Value};

/// Coerces a raw decoded scalar into the type declared by `kind`.
///
/// The protocol's coercion rules are deliberately narrow:
/// - `string`/`character` pass raw text through unchanged (`character` is a
///   length-unconstrained string in this model, not a single-codepoint type);
/// - `integer`/`long` require a native JSON integer and admit the full signed
///   64-bit range (`integer` is not separately range-checked);
/// - `float`/`double` share one decoding path; native integers are accepted;
/// - `boolean` requires a native boolean — no string-to-bool coercion;
/// - `timestamp` requires whole epoch seconds.
///
/// Anything else is a coercion error: the value's native JSON type disagrees
/// with the modeled type.
pub(crate) fn coerce(kind: &ShapeKind, raw: &serde_json::Value) -> Result<Value, DecodeError> {
    use serde_json::Value as Json;
    match kind {
        ShapeKind::String | ShapeKind::Character => match raw {
            Json::String(s) => Ok(Value::String(s.clone())),
            _ => Err(DecodeError::coercion(kind.name(), raw)),
        },
        ShapeKind::Integer | ShapeKind::Long => match raw.as_i64() {
            Some(i) => Ok(Value::Int(i)),
            None => Err(DecodeError::coercion(kind.name(), raw)),
        },
        ShapeKind::Float | ShapeKind::Double => match raw {
            Json::Number(n) => match n.as_f64() {
                Some(f) => Ok(Value::Float(f)),
                None => Err(DecodeError::coercion(kind.name(), raw)),
            },
            _ => Err(DecodeError::coercion(kind.name(), raw)),
        },
        ShapeKind::Boolean => match raw {
            Json::Bool(b) => Ok(Value::Bool(*b)),
            _ => Err(DecodeError::coercion(kind.name(), raw)),
        },
        ShapeKind::Timestamp => match raw.as_i64() {
            Some(epoch_seconds) => Ok(Value::Timestamp(Instant::from_secs(epoch_seconds))),
            None => Err(DecodeError::coercion(kind.name(), raw)),
        },
        // Containers are decoded by the structure/list decoder; a container
        // kind reaching the scalar coercer cannot match a scalar value.
        ShapeKind::Structure(_) | ShapeKind::List(_) => {
            Err(DecodeError::coercion(kind.name(), raw))
        }
    }
}
