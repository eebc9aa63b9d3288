/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Rendering of decoded values back to JSON for display and testing.
//!
//! This is not the request-serialization direction of the protocol — it is
//! the inverse of the value coercer, used to show decoded results and to
//! verify that coercion round-trips. Two renderings exist because timestamps
//! have two representations: the canonical display form
//! (`YYYY-MM-DDThh:mm:ssZ`) and the wire form (whole epoch seconds).

use query_wire_types::instant::{ConversionError, Format};
use query_wire_types::{Fields, Value};

/// Renders decoded fields with timestamps in canonical RFC 3339 form.
pub fn to_display_json(fields: &Fields) -> Result<serde_json::Value, ConversionError> {
    fields_to_json(fields, Format::DateTime)
}

/// Renders decoded fields with timestamps as epoch seconds, matching the
/// wire representation they were decoded from.
pub fn to_wire_json(fields: &Fields) -> Result<serde_json::Value, ConversionError> {
    fields_to_json(fields, Format::EpochSeconds)
}

fn fields_to_json(
    fields: &Fields,
    timestamps: Format,
) -> Result<serde_json::Value, ConversionError> {
    let mut map = serde_json::Map::new();
    for (name, value) in fields.iter() {
        map.insert(name.to_string(), value_to_json(value, timestamps)?);
    }
    Ok(serde_json::Value::Object(map))
}

fn value_to_json(
    value: &Value,
    timestamps: Format,
) -> Result<serde_json::Value, ConversionError> {
    Ok(match value {
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Int(i) => serde_json::Value::from(*i),
        // Non-finite floats cannot appear here: JSON has no literal for them,
        // so the coercer never produces one.
        Value::Float(f) => serde_json::Value::from(*f),
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Timestamp(instant) => match timestamps {
            Format::DateTime => serde_json::Value::String(instant.fmt(Format::DateTime)?),
            Format::EpochSeconds => serde_json::Value::from(instant.secs()),
        },
        Value::List(items) => serde_json::Value::Array(
            items
                .iter()
                .map(|item| value_to_json(item, timestamps))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Structure(fields) => fields_to_json(fields, timestamps)?,
    })
}
