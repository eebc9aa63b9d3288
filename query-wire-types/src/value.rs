/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::Instant;

/// A typed value decoded from a protocol response.
///
/// This is the typed counterpart of an untyped JSON tree: every variant has
/// already been coerced to the semantic type its shape declares. `string` and
/// `character` shapes both decode to [`Value::String`]; `integer` and `long`
/// both decode to [`Value::Int`]; `float` and `double` both decode to
/// [`Value::Float`]. The narrower kinds exist in the model for documentation
/// and precision intent, not as distinct runtime representations.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text from a `string` or `character` shape, passed through unchanged.
    String(String),
    /// A signed integer from an `integer` or `long` shape.
    Int(i64),
    /// An IEEE-754 value from a `float` or `double` shape.
    Float(f64),
    /// A native boolean.
    Bool(bool),
    /// An absolute instant from a `timestamp` shape.
    Timestamp(Instant),
    /// An ordered sequence decoded from a `list` shape.
    List(Vec<Value>),
    /// Nested fields decoded from a `structure` shape.
    Structure(Fields),
}

impl Value {
    /// Returns the text if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int` value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float if this is a `Float` value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean if this is a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the instant if this is a `Timestamp` value.
    pub fn as_timestamp(&self) -> Option<Instant> {
        match self {
            Value::Timestamp(instant) => Some(*instant),
            _ => None,
        }
    }

    /// Returns the elements if this is a `List` value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested fields if this is a `Structure` value.
    pub fn as_structure(&self) -> Option<&Fields> {
        match self {
            Value::Structure(fields) => Some(fields),
            _ => None,
        }
    }
}

/// An ordered mapping from member name to decoded [`Value`].
///
/// Field order follows the declaration order of the structure shape the
/// fields were decoded against, not the key order of the wire document.
/// Members absent from the wire are absent here as well — there is no
/// defaulting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fields {
    entries: Vec<(String, Value)>,
}

impl Fields {
    /// Creates an empty field mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field. Callers are expected to insert each member at most
    /// once; lookup returns the first entry with a matching name.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.entries.push((name.into(), value));
    }

    /// Looks up a field by member name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| value)
    }

    /// Returns true if a field with the given member name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for Fields {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Fields {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Fields, Value};

    #[test]
    fn insertion_order_is_preserved() {
        let mut fields = Fields::new();
        fields.insert("b", Value::Int(1));
        fields.insert("a", Value::Int(2));
        let names: Vec<&str> = fields.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn lookup_by_member_name() {
        let mut fields = Fields::new();
        fields.insert("Str", Value::String("myname".to_string()));
        assert_eq!(fields.get("Str").and_then(Value::as_str), Some("myname"));
        assert_eq!(fields.get("Missing"), None);
        assert!(fields.contains("Str"));
        assert!(!fields.contains("Missing"));
    }
}
