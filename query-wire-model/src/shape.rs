/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// A named type definition in the shape model.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    name: String,
    kind: ShapeKind,
}

impl Shape {
    /// Creates a shape with an explicit kind.
    pub fn new(name: impl Into<String>, kind: ShapeKind) -> Self {
        Shape {
            name: name.into(),
            kind,
        }
    }

    /// Creates a structure shape.
    pub fn structure(name: impl Into<String>, structure: StructureShape) -> Self {
        Shape::new(name, ShapeKind::Structure(structure))
    }

    /// Creates a list shape.
    pub fn list(name: impl Into<String>, member: MemberRef) -> Self {
        Shape::new(name, ShapeKind::List(ListShape { member }))
    }

    /// The shape's unique name within the model.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shape's kind.
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }
}

/// The closed set of shape kinds.
///
/// The container variants carry their structure so that the invariants hold by
/// construction: a list has exactly one element member, a structure has a
/// (possibly empty) ordered member mapping, and primitives have neither.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// An ordered set of named members.
    Structure(StructureShape),
    /// A homogeneous sequence.
    List(ListShape),
    /// Text.
    String,
    /// Text; the protocol places no length or codepoint constraint on it.
    Character,
    /// A signed integer. Not separately range-checked against 32 bits;
    /// range enforcement is a caller policy.
    Integer,
    /// A signed 64-bit integer.
    Long,
    /// An IEEE-754 value, single-precision intent.
    Float,
    /// An IEEE-754 value, double-precision intent.
    Double,
    /// A native boolean.
    Boolean,
    /// An absolute instant, carried on the wire as whole epoch seconds.
    Timestamp,
}

impl ShapeKind {
    /// The kind's name as it appears in model documents and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Structure(_) => "structure",
            ShapeKind::List(_) => "list",
            ShapeKind::String => "string",
            ShapeKind::Character => "character",
            ShapeKind::Integer => "integer",
            ShapeKind::Long => "long",
            ShapeKind::Float => "float",
            ShapeKind::Double => "double",
            ShapeKind::Boolean => "boolean",
            ShapeKind::Timestamp => "timestamp",
        }
    }
}

/// A structure shape: an ordered mapping from member name to [`MemberRef`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructureShape {
    members: Vec<(String, MemberRef)>,
    is_exception: bool,
}

impl StructureShape {
    /// Creates a builder for a structure shape.
    pub fn builder() -> StructureShapeBuilder {
        StructureShapeBuilder::default()
    }

    /// Iterates over the members in declaration order.
    pub fn members(&self) -> impl Iterator<Item = (&str, &MemberRef)> {
        self.members
            .iter()
            .map(|(name, member)| (name.as_str(), member))
    }

    /// True when this structure models an error type. Matched against an
    /// error response's `Code` by its shape name.
    pub fn is_exception(&self) -> bool {
        self.is_exception
    }
}

/// Builder for [`StructureShape`].
#[derive(Debug, Default)]
pub struct StructureShapeBuilder {
    inner: StructureShape,
}

impl StructureShapeBuilder {
    /// Adds a member referencing the given target shape.
    pub fn member(mut self, name: impl Into<String>, shape: impl Into<String>) -> Self {
        self.inner
            .members
            .push((name.into(), MemberRef::new(shape)));
        self
    }

    /// Adds a member with a `locationName` override: `wire_name` is the key
    /// looked up in the wire document, `name` keys the decoded result.
    pub fn member_at(
        mut self,
        name: impl Into<String>,
        shape: impl Into<String>,
        wire_name: impl Into<String>,
    ) -> Self {
        self.inner
            .members
            .push((name.into(), MemberRef::new(shape).location_name(wire_name)));
        self
    }

    /// Flags the structure as an exception shape.
    pub fn exception(mut self) -> Self {
        self.inner.is_exception = true;
        self
    }

    /// Creates the structure shape.
    pub fn build(self) -> StructureShape {
        self.inner
    }
}

/// A list shape: a single element member reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ListShape {
    pub(crate) member: MemberRef,
}

impl ListShape {
    /// The element member reference.
    pub fn member(&self) -> &MemberRef {
        &self.member
    }
}

/// A reference from a member to its target shape, with an optional
/// `locationName` override of the wire-level field name.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberRef {
    shape: String,
    location_name: Option<String>,
}

impl MemberRef {
    /// Creates a reference to the named shape.
    pub fn new(shape: impl Into<String>) -> Self {
        MemberRef {
            shape: shape.into(),
            location_name: None,
        }
    }

    /// Sets the wire-level field name for this member.
    pub fn location_name(mut self, name: impl Into<String>) -> Self {
        self.location_name = Some(name.into());
        self
    }

    /// The referenced shape name.
    pub fn shape(&self) -> &str {
        &self.shape
    }

    /// The wire-level field name override, if any.
    pub fn location_name_override(&self) -> Option<&str> {
        self.location_name.as_deref()
    }
}

#[cfg(test)]
mod test {
    use super::{MemberRef, Shape, ShapeKind, StructureShape};

    #[test]
    fn structure_members_keep_declaration_order() {
        let structure = StructureShape::builder()
            .member("Str", "StringType")
            .member_at("Num", "IntegerType", "FooNum")
            .build();
        let names: Vec<&str> = structure.members().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Str", "Num"]);
    }

    #[test]
    fn member_location_name_override() {
        let member = MemberRef::new("IntegerType").location_name("FooNum");
        assert_eq!(member.shape(), "IntegerType");
        assert_eq!(member.location_name_override(), Some("FooNum"));
    }

    #[test]
    fn kind_names() {
        assert_eq!(ShapeKind::Timestamp.name(), "timestamp");
        assert_eq!(
            Shape::structure("S", StructureShape::default()).kind().name(),
            "structure"
        );
    }
}
