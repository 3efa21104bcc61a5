//! Field model consumed by the generators.
//!
//! A record is described as an ordered list of [`FieldDescriptor`]s. Each
//! descriptor pairs the serialized field name with its inferred
//! [`FieldShape`] and the raw declarative [`FieldTags`] attached to it.

use crate::tags::FieldTags;

/// Inferred shape of a field's value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldShape {
    /// A string value.
    String,
    /// A boolean value.
    Boolean,
    /// A signed integer.
    Integer,
    /// An unsigned integer.
    Unsigned,
    /// A floating point number.
    Number,
    /// A point in time. Treated as an opaque leaf, never expanded into a group.
    Timestamp,
    /// A string restricted to a fixed set of variants.
    Enum(Vec<String>),
    /// A homogeneous sequence.
    Array(Box<FieldShape>),
    /// A string-keyed map with uniform values.
    Map(Box<FieldShape>),
    /// An object with no further structure (e.g. a map with non-string keys).
    Object,
    /// A nested record with ordered fields.
    Record(Vec<FieldDescriptor>),
    /// A value that may be absent.
    Optional(Box<FieldShape>),
    /// The JSON `null` literal.
    Null,
    /// Any JSON value.
    Any,
}

impl FieldShape {
    /// Strip every level of `Optional`.
    pub fn unwrap_optional(&self) -> &FieldShape {
        let mut shape = self;
        while let FieldShape::Optional(inner) = shape {
            shape = inner;
        }
        shape
    }

    /// The fields of this shape when it is a record (possibly optional).
    pub fn as_record(&self) -> Option<&[FieldDescriptor]> {
        match self.unwrap_optional() {
            FieldShape::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// The element record when this shape is an array of records.
    ///
    /// Both the array and its element may be optional.
    pub fn element_record(&self) -> Option<&[FieldDescriptor]> {
        match self.unwrap_optional() {
            FieldShape::Array(elem) => elem.as_record(),
            _ => None,
        }
    }

    /// Whether this is a nested record that renders as a group.
    pub fn is_record(&self) -> bool {
        self.as_record().is_some()
    }

    /// Short human-readable name, used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            FieldShape::String => "string",
            FieldShape::Boolean => "boolean",
            FieldShape::Integer | FieldShape::Unsigned => "integer",
            FieldShape::Number => "number",
            FieldShape::Timestamp => "timestamp",
            FieldShape::Enum(_) => "enum",
            FieldShape::Array(_) => "array",
            FieldShape::Map(_) => "map",
            FieldShape::Object => "object",
            FieldShape::Record(_) => "record",
            FieldShape::Optional(inner) => inner.describe(),
            FieldShape::Null => "null",
            FieldShape::Any => "any",
        }
    }
}

/// One named field of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Serialized field name, used to build scopes and property keys.
    pub name: String,

    /// Inferred value shape.
    pub shape: FieldShape,

    /// Raw declarative annotations.
    pub tags: FieldTags,
}

impl FieldDescriptor {
    /// Create a descriptor with no tags.
    pub fn new(name: impl Into<String>, shape: FieldShape) -> Self {
        Self {
            name: name.into(),
            shape,
            tags: FieldTags::default(),
        }
    }

    /// Attach tags.
    pub fn with_tags(mut self, tags: FieldTags) -> Self {
        self.tags = tags;
        self
    }
}
