//! Intermediate representation between parsing and code generation.
//!
//! The parsers resolve names, serde compatibility and doc comments; the
//! code generator only turns this IR into tokens.

use syn::{Generics, Ident, Type};

/// A type that derives `FormSchema`.
#[derive(Debug, Clone)]
pub struct FormIR {
    /// Rust identifier of the type
    pub ident: Ident,

    /// Name reported by `type_name()`
    pub name: String,

    pub generics: Generics,

    pub kind: FormKind,
}

/// What the derived `field_shape()` returns.
#[derive(Debug, Clone)]
pub enum FormKind {
    /// Named struct (or unit struct) becoming a record.
    Record(Vec<FieldIR>),

    /// Unit-only enum becoming a string choice over its variant names.
    Enum(Vec<String>),
}

/// One surviving (not skipped) struct field.
#[derive(Debug, Clone)]
pub struct FieldIR {
    /// Serialized name, used in scopes
    pub name: String,

    pub ty: Type,

    pub tags: TagsIR,
}

/// Declarative field annotations, mirroring `formschema::FieldTags`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagsIR {
    pub required: bool,
    pub default: Option<String>,
    pub enum_values: Option<String>,
    pub format: Option<String>,
    pub form: Option<String>,
    pub i18n: Option<String>,
    pub visible_if: Option<String>,
    pub hide_if: Option<String>,
    pub enable_if: Option<String>,
    pub disable_if: Option<String>,
    pub renderer: Option<String>,
    pub description: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub pattern: Option<String>,
}

impl TagsIR {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl FormIR {
    /// Field names of a record, in declaration order.
    #[cfg(test)]
    pub fn field_names(&self) -> Vec<&str> {
        match &self.kind {
            FormKind::Record(fields) => fields.iter().map(|f| f.name.as_str()).collect(),
            FormKind::Enum(_) => Vec::new(),
        }
    }
}
