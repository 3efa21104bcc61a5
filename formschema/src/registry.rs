//! Name-addressable registry of form types.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::export::FormArtifact;
use crate::field::FieldShape;
use crate::generate::artifact_from_fields;
use crate::options::Options;
use crate::traits::FormSchema;

/// A registered type, captured as its shape constructor.
#[derive(Debug, Clone, Copy)]
pub struct RegisteredForm {
    pub type_name: &'static str,
    shape: fn() -> FieldShape,
}

impl RegisteredForm {
    /// Build the type's shape.
    pub fn field_shape(&self) -> FieldShape {
        (self.shape)()
    }
}

/// Maps names to form types so artifacts can be generated by name.
///
/// Registering a name twice replaces the earlier entry.
#[derive(Debug, Default, Clone)]
pub struct FormRegistry {
    forms: HashMap<String, RegisteredForm>,
}

impl FormRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under its own type name.
    pub fn register<T: FormSchema>(&mut self) -> &mut Self {
        self.register_as::<T>(T::type_name())
    }

    /// Register `T` under `name`.
    pub fn register_as<T: FormSchema>(&mut self, name: impl Into<String>) -> &mut Self {
        self.forms.insert(
            name.into(),
            RegisteredForm {
                type_name: T::type_name(),
                shape: T::field_shape,
            },
        );
        self
    }

    /// Look up a registered form.
    pub fn lookup(&self, name: &str) -> Result<&RegisteredForm> {
        self.forms
            .get(name)
            .ok_or_else(|| Error::UnknownType(name.to_string()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.forms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Generate both artifacts for the form registered under `name`.
    pub fn generate(&self, name: &str, options: &Options) -> Result<FormArtifact> {
        let form = self.lookup(name)?;
        let shape = form.field_shape();
        let fields = shape.as_record().ok_or_else(|| Error::UnsupportedRoot {
            type_name: form.type_name.to_string(),
            shape: shape.describe(),
        })?;

        Ok(artifact_from_fields(fields, options))
    }
}
