//! Struct parsing logic.
//!
//! Named structs become records, unit structs become empty records. Tuple
//! structs have no field names to scope controls by and are rejected.

use darling::{FromDeriveInput, FromField};
use syn::{Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Lit, Meta};

use crate::ir::{FieldIR, FormIR, FormKind};
use crate::parser::attributes::{ContainerAttrs, FieldAttrs, RenameRule};

#[cfg(feature = "serde-compat")]
use crate::parser::serde_compat::{merge_name, SerdeContainerAttrs, SerdeMemberAttrs};

/// Error type for struct parsing failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StructParseError {
    #[error("Failed to parse container attributes: {0}")]
    ContainerAttrs(String),

    #[error("Failed to parse field attributes: {0}")]
    FieldAttrs(String),

    #[error("Expected struct, found {0}")]
    NotAStruct(String),

    #[error("tuple structs are not supported, use named fields")]
    TupleStruct,
}

/// Parses Rust struct definitions into FormIR.
pub struct StructParser;

impl StructParser {
    /// Parse a DeriveInput into a FormIR for a struct.
    pub fn parse(input: &DeriveInput) -> Result<FormIR, StructParseError> {
        let container_attrs = ContainerAttrs::from_derive_input(input)
            .map_err(|e| StructParseError::ContainerAttrs(e.to_string()))?;

        let data_struct = match &input.data {
            Data::Struct(s) => s,
            Data::Enum(_) => return Err(StructParseError::NotAStruct("enum".to_string())),
            Data::Union(_) => return Err(StructParseError::NotAStruct("union".to_string())),
        };

        #[cfg(feature = "serde-compat")]
        let serde_attrs = SerdeContainerAttrs::from_attrs(&input.attrs);

        let fields = match &data_struct.fields {
            Fields::Named(named) => {
                let mut fields = Vec::with_capacity(named.named.len());
                for field in &named.named {
                    let parsed = Self::parse_field(
                        field,
                        container_attrs.rename_all,
                        #[cfg(feature = "serde-compat")]
                        &serde_attrs,
                    )?;
                    fields.extend(parsed);
                }
                fields
            }
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => return Err(StructParseError::TupleStruct),
        };

        #[cfg(feature = "serde-compat")]
        let name = merge_name(
            container_attrs.rename.as_deref(),
            serde_attrs.rename.as_deref(),
            || container_attrs.form_name(),
        );

        #[cfg(not(feature = "serde-compat"))]
        let name = container_attrs.form_name();

        Ok(FormIR {
            ident: container_attrs.ident,
            name,
            generics: container_attrs.generics,
            kind: FormKind::Record(fields),
        })
    }

    /// Parse one named field. Skipped fields yield `None`.
    fn parse_field(
        field: &syn::Field,
        rename_all: Option<RenameRule>,
        #[cfg(feature = "serde-compat")] serde_container: &SerdeContainerAttrs,
    ) -> Result<Option<FieldIR>, StructParseError> {
        let attrs = FieldAttrs::from_field(field)
            .map_err(|e| StructParseError::FieldAttrs(e.to_string()))?;

        #[cfg(feature = "serde-compat")]
        let (skip, name) = {
            let serde_field = SerdeMemberAttrs::from_attrs(&field.attrs);
            let name = merge_name(attrs.rename.as_deref(), serde_field.rename.as_deref(), || {
                attrs.field_name(rename_all.or(serde_container.rename_all))
            });
            (attrs.skip || serde_field.skip, name)
        };

        #[cfg(not(feature = "serde-compat"))]
        let (skip, name) = (attrs.skip, attrs.field_name(rename_all));

        if skip {
            return Ok(None);
        }

        let doc = extract_doc_comments(&field.attrs);

        Ok(Some(FieldIR {
            name,
            ty: attrs.ty.clone(),
            tags: attrs.to_tags(doc),
        }))
    }
}

/// Join the `///` lines on a field into one description.
///
/// Each line is trimmed. Blank results yield `None`.
pub fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let mut lines = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("doc")) {
        let Meta::NameValue(doc) = &attr.meta else {
            continue;
        };
        if let Expr::Lit(ExprLit {
            lit: Lit::Str(text),
            ..
        }) = &doc.value
        {
            lines.push(text.value().trim().to_string());
        }
    }

    let joined = lines.join("\n");
    let description = joined.trim();
    (!description.is_empty()).then(|| description.to_string())
}
