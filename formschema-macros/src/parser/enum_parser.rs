//! Enum parsing logic.
//!
//! Only unit-only enums are accepted; they become a string choice whose
//! values are the (renamed) variant names.

use darling::{FromDeriveInput, FromVariant};
use syn::{Data, DeriveInput, Fields};

use crate::ir::{FormIR, FormKind};
use crate::parser::attributes::{ContainerAttrs, VariantAttrs};

#[cfg(feature = "serde-compat")]
use crate::parser::serde_compat::{merge_name, SerdeContainerAttrs, SerdeMemberAttrs};

/// Error type for enum parsing failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnumParseError {
    #[error("Failed to parse container attributes: {0}")]
    ContainerAttrs(String),

    #[error("Failed to parse variant attributes: {0}")]
    VariantAttrs(String),

    #[error("Expected enum, found {0}")]
    NotAnEnum(String),

    #[error("variant '{0}' carries data, only unit variants are supported")]
    DataVariant(String),
}

/// Parses unit-only Rust enums into FormIR.
pub struct EnumParser;

impl EnumParser {
    pub fn parse(input: &DeriveInput) -> Result<FormIR, EnumParseError> {
        let container_attrs = ContainerAttrs::from_derive_input(input)
            .map_err(|e| EnumParseError::ContainerAttrs(e.to_string()))?;

        let data_enum = match &input.data {
            Data::Enum(e) => e,
            Data::Struct(_) => return Err(EnumParseError::NotAnEnum("struct".to_string())),
            Data::Union(_) => return Err(EnumParseError::NotAnEnum("union".to_string())),
        };

        #[cfg(feature = "serde-compat")]
        let serde_attrs = SerdeContainerAttrs::from_attrs(&input.attrs);

        let mut variants = Vec::with_capacity(data_enum.variants.len());
        for variant in &data_enum.variants {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(EnumParseError::DataVariant(variant.ident.to_string()));
            }

            let attrs = VariantAttrs::from_variant(variant)
                .map_err(|e| EnumParseError::VariantAttrs(e.to_string()))?;

            #[cfg(feature = "serde-compat")]
            let (skip, name) = {
                let serde_variant = SerdeMemberAttrs::from_attrs(&variant.attrs);
                let name = merge_name(attrs.rename.as_deref(), serde_variant.rename.as_deref(), || {
                    attrs.variant_name(container_attrs.rename_all.or(serde_attrs.rename_all))
                });
                (attrs.skip || serde_variant.skip, name)
            };

            #[cfg(not(feature = "serde-compat"))]
            let (skip, name) = (attrs.skip, attrs.variant_name(container_attrs.rename_all));

            if !skip {
                variants.push(name);
            }
        }

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
            kind: FormKind::Enum(variants),
        })
    }
}
