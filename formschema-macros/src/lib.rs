//! # formschema-macros
//!
//! Procedural macros for deriving form descriptors from Rust types.
//!
//! This crate provides `#[derive(FormSchema)]`, which implements
//! `formschema::FormSchema` so the type can be turned into a JSON Schema and
//! a JSON Forms UI schema. Use it through the `formschema` crate.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formschema::FormSchema;
//!
//! #[derive(FormSchema)]
//! #[form(rename_all = "camelCase")]
//! struct Signup {
//!     /// Where the confirmation link goes.
//!     #[form(required, format = "email", form = "label=Email")]
//!     email_address: String,
//!
//!     #[form(minimum = 18.0, form = "category=Details")]
//!     age: Option<u32>,
//! }
//! ```
//!
//! ## Attributes
//!
//! ### Container Attributes
//!
//! - `#[form(rename = "Name")]` - Name reported by `type_name()`
//! - `#[form(rename_all = "camelCase")]` - Rename all fields or variants
//!
//! ### Field Attributes
//!
//! - `#[form(rename = "name")]`, `#[form(skip)]`
//! - `#[form(required)]`, `#[form(default = "..")]`, `#[form(enum = "a,b")]`
//! - `#[form(format = "..")]`, `#[form(pattern = "..")]`, `#[form(description = "..")]`
//! - `#[form(min_length = N)]`, `#[form(max_length = N)]`
//! - `#[form(minimum = N.0)]`, `#[form(maximum = N.0)]`
//! - `#[form(form = "label=..;hidden;readonly;multiline;category=..;layout=horizontal")]`
//! - `#[form(i18n = "key")]`, `#[form(renderer = "name")]`
//! - `#[form(visible_if = "field=value")]`, `hide_if`, `enable_if`, `disable_if`
//!
//! Doc comments become the field description unless `description` is given.
//! With the `serde-compat` feature, `#[serde(rename, rename_all, skip, ..)]`
//! is honoured; `#[form(...)]` wins on conflict.

use proc_macro::TokenStream;
use syn::{Data, DeriveInput};

mod codegen;
mod ir;
mod parser;

use codegen::impl_block::ImplBlockGenerator;
use parser::enum_parser::{EnumParseError, EnumParser};
use parser::struct_parser::{StructParseError, StructParser};

/// Derive `formschema::FormSchema`.
///
/// Named structs become records and unit-only enums become string choices.
/// Tuple structs, enums with data and unions are rejected.
#[proc_macro_derive(FormSchema, attributes(form, serde))]
pub fn derive_form_schema(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match derive_form_schema_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn derive_form_schema_impl(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let form = match &input.data {
        Data::Struct(_) => StructParser::parse(input).map_err(|e| convert_parse_error(e, input))?,
        Data::Enum(_) => {
            EnumParser::parse(input).map_err(|e| convert_enum_parse_error(e, input))?
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "FormSchema cannot be derived for unions",
            ));
        }
    };

    Ok(ImplBlockGenerator::generate(&form))
}

/// Convert a StructParseError to a syn::Error spanned on the type name.
fn convert_parse_error(error: StructParseError, input: &DeriveInput) -> syn::Error {
    let message = match error {
        StructParseError::ContainerAttrs(msg) => format!("Invalid container attributes: {}", msg),
        StructParseError::FieldAttrs(msg) => format!("Invalid field attributes: {}", msg),
        StructParseError::NotAStruct(kind) => format!("Expected struct, found {}", kind),
        StructParseError::TupleStruct => {
            "FormSchema cannot be derived for tuple structs, use named fields".to_string()
        }
    };
    syn::Error::new_spanned(&input.ident, message)
}

/// Convert an EnumParseError to a syn::Error spanned on the type name.
fn convert_enum_parse_error(error: EnumParseError, input: &DeriveInput) -> syn::Error {
    let message = match error {
        EnumParseError::ContainerAttrs(msg) => format!("Invalid container attributes: {}", msg),
        EnumParseError::VariantAttrs(msg) => format!("Invalid variant attributes: {}", msg),
        EnumParseError::NotAnEnum(kind) => format!("Expected enum, found {}", kind),
        EnumParseError::DataVariant(variant) => format!(
            "FormSchema can only be derived for enums with unit variants, '{}' carries data",
            variant
        ),
    };
    syn::Error::new_spanned(&input.ident, message)
}
