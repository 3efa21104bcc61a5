//! Impl block generation for the FormSchema trait.
//!
//! This module generates the `impl FormSchema for Type` blocks emitted by
//! the derive macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse_quote;

use crate::ir::{FieldIR, FormIR, FormKind, TagsIR};

/// Generates the impl block for the FormSchema trait.
pub struct ImplBlockGenerator;

impl ImplBlockGenerator {
    /// Generate the complete impl block for a form.
    pub fn generate(form: &FormIR) -> TokenStream {
        let ident = &form.ident;
        let name = &form.name;
        let shape = Self::generate_shape(&form.kind);

        let mut generics = form.generics.clone();
        for param in generics.type_params_mut() {
            param.bounds.push(parse_quote!(::formschema::FormSchema));
        }
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        quote! {
            impl #impl_generics ::formschema::FormSchema for #ident #ty_generics #where_clause {
                fn field_shape() -> ::formschema::FieldShape {
                    #shape
                }

                fn type_name() -> &'static str {
                    #name
                }
            }
        }
    }

    fn generate_shape(kind: &FormKind) -> TokenStream {
        match kind {
            FormKind::Record(fields) => {
                let fields = fields.iter().map(Self::generate_field);
                quote! {
                    ::formschema::FieldShape::Record(::std::vec![#(#fields),*])
                }
            }
            FormKind::Enum(variants) => quote! {
                ::formschema::FieldShape::Enum(::std::vec![
                    #(::std::string::String::from(#variants)),*
                ])
            },
        }
    }

    fn generate_field(field: &FieldIR) -> TokenStream {
        let name = &field.name;
        let ty = &field.ty;
        let tags = Self::generate_tags(&field.tags);

        quote! {
            ::formschema::FieldDescriptor::new(
                #name,
                <#ty as ::formschema::FormSchema>::field_shape(),
            )
            #tags
        }
    }

    /// `.with_tags(...)` builder chain, or nothing when no tag is set.
    fn generate_tags(tags: &TagsIR) -> TokenStream {
        if tags.is_empty() {
            return quote! {};
        }

        let mut calls = Vec::new();
        if tags.required {
            calls.push(quote! { .with_required(true) });
        }

        let strings = [
            (quote!(with_default), &tags.default),
            (quote!(with_enum), &tags.enum_values),
            (quote!(with_format), &tags.format),
            (quote!(with_form), &tags.form),
            (quote!(with_i18n), &tags.i18n),
            (quote!(with_visible_if), &tags.visible_if),
            (quote!(with_hide_if), &tags.hide_if),
            (quote!(with_enable_if), &tags.enable_if),
            (quote!(with_disable_if), &tags.disable_if),
            (quote!(with_renderer), &tags.renderer),
            (quote!(with_description), &tags.description),
            (quote!(with_pattern), &tags.pattern),
        ];
        for (method, value) in strings {
            if let Some(value) = value {
                calls.push(quote! { .#method(#value) });
            }
        }

        if let Some(n) = tags.min_length {
            calls.push(quote! { .with_min_length(#n) });
        }
        if let Some(n) = tags.max_length {
            calls.push(quote! { .with_max_length(#n) });
        }
        if let Some(n) = tags.minimum {
            calls.push(quote! { .with_minimum(#n) });
        }
        if let Some(n) = tags.maximum {
            calls.push(quote! { .with_maximum(#n) });
        }

        quote! {
            .with_tags(::formschema::FieldTags::new() #(#calls)*)
        }
    }
}
