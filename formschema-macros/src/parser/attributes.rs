//! Attribute parsing using darling.
//!
//! This module defines the structures for `#[form(...)]` attributes on
//! containers (structs/enums), fields and variants.

use darling::{FromDeriveInput, FromField, FromMeta, FromVariant};
use syn::{Generics, Ident, Type};

use crate::ir::TagsIR;

/// Container-level attributes parsed from `#[form(...)]` on the type.
#[derive(Debug, Clone, FromDeriveInput)]
#[darling(attributes(form), supports(struct_any, enum_any))]
pub struct ContainerAttrs {
    /// The identifier of the type
    pub ident: Ident,

    /// Generic parameters of the type
    pub generics: Generics,

    /// Name reported by `type_name()`
    #[darling(default)]
    pub rename: Option<String>,

    /// Rename all fields or variants using a case convention
    #[darling(default)]
    pub rename_all: Option<RenameRule>,
}

impl ContainerAttrs {
    /// Get the form name (renamed or original).
    pub fn form_name(&self) -> String {
        self.rename
            .clone()
            .unwrap_or_else(|| self.ident.to_string())
    }
}

/// Field-level attributes parsed from `#[form(...)]` on struct fields.
#[derive(Debug, Clone, FromField)]
#[darling(attributes(form))]
pub struct FieldAttrs {
    /// Field identifier (None for tuple struct fields)
    pub ident: Option<Ident>,

    /// Field type
    pub ty: Type,

    /// Rename this field
    #[darling(default)]
    pub rename: Option<String>,

    /// Leave the field out of the form
    #[darling(default)]
    pub skip: bool,

    #[darling(default)]
    pub required: bool,

    /// Default value, as written in the data schema after coercion
    #[darling(default)]
    pub default: Option<String>,

    /// Comma-separated allowed values
    #[darling(default, rename = "enum")]
    pub enum_values: Option<String>,

    #[darling(default)]
    pub format: Option<String>,

    /// UI form tag, e.g. `"label=Name;layout=horizontal"`
    #[darling(default)]
    pub form: Option<String>,

    /// Label translation key
    #[darling(default)]
    pub i18n: Option<String>,

    #[darling(default)]
    pub visible_if: Option<String>,

    #[darling(default)]
    pub hide_if: Option<String>,

    #[darling(default)]
    pub enable_if: Option<String>,

    #[darling(default)]
    pub disable_if: Option<String>,

    /// Custom renderer name
    #[darling(default)]
    pub renderer: Option<String>,

    /// Field description, overrides doc comments
    #[darling(default)]
    pub description: Option<String>,

    #[darling(default)]
    pub min_length: Option<u64>,

    #[darling(default)]
    pub max_length: Option<u64>,

    #[darling(default)]
    pub minimum: Option<f64>,

    #[darling(default)]
    pub maximum: Option<f64>,

    /// Regex pattern for strings
    #[darling(default)]
    pub pattern: Option<String>,
}

impl FieldAttrs {
    /// Get the serialized name for this field (renamed or original).
    pub fn field_name(&self, rename_rule: Option<RenameRule>) -> String {
        if let Some(ref name) = self.rename {
            return name.clone();
        }

        let name = self
            .ident
            .as_ref()
            .map(|i| i.to_string())
            .unwrap_or_default();
        match rename_rule {
            Some(rule) => rule.apply(&name),
            None => name,
        }
    }

    /// Collect the declarative tags, using `doc` when no explicit
    /// description was given.
    pub fn to_tags(&self, doc: Option<String>) -> TagsIR {
        TagsIR {
            required: self.required,
            default: self.default.clone(),
            enum_values: self.enum_values.clone(),
            format: self.format.clone(),
            form: self.form.clone(),
            i18n: self.i18n.clone(),
            visible_if: self.visible_if.clone(),
            hide_if: self.hide_if.clone(),
            enable_if: self.enable_if.clone(),
            disable_if: self.disable_if.clone(),
            renderer: self.renderer.clone(),
            description: self.description.clone().or(doc),
            min_length: self.min_length,
            max_length: self.max_length,
            minimum: self.minimum,
            maximum: self.maximum,
            pattern: self.pattern.clone(),
        }
    }
}

/// Variant-level attributes for unit enum variants.
#[derive(Debug, Clone, FromVariant)]
#[darling(attributes(form))]
pub struct VariantAttrs {
    pub ident: Ident,

    /// Rename this variant
    #[darling(default)]
    pub rename: Option<String>,

    /// Leave the variant out of the choice list
    #[darling(default)]
    pub skip: bool,
}

impl VariantAttrs {
    /// Get the value this variant serializes to.
    pub fn variant_name(&self, rename_rule: Option<RenameRule>) -> String {
        if let Some(ref name) = self.rename {
            return name.clone();
        }

        let name = self.ident.to_string();
        match rename_rule {
            Some(rule) => rule.apply(&name),
            None => name,
        }
    }
}

/// Rename rule for field/variant name transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromMeta)]
pub enum RenameRule {
    #[darling(rename = "lowercase")]
    LowerCase,

    #[darling(rename = "UPPERCASE")]
    UpperCase,

    #[darling(rename = "camelCase")]
    CamelCase,

    #[darling(rename = "snake_case")]
    SnakeCase,

    #[darling(rename = "PascalCase")]
    PascalCase,

    #[darling(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnakeCase,

    #[darling(rename = "kebab-case")]
    KebabCase,
}

impl RenameRule {
    /// Parse a serde-style rule name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "lowercase" => Some(RenameRule::LowerCase),
            "UPPERCASE" => Some(RenameRule::UpperCase),
            "camelCase" => Some(RenameRule::CamelCase),
            "snake_case" => Some(RenameRule::SnakeCase),
            "PascalCase" => Some(RenameRule::PascalCase),
            "SCREAMING_SNAKE_CASE" => Some(RenameRule::ScreamingSnakeCase),
            "kebab-case" => Some(RenameRule::KebabCase),
            _ => None,
        }
    }

    /// Apply the rename rule to a string.
    pub fn apply(&self, name: &str) -> String {
        use convert_case::{Case, Casing};

        match self {
            // serde lowercases the identifier as written, no word splitting
            RenameRule::LowerCase => name.to_lowercase(),
            RenameRule::UpperCase => name.to_uppercase(),
            RenameRule::CamelCase => name.to_case(Case::Camel),
            RenameRule::SnakeCase => name.to_case(Case::Snake),
            RenameRule::PascalCase => name.to_case(Case::Pascal),
            RenameRule::ScreamingSnakeCase => name.to_case(Case::UpperSnake),
            RenameRule::KebabCase => name.to_case(Case::Kebab),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn first_field(input: syn::DeriveInput) -> syn::Field {
        match input.data {
            syn::Data::Struct(s) => s.fields.into_iter().next().unwrap(),
            _ => panic!("Expected struct"),
        }
    }

    #[test]
    fn test_rename_rule_apply() {
        assert_eq!(RenameRule::CamelCase.apply("first_name"), "firstName");
        assert_eq!(RenameRule::SnakeCase.apply("firstName"), "first_name");
        assert_eq!(RenameRule::PascalCase.apply("first_name"), "FirstName");
        assert_eq!(RenameRule::ScreamingSnakeCase.apply("firstName"), "FIRST_NAME");
        assert_eq!(RenameRule::KebabCase.apply("first_name"), "first-name");
        assert_eq!(RenameRule::LowerCase.apply("InReview"), "inreview");
        assert_eq!(RenameRule::UpperCase.apply("InReview"), "INREVIEW");
    }

    #[test]
    fn test_rename_rule_from_name() {
        assert_eq!(RenameRule::from_name("camelCase"), Some(RenameRule::CamelCase));
        assert_eq!(RenameRule::from_name("kebab-case"), Some(RenameRule::KebabCase));
        assert_eq!(RenameRule::from_name("Title Case"), None);
    }

    #[test]
    fn test_container_attrs() {
        let input: syn::DeriveInput = parse_quote! {
            #[form(rename = "SignupForm", rename_all = "camelCase")]
            struct Signup {
                first_name: String,
            }
        };

        let attrs = ContainerAttrs::from_derive_input(&input).unwrap();
        assert_eq!(attrs.form_name(), "SignupForm");
        assert_eq!(attrs.rename_all, Some(RenameRule::CamelCase));
    }

    #[test]
    fn test_field_attrs_to_tags() {
        let field = first_field(parse_quote! {
            struct Test {
                #[form(required, enum = "a,b", form = "label=Kind", minimum = 1.0, max_length = 20)]
                kind: String,
            }
        });

        let attrs = FieldAttrs::from_field(&field).unwrap();
        let tags = attrs.to_tags(Some("From docs".to_string()));

        assert!(tags.required);
        assert_eq!(tags.enum_values.as_deref(), Some("a,b"));
        assert_eq!(tags.form.as_deref(), Some("label=Kind"));
        assert_eq!(tags.minimum, Some(1.0));
        assert_eq!(tags.max_length, Some(20));
        assert_eq!(tags.description.as_deref(), Some("From docs"));
    }

    #[test]
    fn test_explicit_description_beats_doc() {
        let field = first_field(parse_quote! {
            struct Test {
                #[form(description = "Explicit")]
                note: String,
            }
        });

        let attrs = FieldAttrs::from_field(&field).unwrap();
        let tags = attrs.to_tags(Some("From docs".to_string()));
        assert_eq!(tags.description.as_deref(), Some("Explicit"));
    }

    #[test]
    fn test_field_name() {
        let field = first_field(parse_quote! { struct Test { user_name: String } });
        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.field_name(None), "user_name");
        assert_eq!(attrs.field_name(Some(RenameRule::CamelCase)), "userName");

        let field = first_field(parse_quote! {
            struct Test {
                #[form(rename = "login")]
                user_name: String,
            }
        });
        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.field_name(Some(RenameRule::CamelCase)), "login");
    }

    #[test]
    fn test_unknown_field_attribute_is_rejected() {
        let field = first_field(parse_quote! {
            struct Test {
                #[form(colour = "red")]
                name: String,
            }
        });
        assert!(FieldAttrs::from_field(&field).is_err());
    }
}
