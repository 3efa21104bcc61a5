//! Serde attribute compatibility.
//!
//! Reads the subset of `#[serde(...)]` that changes JSON names or drops a
//! member, so a derived form scopes its controls by the names the data
//! actually uses. `#[form(...)]` attributes take precedence.

use syn::meta::ParseNestedMeta;
use syn::Attribute;

use super::attributes::RenameRule;

/// `rename` and `rename_all` from `#[serde(...)]` on the type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerdeContainerAttrs {
    pub rename: Option<String>,
    pub rename_all: Option<RenameRule>,
}

impl SerdeContainerAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> Self {
        let mut out = Self::default();
        visit_serde_keys(attrs, |key, meta| {
            match key.as_str() {
                "rename" => {
                    if let Some(name) = string_value(meta)? {
                        out.rename = Some(name);
                    }
                }
                "rename_all" => {
                    if let Some(rule) = string_value(meta)? {
                        out.rename_all = RenameRule::from_name(&rule);
                    }
                }
                _ => skip_value(meta)?,
            }
            Ok(())
        });
        out
    }
}

/// `rename` and skip flags from `#[serde(...)]` on a field or variant.
///
/// A form edits data in both directions, so `skip_serializing` and
/// `skip_deserializing` drop the member just like `skip`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerdeMemberAttrs {
    pub rename: Option<String>,
    pub skip: bool,
}

impl SerdeMemberAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> Self {
        let mut out = Self::default();
        visit_serde_keys(attrs, |key, meta| {
            match key.as_str() {
                "rename" => {
                    if let Some(name) = string_value(meta)? {
                        out.rename = Some(name);
                    }
                }
                "skip" | "skip_serializing" | "skip_deserializing" => out.skip = true,
                _ => skip_value(meta)?,
            }
            Ok(())
        });
        out
    }
}

/// Call `visit` with every top-level key of every `#[serde(...)]`
/// attribute. A malformed attribute stops its own walk; serde reports
/// those errors itself.
fn visit_serde_keys<F>(attrs: &[Attribute], mut visit: F)
where
    F: FnMut(String, &ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        let _ = attr.parse_nested_meta(|meta| {
            let key = meta
                .path
                .get_ident()
                .map(|ident| ident.to_string())
                .unwrap_or_default();
            visit(key, &meta)
        });
    }
}

/// The string of `key = "value"`. The split form `key(serialize = "..")`
/// is consumed and yields `None`.
fn string_value(meta: &ParseNestedMeta) -> syn::Result<Option<String>> {
    if !meta.input.peek(syn::Token![=]) {
        skip_value(meta)?;
        return Ok(None);
    }
    let lit: syn::LitStr = meta.value()?.parse()?;
    Ok(Some(lit.value()))
}

/// Consume whatever follows a key we do not interpret, such as
/// `default = "path"` or `bound(serialize = "..")`.
fn skip_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        let _: syn::Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        let _: proc_macro2::TokenStream = content.parse()?;
    }
    Ok(())
}

/// Resolve a field, variant or container name.
///
/// A serde `rename` only applies when the form attributes do not rename;
/// `form_name` resolves every other case, rename rules included.
pub fn merge_name(
    form_rename: Option<&str>,
    serde_rename: Option<&str>,
    form_name: impl FnOnce() -> String,
) -> String {
    match (form_rename, serde_rename) {
        (None, Some(name)) => name.to_string(),
        _ => form_name(),
    }
}
