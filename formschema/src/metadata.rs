//! Decoded per-field metadata.
//!
//! [`decode_field_metadata`] folds a field's raw [`FieldTags`](crate::tags::FieldTags),
//! its form tag and the active role's permissions into one immutable
//! [`FieldMetadata`] record that the UI builder consumes.

use crate::field::FieldDescriptor;
use crate::options::{AccessLevel, Options};
use crate::rule::{Effect, RuleSpec};
use crate::tags::{FormTag, LayoutMode};

/// Everything the UI builder needs to know about one field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMetadata {
    /// Label from the form tag; empty when not set.
    pub label: String,
    pub hidden: bool,
    pub readonly: bool,
    pub multiline: bool,
    /// Category (tab) name; empty means uncategorized.
    pub category: String,
    pub layout: LayoutMode,
    /// The field's own rule, chosen by effect priority.
    pub rule: Option<RuleSpec>,
    /// Rule for the owning category, from the form tag.
    pub category_rule: Option<RuleSpec>,
    /// Translation key for the field label.
    pub i18n: String,
    /// Translation key for the owning category label, from the form tag.
    pub category_i18n: String,
    /// Resolved renderer name; empty when none applies.
    pub renderer: String,
    /// Role override.
    pub access: AccessLevel,
}

impl FieldMetadata {
    /// Whether the field leaves no trace in the UI schema.
    pub fn is_hidden(&self) -> bool {
        self.hidden || self.access == AccessLevel::Hidden
    }

    /// Whether the field renders as readonly.
    pub fn is_readonly(&self) -> bool {
        self.readonly || self.access == AccessLevel::ReadOnly
    }
}

/// Decode the metadata of `field`, whose scope is `scope`.
///
/// Total: malformed pieces decode to their empty defaults.
pub fn decode_field_metadata(field: &FieldDescriptor, scope: &str, options: &Options) -> FieldMetadata {
    let tags = &field.tags;
    let form = tags.form.as_deref().map(FormTag::parse).unwrap_or_default();

    let rule = select_rule([
        tags.visible_if.as_deref(),
        tags.hide_if.as_deref(),
        tags.enable_if.as_deref(),
        tags.disable_if.as_deref(),
    ]);

    let category_rule = select_rule([
        Some(form.visible_if.as_str()),
        Some(form.hide_if.as_str()),
        Some(form.enable_if.as_str()),
        Some(form.disable_if.as_str()),
    ]);

    let renderer = match tags.renderer.as_deref() {
        Some(r) if !r.is_empty() => r.to_string(),
        _ => options.renderers.get(scope).cloned().unwrap_or_default(),
    };

    FieldMetadata {
        label: form.label,
        hidden: form.hidden,
        readonly: form.readonly,
        multiline: form.multiline,
        category: form.category,
        layout: form.layout,
        rule,
        category_rule,
        i18n: tags.i18n.clone().unwrap_or_default(),
        category_i18n: form.i18n,
        renderer,
        access: options.access_for(&field.name),
    }
}

fn select_rule(exprs: [Option<&str>; 4]) -> Option<RuleSpec> {
    let [show, hide, enable, disable] = exprs.map(Option::unwrap_or_default);
    RuleSpec::select([
        (Effect::Show, show),
        (Effect::Hide, hide),
        (Effect::Enable, enable),
        (Effect::Disable, disable),
    ])
}

/// Resolve the display label of a field.
///
/// Without translation the label wins, falling back to the key. With a
/// translator and locale, the key (or the label when there is no key) is
/// looked up.
pub fn translate_label(label: &str, key: &str, options: &Options) -> String {
    let Some((translator, locale)) = options.translation() else {
        if !key.is_empty() && label.is_empty() {
            return key.to_string();
        }
        return label.to_string();
    };

    let key = if key.is_empty() { label } else { key };
    if key.is_empty() {
        return String::new();
    }

    translator.translate(key, locale)
}
