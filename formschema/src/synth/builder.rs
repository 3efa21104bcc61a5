//! Node builder: one draft per visible field.

use tracing::{debug, trace};

use super::{group, CategoryHint, Draft, Hints, LayoutHint, ROOT_SCOPE};
use crate::field::FieldDescriptor;
use crate::metadata::{decode_field_metadata, translate_label, FieldMetadata};
use crate::options::Options;
use crate::tags::LayoutMode;
use crate::uischema::{Control, Layout, LayoutKind, UiNode};

/// Build drafts for `fields`, scoping each as `<prefix>/<name>`.
pub(crate) fn build(fields: &[FieldDescriptor], prefix: &str, options: &Options) -> Vec<Draft> {
    fields
        .iter()
        .filter_map(|field| build_field(field, prefix, options))
        .collect()
}

fn build_field(field: &FieldDescriptor, prefix: &str, options: &Options) -> Option<Draft> {
    let scope = format!("{}/{}", prefix, field.name);
    let meta = decode_field_metadata(field, &scope, options);

    if meta.is_hidden() {
        debug!(field = %field.name, access = ?meta.access, "skipping hidden field");
        return None;
    }

    if let Some(nested) = field.shape.as_record() {
        return Some(build_group(field, nested, &scope, meta, options));
    }

    Some(build_control(field, scope, meta, options))
}

/// A nested record becomes a `Group` whose children are grouped right away.
fn build_group(
    field: &FieldDescriptor,
    nested: &[FieldDescriptor],
    scope: &str,
    meta: FieldMetadata,
    options: &Options,
) -> Draft {
    let label = if meta.label.is_empty() {
        field.name.as_str()
    } else {
        meta.label.as_str()
    };
    let label = translate_label(label, &meta.i18n, options);

    let children = build(nested, &format!("{}/properties", scope), options)
        .into_iter()
        .map(|mut child| {
            if let Some(hint) = child.hints.category.take() {
                trace!(group = %field.name, category = %hint.name, "dropping category hint inside group");
            }
            child
        })
        .collect();

    let mut layout = Layout::new(LayoutKind::Group, group(children)).with_label(label);
    layout.rule = meta.rule.as_ref().and_then(|spec| spec.to_rule());

    Draft::with_hints(
        layout,
        Hints {
            layout: None,
            category: category_hint(meta),
        },
    )
}

fn build_control(field: &FieldDescriptor, scope: String, meta: FieldMetadata, options: &Options) -> Draft {
    let mut control = Control::new(scope);

    let label = translate_label(&meta.label, &meta.i18n, options);
    control.label = (!label.is_empty()).then_some(label);

    control.options.readonly = meta.is_readonly();
    control.options.multi = meta.multiline;
    control.options.renderer = (!meta.renderer.is_empty()).then(|| meta.renderer.clone());
    control.options.detail = field
        .shape
        .element_record()
        .and_then(|element| build_detail(field, element, options))
        .map(Box::new);
    control.rule = meta.rule.as_ref().and_then(|spec| spec.to_rule());

    let layout = match &meta.layout {
        LayoutMode::None => None,
        LayoutMode::HorizontalAdjacent => Some(LayoutHint::Adjacent),
        LayoutMode::HorizontalNamed(name) => Some(LayoutHint::Named(name.clone())),
    };

    Draft::with_hints(
        control,
        Hints {
            layout,
            category: category_hint(meta),
        },
    )
}

/// Item template for an array of records, scoped relative to the item.
fn build_detail(field: &FieldDescriptor, element: &[FieldDescriptor], options: &Options) -> Option<UiNode> {
    let drafts = build(element, ROOT_SCOPE, options);
    if drafts.is_empty() {
        trace!(field = %field.name, "array element has no visible fields, omitting detail");
        return None;
    }

    let drafts = drafts
        .into_iter()
        .map(|mut d| {
            d.hints.category = None;
            d
        })
        .collect();

    Some(Layout::vertical(group(drafts)).into())
}

fn category_hint(meta: FieldMetadata) -> Option<CategoryHint> {
    if meta.category.is_empty() {
        return None;
    }

    Some(CategoryHint {
        name: meta.category,
        rule: meta.category_rule,
        i18n: (!meta.category_i18n.is_empty()).then_some(meta.category_i18n),
    })
}
