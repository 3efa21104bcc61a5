//! UI layout synthesis.
//!
//! Turns an ordered field list into a JSON Forms presentation tree in three
//! steps:
//!
//! 1. [`builder`] walks the fields and produces one draft node per visible
//!    field, recursing into nested records and record arrays.
//! 2. [`grouping`] merges fields marked `layout=horizontal` into
//!    `HorizontalLayout` containers, one sibling list at a time.
//! 3. [`categorize`] wraps the root list into a `Categorization` when any
//!    root field names a category.
//!
//! Layout and category hints travel next to each node in a [`Draft`] rather
//! than inside the node's public options, so they cannot leak into the
//! returned tree: turning a draft into a [`UiNode`] discards them.

mod builder;
mod categorize;
mod grouping;

use crate::field::FieldDescriptor;
use crate::options::Options;
use crate::rule::RuleSpec;
use crate::uischema::{Layout, UiNode};

pub(crate) use builder::build;
pub(crate) use categorize::categorize;
pub(crate) use grouping::group;

/// Scope prefix of root-level fields and of array item templates.
pub(crate) const ROOT_SCOPE: &str = "#/properties";

/// Build the UI schema tree for a record's fields.
///
/// The root is a `VerticalLayout`, or a `Categorization` when any root-level
/// field names a category.
pub fn synthesize(fields: &[FieldDescriptor], options: &Options) -> UiNode {
    let drafts = build(fields, ROOT_SCOPE, options);

    if drafts.iter().any(Draft::has_category) {
        return categorize(drafts, options).into();
    }

    Layout::vertical(group(drafts)).into()
}

/// A node under construction plus its transient hints.
#[derive(Debug, Clone)]
pub(crate) struct Draft {
    pub node: UiNode,
    pub hints: Hints,
}

impl Draft {
    /// A draft with no hints.
    #[cfg(test)]
    pub fn plain(node: impl Into<UiNode>) -> Self {
        Self {
            node: node.into(),
            hints: Hints::default(),
        }
    }

    pub fn with_hints(node: impl Into<UiNode>, hints: Hints) -> Self {
        Self {
            node: node.into(),
            hints,
        }
    }

    pub fn has_category(&self) -> bool {
        self.hints.category.is_some()
    }
}

/// Bookkeeping consumed by the grouping and categorization passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Hints {
    pub layout: Option<LayoutHint>,
    pub category: Option<CategoryHint>,
}

/// Side-by-side placement requested by a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LayoutHint {
    /// Merge with directly adjacent unnamed horizontal siblings.
    Adjacent,
    /// Merge with every sibling naming the same group.
    Named(String),
}

/// Category membership plus what the category may lift from this member.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryHint {
    pub name: String,
    pub rule: Option<RuleSpec>,
    pub i18n: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldShape;
    use crate::tags::FieldTags;
    use crate::uischema::LayoutKind;
    use proptest::prelude::*;

    fn field(name: &str, form: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, FieldShape::String).with_tags(FieldTags::new().with_form(form))
    }

    #[test]
    fn test_synthesize_empty_record() {
        let root = synthesize(&[], &Options::new());
        let layout = root.as_layout().unwrap();
        assert_eq!(layout.kind, LayoutKind::VerticalLayout);
        assert!(layout.elements.is_empty());
    }

    #[test]
    fn test_synthesize_without_categories_is_vertical() {
        let root = synthesize(
            &[field("first", "layout=horizontal"), field("last", "layout=horizontal"), field("email", "")],
            &Options::new(),
        );
        let layout = root.as_layout().unwrap();
        assert_eq!(layout.kind, LayoutKind::VerticalLayout);
        assert_eq!(layout.elements.len(), 2);
        assert_eq!(
            layout.elements[0].as_layout().map(|l| l.kind),
            Some(LayoutKind::HorizontalLayout)
        );
    }

    #[test]
    fn test_synthesize_with_category_is_categorization() {
        let root = synthesize(&[field("name", "category=Personal")], &Options::new());
        assert_eq!(root.as_layout().map(|l| l.kind), Some(LayoutKind::Categorization));
    }

    #[test]
    fn test_only_hidden_fields_yield_empty_root() {
        let root = synthesize(&[field("secret", "hidden;category=Private")], &Options::new());
        let layout = root.as_layout().unwrap();
        assert_eq!(layout.kind, LayoutKind::VerticalLayout);
        assert!(layout.elements.is_empty());
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Form tags that never produce a category.
    fn uncategorized_form() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("layout=horizontal".to_string()),
            (0u8..3).prop_map(|g| format!("layout=horizontal:g{}", g)),
            Just("hidden".to_string()),
            Just("readonly;layout=horizontal".to_string()),
        ]
    }

    /// A leaf form, or a nested record of leaf forms under a group form.
    fn uncategorized_field() -> impl Strategy<Value = (String, Option<Vec<String>>)> {
        (
            uncategorized_form(),
            prop::option::weighted(0.2, prop::collection::vec(uncategorized_form(), 0..5)),
        )
    }

    fn fields_for(specs: &[(String, Option<Vec<String>>)]) -> Vec<FieldDescriptor> {
        specs
            .iter()
            .enumerate()
            .map(|(i, (form, nested))| {
                let name = format!("f{}", i);
                match nested {
                    None => field(&name, form),
                    Some(inner) => {
                        let children = inner
                            .iter()
                            .enumerate()
                            .map(|(j, form)| field(&format!("c{}", j), form))
                            .collect();
                        FieldDescriptor::new(name, FieldShape::Record(children))
                            .with_tags(FieldTags::new().with_form(form.as_str()))
                    }
                }
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_uncategorized_root_is_grouped_vertical(
            specs in prop::collection::vec(uncategorized_field(), 0..12)
        ) {
            let fields = fields_for(&specs);
            let opts = Options::new();

            let root = synthesize(&fields, &opts);
            let expected = group(build(&fields, ROOT_SCOPE, &opts));

            let layout = root.as_layout().unwrap();
            prop_assert_eq!(layout.kind, LayoutKind::VerticalLayout);
            prop_assert!(layout.label.is_none());
            prop_assert_eq!(layout.elements.len(), expected.len());
            for (got, want) in layout.elements.iter().zip(&expected) {
                prop_assert_eq!(got, want);
            }
        }
    }
}
