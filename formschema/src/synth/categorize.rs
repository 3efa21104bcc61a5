//! Tab categorization of the root sibling list.

use indexmap::IndexMap;
use tracing::debug;

use super::{group, Draft};
use crate::metadata::translate_label;
use crate::options::Options;
use crate::rule::RuleSpec;
use crate::uischema::{Layout, LayoutKind, UiNode};

/// Bucket name of nodes without a category.
pub(crate) const OTHER_CATEGORY: &str = "Other";

#[derive(Default)]
struct Bucket {
    members: Vec<Draft>,
    rule: Option<RuleSpec>,
    i18n: Option<String>,
}

/// Wrap the root drafts into a `Categorization` of `Category` tabs.
///
/// Tabs appear in first-occurrence order of their names. Each tab lifts the
/// first category rule and the first category translation key found among
/// its members, and re-groups its members horizontally.
pub(crate) fn categorize(drafts: Vec<Draft>, options: &Options) -> Layout {
    let mut buckets: IndexMap<String, Bucket> = IndexMap::new();

    for mut draft in drafts {
        let hint = draft.hints.category.take();
        let name = hint
            .as_ref()
            .map(|h| h.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(OTHER_CATEGORY);

        let bucket = buckets.entry(name.to_string()).or_default();
        if let Some(hint) = hint {
            if bucket.rule.is_none() {
                bucket.rule = hint.rule;
            }
            if bucket.i18n.is_none() {
                bucket.i18n = hint.i18n;
            }
        }
        bucket.members.push(draft);
    }

    debug!(categories = buckets.len(), "categorizing root elements");

    let categories: Vec<UiNode> = buckets
        .into_iter()
        .map(|(name, bucket)| {
            let mut category = Layout::new(LayoutKind::Category, group(bucket.members));
            category.rule = bucket.rule.as_ref().and_then(RuleSpec::to_form_rule);

            let label = match &bucket.i18n {
                Some(key) => translate_label(&name, key, options),
                None => name,
            };
            category.label = Some(label);
            category.i18n = bucket.i18n;
            UiNode::from(category)
        })
        .collect();

    Layout::new(LayoutKind::Categorization, categories)
}
