//! JSON Forms UI schema tree.
//!
//! Only the public keys of the UI schema live here. Layout and category hints
//! used while synthesizing are carried separately and never reach these types.

use serde::{Deserialize, Serialize};

use crate::rule::Rule;

/// A node of the presentation tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UiNode {
    Control(Control),
    Layout(Layout),
}

impl UiNode {
    /// The control, when this node is one.
    pub fn as_control(&self) -> Option<&Control> {
        match self {
            UiNode::Control(c) => Some(c),
            UiNode::Layout(_) => None,
        }
    }

    /// The layout, when this node is one.
    pub fn as_layout(&self) -> Option<&Layout> {
        match self {
            UiNode::Layout(l) => Some(l),
            UiNode::Control(_) => None,
        }
    }

    pub fn rule(&self) -> Option<&Rule> {
        match self {
            UiNode::Control(c) => c.rule.as_ref(),
            UiNode::Layout(l) => l.rule.as_ref(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            UiNode::Control(c) => c.label.as_deref(),
            UiNode::Layout(l) => l.label.as_deref(),
        }
    }

    /// Visit this node and every descendant, depth first, including
    /// array detail layouts.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a UiNode)) {
        visit(self);
        match self {
            UiNode::Control(c) => {
                if let Some(detail) = c.options.detail.as_deref() {
                    detail.walk(visit);
                }
            }
            UiNode::Layout(l) => {
                for child in &l.elements {
                    child.walk(visit);
                }
            }
        }
    }
}

impl From<Control> for UiNode {
    fn from(control: Control) -> Self {
        UiNode::Control(control)
    }
}

impl From<Layout> for UiNode {
    fn from(layout: Layout) -> Self {
        UiNode::Layout(layout)
    }
}

/// Discriminator of a control. Always serializes as `"Control"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlKind {
    #[default]
    Control,
}

/// A control bound to one data location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    #[serde(rename = "type")]
    pub kind: ControlKind,

    /// JSON pointer-like path, e.g. `#/properties/address/properties/city`.
    pub scope: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "ControlOptions::is_empty", default)]
    pub options: ControlOptions,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
}

impl Control {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            kind: ControlKind::Control,
            scope: scope.into(),
            label: None,
            options: ControlOptions::default(),
            rule: None,
        }
    }
}

/// Public options of a control. Absent from the output when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlOptions {
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub readonly: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub multi: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub renderer: Option<String>,

    /// Item template of an array of records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Box<UiNode>>,
}

impl ControlOptions {
    pub fn is_empty(&self) -> bool {
        !self.readonly && !self.multi && self.renderer.is_none() && self.detail.is_none()
    }
}

/// Layout container kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutKind {
    VerticalLayout,
    HorizontalLayout,
    Group,
    Categorization,
    Category,
}

/// A container of other nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(rename = "type")]
    pub kind: LayoutKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n: Option<String>,

    #[serde(default)]
    pub elements: Vec<UiNode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
}

impl Layout {
    pub fn new(kind: LayoutKind, elements: Vec<UiNode>) -> Self {
        Self {
            kind,
            label: None,
            i18n: None,
            elements,
            rule: None,
        }
    }

    pub fn vertical(elements: Vec<UiNode>) -> Self {
        Self::new(LayoutKind::VerticalLayout, elements)
    }

    pub fn horizontal(elements: Vec<UiNode>) -> Self {
        Self::new(LayoutKind::HorizontalLayout, elements)
    }

    /// Attach a label; empty labels are dropped.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.label = (!label.is_empty()).then_some(label);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{parse_rule_expression, Effect};
    use serde_json::json;

    #[test]
    fn test_control_without_options_omits_key() {
        let control = Control::new("#/properties/name");
        assert_eq!(
            serde_json::to_value(UiNode::from(control)).unwrap(),
            json!({"type": "Control", "scope": "#/properties/name"})
        );
    }

    #[test]
    fn test_control_options_serialize_only_set_keys() {
        let mut control = Control::new("#/properties/bio");
        control.label = Some("Bio".to_string());
        control.options.multi = true;
        assert_eq!(
            serde_json::to_value(&control).unwrap(),
            json!({
                "type": "Control",
                "scope": "#/properties/bio",
                "label": "Bio",
                "options": {"multi": true}
            })
        );
    }

    #[test]
    fn test_layout_always_has_elements() {
        let layout = Layout::vertical(Vec::new());
        assert_eq!(
            serde_json::to_value(&layout).unwrap(),
            json!({"type": "VerticalLayout", "elements": []})
        );
    }

    #[test]
    fn test_group_with_rule() {
        let mut group = Layout::new(LayoutKind::Group, Vec::new()).with_label("Address");
        group.rule = parse_rule_expression("active=true", Effect::Show);
        assert_eq!(
            serde_json::to_value(&group).unwrap(),
            json!({
                "type": "Group",
                "label": "Address",
                "elements": [],
                "rule": {
                    "effect": "SHOW",
                    "condition": {"scope": "#/properties/active", "schema": {"const": true}}
                }
            })
        );
    }

    #[test]
    fn test_with_empty_label_is_absent() {
        assert!(Layout::vertical(Vec::new()).with_label("").label.is_none());
    }

    #[test]
    fn test_deserialize_untagged() {
        let node: UiNode = serde_json::from_value(json!({
            "type": "HorizontalLayout",
            "elements": [{"type": "Control", "scope": "#/properties/a"}]
        }))
        .unwrap();
        let layout = node.as_layout().unwrap();
        assert_eq!(layout.kind, LayoutKind::HorizontalLayout);
        assert_eq!(layout.elements[0].as_control().unwrap().scope, "#/properties/a");
    }

    #[test]
    fn test_walk_visits_detail() {
        let mut control = Control::new("#/properties/items");
        control.options.detail = Some(Box::new(UiNode::from(Layout::vertical(vec![
            Control::new("#/properties/sku").into(),
        ]))));
        let root = UiNode::from(Layout::vertical(vec![control.into()]));

        let mut count = 0;
        root.walk(&mut |_| count += 1);
        assert_eq!(count, 4);
    }
}
