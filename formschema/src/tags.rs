//! Raw field annotations and the form tag decoder.
//!
//! [`FieldTags`] is what a record declaration carries per field, either
//! written by `#[derive(FormSchema)]` or assembled by hand. The `form` tag is
//! a compact `key=value;flag` string decoded by [`FormTag::parse`].

use serde_json::Value;

use crate::field::FieldShape;

/// Declarative annotations attached to a field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldTags {
    /// Field must be present.
    pub required: bool,

    /// Default value, coerced by the field's shape.
    pub default: Option<String>,

    /// Comma-separated list of allowed values.
    pub enum_values: Option<String>,

    /// JSON Schema `format`.
    pub format: Option<String>,

    /// UI form tag, e.g. `label=Full name;multiline;category=Personal`.
    pub form: Option<String>,

    /// Translation key for the field label.
    pub i18n: Option<String>,

    /// SHOW rule expression (`field=value`).
    pub visible_if: Option<String>,

    /// HIDE rule expression.
    pub hide_if: Option<String>,

    /// ENABLE rule expression.
    pub enable_if: Option<String>,

    /// DISABLE rule expression.
    pub disable_if: Option<String>,

    /// Custom renderer name.
    pub renderer: Option<String>,

    /// Human-readable description.
    pub description: Option<String>,

    /// Minimum string length.
    pub min_length: Option<u64>,

    /// Maximum string length.
    pub max_length: Option<u64>,

    /// Minimum numeric value.
    pub minimum: Option<f64>,

    /// Maximum numeric value.
    pub maximum: Option<f64>,

    /// Regex pattern for strings.
    pub pattern: Option<String>,
}

impl FieldTags {
    /// Create empty tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark as required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the comma-separated enum list.
    pub fn with_enum(mut self, values: impl Into<String>) -> Self {
        self.enum_values = Some(values.into());
        self
    }

    /// Set the format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the form tag string.
    pub fn with_form(mut self, form: impl Into<String>) -> Self {
        self.form = Some(form.into());
        self
    }

    /// Set the label translation key.
    pub fn with_i18n(mut self, key: impl Into<String>) -> Self {
        self.i18n = Some(key.into());
        self
    }

    /// Set the SHOW rule expression.
    pub fn with_visible_if(mut self, expr: impl Into<String>) -> Self {
        self.visible_if = Some(expr.into());
        self
    }

    /// Set the HIDE rule expression.
    pub fn with_hide_if(mut self, expr: impl Into<String>) -> Self {
        self.hide_if = Some(expr.into());
        self
    }

    /// Set the ENABLE rule expression.
    pub fn with_enable_if(mut self, expr: impl Into<String>) -> Self {
        self.enable_if = Some(expr.into());
        self
    }

    /// Set the DISABLE rule expression.
    pub fn with_disable_if(mut self, expr: impl Into<String>) -> Self {
        self.disable_if = Some(expr.into());
        self
    }

    /// Set the renderer name.
    pub fn with_renderer(mut self, renderer: impl Into<String>) -> Self {
        self.renderer = Some(renderer.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the minimum string length.
    pub fn with_min_length(mut self, n: u64) -> Self {
        self.min_length = Some(n);
        self
    }

    /// Set the maximum string length.
    pub fn with_max_length(mut self, n: u64) -> Self {
        self.max_length = Some(n);
        self
    }

    /// Set the minimum numeric value.
    pub fn with_minimum(mut self, n: f64) -> Self {
        self.minimum = Some(n);
        self
    }

    /// Set the maximum numeric value.
    pub fn with_maximum(mut self, n: f64) -> Self {
        self.maximum = Some(n);
        self
    }

    /// Set the regex pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}

/// How a field participates in side-by-side layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Regular vertical flow.
    #[default]
    None,
    /// Merged with directly adjacent horizontal siblings.
    HorizontalAdjacent,
    /// Merged with every sibling sharing the group name, wherever it is.
    HorizontalNamed(String),
}

impl LayoutMode {
    /// Decode a `layout=` value: `horizontal` or `horizontal:<group>`.
    pub fn parse(value: &str) -> Self {
        let (kind, group) = match value.split_once(':') {
            Some((kind, group)) => (kind.trim(), Some(group.trim())),
            None => (value.trim(), None),
        };

        if kind != "horizontal" {
            return LayoutMode::None;
        }

        match group {
            Some(name) if !name.is_empty() => LayoutMode::HorizontalNamed(name.to_string()),
            _ => LayoutMode::HorizontalAdjacent,
        }
    }
}

/// Decoded form tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormTag {
    pub label: String,
    pub hidden: bool,
    pub readonly: bool,
    pub multiline: bool,
    /// Category (tab) the field belongs to.
    pub category: String,
    pub layout: LayoutMode,
    /// SHOW rule for the owning category, `field:value`.
    pub visible_if: String,
    pub hide_if: String,
    pub enable_if: String,
    pub disable_if: String,
    /// Translation key for the owning category's label.
    pub i18n: String,
}

impl FormTag {
    /// Parse a form tag like `label=Full name;multiline;readonly`.
    pub fn parse(tag: &str) -> Self {
        let mut form = FormTag::default();

        for part in tag.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (key, value) = match part.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim())),
                None => (part, None),
            };

            match (key, value) {
                ("hidden", _) => form.hidden = true,
                ("readonly", _) => form.readonly = true,
                ("multiline", _) => form.multiline = true,
                ("label", Some(v)) => form.label = v.to_string(),
                ("category", Some(v)) => form.category = v.to_string(),
                ("layout", Some(v)) => form.layout = LayoutMode::parse(v),
                ("i18n", Some(v)) => form.i18n = v.to_string(),
                ("visibleIf", Some(v)) => form.visible_if = v.to_string(),
                ("hideIf", Some(v)) => form.hide_if = v.to_string(),
                ("enableIf", Some(v)) => form.enable_if = v.to_string(),
                ("disableIf", Some(v)) => form.disable_if = v.to_string(),
                _ => {}
            }
        }

        form
    }
}

/// Coerce a default value string by the field's shape.
///
/// Falls back to the raw string when it does not parse.
pub fn parse_default_value(raw: &str, shape: &FieldShape) -> Value {
    let fallback = || Value::String(raw.to_string());

    match shape.unwrap_optional() {
        FieldShape::Boolean => crate::rule::parse_bool_literal(raw)
            .map(Value::Bool)
            .unwrap_or_else(fallback),
        FieldShape::Integer => raw.parse::<i64>().map(Value::from).unwrap_or_else(|_| fallback()),
        FieldShape::Unsigned => raw.parse::<u64>().map(Value::from).unwrap_or_else(|_| fallback()),
        FieldShape::Number => raw
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(fallback),
        _ => fallback(),
    }
}

/// Split a comma-separated enum list, dropping empty entries.
pub fn parse_enum_values(raw: &str) -> Vec<Value> {
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| Value::String(v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_form_tag_flags_and_values() {
        let form = FormTag::parse("label=Full name; multiline ;readonly");
        assert_eq!(form.label, "Full name");
        assert!(form.multiline);
        assert!(form.readonly);
        assert!(!form.hidden);
    }

    #[test]
    fn test_parse_form_tag_empty() {
        assert_eq!(FormTag::parse(""), FormTag::default());
        assert_eq!(FormTag::parse(";;"), FormTag::default());
    }

    #[test]
    fn test_parse_form_tag_value_less_keys_ignored() {
        let form = FormTag::parse("label;category;i18n;visibleIf");
        assert_eq!(form, FormTag::default());
    }

    #[test]
    fn test_parse_form_tag_category_rules() {
        let form = FormTag::parse("category=Work;visibleIf=role:admin;i18n=tabs.work");
        assert_eq!(form.category, "Work");
        assert_eq!(form.visible_if, "role:admin");
        assert_eq!(form.i18n, "tabs.work");
    }

    #[test]
    fn test_parse_form_tag_unknown_key() {
        let form = FormTag::parse("color=red;hidden");
        assert!(form.hidden);
    }

    #[test]
    fn test_layout_mode_parse() {
        assert_eq!(LayoutMode::parse("horizontal"), LayoutMode::HorizontalAdjacent);
        assert_eq!(
            LayoutMode::parse("horizontal:addr"),
            LayoutMode::HorizontalNamed("addr".to_string())
        );
        assert_eq!(LayoutMode::parse("horizontal:"), LayoutMode::HorizontalAdjacent);
        assert_eq!(LayoutMode::parse("vertical"), LayoutMode::None);
    }

    #[test]
    fn test_parse_form_tag_layout() {
        let form = FormTag::parse("layout=horizontal:address");
        assert_eq!(form.layout, LayoutMode::HorizontalNamed("address".to_string()));
    }

    #[test]
    fn test_parse_default_value_by_shape() {
        assert_eq!(parse_default_value("true", &FieldShape::Boolean), json!(true));
        assert_eq!(parse_default_value("10", &FieldShape::Integer), json!(10));
        assert_eq!(parse_default_value("-3", &FieldShape::Integer), json!(-3));
        assert_eq!(parse_default_value("7", &FieldShape::Unsigned), json!(7));
        assert_eq!(parse_default_value("19.99", &FieldShape::Number), json!(19.99));
        assert_eq!(parse_default_value("blue", &FieldShape::String), json!("blue"));
    }

    #[test]
    fn test_parse_default_value_fallback() {
        assert_eq!(parse_default_value("abc", &FieldShape::Integer), json!("abc"));
        assert_eq!(parse_default_value("-1", &FieldShape::Unsigned), json!("-1"));
        assert_eq!(parse_default_value("maybe", &FieldShape::Boolean), json!("maybe"));
    }

    #[test]
    fn test_parse_default_value_through_optional() {
        let shape = FieldShape::Optional(Box::new(FieldShape::Integer));
        assert_eq!(parse_default_value("5", &shape), json!(5));
    }

    #[test]
    fn test_parse_enum_values() {
        assert_eq!(
            parse_enum_values("active, inactive,,pending "),
            vec![json!("active"), json!("inactive"), json!("pending")]
        );
        assert!(parse_enum_values(" , ").is_empty());
    }
}
