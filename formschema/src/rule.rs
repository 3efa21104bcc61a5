//! Conditional visibility and enablement rules.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Effect applied when a rule's condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Effect {
    Show,
    Hide,
    Enable,
    Disable,
}

impl Effect {
    /// Selection priority, highest first.
    pub const PRIORITY: [Effect; 4] = [Effect::Show, Effect::Hide, Effect::Enable, Effect::Disable];

    /// The JSON Forms spelling of this effect.
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::Show => "SHOW",
            Effect::Hide => "HIDE",
            Effect::Enable => "ENABLE",
            Effect::Disable => "DISABLE",
        }
    }
}

/// A JSON Forms rule attached to a control or layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub effect: Effect,
    pub condition: Condition,
}

/// Rule condition: the value at `scope` must equal `schema.const`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub scope: String,
    pub schema: ConstSchema,
}

/// Schema holding the comparison literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstSchema {
    #[serde(rename = "const")]
    pub constant: Value,
}

/// An effect paired with its not-yet-parsed `field=value` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub effect: Effect,
    pub expr: String,
}

impl RuleSpec {
    pub fn new(effect: Effect, expr: impl Into<String>) -> Self {
        Self {
            effect,
            expr: expr.into(),
        }
    }

    /// Pick the first non-empty expression in priority order
    /// (show, hide, enable, disable).
    pub fn select(candidates: [(Effect, &str); 4]) -> Option<RuleSpec> {
        candidates
            .into_iter()
            .find(|(_, expr)| !expr.is_empty())
            .map(|(effect, expr)| RuleSpec::new(effect, expr))
    }

    /// Build the rule from a `field=value` expression.
    pub fn to_rule(&self) -> Option<Rule> {
        parse_rule_expression(&self.expr, self.effect)
    }

    /// Build the rule from a form-tag `field:value` expression.
    pub fn to_form_rule(&self) -> Option<Rule> {
        parse_form_rule_expression(&self.expr, self.effect)
    }
}

/// Parse `field=value` into a rule scoped at `#/properties/<field>`.
///
/// Returns `None` for an empty expression, a missing separator or an empty
/// field name.
pub fn parse_rule_expression(expr: &str, effect: Effect) -> Option<Rule> {
    let (field, raw_value) = expr.split_once('=')?;
    let field = field.trim();
    if field.is_empty() {
        return None;
    }

    Some(Rule {
        effect,
        condition: Condition {
            scope: format!("#/properties/{}", field),
            schema: ConstSchema {
                constant: coerce_literal(raw_value.trim()),
            },
        },
    })
}

/// Parse a form-tag expression, where `:` separates field and value because
/// `=` already delimits form tag keys.
pub fn parse_form_rule_expression(expr: &str, effect: Effect) -> Option<Rule> {
    let normalized = expr.replacen(':', "=", 1);
    parse_rule_expression(&normalized, effect)
}

/// Coerce a literal: boolean, then integer, then finite float, then string.
pub fn coerce_literal(raw: &str) -> Value {
    if let Some(b) = parse_bool_literal(raw) {
        return Value::Bool(b);
    }

    if let Ok(i) = raw.parse::<i64>() {
        return Value::from(i);
    }

    if let Some(n) = raw.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
        return Value::Number(n);
    }

    Value::String(raw.to_string())
}

/// Boolean spellings accepted in tags.
pub fn parse_bool_literal(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
