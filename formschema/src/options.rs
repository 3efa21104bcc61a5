//! Generation options: translation, JSON Schema draft, renderers and
//! role-based field access.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::i18n::Translator;

/// Access level a role grants on a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Full access. The default.
    #[default]
    #[serde(alias = "full")]
    ReadWrite,
    /// Rendered as readonly.
    ReadOnly,
    /// Removed from the UI schema.
    Hidden,
}

/// Field name to access level overrides for one role.
pub type FieldPermissions = HashMap<String, AccessLevel>;

/// JSON Schema draft announced in `$schema`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Draft {
    #[default]
    #[serde(rename = "draft-07")]
    Draft07,
    #[serde(rename = "2019-09")]
    Draft2019_09,
}

impl Draft {
    /// The `$schema` URL for this draft.
    pub fn url(&self) -> &'static str {
        match self {
            Draft::Draft07 => "http://json-schema.org/draft-07/schema#",
            Draft::Draft2019_09 => "https://json-schema.org/draft/2019-09/schema",
        }
    }

    /// Parse a draft name; anything other than `2019-09` selects draft-07.
    pub fn from_name(name: &str) -> Self {
        if name == "2019-09" {
            Draft::Draft2019_09
        } else {
            Draft::Draft07
        }
    }
}

/// Options controlling schema and UI schema generation.
#[derive(Clone, Default)]
pub struct Options {
    /// Localizes labels. `None` disables translation.
    pub translator: Option<Arc<dyn Translator>>,

    /// Locale passed to the translator, e.g. `uk` or `en`.
    pub locale: Option<String>,

    /// JSON Schema draft.
    pub draft: Draft,

    /// Scope (e.g. `#/properties/bio`) to renderer name.
    pub renderers: HashMap<String, String>,

    /// Role name to field permissions.
    pub role_permissions: HashMap<String, FieldPermissions>,

    /// Active role.
    pub role: Option<String>,
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("translator", &self.translator.as_ref().map(|_| "<translator>"))
            .field("locale", &self.locale)
            .field("draft", &self.draft)
            .field("renderers", &self.renderers)
            .field("role_permissions", &self.role_permissions)
            .field("role", &self.role)
            .finish()
    }
}

impl Options {
    /// Default options: draft-07, no translation, no roles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the translator.
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Arc::new(translator));
        self
    }

    /// Set the locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set the draft.
    pub fn with_draft(mut self, draft: Draft) -> Self {
        self.draft = draft;
        self
    }

    /// Map a scope to a renderer.
    pub fn with_renderer(mut self, scope: impl Into<String>, renderer: impl Into<String>) -> Self {
        self.renderers.insert(scope.into(), renderer.into());
        self
    }

    /// Register permissions for a role.
    pub fn with_role_permissions(
        mut self,
        role: impl Into<String>,
        permissions: FieldPermissions,
    ) -> Self {
        self.role_permissions.insert(role.into(), permissions);
        self
    }

    /// Set the active role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Translator and locale, when both are configured.
    pub(crate) fn translation(&self) -> Option<(&dyn Translator, &str)> {
        match (&self.translator, &self.locale) {
            (Some(t), Some(locale)) if !locale.is_empty() => Some((t.as_ref(), locale.as_str())),
            _ => None,
        }
    }

    /// Access level of `field` under the active role.
    pub fn access_for(&self, field: &str) -> AccessLevel {
        resolve_access(field, self.role.as_deref(), &self.role_permissions)
    }
}

/// Look up the access override for a field.
///
/// Defaults to [`AccessLevel::ReadWrite`] when the role is absent or has no
/// entry for the field.
pub fn resolve_access(
    field: &str,
    role: Option<&str>,
    table: &HashMap<String, FieldPermissions>,
) -> AccessLevel {
    role.filter(|r| !r.is_empty())
        .and_then(|r| table.get(r))
        .and_then(|perms| perms.get(field))
        .copied()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MapTranslator;

    fn permissions() -> HashMap<String, FieldPermissions> {
        let mut viewer = FieldPermissions::new();
        viewer.insert("salary".to_string(), AccessLevel::Hidden);
        viewer.insert("email".to_string(), AccessLevel::ReadOnly);
        let mut table = HashMap::new();
        table.insert("viewer".to_string(), viewer);
        table
    }

    #[test]
    fn test_resolve_access() {
        let table = permissions();
        assert_eq!(resolve_access("salary", Some("viewer"), &table), AccessLevel::Hidden);
        assert_eq!(resolve_access("email", Some("viewer"), &table), AccessLevel::ReadOnly);
        assert_eq!(resolve_access("name", Some("viewer"), &table), AccessLevel::ReadWrite);
    }

    #[test]
    fn test_resolve_access_defaults() {
        let table = permissions();
        assert_eq!(resolve_access("salary", None, &table), AccessLevel::ReadWrite);
        assert_eq!(resolve_access("salary", Some(""), &table), AccessLevel::ReadWrite);
        assert_eq!(resolve_access("salary", Some("admin"), &table), AccessLevel::ReadWrite);
        assert_eq!(
            resolve_access("salary", Some("viewer"), &HashMap::new()),
            AccessLevel::ReadWrite
        );
    }

    #[test]
    fn test_draft_urls() {
        assert_eq!(Draft::default().url(), "http://json-schema.org/draft-07/schema#");
        assert_eq!(
            Draft::from_name("2019-09").url(),
            "https://json-schema.org/draft/2019-09/schema"
        );
        assert_eq!(Draft::from_name("draft-04"), Draft::Draft07);
    }

    #[test]
    fn test_translation_requires_locale() {
        let opts = Options::new().with_translator(MapTranslator::default());
        assert!(opts.translation().is_none());

        let opts = opts.with_locale("en");
        assert!(opts.translation().is_some());

        let opts = Options::new().with_locale("en");
        assert!(opts.translation().is_none());
    }

    #[test]
    fn test_access_level_deserialize() {
        let levels: Vec<AccessLevel> =
            serde_json::from_str(r#"["readwrite", "full", "readonly", "hidden"]"#).unwrap();
        assert_eq!(
            levels,
            vec![
                AccessLevel::ReadWrite,
                AccessLevel::ReadWrite,
                AccessLevel::ReadOnly,
                AccessLevel::Hidden
            ]
        );
    }
}
