//! Generated artifact: data schema plus UI schema.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::jsonschema::JsonSchema;
use crate::uischema::UiNode;

/// The pair of documents a JSON Forms renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormArtifact {
    pub schema: JsonSchema,
    pub uischema: UiNode,
}

impl FormArtifact {
    pub fn new(schema: JsonSchema, uischema: UiNode) -> Self {
        Self { schema, uischema }
    }

    /// Pretty-printed `{"schema": ..., "uischema": ...}` document.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Serialize)
    }

    /// The artifact as a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(Error::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uischema::Layout;
    use serde_json::json;

    #[test]
    fn test_artifact_shape() {
        let artifact = FormArtifact::new(JsonSchema::object(), Layout::vertical(Vec::new()).into());
        assert_eq!(
            artifact.to_value().unwrap(),
            json!({
                "schema": {"type": "object"},
                "uischema": {"type": "VerticalLayout", "elements": []}
            })
        );
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let artifact = FormArtifact::new(JsonSchema::object(), Layout::vertical(Vec::new()).into());
        let text = artifact.to_json_pretty().unwrap();
        assert!(text.contains('\n'));
        let parsed: FormArtifact = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, artifact);
    }
}
