//! Configuration management for the CLI.
//!
//! This module loads `formschema.toml`, merges command-line overrides into
//! it and turns the result into generation [`Options`].

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use formschema::{AccessLevel, Draft, MapTranslator, Options};
use serde::Deserialize;

use crate::error::{CliResult, ConfigError};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "formschema.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generation: GenerationConfig,

    pub output: OutputConfig,

    /// Control scope to renderer name.
    pub renderers: BTreeMap<String, String>,

    /// Role name to field access overrides.
    pub roles: BTreeMap<String, BTreeMap<String, AccessLevel>>,

    /// Locale to translation key to text.
    pub translations: BTreeMap<String, BTreeMap<String, String>>,
}

/// `[generation]` section.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Locale for label translation. Unset disables translation.
    pub locale: Option<String>,

    /// JSON Schema draft, `draft-07` or `2019-09`.
    pub draft: Draft,

    /// Active role for field access overrides.
    pub role: Option<String>,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Artifact file written by `sample` and `openapi`.
    pub file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("form.json"),
        }
    }
}

impl Config {
    /// Generation options described by this configuration.
    ///
    /// A translator is installed only when there are translations to use.
    pub fn to_options(&self) -> Options {
        let mut options = Options::new().with_draft(self.generation.draft);

        if let Some(locale) = &self.generation.locale {
            options = options.with_locale(locale.clone());
        }
        if let Some(role) = &self.generation.role {
            options = options.with_role(role.clone());
        }

        for (scope, renderer) in &self.renderers {
            options = options.with_renderer(scope.clone(), renderer.clone());
        }

        for (role, fields) in &self.roles {
            let permissions: HashMap<String, AccessLevel> = fields
                .iter()
                .map(|(field, access)| (field.clone(), *access))
                .collect();
            options = options.with_role_permissions(role.clone(), permissions);
        }

        if !self.translations.is_empty() {
            let translations = self
                .translations
                .iter()
                .map(|(locale, messages)| {
                    let messages: HashMap<String, String> = messages
                        .iter()
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect();
                    (locale.clone(), messages)
                })
                .collect();
            options = options.with_translator(MapTranslator::new(translations));
        }

        options
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// Without a path, `formschema.toml` in the working directory is used
    /// when present and defaults otherwise. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    }
                    .into());
                }
                path.to_path_buf()
            }
            None => {
                let default = PathBuf::from(CONFIG_FILENAME);
                if !default.exists() {
                    return Ok(Config::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        Self::parse(&config_path, &content)
    }

    /// Parse configuration text read from `path`.
    pub fn parse(path: &Path, content: &str) -> CliResult<Config> {
        toml::from_str(content)
            .map_err(|e| ConfigError::invalid_toml(path.to_path_buf(), e.to_string()).into())
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref output) = args.output {
            config.output.file = output.clone();
        }

        if let Some(ref locale) = args.locale {
            config.generation.locale = Some(locale.clone());
        }

        if let Some(ref role) = args.role {
            config.generation.role = Some(role.clone());
        }

        config
    }

    /// Default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r##"# formschema configuration file

[generation]
# Locale used to translate labels (requires a [translations.<locale>] table)
# locale = "en"

# JSON Schema draft announced in "$schema": "draft-07" or "2019-09"
draft = "draft-07"

# Active role for field access overrides (see [roles.<role>])
# role = "viewer"

[output]
# Artifact file written by `formschema sample` and `formschema openapi`
file = "form.json"

[renderers]
# Custom renderer per control scope
# "#/properties/avatar" = "image-upload"

# [roles.viewer]
# Field access overrides: "readwrite" (or "full"), "readonly", "hidden"
# salary = "hidden"
# email = "readonly"

# [translations.en]
# "tabs.personal" = "Personal details"
"##
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Artifact file override.
    pub output: Option<PathBuf>,

    /// Locale override.
    pub locale: Option<String>,

    /// Role override.
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use formschema::generate_from_json;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.file, PathBuf::from("form.json"));
        assert_eq!(config.generation.draft, Draft::Draft07);
        assert_eq!(config.generation.locale, None);
        assert!(config.roles.is_empty());
    }

    #[test]
    fn test_default_content_parses_to_default() {
        let config =
            ConfigManager::parse(Path::new(CONFIG_FILENAME), ConfigManager::default_config_content())
                .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r##"
[generation]
locale = "uk"
draft = "2019-09"
role = "viewer"

[output]
file = "forms/signup.json"

[renderers]
"#/properties/bio" = "markdown"

[roles.viewer]
salary = "hidden"
email = "full"

[translations.uk]
name = "Ім'я"
"##;

        let config = ConfigManager::parse(Path::new("test.toml"), toml).unwrap();
        assert_eq!(config.generation.locale.as_deref(), Some("uk"));
        assert_eq!(config.generation.draft, Draft::Draft2019_09);
        assert_eq!(config.output.file, PathBuf::from("forms/signup.json"));
        assert_eq!(config.renderers["#/properties/bio"], "markdown");
        assert_eq!(config.roles["viewer"]["salary"], AccessLevel::Hidden);
        assert_eq!(config.roles["viewer"]["email"], AccessLevel::ReadWrite);
        assert_eq!(config.translations["uk"]["name"], "Ім'я");
    }

    #[test]
    fn test_invalid_toml() {
        let err = ConfigManager::parse(Path::new("bad.toml"), "[generation\n").unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_unknown_access_level_is_rejected() {
        let toml = "[roles.viewer]\nsalary = \"secret\"\n";
        assert!(ConfigManager::parse(Path::new("test.toml"), toml).is_err());
    }

    #[test]
    fn test_merge_cli_args() {
        let config = Config {
            generation: GenerationConfig {
                locale: Some("en".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let args = CliArgs {
            output: Some(PathBuf::from("out/form.json")),
            locale: Some("uk".to_string()),
            role: None,
        };

        let merged = ConfigManager::merge_cli_args(config, &args);
        assert_eq!(merged.output.file, PathBuf::from("out/form.json"));
        assert_eq!(merged.generation.locale.as_deref(), Some("uk"));
        assert_eq!(merged.generation.role, None);
    }

    #[test]
    fn test_merge_cli_args_preserves_unset() {
        let config = Config::default();
        let merged = ConfigManager::merge_cli_args(config.clone(), &CliArgs::default());
        assert_eq!(merged, config);
    }

    #[test]
    fn test_to_options_applies_everything() {
        let toml = r##"
[generation]
locale = "uk"
role = "viewer"

[roles.viewer]
secret = "hidden"
name = "readonly"

[translations.uk]
"label.name" = "Ім'я"
"##;
        let config = ConfigManager::parse(Path::new("test.toml"), toml).unwrap();
        let options = config.to_options();

        let sample = br#"{"name": "Ada", "secret": "x"}"#;
        let artifact = generate_from_json(sample, &options).unwrap();
        let ui = serde_json::to_value(&artifact.uischema).unwrap();

        let elements = ui["elements"].as_array().unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0]["scope"], "#/properties/name");
        assert_eq!(elements[0]["options"]["readonly"], true);
    }
}
