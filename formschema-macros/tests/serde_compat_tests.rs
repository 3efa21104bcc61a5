//! Serde compatibility tests for the FormSchema derive macro.
//!
//! Serde attributes decide the JSON names, so scopes must follow them;
//! `#[form(...)]` overrides serde when both are present.

#![cfg(feature = "serde-compat")]

use formschema::{FieldShape, FormSchema};

fn field_names<T: FormSchema>() -> Vec<String> {
    match T::field_shape() {
        FieldShape::Record(fields) => fields.into_iter().map(|f| f.name).collect(),
        other => panic!("Expected record, got {:?}", other),
    }
}

#[test]
fn test_serde_rename_all_camel_case() {
    #[derive(FormSchema)]
    #[serde(rename_all = "camelCase")]
    #[allow(dead_code)]
    struct Profile {
        first_name: String,
        last_name: String,
    }

    assert_eq!(field_names::<Profile>(), vec!["firstName", "lastName"]);
}

#[test]
fn test_serde_field_rename() {
    #[derive(FormSchema)]
    #[allow(dead_code)]
    struct ApiResponse {
        #[serde(rename = "statusCode")]
        status_code: u16,
        body: String,
    }

    assert_eq!(field_names::<ApiResponse>(), vec!["statusCode", "body"]);
}

#[test]
fn test_serde_skip_variants() {
    #[derive(FormSchema)]
    #[allow(dead_code)]
    struct Session {
        user: String,
        #[serde(skip)]
        cache: String,
        #[serde(skip_serializing)]
        password: String,
        #[serde(skip_deserializing)]
        created_by_server: String,
    }

    assert_eq!(field_names::<Session>(), vec!["user"]);
}

#[test]
fn test_form_rename_overrides_serde() {
    #[derive(FormSchema)]
    #[serde(rename_all = "camelCase")]
    #[form(rename_all = "kebab-case")]
    #[allow(dead_code)]
    struct Settings {
        dark_mode: bool,
        #[serde(rename = "lang")]
        #[form(rename = "language")]
        ui_language: String,
        #[serde(rename = "tz")]
        time_zone: String,
    }

    assert_eq!(
        field_names::<Settings>(),
        vec!["dark-mode", "language", "tz"]
    );
}

#[test]
fn test_serde_unrelated_attributes_are_tolerated() {
    fn default_port() -> u16 {
        8080
    }

    #[derive(FormSchema)]
    #[serde(deny_unknown_fields)]
    #[allow(dead_code)]
    struct Server {
        #[serde(default = "default_port", rename = "listenPort")]
        port: u16,
        #[serde(default)]
        host: String,
    }

    assert_eq!(field_names::<Server>(), vec!["listenPort", "host"]);
    assert_eq!(default_port(), 8080);
}

#[test]
fn test_serde_enum_rename_all() {
    #[derive(FormSchema)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[allow(dead_code)]
    enum Status {
        InReview,
        Approved,
    }

    assert_eq!(
        Status::field_shape(),
        FieldShape::Enum(vec!["IN_REVIEW".to_string(), "APPROVED".to_string()])
    );
}

#[test]
fn test_serde_container_rename_sets_type_name() {
    #[derive(FormSchema)]
    #[serde(rename = "profile")]
    #[allow(dead_code)]
    struct Profile {
        name: String,
    }

    assert_eq!(Profile::type_name(), "profile");
}
