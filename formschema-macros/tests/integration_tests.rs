//! Integration tests for the FormSchema derive macro.
//!
//! These tests verify that the macro produces the field descriptors the
//! generators expect for various struct and enum definitions.

use formschema::{
    generate, generate_json_schema, generate_ui_schema, FieldDescriptor, FieldShape, FieldTags,
    FormSchema, Options,
};
use serde_json::json;

// =============================================================================
// Basic Struct Tests
// =============================================================================

#[test]
fn test_basic_struct_derive() {
    #[derive(FormSchema)]
    #[allow(dead_code)]
    struct Contact {
        name: String,
        age: u32,
        score: f64,
    }

    assert_eq!(Contact::type_name(), "Contact");
    assert_eq!(
        Contact::field_shape(),
        FieldShape::Record(vec![
            FieldDescriptor::new("name", FieldShape::String),
            FieldDescriptor::new("age", FieldShape::Unsigned),
            FieldDescriptor::new("score", FieldShape::Number),
        ])
    );
}

#[test]
fn test_unit_struct_derive() {
    #[derive(FormSchema)]
    struct Empty;

    assert_eq!(Empty::field_shape(), FieldShape::Record(Vec::new()));

    let ui = generate_ui_schema::<Empty>().unwrap();
    assert_eq!(
        serde_json::to_value(&ui).unwrap(),
        json!({"type": "VerticalLayout", "elements": []})
    );
}

#[test]
fn test_struct_with_rename() {
    #[derive(FormSchema)]
    #[form(rename = "ContactForm")]
    #[allow(dead_code)]
    struct Contact {
        name: String,
    }

    assert_eq!(Contact::type_name(), "ContactForm");
}

#[test]
fn test_struct_with_rename_all_and_skip() {
    #[derive(FormSchema)]
    #[form(rename_all = "camelCase")]
    #[allow(dead_code)]
    struct Contact {
        first_name: String,
        #[form(skip)]
        internal_id: u64,
        #[form(rename = "mail")]
        email_address: String,
    }

    let names: Vec<String> = match Contact::field_shape() {
        FieldShape::Record(fields) => fields.into_iter().map(|f| f.name).collect(),
        other => panic!("Expected record, got {:?}", other),
    };
    assert_eq!(names, vec!["firstName", "mail"]);
}

// =============================================================================
// Field Tags Tests
// =============================================================================

#[test]
fn test_field_tags_are_forwarded() {
    #[derive(FormSchema)]
    #[allow(dead_code)]
    struct Account {
        /// Login handle
        #[form(required, min_length = 3, max_length = 32, pattern = "^[a-z]+$")]
        login: String,

        #[form(minimum = 0.0, maximum = 120.0, default = "18")]
        age: i32,

        #[form(
            enum = "red,green",
            form = "label=Colour;readonly",
            i18n = "account.colour",
            renderer = "swatch"
        )]
        colour: String,
    }

    let fields = match Account::field_shape() {
        FieldShape::Record(fields) => fields,
        other => panic!("Expected record, got {:?}", other),
    };

    assert_eq!(
        fields[0].tags,
        FieldTags::new()
            .with_required(true)
            .with_description("Login handle")
            .with_pattern("^[a-z]+$")
            .with_min_length(3)
            .with_max_length(32)
    );
    assert_eq!(
        fields[1].tags,
        FieldTags::new()
            .with_default("18")
            .with_minimum(0.0)
            .with_maximum(120.0)
    );
    assert_eq!(
        fields[2].tags,
        FieldTags::new()
            .with_enum("red,green")
            .with_form("label=Colour;readonly")
            .with_i18n("account.colour")
            .with_renderer("swatch")
    );
}

#[test]
fn test_json_schema_from_derive() {
    #[derive(FormSchema)]
    #[allow(dead_code)]
    struct Account {
        #[form(required, format = "email")]
        email: String,
        #[form(default = "true")]
        newsletter: bool,
        nickname: Option<String>,
        tags: Vec<String>,
    }

    let schema = generate_json_schema::<Account>().unwrap();
    assert_eq!(
        serde_json::to_value(&schema).unwrap(),
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "email": {"type": "string", "format": "email"},
                "newsletter": {"type": "boolean", "default": true},
                "nickname": {"type": "string"},
                "tags": {"type": "array", "items": {"type": "string"}}
            },
            "required": ["email"]
        })
    );
}

// =============================================================================
// Enum Tests
// =============================================================================

#[test]
fn test_unit_enum_derive() {
    #[derive(FormSchema)]
    #[form(rename_all = "lowercase")]
    #[allow(dead_code)]
    enum Plan {
        Free,
        Pro,
        #[form(rename = "ent")]
        Enterprise,
    }

    assert_eq!(
        Plan::field_shape(),
        FieldShape::Enum(vec!["free".to_string(), "pro".to_string(), "ent".to_string()])
    );
}

#[test]
fn test_enum_field_in_record() {
    #[derive(FormSchema)]
    #[allow(dead_code)]
    enum Plan {
        Free,
        Pro,
    }

    #[derive(FormSchema)]
    #[allow(dead_code)]
    struct Subscription {
        plan: Plan,
    }

    let schema = generate_json_schema::<Subscription>().unwrap();
    let value = serde_json::to_value(&schema).unwrap();
    assert_eq!(
        value["properties"]["plan"],
        json!({"type": "string", "enum": ["Free", "Pro"]})
    );
}

// =============================================================================
// Nested Types and Generics
// =============================================================================

#[test]
fn test_nested_record_becomes_group() {
    #[derive(FormSchema)]
    #[allow(dead_code)]
    struct Address {
        city: String,
    }

    #[derive(FormSchema)]
    #[allow(dead_code)]
    struct Customer {
        #[form(form = "label=Home")]
        address: Address,
    }

    let ui = generate_ui_schema::<Customer>().unwrap();
    assert_eq!(
        serde_json::to_value(&ui).unwrap(),
        json!({
            "type": "VerticalLayout",
            "elements": [{
                "type": "Group",
                "label": "Home",
                "elements": [
                    {"type": "Control", "scope": "#/properties/address/properties/city"}
                ]
            }]
        })
    );
}

#[test]
fn test_generic_struct_derive() {
    #[derive(FormSchema)]
    #[allow(dead_code)]
    struct LineItem {
        sku: String,
    }

    #[derive(FormSchema)]
    #[allow(dead_code)]
    struct Page<T> {
        items: Vec<T>,
        total: u64,
    }

    let artifact = generate::<Page<LineItem>>(&Options::new()).unwrap();
    let ui = serde_json::to_value(&artifact.uischema).unwrap();
    assert_eq!(
        ui["elements"][0]["options"]["detail"],
        json!({
            "type": "VerticalLayout",
            "elements": [{"type": "Control", "scope": "#/properties/sku"}]
        })
    );
    assert_eq!(Page::<LineItem>::type_name(), "Page");
}

#[test]
fn test_optional_and_boxed_fields() {
    #[derive(FormSchema)]
    #[allow(dead_code)]
    struct Note {
        body: Box<str>,
        pinned: Option<bool>,
    }

    assert_eq!(
        Note::field_shape(),
        FieldShape::Record(vec![
            FieldDescriptor::new("body", FieldShape::String),
            FieldDescriptor::new("pinned", FieldShape::Optional(Box::new(FieldShape::Boolean))),
        ])
    );
}
