//! # formschema
//!
//! Generate a [JSON Schema](https://json-schema.org/) and a matching
//! [JSON Forms](https://jsonforms.io/) UI schema from annotated Rust types,
//! JSON samples or OpenAPI documents.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formschema::{generate, FormSchema, Options};
//!
//! #[derive(FormSchema)]
//! struct Signup {
//!     #[form(required, form = "label=First name;layout=horizontal")]
//!     first_name: String,
//!     #[form(form = "label=Last name;layout=horizontal")]
//!     last_name: String,
//!     #[form(form = "multiline", visible_if = "has_bio=true")]
//!     bio: Option<String>,
//!     has_bio: bool,
//! }
//!
//! let artifact = generate::<Signup>(&Options::default())?;
//! println!("{}", artifact.to_json_pretty()?);
//! ```
//!
//! The UI schema above places both name fields side by side in a
//! `HorizontalLayout` and shows `bio` only while `has_bio` is `true`.
//!
//! ## Features
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `derive` | `#[derive(FormSchema)]` | ✅ |
//! | `chrono` | `chrono::DateTime` and `NaiveDateTime` as date-time fields | ❌ |
//! | `uuid` | `uuid::Uuid` as a string field | ❌ |
//!
//! ## The `form` tag
//!
//! | Key | Effect |
//! |-----|--------|
//! | `label=Text` | Control or group label |
//! | `hidden` | Omit from the UI schema |
//! | `readonly` | `options.readonly` |
//! | `multiline` | `options.multi` |
//! | `category=Tab` | Place the root field in a tab |
//! | `layout=horizontal` | Merge with adjacent horizontal siblings |
//! | `layout=horizontal:name` | Merge with all siblings of the same group |
//! | `visibleIf=f:v` (`hideIf`, `enableIf`, `disableIf`) | Rule lifted onto the owning tab |
//! | `i18n=key` | Translation key of the owning tab |
//!
//! ## Field rules
//!
//! `visible_if`, `hide_if`, `enable_if` and `disable_if` take a `field=value`
//! expression. When several are set the first of SHOW, HIDE, ENABLE, DISABLE
//! wins. The value is coerced to a boolean, integer, float or string, in that
//! order.

// Lets `#[derive(FormSchema)]` output, which names `::formschema`, compile
// inside this crate.
extern crate self as formschema;

pub mod error;
pub mod export;
pub mod field;
pub mod generate;
pub mod i18n;
pub mod jsonschema;
pub mod metadata;
pub mod openapi;
pub mod options;
pub mod registry;
pub mod rule;
pub mod sample;
pub mod tags;
pub mod traits;
pub mod uischema;

mod synth;

pub use error::{Error, Result};
pub use export::FormArtifact;
pub use field::{FieldDescriptor, FieldShape};
pub use generate::{
    generate, generate_json_schema, generate_json_schema_with_options, generate_ui_schema,
    generate_ui_schema_with_options,
};
pub use i18n::{MapTranslator, Translator};
pub use jsonschema::{json_schema_for_shape, JsonSchema};
pub use metadata::{decode_field_metadata, translate_label, FieldMetadata};
pub use openapi::generate_from_openapi;
pub use options::{resolve_access, AccessLevel, Draft, FieldPermissions, Options};
pub use registry::{FormRegistry, RegisteredForm};
pub use rule::{Condition, ConstSchema, Effect, Rule, RuleSpec};
pub use sample::generate_from_json;
pub use synth::synthesize;
pub use tags::{FieldTags, FormTag, LayoutMode};
pub use traits::FormSchema;
pub use uischema::{Control, ControlOptions, Layout, LayoutKind, UiNode};

#[cfg(feature = "derive")]
pub use formschema_macros::FormSchema;
