//! The [`FormSchema`] trait.
//!
//! A type implementing `FormSchema` can describe its own [`FieldShape`].
//! Records usually get the implementation from `#[derive(FormSchema)]`, which
//! lists every field with its tags; this module provides the leaf
//! implementations those derived impls build on.
//!
//! ## Manual implementation
//!
//! ```rust
//! use formschema::{FieldDescriptor, FieldShape, FieldTags, FormSchema};
//!
//! struct Login;
//!
//! impl FormSchema for Login {
//!     fn field_shape() -> FieldShape {
//!         FieldShape::Record(vec![
//!             FieldDescriptor::new("user", String::field_shape())
//!                 .with_tags(FieldTags::new().with_required(true)),
//!             FieldDescriptor::new("remember", bool::field_shape()),
//!         ])
//!     }
//!
//!     fn type_name() -> &'static str {
//!         "Login"
//!     }
//! }
//!
//! assert!(Login::field_shape().is_record());
//! ```
//!
//! ## Provided implementations
//!
//! - **Primitives**: `String`, `&str`, `char`, `bool`, integers, floats
//! - **Wrappers**: `Option<T>`, `Box<T>`, `Rc<T>`, `Arc<T>`
//! - **Collections**: `Vec<T>`, `[T; N]`, `HashSet<T>`, `BTreeSet<T>`,
//!   `HashMap<K, V>`, `BTreeMap<K, V>`
//! - **Dynamic**: `serde_json::Value`
//! - **Feature-gated**: `chrono::DateTime<Tz>` and `NaiveDateTime` (chrono),
//!   `uuid::Uuid` (uuid)

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

use crate::field::FieldShape;

/// Types that can describe the shape of their values.
///
/// `field_shape` is rebuilt on every call. Self-referential records are not
/// supported: their shape would be infinite.
pub trait FormSchema {
    /// The value shape of this type.
    fn field_shape() -> FieldShape;

    /// Name used by the registry and in error messages.
    fn type_name() -> &'static str;
}

// =============================================================================
// Primitive types
// =============================================================================

macro_rules! impl_form_schema_leaf {
    ($($ty:ty => $shape:expr, $name:literal);* $(;)?) => {
        $(
            impl FormSchema for $ty {
                fn field_shape() -> FieldShape {
                    $shape
                }

                fn type_name() -> &'static str {
                    $name
                }
            }
        )*
    };
}

impl_form_schema_leaf!(
    String => FieldShape::String, "string";
    char => FieldShape::String, "char";
    bool => FieldShape::Boolean, "boolean";
    i8 => FieldShape::Integer, "i8";
    i16 => FieldShape::Integer, "i16";
    i32 => FieldShape::Integer, "i32";
    i64 => FieldShape::Integer, "i64";
    i128 => FieldShape::Integer, "i128";
    isize => FieldShape::Integer, "isize";
    u8 => FieldShape::Unsigned, "u8";
    u16 => FieldShape::Unsigned, "u16";
    u32 => FieldShape::Unsigned, "u32";
    u64 => FieldShape::Unsigned, "u64";
    u128 => FieldShape::Unsigned, "u128";
    usize => FieldShape::Unsigned, "usize";
    f32 => FieldShape::Number, "f32";
    f64 => FieldShape::Number, "f64";
    serde_json::Value => FieldShape::Any, "any";
);

impl FormSchema for str {
    fn field_shape() -> FieldShape {
        FieldShape::String
    }

    fn type_name() -> &'static str {
        "string"
    }
}

impl<T: FormSchema + ?Sized> FormSchema for &T {
    fn field_shape() -> FieldShape {
        T::field_shape()
    }

    fn type_name() -> &'static str {
        T::type_name()
    }
}

// =============================================================================
// Wrappers
// =============================================================================

impl<T: FormSchema> FormSchema for Option<T> {
    fn field_shape() -> FieldShape {
        FieldShape::Optional(Box::new(T::field_shape()))
    }

    fn type_name() -> &'static str {
        T::type_name()
    }
}

macro_rules! impl_form_schema_transparent {
    ($($wrapper:ident),*) => {
        $(
            impl<T: FormSchema + ?Sized> FormSchema for $wrapper<T> {
                fn field_shape() -> FieldShape {
                    T::field_shape()
                }

                fn type_name() -> &'static str {
                    T::type_name()
                }
            }
        )*
    };
}

impl_form_schema_transparent!(Box, Rc, Arc);

// =============================================================================
// Collections
// =============================================================================

impl<T: FormSchema> FormSchema for Vec<T> {
    fn field_shape() -> FieldShape {
        FieldShape::Array(Box::new(T::field_shape()))
    }

    fn type_name() -> &'static str {
        "array"
    }
}

impl<T: FormSchema, const N: usize> FormSchema for [T; N] {
    fn field_shape() -> FieldShape {
        FieldShape::Array(Box::new(T::field_shape()))
    }

    fn type_name() -> &'static str {
        "array"
    }
}

impl<T: FormSchema, S> FormSchema for HashSet<T, S> {
    fn field_shape() -> FieldShape {
        FieldShape::Array(Box::new(T::field_shape()))
    }

    fn type_name() -> &'static str {
        "array"
    }
}

impl<T: FormSchema> FormSchema for BTreeSet<T> {
    fn field_shape() -> FieldShape {
        FieldShape::Array(Box::new(T::field_shape()))
    }

    fn type_name() -> &'static str {
        "array"
    }
}

/// `Map(V)` for string-like keys, a bare `Object` otherwise.
fn map_shape<K: FormSchema, V: FormSchema>() -> FieldShape {
    match K::field_shape().unwrap_optional() {
        FieldShape::String | FieldShape::Enum(_) => FieldShape::Map(Box::new(V::field_shape())),
        _ => FieldShape::Object,
    }
}

impl<K: FormSchema, V: FormSchema, S> FormSchema for HashMap<K, V, S> {
    fn field_shape() -> FieldShape {
        map_shape::<K, V>()
    }

    fn type_name() -> &'static str {
        "map"
    }
}

impl<K: FormSchema, V: FormSchema> FormSchema for BTreeMap<K, V> {
    fn field_shape() -> FieldShape {
        map_shape::<K, V>()
    }

    fn type_name() -> &'static str {
        "map"
    }
}

// =============================================================================
// Feature-gated implementations
// =============================================================================

#[cfg(feature = "uuid")]
impl FormSchema for uuid::Uuid {
    fn field_shape() -> FieldShape {
        FieldShape::String
    }

    fn type_name() -> &'static str {
        "uuid"
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> FormSchema for chrono::DateTime<Tz> {
    fn field_shape() -> FieldShape {
        FieldShape::Timestamp
    }

    fn type_name() -> &'static str {
        "date-time"
    }
}

#[cfg(feature = "chrono")]
impl FormSchema for chrono::NaiveDateTime {
    fn field_shape() -> FieldShape {
        FieldShape::Timestamp
    }

    fn type_name() -> &'static str {
        "date-time"
    }
}

// =============================================================================
// Tests
// =============================================================================
