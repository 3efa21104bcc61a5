//! Parsers turning a derive input into [`FormIR`](crate::ir::FormIR).

pub mod attributes;
pub mod enum_parser;
pub mod struct_parser;

#[cfg(feature = "serde-compat")]
pub mod serde_compat;
