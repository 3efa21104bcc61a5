//! Code generation from [`FormIR`](crate::ir::FormIR).

pub mod impl_block;
