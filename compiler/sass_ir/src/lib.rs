//! Sass IR - shared leaf types for the Sass value model.
//!
//! This crate contains the pieces every other crate in the workspace needs
//! but that carry no evaluation semantics of their own:
//! - `Span` / `SourceId` for provenance (source locations)
//! - `BinaryOp` / `Operand` operator tags for pending binary expressions
//!
//! Every type here is `Copy` and has `Eq + Hash`, so it can be stored on
//! value nodes without affecting their structural equality.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in types stored on every node.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod operators;
mod span;

pub use operators::{BinaryOp, Operand};
pub use span::{SourceId, Span, SpanError};
