//! Sass Values - the runtime value model of the Sass compiler.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `Heap`, `Number`, `Color`, `ListValue`, `MapValue`, ...)
//! - Pending expression nodes (`Variable`, `FunctionCall`, `BinaryExpr`, `StringSchema`)
//! - Unit algebra (`Units`, `Unit`) used by number arithmetic and comparison
//! - Evaluation error types (`EvalError`, `EvalResult`)
//! - The string literal codec (`codec`) and CSS serialization (`SerializeOptions`)
//!
//! # Value Types
//!
//! Values follow the same sharing rules everywhere:
//! - All heap allocations go through `Value::` factory methods
//! - `Heap<T>` wraps an `Arc`, so sub-values are shared instead of copied
//! - A node is mutated only through `Heap::make_mut`, which clones first
//!   when the node has more than one owner
//!
//! # Equality and Hashing
//!
//! Equality is CSS equivalence, not structural identity of the authored form:
//! `1in == 96px`, and an RGBA color equals the HSLA color that converts to it.
//! Hashes are derived from the same canonical forms so equal values always
//! hash identically, which makes any value usable as a map key.

pub mod codec;
mod errors;
mod serialize;
mod value;

pub use errors::{EvalError, EvalErrorKind, EvalNote, EvalResult};
pub use serialize::{format_number, OutputStyle, SerializeOptions};
pub use value::{
    fuzzy, is_color_doublet, is_hex_doublet, Argument, BinaryExpr, Boolean, Callee, Color,
    ColorHsla, ColorRgba, CustomMessage, Definition, FunctionCall, FunctionValue, Heap,
    Keywords, ListValue, MapValue, NativeFunction, Null, Number, ParentReference, QuotedOptions,
    SchemaPart, Separator, StringConstant, StringSchema, Unit, UnitClass, UnitList, Units, Value,
    ValueKind, Variable,
};

// Re-export error constructors for use by other crates
pub use errors::{
    custom_error, duplicate_key, incompatible_units, invalid_operand, undefined_function,
    undefined_operation, undefined_variable,
};
