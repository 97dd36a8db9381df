//! Sass Eval - operator evaluation and expression reduction.
//!
//! This crate is the consumer side of `sass_values`: it turns pending
//! values (variables, binary expressions, interpolated strings, function
//! calls) into concrete ones.
//!
//! # Architecture
//!
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `reduce_binary`: the interpolation rule on top of `evaluate_binary`
//! - `Reducer`: bottom-up walk of a pending tree against an `Environment`
//! - `Scope`: scope stack of variables plus host functions
//!
//! # Re-exports
//!
//! `Value`, `EvalError` and `EvalResult` come from `sass_values` for
//! convenience.

mod environment;
mod operators;
mod reduce;

pub use environment::{Environment, Scope};
pub use operators::{evaluate_binary, reduce_binary};
pub use reduce::Reducer;
pub use sass_values::{EvalError, EvalErrorKind, EvalResult, Value};
