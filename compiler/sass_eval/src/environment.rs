//! Name resolution for the reducer.
//!
//! `Environment` is the seam between the reducer and whatever owns the
//! bindings. `Scope` is the stock implementation: a scope stack of
//! variable frames plus a table of host functions.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use sass_ir::Span;
use sass_values::{Argument, EvalResult, NativeFunction, Value};

/// Bindings the reducer resolves names against.
pub trait Environment {
    /// Value bound to `$name`, already reduced.
    fn lookup_variable(&self, name: &str) -> Option<Value>;

    /// Invoke the function called `name` with reduced arguments.
    ///
    /// Returns `None` when no such function exists; the reducer then
    /// emits the call as plain CSS. A returned Custom Error or Custom
    /// Warning value is handled like one from a native callback.
    fn call_function(&self, name: &str, args: &[Argument], span: Span) -> Option<EvalResult>;
}

/// Scope stack with a global frame that is never popped.
#[derive(Debug)]
pub struct Scope {
    frames: Vec<FxHashMap<String, Value>>,
    functions: FxHashMap<String, Arc<dyn NativeFunction>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            frames: vec![FxHashMap::default()],
            functions: FxHashMap::default(),
        }
    }

    /// Enter a nested scope.
    pub fn push(&mut self) {
        self.frames.push(FxHashMap::default());
    }

    /// Leave the innermost scope. The global frame stays.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Number of frames, including the global one.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Bind `$name` in the innermost scope, shadowing outer bindings.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.into(), value);
        }
    }

    /// Bind `$name` in the global frame (`!global`).
    pub fn define_global(&mut self, name: impl Into<String>, value: Value) {
        if let Some(frame) = self.frames.first_mut() {
            frame.insert(name.into(), value);
        }
    }

    /// Register a host function under its own name.
    pub fn define_function(&mut self, function: Arc<dyn NativeFunction>) {
        self.functions
            .insert(function.name().to_string(), function);
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::new()
    }
}

impl Environment for Scope {
    fn lookup_variable(&self, name: &str) -> Option<Value> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name))
            .cloned()
    }

    fn call_function(&self, name: &str, args: &[Argument], span: Span) -> Option<EvalResult> {
        let function = self.functions.get(name)?;
        let values: Vec<Value> = args.iter().map(|arg| arg.value.clone()).collect();
        Some(Ok(function.call(&values, span)))
    }
}

#[cfg(test)]
mod tests;
