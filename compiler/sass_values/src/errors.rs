//! Error types for value operations and evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` provides typed error categories for diagnostic conversion.
//! Factory functions (e.g., `incompatible_units()`) are the public API:
//! they populate both `kind` and `message`.
//!
//! Only user-facing failures are represented here. Broken internal
//! invariants are bugs and panic instead.

use crate::value::Value;
use sass_ir::{BinaryOp, Span};
use std::fmt;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category for structured diagnostics.
///
/// The `Display` impl (derived through `thiserror`) produces the message
/// stored on `EvalError`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Units
    #[error("incompatible units: '{left}' and '{right}'")]
    IncompatibleUnits { left: String, right: String },

    // Operators
    #[error("undefined operation: \"{left} {op} {right}\"")]
    UndefinedOperation {
        left: String,
        op: &'static str,
        right: String,
    },
    #[error("operator `{op}` cannot be applied to {type_name}")]
    InvalidOperand { type_name: String, op: &'static str },

    // Lookup
    #[error("undefined variable: ${name}")]
    UndefinedVariable { name: String },
    #[error("undefined function: {name}")]
    UndefinedFunction { name: String },

    // Maps
    #[error("duplicate key {key} in map")]
    DuplicateKey { key: String },

    /// Message raised from a Custom Error value or an `@error` rule.
    #[error("{message}")]
    Custom { message: String },
}

/// Additional context note attached to an error.
///
/// Notes provide secondary information about the error, such as
/// "first defined here" with a span pointing to a previous map key.
#[derive(Clone, Debug)]
pub struct EvalNote {
    pub message: String,
    pub span: Option<Span>,
}

impl EvalNote {
    /// Create a note with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
        }
    }

    /// Create a note with a message and source location.
    pub fn with_span(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span: Some(span),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message, always `kind.to_string()`.
    pub message: String,
    /// Source location where the error occurred.
    pub span: Option<Span>,
    /// Additional context notes providing secondary information.
    pub notes: Vec<EvalNote>,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer specific factory functions when a
    /// structured kind is available.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    /// Create an error from a structured kind.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
            notes: Vec::new(),
        }
    }

    /// Attach a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach a span only if the error does not have one yet.
    ///
    /// Used when an error bubbles out of a nested operand: the innermost
    /// location is the most precise one.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    /// Add a context note to this error.
    #[must_use]
    pub fn with_note(mut self, note: EvalNote) -> Self {
        self.notes.push(note);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(span) = self.span {
            write!(f, " at {span}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

// Unit Errors

/// Comparison or arithmetic between numbers of different dimensions.
#[cold]
pub fn incompatible_units(left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IncompatibleUnits {
        left: left.to_string(),
        right: right.to_string(),
    })
}

// Operator Errors

/// Operator has no meaning for this pair of operands.
#[cold]
pub fn undefined_operation(left: &Value, op: BinaryOp, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedOperation {
        left: left.inspect(),
        op: op.as_symbol(),
        right: right.inspect(),
    })
}

/// Operator cannot be applied to a value of this type at all.
#[cold]
pub fn invalid_operand(type_name: &str, op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperand {
        type_name: type_name.to_string(),
        op: op.as_symbol(),
    })
}

// Lookup Errors

/// Variable reference with no binding in scope.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// Function call that could not be resolved.
#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

// Map Errors

/// Map literal with a repeated key.
#[cold]
pub fn duplicate_key(key: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateKey { key: key.inspect() })
}

// Diagnostic Carriers

/// Error raised from a Custom Error value returned across the native boundary.
#[cold]
pub fn custom_error(message: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Custom {
        message: message.to_string(),
    })
}
