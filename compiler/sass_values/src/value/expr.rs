//! Pending expressions: binary operations, function references and
//! calls, and variable references.
//!
//! These nodes are produced by the parser and replaced by concrete values
//! during reduction. They still take part in equality and hashing so a
//! delayed expression can be compared or used as a key before it is
//! reduced.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use sass_ir::{BinaryOp, Operand, Span};

use super::hash_cache::HashCache;
use super::Value;

// Binary expressions

/// `left <op> right`, not yet evaluated.
#[derive(Clone, Debug)]
pub struct BinaryExpr {
    operand: Operand,
    left: Value,
    right: Value,
    interpolant: bool,
    delayed: bool,
    span: Span,
    hash: HashCache,
}

impl BinaryExpr {
    pub fn new(span: Span, operand: Operand, left: Value, right: Value) -> Self {
        BinaryExpr {
            operand,
            left,
            right,
            interpolant: false,
            delayed: false,
            span,
            hash: HashCache::new(),
        }
    }

    /// Mark the whole expression as written inside `#{}`.
    #[must_use]
    pub fn with_interpolant(mut self, interpolant: bool) -> Self {
        self.interpolant = interpolant;
        self
    }

    pub fn operand(&self) -> Operand {
        self.operand
    }

    pub fn op(&self) -> BinaryOp {
        self.operand.op
    }

    pub fn left(&self) -> &Value {
        &self.left
    }

    pub fn right(&self) -> &Value {
        &self.right
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn is_interpolant(&self) -> bool {
        self.interpolant
    }

    pub fn is_delayed(&self) -> bool {
        self.delayed
    }

    pub fn is_left_interpolant(&self) -> bool {
        self.interpolant || self.left.is_left_interpolant()
    }

    pub fn is_right_interpolant(&self) -> bool {
        self.interpolant || self.right.is_right_interpolant()
    }

    /// Whether evaluation must fall back to string concatenation.
    pub fn has_interpolant(&self) -> bool {
        self.is_left_interpolant() || self.is_right_interpolant()
    }

    /// Marks the expression and both operands.
    pub fn set_delayed(&mut self, delayed: bool) {
        self.delayed = delayed;
        self.left.set_delayed(delayed);
        self.right.set_delayed(delayed);
    }

    /// Operator name for the inspector (`plus`, `eq`, ...).
    pub fn type_name(&self) -> &'static str {
        self.operand.op.name()
    }

    /// Operator symbol placed between the operands.
    pub fn separator(&self) -> &'static str {
        self.operand.op.as_symbol()
    }

    pub fn hash_code(&self) -> u64 {
        self.hash.get_or_compute(|h| {
            self.operand.op.hash(h);
            self.left.hash_code().hash(h);
            self.right.hash_code().hash(h);
        })
    }
}

/// Whitespace around the operator does not take part.
impl PartialEq for BinaryExpr {
    fn eq(&self, other: &Self) -> bool {
        self.operand.op == other.operand.op && self.left == other.left && self.right == other.right
    }
}

impl Eq for BinaryExpr {}

// Functions

/// A callable's signature, shared by every reference to it.
#[derive(Debug)]
pub struct Definition {
    pub name: String,
    pub parameters: Vec<String>,
    pub span: Span,
}

impl Definition {
    pub fn new(span: Span, name: impl Into<String>, parameters: Vec<String>) -> Arc<Self> {
        Arc::new(Definition {
            name: name.into(),
            parameters,
            span,
        })
    }
}

/// First-class function reference, as returned by `get-function()`.
#[derive(Clone, Debug)]
pub struct FunctionValue {
    definition: Arc<Definition>,
    is_css: bool,
    span: Span,
}

impl FunctionValue {
    pub fn new(span: Span, definition: Arc<Definition>, is_css: bool) -> Self {
        FunctionValue {
            definition,
            is_css,
            span,
        }
    }

    pub fn definition(&self) -> &Arc<Definition> {
        &self.definition
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Plain CSS function rather than a user-defined one.
    pub fn is_css(&self) -> bool {
        self.is_css
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn hash_code(&self) -> u64 {
        let mut h = rustc_hash::FxHasher::default();
        self.hash(&mut h);
        h.finish()
    }
}

/// Identity of the definition, not its name.
impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.definition, &other.definition) && self.is_css == other.is_css
    }
}

impl Eq for FunctionValue {}

impl Hash for FunctionValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.definition.name.hash(state);
        (Arc::as_ptr(&self.definition) as usize).hash(state);
        self.is_css.hash(state);
    }
}

/// Host-provided function callable from stylesheets.
///
/// Returning a Custom Error value reports an error to the evaluator; a
/// Custom Warning value is logged and evaluates to null.
pub trait NativeFunction: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    fn call(&self, args: &[Value], span: Span) -> Value;
}

/// How a function call resolves.
#[derive(Clone, Debug)]
pub enum Callee {
    /// Resolved by name at evaluation time.
    Named,
    /// Bound to a specific function.
    Resolved(FunctionValue),
    /// Bound to a host callback.
    Native(Arc<dyn NativeFunction>),
}

impl PartialEq for Callee {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Callee::Named, Callee::Named) => true,
            (Callee::Resolved(a), Callee::Resolved(b)) => a == b,
            (Callee::Native(a), Callee::Native(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Callee {}

impl Hash for Callee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Callee::Named => {}
            Callee::Resolved(function) => function.hash(state),
            Callee::Native(native) => (Arc::as_ptr(native).cast::<()>() as usize).hash(state),
        }
    }
}

/// One argument of a call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Argument {
    /// Keyword name for `$name: value` arguments.
    pub name: Option<String>,
    pub value: Value,
    /// `$args...`
    pub is_rest: bool,
    /// `$kwargs...` following a rest argument.
    pub is_keyword_rest: bool,
}

impl Argument {
    pub fn positional(value: Value) -> Self {
        Argument {
            name: None,
            value,
            is_rest: false,
            is_keyword_rest: false,
        }
    }

    pub fn keyword(name: impl Into<String>, value: Value) -> Self {
        Argument {
            name: Some(name.into()),
            ..Argument::positional(value)
        }
    }

    pub fn rest(value: Value) -> Self {
        Argument {
            is_rest: true,
            ..Argument::positional(value)
        }
    }
}

/// A function invocation.
#[derive(Clone, Debug)]
pub struct FunctionCall {
    name: String,
    callee: Callee,
    arguments: Vec<Argument>,
    via_call: bool,
    span: Span,
    hash: HashCache,
}

impl FunctionCall {
    /// Call resolved by name during evaluation.
    pub fn named(span: Span, name: impl Into<String>, arguments: Vec<Argument>) -> Self {
        FunctionCall {
            name: name.into(),
            callee: Callee::Named,
            arguments,
            via_call: false,
            span,
            hash: HashCache::new(),
        }
    }

    /// Call of a function reference (`call($fn, ...)`).
    pub fn resolved(span: Span, function: FunctionValue, arguments: Vec<Argument>) -> Self {
        FunctionCall {
            name: function.name().to_string(),
            callee: Callee::Resolved(function),
            ..FunctionCall::named(span, "", arguments)
        }
    }

    /// Call bound to a host callback.
    pub fn native(span: Span, function: Arc<dyn NativeFunction>, arguments: Vec<Argument>) -> Self {
        FunctionCall {
            name: function.name().to_string(),
            callee: Callee::Native(function),
            ..FunctionCall::named(span, "", arguments)
        }
    }

    #[must_use]
    pub fn with_via_call(mut self, via_call: bool) -> Self {
        self.via_call = via_call;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn callee(&self) -> &Callee {
        &self.callee
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Whether the call went through `call()`.
    pub fn via_call(&self) -> bool {
        self.via_call
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Whether this calls a plain CSS function.
    pub fn is_css(&self) -> bool {
        matches!(&self.callee, Callee::Resolved(function) if function.is_css())
    }

    pub fn hash_code(&self) -> u64 {
        self.hash.get_or_compute(|h| {
            self.name.hash(h);
            self.callee.hash(h);
            self.arguments.hash(h);
        })
    }
}

impl PartialEq for FunctionCall {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.callee == other.callee && self.arguments == other.arguments
    }
}

impl Eq for FunctionCall {}

// Variables

/// `$name`, resolved through the environment.
#[derive(Clone, Debug)]
pub struct Variable {
    name: String,
    span: Span,
}

impl Variable {
    /// `name` is stored without the leading `$`.
    pub fn new(span: Span, name: impl Into<String>) -> Self {
        Variable {
            name: name.into(),
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
