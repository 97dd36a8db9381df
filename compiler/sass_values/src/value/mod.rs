//! Runtime values of the Sass evaluator.
//!
//! # Heap Enforcement
//!
//! Every heap allocation goes through a factory method on `Value`.
//! `Heap<T>` has a `pub(super)` constructor, so code outside this module
//! cannot wrap a node by hand:
//!
//! ```text
//! let n = Value::number(span, 10.0, "px");          // OK
//! let l = Value::comma_list(span, vec![n.clone()]); // OK
//! let n = Value::Number(Heap::new(...));            // ERROR: Heap::new is private
//! ```
//!
//! # Mutation
//!
//! Values are shared freely by cloning. The `&mut self` methods on
//! `Value` (`set_delayed`, `rtrim`, `as_list_mut`, ...) go through
//! `Heap::make_mut`, which copies a node before changing it if anyone
//! else holds it.

mod color;
mod expr;
pub mod fuzzy;
mod hash_cache;
mod heap;
mod leaf;
mod list;
mod map;
mod number;
mod string;
mod units;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use sass_ir::Span;

use crate::serialize::{SerializeOptions, Serializer};

pub use color::{is_color_doublet, is_hex_doublet, Color, ColorHsla, ColorRgba};
pub use expr::{
    Argument, BinaryExpr, Callee, Definition, FunctionCall, FunctionValue, NativeFunction,
    Variable,
};
pub use heap::Heap;
pub use leaf::{Boolean, CustomMessage, Null, ParentReference};
pub use list::{Keywords, ListValue, Separator};
pub use map::MapValue;
pub use number::Number;
pub use string::{QuotedOptions, SchemaPart, StringConstant, StringSchema};
pub use units::{Unit, UnitClass, UnitList, Units};

/// Discriminant of a [`Value`], for callers that only need to branch on
/// the kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Color,
    String,
    Schema,
    List,
    Map,
    Boolean,
    Null,
    Function,
    Call,
    Variable,
    Binary,
    CustomError,
    CustomWarning,
    Parent,
}

/// A Sass value or a pending expression that reduces to one.
#[derive(Clone)]
pub enum Value {
    // Concrete values
    Number(Heap<Number>),
    Color(Heap<Color>),
    String(Heap<StringConstant>),
    List(Heap<ListValue>),
    Map(Heap<MapValue>),
    Bool(Boolean),
    Null(Null),
    Function(Heap<FunctionValue>),
    /// The `&` selector used as a value.
    Parent(ParentReference),

    // Pending expressions
    /// String with `#{}` interpolations.
    Schema(Heap<StringSchema>),
    Call(Heap<FunctionCall>),
    Variable(Heap<Variable>),
    Binary(Heap<BinaryExpr>),

    // Diagnostic carriers returned by native functions
    CustomError(Heap<CustomMessage>),
    CustomWarning(Heap<CustomMessage>),
}

// Factory methods

impl Value {
    /// Number with a unit string such as `px` or `px*em/s`.
    #[inline]
    pub fn number(span: Span, value: f64, unit: &str) -> Self {
        Value::Number(Heap::new(Number::new(span, value, unit)))
    }

    #[inline]
    pub fn unitless(span: Span, value: f64) -> Self {
        Value::Number(Heap::new(Number::unitless(span, value)))
    }

    #[inline]
    pub fn from_number(number: Number) -> Self {
        Value::Number(Heap::new(number))
    }

    #[inline]
    pub fn color(color: impl Into<Color>) -> Self {
        Value::Color(Heap::new(color.into()))
    }

    #[inline]
    pub fn rgba(span: Span, r: f64, g: f64, b: f64, a: f64) -> Self {
        Value::color(ColorRgba::new(span, r, g, b, a))
    }

    #[inline]
    pub fn hsla(span: Span, h: f64, s: f64, l: f64, a: f64) -> Self {
        Value::color(ColorHsla::new(span, h, s, l, a))
    }

    /// Unquoted string.
    #[inline]
    pub fn string(span: Span, text: impl Into<String>) -> Self {
        Value::String(Heap::new(StringConstant::new(span, text)))
    }

    /// Decoded text that prints quoted.
    #[inline]
    pub fn quoted_string(span: Span, text: impl Into<String>, quote_mark: char) -> Self {
        Value::String(Heap::new(StringConstant::with_quote(span, text, quote_mark)))
    }

    /// String from a raw, possibly quoted token.
    #[inline]
    pub fn quoted(span: Span, raw: &str) -> Self {
        Value::String(Heap::new(StringConstant::quoted(span, raw)))
    }

    #[inline]
    pub fn string_constant(string: StringConstant) -> Self {
        Value::String(Heap::new(string))
    }

    #[inline]
    pub fn schema(schema: StringSchema) -> Self {
        Value::Schema(Heap::new(schema))
    }

    #[inline]
    pub fn list(list: ListValue) -> Self {
        Value::List(Heap::new(list))
    }

    #[inline]
    pub fn space_list(span: Span, items: Vec<Value>) -> Self {
        Value::list(ListValue::new(span, Separator::Space, items))
    }

    #[inline]
    pub fn comma_list(span: Span, items: Vec<Value>) -> Self {
        Value::list(ListValue::new(span, Separator::Comma, items))
    }

    #[inline]
    pub fn map(map: MapValue) -> Self {
        Value::Map(Heap::new(map))
    }

    #[inline]
    pub fn bool(span: Span, value: bool) -> Self {
        Value::Bool(Boolean { value, span })
    }

    #[inline]
    pub fn null(span: Span) -> Self {
        Value::Null(Null { span })
    }

    #[inline]
    pub fn parent(span: Span) -> Self {
        Value::Parent(ParentReference { span })
    }

    #[inline]
    pub fn function(function: FunctionValue) -> Self {
        Value::Function(Heap::new(function))
    }

    #[inline]
    pub fn call(call: FunctionCall) -> Self {
        Value::Call(Heap::new(call))
    }

    /// Variable reference; `name` excludes the `$`.
    #[inline]
    pub fn variable(span: Span, name: impl Into<String>) -> Self {
        Value::Variable(Heap::new(Variable::new(span, name)))
    }

    #[inline]
    pub fn binary(expr: BinaryExpr) -> Self {
        Value::Binary(Heap::new(expr))
    }

    #[inline]
    pub fn custom_error(span: Span, message: impl Into<String>) -> Self {
        Value::CustomError(Heap::new(CustomMessage::new(span, message)))
    }

    #[inline]
    pub fn custom_warning(span: Span, message: impl Into<String>) -> Self {
        Value::CustomWarning(Heap::new(CustomMessage::new(span, message)))
    }
}

// Queries

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Color(_) => ValueKind::Color,
            Value::String(_) => ValueKind::String,
            Value::Schema(_) => ValueKind::Schema,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Null(_) => ValueKind::Null,
            Value::Function(_) => ValueKind::Function,
            Value::Call(_) => ValueKind::Call,
            Value::Variable(_) => ValueKind::Variable,
            Value::Binary(_) => ValueKind::Binary,
            Value::CustomError(_) => ValueKind::CustomError,
            Value::CustomWarning(_) => ValueKind::CustomWarning,
            Value::Parent(_) => ValueKind::Parent,
        }
    }

    /// Name reported by `type-of()` and used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Color(_) => "color",
            Value::String(_) | Value::Schema(_) => "string",
            Value::List(list) => list.type_name(),
            Value::Map(_) => "map",
            Value::Bool(_) => "bool",
            Value::Null(_) => "null",
            Value::Function(_) => "function",
            Value::Call(_) => "call",
            Value::Variable(_) => "variable",
            Value::Binary(expr) => expr.type_name(),
            Value::CustomError(_) => "error",
            Value::CustomWarning(_) => "warning",
            Value::Parent(_) => "parent",
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Value::Number(n) => n.span(),
            Value::Color(c) => c.span(),
            Value::String(s) => s.span(),
            Value::Schema(s) => s.span(),
            Value::List(l) => l.span(),
            Value::Map(m) => m.span(),
            Value::Bool(b) => b.span,
            Value::Null(n) => n.span,
            Value::Function(f) => f.span(),
            Value::Call(c) => c.span(),
            Value::Variable(v) => v.span(),
            Value::Binary(b) => b.span(),
            Value::CustomError(m) | Value::CustomWarning(m) => m.span,
            Value::Parent(p) => p.span,
        }
    }

    /// Whether the value still needs reduction.
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            Value::Schema(_) | Value::Call(_) | Value::Variable(_) | Value::Binary(_)
        )
    }

    /// Whether the value prints nothing in CSS output.
    pub fn is_invisible(&self) -> bool {
        match self {
            Value::String(s) => s.is_invisible(),
            Value::List(l) => l.is_invisible(),
            Value::Map(m) => m.is_invisible(),
            Value::Null(_) | Value::Function(_) => true,
            _ => false,
        }
    }

    /// `null` and `false` are the only false values.
    pub fn is_false(&self) -> bool {
        matches!(self, Value::Null(_) | Value::Bool(Boolean { value: false, .. }))
    }

    pub fn is_truthy(&self) -> bool {
        !self.is_false()
    }

    pub fn is_left_interpolant(&self) -> bool {
        match self {
            Value::Schema(s) => s.is_left_interpolant(),
            Value::Binary(b) => b.is_left_interpolant(),
            _ => false,
        }
    }

    pub fn is_right_interpolant(&self) -> bool {
        match self {
            Value::Schema(s) => s.is_right_interpolant(),
            Value::Binary(b) => b.is_right_interpolant(),
            _ => false,
        }
    }

    pub fn has_interpolant(&self) -> bool {
        self.is_left_interpolant() || self.is_right_interpolant()
    }

    pub fn is_delayed(&self) -> bool {
        match self {
            Value::Number(n) => n.is_delayed(),
            Value::List(l) => l.is_delayed(),
            Value::Schema(s) => s.is_delayed(),
            Value::Binary(b) => b.is_delayed(),
            _ => false,
        }
    }

    /// Number of items when treated as a list. Maps count pairs; any
    /// other value is a single-item list.
    pub fn length(&self) -> usize {
        match self {
            Value::List(l) => l.len(),
            Value::Map(m) => m.len(),
            _ => 1,
        }
    }

    /// Item at `index` when treated as a list.
    pub fn value_at_index(&self, index: usize) -> Option<Value> {
        match self {
            Value::List(l) => l.value_at_index(index).cloned(),
            Value::Map(m) => m.value_at_index(index),
            _ => (index == 0).then(|| self.clone()),
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<&Color> {
        match self {
            Value::Color(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&StringConstant> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Decoded text of a string constant.
    pub fn as_str(&self) -> Option<&str> {
        self.as_string().map(StringConstant::value)
    }

    pub fn as_list(&self) -> Option<&ListValue> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(b.value),
            _ => None,
        }
    }
}

// Mutation (copy-on-write)

impl Value {
    pub fn as_number_mut(&mut self) -> Option<&mut Number> {
        match self {
            Value::Number(n) => Some(Heap::make_mut(n)),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut ListValue> {
        match self {
            Value::List(l) => Some(Heap::make_mut(l)),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut MapValue> {
        match self {
            Value::Map(m) => Some(Heap::make_mut(m)),
            _ => None,
        }
    }

    /// Set the delayed flag. Binary expressions and schemas pass it on to
    /// their children. A node already in the requested state is left
    /// untouched, so shared nodes are not copied needlessly.
    pub fn set_delayed(&mut self, delayed: bool) {
        if self.is_delayed() == delayed {
            return;
        }
        match self {
            Value::Number(n) => Heap::make_mut(n).set_delayed(delayed),
            Value::List(l) => Heap::make_mut(l).set_delayed(delayed),
            Value::Schema(s) => Heap::make_mut(s).set_delayed(delayed),
            Value::Binary(b) => Heap::make_mut(b).set_delayed(delayed),
            _ => {}
        }
    }

    /// Whether [`Value::rtrim`] would change anything.
    pub fn has_trailing_whitespace(&self) -> bool {
        match self {
            Value::String(s) => crate::codec::rtrim(s.value()).len() != s.value().len(),
            Value::Schema(s) => s.has_trailing_whitespace(),
            _ => false,
        }
    }

    /// Strip trailing whitespace from string values.
    ///
    /// Shared nodes are only copied when there is something to strip.
    pub fn rtrim(&mut self) {
        if !self.has_trailing_whitespace() {
            return;
        }
        match self {
            Value::String(s) => Heap::make_mut(s).rtrim(),
            Value::Schema(s) => Heap::make_mut(s).rtrim(),
            _ => {}
        }
    }
}

// Output

impl Value {
    /// CSS text with default options.
    pub fn to_css(&self) -> String {
        self.to_css_with(&SerializeOptions::default())
    }

    pub fn to_css_with(&self, options: &SerializeOptions) -> String {
        Serializer::css(options).value(self)
    }

    /// Debug text: strings are quoted and empty lists print as `()`.
    pub fn inspect(&self) -> String {
        Serializer::inspect(&SerializeOptions::default()).value(self)
    }
}

// Ordering

impl Value {
    /// Lexical order of two strings by their output text.
    ///
    /// `None` unless both sides are strings or string schemas.
    pub fn cmp_text(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::String(a), Value::String(b)) => Some(a.cmp_text(b)),
            (Value::String(_) | Value::Schema(_), Value::String(_) | Value::Schema(_)) => {
                Some(self.to_css().cmp(&other.to_css()))
            }
            _ => None,
        }
    }
}

// Hashing

impl Value {
    /// Structural hash, consistent with `==`.
    ///
    /// Nodes with children cache their hash; leaves hash on the fly.
    pub fn hash_code(&self) -> u64 {
        let inner = match self {
            Value::Number(n) => n.hash_code(),
            Value::Color(c) => c.hash_code(),
            Value::String(s) => s.hash_code(),
            Value::Schema(s) => s.hash_code(),
            Value::List(l) => l.hash_code(),
            Value::Map(m) => m.hash_code(),
            Value::Bool(b) => u64::from(b.value),
            Value::Null(_) | Value::Parent(_) => 0,
            Value::Function(f) => f.hash_code(),
            Value::Call(c) => c.hash_code(),
            Value::Variable(v) => fx_hash(&**v),
            Value::Binary(b) => b.hash_code(),
            Value::CustomError(m) | Value::CustomWarning(m) => fx_hash(&**m),
        };
        let mut h = FxHasher::default();
        self.kind().hash(&mut h);
        inner.hash(&mut h);
        h.finish()
    }
}

fn fx_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut h = FxHasher::default();
    value.hash(&mut h);
    h.finish()
}

/// Combine entry hashes so that the result does not depend on order.
pub(crate) fn combine_unordered<K: Hash, V: Hash>(entries: impl Iterator<Item = (K, V)>) -> u64 {
    entries.fold(0u64, |acc, entry| acc.wrapping_add(fx_hash(&entry)))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Color(a), Value::Color(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Schema(a), Value::Schema(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null(_), Value::Null(_)) | (Value::Parent(_), Value::Parent(_)) => true,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Call(a), Value::Call(b)) => a == b,
            (Value::Variable(a), Value::Variable(b)) => a == b,
            (Value::Binary(a), Value::Binary(b)) => a == b,
            (Value::CustomError(a), Value::CustomError(b))
            | (Value::CustomWarning(a), Value::CustomWarning(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({})", **n),
            Value::Color(c) => {
                let text = Serializer::css(&SerializeOptions::default()).color(c);
                write!(f, "Color({text})")
            }
            Value::String(s) => write!(f, "String({})", s.inspect()),
            Value::Schema(s) => write!(f, "Schema({:?})", s.parts()),
            Value::List(l) => write!(f, "List({}, {:?})", l.separator(), l.items()),
            Value::Map(m) => f.debug_map().entries(m.iter()).finish(),
            Value::Bool(b) => write!(f, "Bool({})", b.value),
            Value::Null(_) => write!(f, "Null"),
            Value::Function(func) => write!(f, "Function({})", func.name()),
            Value::Call(c) => write!(f, "Call({}, {:?})", c.name(), c.arguments()),
            Value::Variable(v) => write!(f, "Variable(${})", v.name()),
            Value::Binary(b) => {
                write!(f, "Binary({:?} {} {:?})", b.left(), b.separator(), b.right())
            }
            Value::CustomError(m) => write!(f, "CustomError({:?})", m.message),
            Value::CustomWarning(m) => write!(f, "CustomWarning({:?})", m.message),
            Value::Parent(_) => write!(f, "Parent"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests;
