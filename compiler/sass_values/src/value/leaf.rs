//! Terminal values that carry no children.

use std::hash::{Hash, Hasher};

use sass_ir::Span;

/// `true` or `false`.
#[derive(Copy, Clone, Debug)]
pub struct Boolean {
    pub value: bool,
    pub span: Span,
}

impl PartialEq for Boolean {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Boolean {}

impl Hash for Boolean {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// `null`.
#[derive(Copy, Clone, Debug)]
pub struct Null {
    pub span: Span,
}

impl PartialEq for Null {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Eq for Null {}

/// The `&` selector in a value context. Every parent reference is equal.
#[derive(Copy, Clone, Debug)]
pub struct ParentReference {
    pub span: Span,
}

impl PartialEq for ParentReference {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Eq for ParentReference {}

/// Message of a Custom Error or Custom Warning value.
#[derive(Clone, Debug)]
pub struct CustomMessage {
    pub message: String,
    pub span: Span,
}

impl CustomMessage {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        CustomMessage {
            message: message.into(),
            span,
        }
    }
}

impl PartialEq for CustomMessage {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for CustomMessage {}

impl Hash for CustomMessage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message.hash(state);
    }
}
