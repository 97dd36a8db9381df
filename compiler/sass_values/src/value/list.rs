//! Lists and argument lists.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use sass_ir::Span;

use super::hash_cache::HashCache;
use super::{combine_unordered, Value};

/// Keyword arguments captured by an argument list, in call order.
pub type Keywords = IndexMap<String, Value, FxBuildHasher>;

/// List separator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Separator {
    #[default]
    Space,
    Comma,
}

impl Separator {
    /// Text placed between items on output.
    pub fn as_str(self, compressed: bool) -> &'static str {
        match (self, compressed) {
            (Separator::Space, _) => " ",
            (Separator::Comma, false) => ", ",
            (Separator::Comma, true) => ",",
        }
    }

    /// Name reported by `list-separator()`.
    pub fn name(self) -> &'static str {
        match self {
            Separator::Space => "space",
            Separator::Comma => "comma",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered sequence of values.
///
/// An argument list (`is_arglist`) captures the rest arguments of a
/// variadic call. Positional arguments are the items; keyword arguments
/// are kept separately and take part in equality.
#[derive(Clone, Debug)]
pub struct ListValue {
    items: Vec<Value>,
    separator: Separator,
    bracketed: bool,
    arglist: bool,
    keywords: Keywords,
    expanded: bool,
    delayed: bool,
    span: Span,
    hash: HashCache,
}

impl ListValue {
    pub fn new(span: Span, separator: Separator, items: Vec<Value>) -> Self {
        ListValue {
            items,
            separator,
            bracketed: false,
            arglist: false,
            keywords: Keywords::default(),
            expanded: false,
            delayed: false,
            span,
            hash: HashCache::new(),
        }
    }

    /// Comma-separated argument list with keyword arguments.
    pub fn arglist(span: Span, items: Vec<Value>, keywords: Keywords) -> Self {
        ListValue {
            arglist: true,
            keywords,
            ..ListValue::new(span, Separator::Comma, items)
        }
    }

    #[must_use]
    pub fn with_bracketed(mut self, bracketed: bool) -> Self {
        self.bracketed = bracketed;
        self
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Number of positional items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn is_bracketed(&self) -> bool {
        self.bracketed
    }

    pub fn is_arglist(&self) -> bool {
        self.arglist
    }

    pub fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    /// Whether the items have already been spliced into a call.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_delayed(&self) -> bool {
        self.delayed
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn type_name(&self) -> &'static str {
        if self.arglist {
            "arglist"
        } else {
            "list"
        }
    }

    /// Empty and not bracketed: prints nothing.
    pub fn is_invisible(&self) -> bool {
        self.items.is_empty() && !self.bracketed
    }

    pub fn value_at_index(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn push(&mut self, value: Value) {
        self.items.push(value);
        self.expanded = false;
        self.hash.invalidate();
    }

    pub fn extend(&mut self, values: impl IntoIterator<Item = Value>) {
        self.items.extend(values);
        self.expanded = false;
        self.hash.invalidate();
    }

    pub fn set_separator(&mut self, separator: Separator) {
        self.separator = separator;
        self.hash.invalidate();
    }

    pub fn set_bracketed(&mut self, bracketed: bool) {
        self.bracketed = bracketed;
        self.hash.invalidate();
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Marks the list itself; items keep their own flag.
    pub fn set_delayed(&mut self, delayed: bool) {
        self.delayed = delayed;
    }

    /// Mutable access to the items.
    pub fn items_mut(&mut self) -> &mut Vec<Value> {
        self.expanded = false;
        self.hash.invalidate();
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    pub fn hash_code(&self) -> u64 {
        self.hash.get_or_compute(|h| {
            self.separator.hash(h);
            self.bracketed.hash(h);
            self.arglist.hash(h);
            self.items.len().hash(h);
            for item in &self.items {
                item.hash_code().hash(h);
            }
            if self.arglist {
                combine_unordered(
                    self.keywords
                        .iter()
                        .map(|(name, value)| (name.as_str(), value.hash_code())),
                )
                .hash(h);
            }
        })
    }
}

impl PartialEq for ListValue {
    fn eq(&self, other: &Self) -> bool {
        self.separator == other.separator
            && self.bracketed == other.bracketed
            && self.arglist == other.arglist
            && self.items == other.items
            && (!self.arglist || self.keywords == other.keywords)
    }
}

impl Eq for ListValue {}
