//! String constants and interpolation schemas.

use std::cmp::Ordering;
use std::hash::Hash;

use sass_ir::Span;

use super::hash_cache::HashCache;
use super::Value;
use crate::codec::{self, UnquoteOptions};

/// How [`StringConstant::quoted_with`] treats a raw quoted token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuotedOptions {
    /// Quote mark to print with, overriding the one found in the token.
    /// Only applies when the token actually was quoted.
    pub quote: Option<char>,
    pub keep_utf8_escapes: bool,
    /// Store the token text as is.
    pub skip_unquoting: bool,
    pub strict_unquoting: bool,
}

impl Default for QuotedOptions {
    fn default() -> Self {
        QuotedOptions {
            quote: None,
            keep_utf8_escapes: false,
            skip_unquoting: false,
            strict_unquoting: true,
        }
    }
}

/// A flat string, quoted or not.
///
/// The stored text is always decoded. The quote mark only affects
/// output: `"a"` and `a` are equal.
#[derive(Clone, Debug)]
pub struct StringConstant {
    value: String,
    quote_mark: Option<char>,
    can_compress_whitespace: bool,
    span: Span,
    hash: HashCache,
}

impl StringConstant {
    /// Unquoted string.
    pub fn new(span: Span, value: impl Into<String>) -> Self {
        StringConstant {
            value: value.into(),
            quote_mark: None,
            can_compress_whitespace: false,
            span,
            hash: HashCache::new(),
        }
    }

    /// Decoded text printed with the given quote mark.
    pub fn with_quote(span: Span, value: impl Into<String>, quote_mark: char) -> Self {
        StringConstant {
            quote_mark: Some(quote_mark),
            ..StringConstant::new(span, value)
        }
    }

    /// Build from a raw token that may carry quotes and escapes.
    pub fn quoted(span: Span, raw: &str) -> Self {
        StringConstant::quoted_with(span, raw, QuotedOptions::default())
    }

    pub fn quoted_with(span: Span, raw: &str, options: QuotedOptions) -> Self {
        let (value, mut quote_mark) = if options.skip_unquoting {
            (raw.to_string(), None)
        } else {
            codec::unquote(
                raw,
                UnquoteOptions {
                    keep_utf8_escapes: options.keep_utf8_escapes,
                    strict: options.strict_unquoting,
                },
            )
        };
        if quote_mark.is_some() && options.quote.is_some() {
            quote_mark = options.quote;
        }
        StringConstant {
            quote_mark,
            ..StringConstant::new(span, value)
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn quote_mark(&self) -> Option<char> {
        self.quote_mark
    }

    pub fn is_quoted(&self) -> bool {
        self.quote_mark.is_some()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Whether compressed output may collapse runs of whitespace.
    pub fn can_compress_whitespace(&self) -> bool {
        self.can_compress_whitespace
    }

    pub fn set_can_compress_whitespace(&mut self, can: bool) {
        self.can_compress_whitespace = can;
    }

    pub fn set_quote_mark(&mut self, quote_mark: Option<char>) {
        self.quote_mark = quote_mark;
    }

    /// The empty unquoted string prints nothing.
    pub fn is_invisible(&self) -> bool {
        self.value.is_empty() && self.quote_mark.is_none()
    }

    pub fn rtrim(&mut self) {
        let trimmed = codec::rtrim(&self.value).len();
        if trimmed != self.value.len() {
            self.value.truncate(trimmed);
            self.hash.invalidate();
        }
    }

    /// Always quoted, with the mark that needs the fewest escapes.
    pub fn inspect(&self) -> String {
        codec::quote(&self.value, None)
    }

    /// Output form: quoted only when the string is.
    pub fn to_css(&self) -> String {
        match self.quote_mark {
            Some(mark) => codec::quote(&self.value, Some(mark)),
            None => self.value.clone(),
        }
    }

    /// Lexical order of the output text, quotes included.
    pub fn cmp_text(&self, other: &StringConstant) -> Ordering {
        self.to_css().cmp(&other.to_css())
    }

    pub fn hash_code(&self) -> u64 {
        self.hash.get_or_compute(|h| self.value.hash(h))
    }
}

impl PartialEq for StringConstant {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for StringConstant {}

/// One fragment of a string schema.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SchemaPart {
    /// Literal text between interpolations.
    Text(String),
    /// A `#{...}` sub-expression.
    Interpolation(Value),
}

impl SchemaPart {
    pub fn is_interpolation(&self) -> bool {
        matches!(self, SchemaPart::Interpolation(_))
    }
}

/// A string with interpolated sub-expressions, e.g. `"a#{$b}c"`.
#[derive(Clone, Debug)]
pub struct StringSchema {
    parts: Vec<SchemaPart>,
    quote_mark: Option<char>,
    delayed: bool,
    span: Span,
    hash: HashCache,
}

impl StringSchema {
    pub fn new(span: Span, parts: Vec<SchemaPart>) -> Self {
        StringSchema {
            parts,
            quote_mark: None,
            delayed: false,
            span,
            hash: HashCache::new(),
        }
    }

    #[must_use]
    pub fn with_quote_mark(mut self, quote_mark: char) -> Self {
        self.quote_mark = Some(quote_mark);
        self
    }

    pub fn parts(&self) -> &[SchemaPart] {
        &self.parts
    }

    pub fn quote_mark(&self) -> Option<char> {
        self.quote_mark
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn is_delayed(&self) -> bool {
        self.delayed
    }

    pub fn push(&mut self, part: SchemaPart) {
        self.parts.push(part);
        self.hash.invalidate();
    }

    pub fn has_interpolants(&self) -> bool {
        self.parts.iter().any(SchemaPart::is_interpolation)
    }

    pub fn is_left_interpolant(&self) -> bool {
        self.parts.first().is_some_and(SchemaPart::is_interpolation)
    }

    pub fn is_right_interpolant(&self) -> bool {
        self.parts.last().is_some_and(SchemaPart::is_interpolation)
    }

    /// Marks the schema and every interpolated fragment.
    pub fn set_delayed(&mut self, delayed: bool) {
        self.delayed = delayed;
        for part in &mut self.parts {
            if let SchemaPart::Interpolation(value) = part {
                value.set_delayed(delayed);
            }
        }
    }

    /// Whether the last fragment ends in whitespace.
    pub fn has_trailing_whitespace(&self) -> bool {
        match self.parts.last() {
            Some(SchemaPart::Text(text)) => codec::rtrim(text).len() != text.len(),
            Some(SchemaPart::Interpolation(value)) => value.has_trailing_whitespace(),
            None => false,
        }
    }

    /// Trim trailing whitespace from the last fragment.
    pub fn rtrim(&mut self) {
        if !self.has_trailing_whitespace() {
            return;
        }
        match self.parts.last_mut() {
            Some(SchemaPart::Text(text)) => {
                let trimmed = codec::rtrim(text).len();
                text.truncate(trimmed);
            }
            Some(SchemaPart::Interpolation(value)) => value.rtrim(),
            None => return,
        }
        self.hash.invalidate();
    }

    pub fn hash_code(&self) -> u64 {
        self.hash.get_or_compute(|h| self.parts.hash(h))
    }
}

impl PartialEq for StringSchema {
    fn eq(&self, other: &Self) -> bool {
        self.parts == other.parts
    }
}

impl Eq for StringSchema {}
