//! CSS and inspect serialization of values.
//!
//! CSS output is what ends up in a stylesheet: invisible values print
//! nothing, strings keep their authored quoting and colors keep their
//! authored spelling. Inspect output is for `inspect()` and diagnostics:
//! strings are always quoted and empty lists and `null` are spelled out.

use crate::codec;
use crate::value::{
    Argument, Color, ColorRgba, ListValue, MapValue, Number, SchemaPart, Separator,
    StringConstant, StringSchema, Value,
};

/// Output style of the emitter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputStyle {
    #[default]
    Expanded,
    /// Minimal whitespace, short hex colors, no leading zeros.
    Compressed,
}

/// Output configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializeOptions {
    pub style: OutputStyle,
    /// Decimal digits printed for numbers.
    pub precision: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        SerializeOptions {
            style: OutputStyle::Expanded,
            precision: crate::value::fuzzy::PRECISION,
        }
    }
}

impl SerializeOptions {
    pub fn compressed() -> Self {
        SerializeOptions::default().with_style(OutputStyle::Compressed)
    }

    #[must_use]
    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn is_compressed(&self) -> bool {
        self.style == OutputStyle::Compressed
    }
}

/// Format a number with at most `precision` decimals.
///
/// Trailing zeros and a trailing decimal point are dropped, `-0` prints
/// as `0`, and the leading zero of `0.5` is omitted unless `leading_zero`.
pub fn format_number(value: f64, precision: usize, leading_zero: bool) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let mut out = format!("{value:.precision$}");
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    if out == "-0" {
        out = "0".to_string();
    }
    if !leading_zero {
        if let Some(rest) = out.strip_prefix("0.") {
            out = format!(".{rest}");
        } else if let Some(rest) = out.strip_prefix("-0.") {
            out = format!("-.{rest}");
        }
    }
    out
}

/// Walks a value tree and renders it.
pub(crate) struct Serializer<'o> {
    options: &'o SerializeOptions,
    inspect: bool,
}

impl<'o> Serializer<'o> {
    pub(crate) fn css(options: &'o SerializeOptions) -> Self {
        Serializer {
            options,
            inspect: false,
        }
    }

    pub(crate) fn inspect(options: &'o SerializeOptions) -> Self {
        Serializer {
            options,
            inspect: true,
        }
    }

    pub(crate) fn value(&self, value: &Value) -> String {
        let mut out = String::new();
        self.write_value(value, &mut out);
        out
    }

    fn compressed(&self) -> bool {
        self.options.is_compressed()
    }

    fn write_value(&self, value: &Value, out: &mut String) {
        match value {
            Value::Number(n) => out.push_str(&self.number(n)),
            Value::Color(c) => out.push_str(&self.color(c)),
            Value::String(s) => out.push_str(&self.string(s)),
            Value::Schema(s) => out.push_str(&self.schema(s)),
            Value::List(l) => self.write_list(l, out),
            Value::Map(m) => self.write_map(m, out),
            Value::Bool(b) => out.push_str(if b.value { "true" } else { "false" }),
            Value::Null(_) => {
                if self.inspect {
                    out.push_str("null");
                }
            }
            Value::Function(f) => {
                out.push_str("get-function(");
                out.push_str(&codec::quote(f.name(), None));
                out.push(')');
            }
            Value::Call(call) => {
                out.push_str(call.name());
                out.push('(');
                self.write_arguments(call.arguments(), out);
                out.push(')');
            }
            Value::Variable(v) => {
                out.push('$');
                out.push_str(v.name());
            }
            Value::Binary(expr) => {
                self.write_value(expr.left(), out);
                out.push_str(&expr.operand().separator());
                self.write_value(expr.right(), out);
            }
            Value::CustomError(m) | Value::CustomWarning(m) => out.push_str(&m.message),
            Value::Parent(_) => out.push('&'),
        }
    }

    fn number(&self, number: &Number) -> String {
        let leading_zero = number.zero() && !self.compressed();
        let mut out = format_number(number.value(), self.options.precision, leading_zero);
        out.push_str(&number.unit_string());
        out
    }

    pub(crate) fn color(&self, color: &Color) -> String {
        if !color.disp().is_empty() && !self.compressed() {
            return color.disp().to_string();
        }
        self.rgba(color.to_rgba())
    }

    fn rgba(&self, color: &ColorRgba) -> String {
        let [r, g, b] = color.rounded_channels();
        if color.a() >= 1.0 {
            if self.compressed() && color.is_color_doublet() {
                format!("#{:x}{:x}{:x}", r >> 4, g >> 4, b >> 4)
            } else {
                format!("#{r:02x}{g:02x}{b:02x}")
            }
        } else {
            let sep = if self.compressed() { "," } else { ", " };
            let alpha = format_number(color.a(), self.options.precision, !self.compressed());
            format!("rgba({r}{sep}{g}{sep}{b}{sep}{alpha})")
        }
    }

    fn string(&self, string: &StringConstant) -> String {
        if self.inspect {
            return string.inspect();
        }
        let text = string.to_css();
        if self.compressed() && string.can_compress_whitespace() {
            text.split_whitespace().collect::<Vec<_>>().join(" ")
        } else {
            text
        }
    }

    fn schema(&self, schema: &StringSchema) -> String {
        // Interpolated values are spliced in unquoted.
        let splice = Serializer::css(self.options);
        let mut text = String::new();
        for part in schema.parts() {
            match part {
                SchemaPart::Text(t) => text.push_str(t),
                SchemaPart::Interpolation(value) => match value.as_string() {
                    Some(s) => text.push_str(s.value()),
                    None => splice.write_value(value, &mut text),
                },
            }
        }
        match schema.quote_mark() {
            Some(mark) => codec::quote(&text, Some(mark)),
            None => text,
        }
    }

    fn write_list(&self, list: &ListValue, out: &mut String) {
        let (open, close) = if list.is_bracketed() {
            ("[", "]")
        } else {
            ("(", ")")
        };

        if list.is_empty() {
            if self.inspect || list.is_bracketed() {
                out.push_str(open);
                out.push_str(close);
            }
            return;
        }

        let items: Vec<&Value> = list
            .items()
            .iter()
            .filter(|item| self.inspect || !item.is_invisible())
            .collect();
        let single_comma =
            self.inspect && list.separator() == Separator::Comma && items.len() == 1;
        let wrap = list.is_bracketed() || single_comma;

        if wrap {
            out.push_str(open);
        }
        let separator = list.separator().as_str(self.compressed());
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            self.write_list_item(list.separator(), item, out);
        }
        if single_comma {
            out.push(',');
        }
        if wrap {
            out.push_str(close);
        }
    }

    /// Nested lists that would be ambiguous get parentheses.
    fn write_list_item(&self, outer: Separator, item: &Value, out: &mut String) {
        let needs_parens = item.as_list().is_some_and(|inner| {
            !inner.is_bracketed()
                && inner.len() > 1
                && (inner.separator() == Separator::Comma || outer == Separator::Space)
        });
        if needs_parens {
            out.push('(');
            self.write_value(item, out);
            out.push(')');
        } else {
            self.write_value(item, out);
        }
    }

    fn write_map(&self, map: &MapValue, out: &mut String) {
        if map.is_empty() {
            if self.inspect {
                out.push_str("()");
            }
            return;
        }
        let separator = Separator::Comma.as_str(self.compressed());
        let colon = if self.compressed() { ":" } else { ": " };
        out.push('(');
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            self.write_list_item(Separator::Comma, key, out);
            out.push_str(colon);
            self.write_list_item(Separator::Comma, value, out);
        }
        out.push(')');
    }

    fn write_arguments(&self, arguments: &[Argument], out: &mut String) {
        let separator = Separator::Comma.as_str(self.compressed());
        for (i, arg) in arguments.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            if let Some(name) = &arg.name {
                out.push('$');
                out.push_str(name);
                out.push_str(": ");
            }
            self.write_value(&arg.value, out);
            if arg.is_rest || arg.is_keyword_rest {
                out.push_str("...");
            }
        }
    }
}

#[cfg(test)]
mod tests;
