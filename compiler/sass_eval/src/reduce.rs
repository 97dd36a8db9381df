//! Bottom-up reduction of pending values.
//!
//! The parser produces values that still need evaluation: variable
//! references, binary expressions, interpolated strings and function
//! calls, possibly nested inside lists and maps. `Reducer` walks such a
//! tree and returns a concrete value.

use sass_ir::{BinaryOp, Span};
use sass_values::{
    custom_error, duplicate_key, undefined_function, undefined_variable, Argument, BinaryExpr,
    Callee, EvalError, EvalResult, FunctionCall, Keywords, ListValue, MapValue, SchemaPart,
    StringSchema, Value,
};

use crate::environment::Environment;
use crate::operators::{interpolated_text, reduce_binary};

/// Reduces pending values against an [`Environment`].
pub struct Reducer<'e, E: Environment + ?Sized> {
    env: &'e E,
}

impl<'e, E: Environment + ?Sized> Reducer<'e, E> {
    pub fn new(env: &'e E) -> Self {
        Reducer { env }
    }

    /// Reduce `value` to a concrete value.
    ///
    /// Concrete values come back as cheap clones of the same node.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = value.type_name()))]
    pub fn reduce(&self, value: &Value) -> EvalResult {
        match value {
            Value::Variable(var) => self
                .env
                .lookup_variable(var.name())
                .ok_or_else(|| undefined_variable(var.name()).with_span(var.span())),
            Value::Binary(expr) => self.reduce_binary(expr),
            Value::Schema(schema) => self.reduce_schema(schema),
            Value::Call(call) => self.reduce_call(call),
            Value::List(list) => self.reduce_list(list),
            Value::Map(map) => self.reduce_map(map),
            Value::CustomError(_) | Value::CustomWarning(_) => settle(value.clone(), value.span()),
            Value::Number(_)
            | Value::Color(_)
            | Value::String(_)
            | Value::Bool(_)
            | Value::Null(_)
            | Value::Function(_)
            | Value::Parent(_) => Ok(value.clone()),
        }
    }

    fn reduce_binary(&self, expr: &BinaryExpr) -> EvalResult {
        let left = self.reduce(expr.left())?;
        // `and`/`or` leave the right operand alone once the left decides.
        match expr.op() {
            BinaryOp::And if left.is_false() => return Ok(left),
            BinaryOp::Or if left.is_truthy() => return Ok(left),
            _ => {}
        }
        let right = self.reduce(expr.right())?;

        // A delayed slash between numbers (`font: 12px/1.5`) is a separator.
        if expr.is_delayed()
            && expr.op() == BinaryOp::Div
            && matches!((&left, &right), (Value::Number(_), Value::Number(_)))
        {
            let mut kept = Value::binary(BinaryExpr::new(expr.span(), expr.operand(), left, right));
            kept.set_delayed(true);
            return Ok(kept);
        }
        reduce_binary(expr, &left, &right)
    }

    fn reduce_schema(&self, schema: &StringSchema) -> EvalResult {
        let mut text = String::new();
        for part in schema.parts() {
            match part {
                SchemaPart::Text(t) => text.push_str(t),
                SchemaPart::Interpolation(value) => {
                    text.push_str(&interpolated_text(&self.reduce(value)?));
                }
            }
        }
        Ok(match schema.quote_mark() {
            Some(mark) => Value::quoted_string(schema.span(), text, mark),
            None => Value::string(schema.span(), text),
        })
    }

    fn reduce_call(&self, call: &FunctionCall) -> EvalResult {
        let span = call.span();
        let arguments = self.reduce_arguments(call.arguments())?;
        let result = match call.callee() {
            Callee::Native(function) => {
                tracing::trace!(function = function.name(), "calling native function");
                let values: Vec<Value> = arguments.iter().map(|arg| arg.value.clone()).collect();
                function.call(&values, span)
            }
            Callee::Resolved(function) if function.is_css() => {
                return Ok(plain_css_call(call.name(), arguments, span));
            }
            Callee::Named | Callee::Resolved(_) => {
                match self.env.call_function(call.name(), &arguments, span) {
                    Some(result) => result.map_err(|err| err.or_span(span))?,
                    None if matches!(call.callee(), Callee::Resolved(_)) => {
                        return Err(undefined_function(call.name()).with_span(span));
                    }
                    None => return Ok(plain_css_call(call.name(), arguments, span)),
                }
            }
        };
        settle(result, span)
    }

    fn reduce_arguments(&self, arguments: &[Argument]) -> Result<Vec<Argument>, EvalError> {
        arguments
            .iter()
            .map(|arg| {
                Ok(Argument {
                    name: arg.name.clone(),
                    value: self.reduce(&arg.value)?,
                    is_rest: arg.is_rest,
                    is_keyword_rest: arg.is_keyword_rest,
                })
            })
            .collect()
    }

    fn reduce_list(&self, list: &ListValue) -> EvalResult {
        let items = list
            .items()
            .iter()
            .map(|item| self.reduce(item))
            .collect::<Result<Vec<_>, _>>()?;
        let reduced = if list.is_arglist() {
            let mut keywords = Keywords::default();
            for (name, value) in list.keywords() {
                keywords.insert(name.clone(), self.reduce(value)?);
            }
            let mut arglist = ListValue::arglist(list.span(), items, keywords);
            arglist.set_separator(list.separator());
            arglist.set_bracketed(list.is_bracketed());
            arglist
        } else {
            ListValue::new(list.span(), list.separator(), items).with_bracketed(list.is_bracketed())
        };
        Ok(Value::list(reduced))
    }

    /// Keys are reduced too, so two distinct expressions can collide.
    fn reduce_map(&self, map: &MapValue) -> EvalResult {
        let mut reduced = MapValue::new(map.span());
        for (key, value) in map.iter() {
            reduced.insert(self.reduce(key)?, self.reduce(value)?);
        }
        if let Some(key) = map.duplicate_key().or(reduced.duplicate_key()) {
            return Err(duplicate_key(key).with_span(map.span()));
        }
        Ok(Value::map(reduced))
    }
}

/// Unresolved function: emitted verbatim as CSS text.
fn plain_css_call(name: &str, arguments: Vec<Argument>, span: Span) -> Value {
    let call = Value::call(FunctionCall::named(span, name, arguments));
    Value::string(span, call.to_css())
}

/// Unwrap the diagnostic carriers a function may return.
fn settle(value: Value, span: Span) -> EvalResult {
    match &value {
        Value::CustomError(m) => Err(custom_error(&m.message).with_span(span)),
        Value::CustomWarning(m) => {
            tracing::warn!(warning = %m.message, "warning from function");
            Ok(Value::null(span))
        }
        _ => Ok(value),
    }
}
