//! Binary operator implementations for the evaluator.
//!
//! Uses direct enum-based dispatch: the operator picks a family
//! (logical, equality, relational, arithmetic) and the operand pair picks
//! a type-specific function.
//!
//! Both operands are already reduced. Pending values (variables, calls,
//! nested expressions) never reach this module.

use sass_ir::{BinaryOp, Operand, Span};
use sass_values::codec::quote;
use sass_values::{
    fuzzy, incompatible_units, invalid_operand, undefined_operation, BinaryExpr, Color, EvalError,
    EvalResult, Number, Value,
};

/// Evaluate `left <op> right`.
///
/// Errors raised without a location of their own get `span`.
#[tracing::instrument(level = "trace", skip_all, fields(op = operand.op.name()))]
pub fn evaluate_binary(left: &Value, right: &Value, operand: Operand, span: Span) -> EvalResult {
    let op = operand.op;
    let result = match op {
        // `and`/`or` return one of their operands, not a boolean.
        BinaryOp::And => Ok(if left.is_false() {
            left.clone()
        } else {
            right.clone()
        }),
        BinaryOp::Or => Ok(if left.is_truthy() {
            left.clone()
        } else {
            right.clone()
        }),
        BinaryOp::Eq => values_equal(left, right).map(|eq| Value::bool(span, eq)),
        BinaryOp::NotEq => values_equal(left, right).map(|eq| Value::bool(span, !eq)),
        BinaryOp::Gt | BinaryOp::GtEq | BinaryOp::Lt | BinaryOp::LtEq => {
            eval_relational(left, right, op, span)
        }
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => {
            eval_arithmetic(left, right, operand, span)
        }
    };
    result.map_err(|err| err.or_span(span))
}

/// Evaluate a binary expression node whose operands were reduced to
/// `left` and `right`.
///
/// When an operand came from `#{}` interpolation the operator is not
/// applied: the operands are joined as text around the operator symbol,
/// keeping the authored whitespace. `and`/`or` are exempt.
pub fn reduce_binary(expr: &BinaryExpr, left: &Value, right: &Value) -> EvalResult {
    if expr.has_interpolant() && !expr.op().is_logical() {
        let text = format!(
            "{}{}{}",
            interpolated_text(left),
            expr.operand().separator(),
            interpolated_text(right)
        );
        return Ok(Value::string(expr.span(), text));
    }
    evaluate_binary(left, right, expr.operand(), expr.span())
}

/// Text a value contributes to an interpolation: strings lose their quotes.
pub(crate) fn interpolated_text(value: &Value) -> String {
    value.as_str().map_or_else(|| value.to_css(), str::to_string)
}

// Equality and ordering

fn values_equal(left: &Value, right: &Value) -> Result<bool, EvalError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.try_eq(b),
        _ => Ok(left == right),
    }
}

fn eval_relational(left: &Value, right: &Value, op: BinaryOp, span: Span) -> EvalResult {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(undefined_operation(left, op, right));
    };
    let ordering = a.try_cmp(b)?;
    let holds = match op {
        BinaryOp::Lt => ordering.is_lt(),
        BinaryOp::LtEq => ordering.is_le(),
        BinaryOp::Gt => ordering.is_gt(),
        BinaryOp::GtEq => ordering.is_ge(),
        _ => unreachable!("relational dispatch only sees comparison operators"),
    };
    Ok(Value::bool(span, holds))
}

// Arithmetic

fn eval_arithmetic(left: &Value, right: &Value, operand: Operand, span: Span) -> EvalResult {
    let op = operand.op;
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => eval_number_binary(a, b, op, span),
        (Value::Color(a), Value::Color(b)) => {
            eval_color_binary(a, b, op, span).ok_or_else(|| undefined_operation(left, op, right))
        }
        (Value::Color(c), Value::Number(n)) => eval_color_number(c, n.value(), op, span)
            .ok_or_else(|| undefined_operation(left, op, right)),
        (Value::Number(n), Value::Color(c)) if matches!(op, BinaryOp::Add | BinaryOp::Mul) => {
            Ok(eval_number_color(n.value(), c, op, span))
        }
        _ => {
            if let Some(offender) = [left, right].into_iter().find(|v| rejects_arithmetic(v)) {
                return Err(invalid_operand(offender.type_name(), op));
            }
            eval_string_binary(left, right, operand, span)
        }
    }
}

/// Values that have no text form to fall back on.
fn rejects_arithmetic(value: &Value) -> bool {
    matches!(value, Value::Map(_) | Value::Null(_) | Value::Function(_))
}

/// Binary operations on numbers.
///
/// `*` and `/` compose the units and cancel what they can. `+`, `-` and
/// `%` convert the right operand into the left operand's units; a
/// unitless operand adopts the other side's units.
fn eval_number_binary(a: &Number, b: &Number, op: BinaryOp, span: Span) -> EvalResult {
    let (lval, rval) = (a.value(), b.value());
    let number = match op {
        BinaryOp::Mul => {
            let mut n = Number::with_units(span, lval * rval, a.units().mul(b.units()));
            n.reduce();
            n
        }
        BinaryOp::Div => {
            let mut n = Number::with_units(span, lval / rval, a.units().div(b.units()));
            n.reduce();
            n
        }
        _ => {
            let (units, rhs) = if b.is_unitless() {
                (a.units().clone(), rval)
            } else if a.is_unitless() {
                (b.units().clone(), rval)
            } else {
                let rhs = b.value_in(a.units()).ok_or_else(|| {
                    incompatible_units(&a.unit_string(), &b.unit_string()).with_span(b.span())
                })?;
                (a.units().clone(), rhs)
            };
            Number::with_units(span, apply(op, lval, rhs), units)
        }
    };
    Ok(Value::from_number(number))
}

/// Channel-wise arithmetic on two colors. `None` when the alphas differ
/// or a divisor channel is zero.
fn eval_color_binary(a: &Color, b: &Color, op: BinaryOp, span: Span) -> Option<Value> {
    let (l, r) = (a.to_rgba(), b.to_rgba());
    if !fuzzy::equals(l.a(), r.a()) {
        return None;
    }
    if divides(op) && [r.r(), r.g(), r.b()].contains(&0.0) {
        return None;
    }
    Some(Value::rgba(
        span,
        apply(op, l.r(), r.r()),
        apply(op, l.g(), r.g()),
        apply(op, l.b(), r.b()),
        l.a(),
    ))
}

/// Apply a number to every channel of a color.
fn eval_color_number(color: &Color, n: f64, op: BinaryOp, span: Span) -> Option<Value> {
    if divides(op) && n == 0.0 {
        return None;
    }
    let c = color.to_rgba();
    Some(Value::rgba(
        span,
        apply(op, c.r(), n),
        apply(op, c.g(), n),
        apply(op, c.b(), n),
        c.a(),
    ))
}

fn eval_number_color(n: f64, color: &Color, op: BinaryOp, span: Span) -> Value {
    let c = color.to_rgba();
    Value::rgba(
        span,
        apply(op, n, c.r()),
        apply(op, n, c.g()),
        apply(op, n, c.b()),
        c.a(),
    )
}

fn divides(op: BinaryOp) -> bool {
    matches!(op, BinaryOp::Div | BinaryOp::Mod)
}

fn apply(op: BinaryOp, a: f64, b: f64) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Mod => modulo(a, b),
        _ => unreachable!("arithmetic dispatch only sees arithmetic operators"),
    }
}

/// Remainder with the sign of the divisor.
fn modulo(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

/// Text operations: at least one operand has no arithmetic meaning.
///
/// `+` concatenates. The result is quoted like the left operand when that
/// is a string, otherwise like the right one. `-` and `/` join the CSS
/// text of both sides around the operator, requoting quoted strings.
fn eval_string_binary(left: &Value, right: &Value, operand: Operand, span: Span) -> EvalResult {
    match operand.op {
        BinaryOp::Add => {
            let text = format!("{}{}", interpolated_text(left), interpolated_text(right));
            let mark = match (left.as_string(), right.as_string()) {
                (Some(s), _) | (None, Some(s)) => s.quote_mark(),
                (None, None) => None,
            };
            Ok(match mark {
                Some(mark) => Value::quoted_string(span, text, mark),
                None => Value::string(span, text),
            })
        }
        BinaryOp::Sub | BinaryOp::Div => {
            let text = format!(
                "{}{}{}",
                requoted_text(left),
                operand.separator(),
                requoted_text(right)
            );
            Ok(Value::string(span, text))
        }
        op => Err(undefined_operation(left, op, right)),
    }
}

fn requoted_text(value: &Value) -> String {
    match value.as_string() {
        Some(s) => match s.quote_mark() {
            Some(mark) => quote(s.value(), Some(mark)),
            None => s.value().to_string(),
        },
        None => value.to_css(),
    }
}
