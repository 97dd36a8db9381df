use super::*;
use crate::value::{
    Argument, BinaryExpr, ColorHsla, Definition, FunctionCall, FunctionValue, Keywords,
};
use pretty_assertions::assert_eq;
use sass_ir::{BinaryOp, Operand, Span};

fn n(value: f64) -> Value {
    Value::unitless(Span::DUMMY, value)
}

fn s(text: &str) -> Value {
    Value::string(Span::DUMMY, text)
}

fn compressed(value: &Value) -> String {
    value.to_css_with(&SerializeOptions::compressed())
}

// Numbers

#[test]
fn format_number_trims() {
    assert_eq!(format_number(1.5, 10, true), "1.5");
    assert_eq!(format_number(10.0, 10, true), "10");
    assert_eq!(format_number(100.0, 0, true), "100");
    assert_eq!(format_number(1.0 / 3.0, 10, true), "0.3333333333");
    assert_eq!(format_number(1.0 / 3.0, 3, true), "0.333");
}

#[test]
fn format_number_negative_zero() {
    assert_eq!(format_number(-0.0, 10, true), "0");
    assert_eq!(format_number(-1e-12, 10, true), "0");
}

#[test]
fn format_number_leading_zero() {
    assert_eq!(format_number(0.5, 10, false), ".5");
    assert_eq!(format_number(-0.5, 10, false), "-.5");
    assert_eq!(format_number(1.5, 10, false), "1.5");
}

#[test]
fn format_number_non_finite() {
    assert_eq!(format_number(f64::NAN, 10, true), "NaN");
    assert_eq!(format_number(f64::INFINITY, 10, true), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY, 10, true), "-Infinity");
}

#[test]
fn numbers_print_authored_units() {
    assert_eq!(Value::number(Span::DUMMY, 1.0, "in").to_css(), "1in");
    assert_eq!(Value::number(Span::DUMMY, 0.5, "em").to_css(), "0.5em");
    assert_eq!(compressed(&Value::number(Span::DUMMY, 0.5, "em")), ".5em");
}

#[test]
fn precision_option() {
    let options = SerializeOptions::default().with_precision(2);
    assert_eq!(n(1.0 / 3.0).to_css_with(&options), "0.33");
}

// Colors

#[test]
fn colors_print_hex() {
    assert_eq!(Value::rgba(Span::DUMMY, 255.0, 0.0, 0.0, 1.0).to_css(), "#ff0000");
    assert_eq!(compressed(&Value::rgba(Span::DUMMY, 255.0, 0.0, 0.0, 1.0)), "#f00");
    assert_eq!(compressed(&Value::rgba(Span::DUMMY, 255.0, 1.0, 0.0, 1.0)), "#ff0100");
}

#[test]
fn translucent_colors_print_rgba() {
    let c = Value::rgba(Span::DUMMY, 255.0, 0.0, 0.0, 0.5);
    assert_eq!(c.to_css(), "rgba(255, 0, 0, 0.5)");
    assert_eq!(compressed(&c), "rgba(255,0,0,.5)");
}

#[test]
fn display_string_wins() {
    let red = ColorRgba::new(Span::DUMMY, 255.0, 0.0, 0.0, 1.0).with_disp("red");
    let named = Value::color(red);
    assert_eq!(named.to_css(), "red");
    assert_eq!(compressed(&named), "#f00");
}

#[test]
fn hsla_prints_as_rgb() {
    let c = Value::color(ColorHsla::new(Span::DUMMY, 120.0, 1.0, 0.5, 1.0));
    assert_eq!(c.to_css(), "#00ff00");
}

// Strings

#[test]
fn strings_css_vs_inspect() {
    let quoted = Value::quoted(Span::DUMMY, "'abc'");
    assert_eq!(quoted.to_css(), "'abc'");
    assert_eq!(quoted.inspect(), "\"abc\"");
    assert_eq!(s("abc").to_css(), "abc");
}

#[test]
fn compressible_whitespace() {
    let mut constant = StringConstant::new(Span::DUMMY, "a   b\n c");
    constant.set_can_compress_whitespace(true);
    let value = Value::string_constant(constant);
    assert_eq!(compressed(&value), "a b c");
    assert_eq!(value.to_css(), "a   b\n c");
}

#[test]
fn schema_splices_unquoted() {
    let schema = StringSchema::new(
        Span::DUMMY,
        vec![
            SchemaPart::Text("a-".to_string()),
            SchemaPart::Interpolation(Value::quoted(Span::DUMMY, "\"b\"")),
            SchemaPart::Interpolation(n(3.0)),
        ],
    );
    assert_eq!(Value::schema(schema.clone()).to_css(), "a-b3");
    assert_eq!(Value::schema(schema.with_quote_mark('"')).to_css(), "\"a-b3\"");
}

// Lists

#[test]
fn lists_join_with_separator() {
    let comma = Value::comma_list(Span::DUMMY, vec![n(1.0), n(2.0)]);
    assert_eq!(comma.to_css(), "1, 2");
    assert_eq!(compressed(&comma), "1,2");
    assert_eq!(Value::space_list(Span::DUMMY, vec![n(1.0), n(2.0)]).to_css(), "1 2");
}

#[test]
fn empty_lists() {
    let empty = Value::space_list(Span::DUMMY, vec![]);
    assert_eq!(empty.to_css(), "");
    assert_eq!(empty.inspect(), "()");
    let bracketed =
        Value::list(ListValue::new(Span::DUMMY, Separator::Space, vec![]).with_bracketed(true));
    assert_eq!(bracketed.to_css(), "[]");
}

#[test]
fn bracketed_list() {
    let list =
        ListValue::new(Span::DUMMY, Separator::Space, vec![n(1.0), n(2.0)]).with_bracketed(true);
    assert_eq!(Value::list(list).to_css(), "[1 2]");
}

#[test]
fn single_item_comma_list_inspects_with_trailing_comma() {
    let single = Value::comma_list(Span::DUMMY, vec![n(1.0)]);
    assert_eq!(single.inspect(), "(1,)");
    assert_eq!(single.to_css(), "1");
}

#[test]
fn invisible_items_are_skipped_in_css() {
    let list = Value::space_list(Span::DUMMY, vec![n(1.0), Value::null(Span::DUMMY), n(2.0)]);
    assert_eq!(list.to_css(), "1 2");
    assert_eq!(list.inspect(), "1 null 2");
}

#[test]
fn nested_lists_get_parens() {
    let inner_comma = Value::comma_list(Span::DUMMY, vec![n(1.0), n(2.0)]);
    let inner_space = Value::space_list(Span::DUMMY, vec![n(3.0), n(4.0)]);
    let outer = Value::space_list(Span::DUMMY, vec![inner_comma.clone(), n(5.0)]);
    assert_eq!(outer.to_css(), "(1, 2) 5");
    let outer = Value::comma_list(Span::DUMMY, vec![inner_space, n(5.0)]);
    assert_eq!(outer.to_css(), "3 4, 5");
    let outer = Value::comma_list(Span::DUMMY, vec![inner_comma, n(5.0)]);
    assert_eq!(outer.to_css(), "(1, 2), 5");
}

#[test]
fn arglist_prints_positional_items() {
    let args = ListValue::arglist(Span::DUMMY, vec![n(1.0), n(2.0)], Keywords::default());
    assert_eq!(Value::list(args).to_css(), "1, 2");
}

// Maps

#[test]
fn maps_print_pairs() {
    let map = MapValue::from_pairs(Span::DUMMY, [(s("a"), n(1.0)), (s("b"), n(2.0))]);
    let value = Value::map(map);
    assert_eq!(value.to_css(), "(a: 1, b: 2)");
    assert_eq!(value.inspect(), "(\"a\": 1, \"b\": 2)");
    assert_eq!(compressed(&value), "(a:1,b:2)");
    assert_eq!(Value::map(MapValue::new(Span::DUMMY)).inspect(), "()");
}

// Other kinds

#[test]
fn booleans_and_null() {
    assert_eq!(Value::bool(Span::DUMMY, true).to_css(), "true");
    assert_eq!(Value::null(Span::DUMMY).to_css(), "");
    assert_eq!(Value::null(Span::DUMMY).inspect(), "null");
}

#[test]
fn pending_expressions() {
    let call = FunctionCall::named(
        Span::DUMMY,
        "darken",
        vec![
            Argument::positional(Value::variable(Span::DUMMY, "c")),
            Argument::keyword("amount", Value::number(Span::DUMMY, 10.0, "%")),
        ],
    );
    assert_eq!(Value::call(call).to_css(), "darken($c, $amount: 10%)");

    let spaced = BinaryExpr::new(Span::DUMMY, Operand::new(BinaryOp::Div), n(1.0), n(2.0));
    assert_eq!(Value::binary(spaced).to_css(), "1 / 2");
    let tight = BinaryExpr::new(Span::DUMMY, Operand::tight(BinaryOp::Div), n(1.0), n(2.0));
    assert_eq!(Value::binary(tight).to_css(), "1/2");
    assert_eq!(Value::parent(Span::DUMMY).to_css(), "&");
}

#[test]
fn function_reference() {
    let def = Definition::new(Span::DUMMY, "double", vec![]);
    let f = Value::function(FunctionValue::new(Span::DUMMY, def, false));
    assert_eq!(f.inspect(), "get-function(\"double\")");
}
