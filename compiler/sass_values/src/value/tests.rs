use super::*;
use pretty_assertions::assert_eq;
use sass_ir::{BinaryOp, Operand};

fn n(value: f64) -> Value {
    Value::unitless(Span::DUMMY, value)
}

// Kinds and type names

#[test]
fn type_names() {
    assert_eq!(n(1.0).type_name(), "number");
    assert_eq!(Value::rgba(Span::DUMMY, 0.0, 0.0, 0.0, 1.0).type_name(), "color");
    assert_eq!(Value::string(Span::DUMMY, "a").type_name(), "string");
    assert_eq!(Value::space_list(Span::DUMMY, vec![]).type_name(), "list");
    assert_eq!(Value::map(MapValue::new(Span::DUMMY)).type_name(), "map");
    assert_eq!(Value::bool(Span::DUMMY, true).type_name(), "bool");
    assert_eq!(Value::null(Span::DUMMY).type_name(), "null");
    assert_eq!(Value::parent(Span::DUMMY).type_name(), "parent");
    let expr = BinaryExpr::new(Span::DUMMY, Operand::new(BinaryOp::Add), n(1.0), n(2.0));
    assert_eq!(Value::binary(expr).type_name(), "plus");
}

#[test]
fn kinds() {
    assert_eq!(n(1.0).kind(), ValueKind::Number);
    assert_eq!(Value::variable(Span::DUMMY, "x").kind(), ValueKind::Variable);
    assert_eq!(Value::custom_warning(Span::DUMMY, "w").kind(), ValueKind::CustomWarning);
}

#[test]
fn pending_values() {
    assert!(Value::variable(Span::DUMMY, "x").is_pending());
    assert!(Value::call(FunctionCall::named(Span::DUMMY, "f", vec![])).is_pending());
    assert!(!n(1.0).is_pending());
}

#[test]
fn span_is_carried() {
    let span = Span::new(4, 8);
    assert_eq!(Value::number(span, 1.0, "px").span(), span);
    assert_eq!(Value::null(span).span(), span);
    assert_eq!(Value::custom_error(span, "e").span(), span);
}

// Truthiness

#[test]
fn false_and_null_are_falsy_but_distinct() {
    let f = Value::bool(Span::DUMMY, false);
    let null = Value::null(Span::DUMMY);
    assert!(f.is_false());
    assert!(null.is_false());
    assert_ne!(f, null);
    assert_ne!(f.hash_code(), null.hash_code());
}

#[test]
fn everything_else_is_truthy() {
    assert!(n(0.0).is_truthy());
    assert!(Value::string(Span::DUMMY, "").is_truthy());
    assert!(Value::space_list(Span::DUMMY, vec![]).is_truthy());
    assert!(Value::bool(Span::DUMMY, true).is_truthy());
}

// Visibility

#[test]
fn invisible_values() {
    assert!(Value::null(Span::DUMMY).is_invisible());
    assert!(Value::string(Span::DUMMY, "").is_invisible());
    assert!(Value::space_list(Span::DUMMY, vec![]).is_invisible());
    let def = Definition::new(Span::DUMMY, "f", vec![]);
    assert!(Value::function(FunctionValue::new(Span::DUMMY, def, false)).is_invisible());
    assert!(!n(0.0).is_invisible());
}

// Equality and hashing

#[test]
fn equality_crosses_representations() {
    let rgb = Value::rgba(Span::DUMMY, 0.0, 255.0, 0.0, 1.0);
    let hsl = Value::hsla(Span::DUMMY, 120.0, 1.0, 0.5, 1.0);
    assert_eq!(rgb, hsl);
    assert_eq!(rgb.hash_code(), hsl.hash_code());

    let inches = Value::number(Span::DUMMY, 1.0, "in");
    let pixels = Value::number(Span::DUMMY, 96.0, "px");
    assert_eq!(inches, pixels);
    assert_eq!(inches.hash_code(), pixels.hash_code());
}

#[test]
fn different_kinds_never_equal() {
    assert_ne!(Value::string(Span::DUMMY, "1"), n(1.0));
    assert_ne!(Value::space_list(Span::DUMMY, vec![n(1.0)]), n(1.0));
}

#[test]
fn diagnostics_compare_by_message() {
    let a = Value::custom_error(Span::DUMMY, "boom");
    let b = Value::custom_error(Span::new(1, 2), "boom");
    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());
    assert_ne!(a, Value::custom_warning(Span::DUMMY, "boom"));
}

#[test]
fn parent_references_are_equal() {
    assert_eq!(Value::parent(Span::DUMMY), Value::parent(Span::new(3, 4)));
}

// List view

#[test]
fn scalar_is_single_item_list() {
    let v = n(7.0);
    assert_eq!(v.length(), 1);
    assert_eq!(v.value_at_index(0), Some(n(7.0)));
    assert_eq!(v.value_at_index(1), None);
}

// Copy-on-write mutation

#[test]
fn set_delayed_copies_shared_node() {
    let original = n(1.0);
    let mut copy = original.clone();
    copy.set_delayed(true);
    assert!(copy.is_delayed());
    assert!(!original.is_delayed());
}

#[test]
fn set_delayed_noop_keeps_sharing() {
    let original = n(1.0);
    let mut copy = original.clone();
    copy.set_delayed(false);
    let (Value::Number(a), Value::Number(b)) = (&original, &copy) else {
        panic!("expected numbers");
    };
    assert!(Heap::ptr_eq(a, b));
}

#[test]
fn as_list_mut_copies_shared_list() {
    let original = Value::comma_list(Span::DUMMY, vec![n(1.0)]);
    let mut copy = original.clone();
    if let Some(list) = copy.as_list_mut() {
        list.push(n(2.0));
    }
    assert_eq!(original.length(), 1);
    assert_eq!(copy.length(), 2);
}

#[test]
fn rtrim_only_touches_strings() {
    let mut s = Value::string(Span::DUMMY, "a  ");
    s.rtrim();
    assert_eq!(s.as_str(), Some("a"));
    let mut num = n(1.0);
    num.rtrim();
    assert_eq!(num, n(1.0));
}

// Accessors

#[test]
fn accessors() {
    assert_eq!(n(2.0).as_number().map(Number::value), Some(2.0));
    assert_eq!(Value::bool(Span::DUMMY, true).as_bool(), Some(true));
    assert_eq!(Value::quoted(Span::DUMMY, "'x'").as_str(), Some("x"));
    assert!(n(2.0).as_list().is_none());
}

// Debug / Display

#[test]
fn debug_output() {
    assert_eq!(format!("{:?}", Value::number(Span::DUMMY, 2.0, "px")), "Number(2px)");
    assert_eq!(format!("{:?}", Value::string(Span::DUMMY, "a")), "String(\"a\")");
    assert_eq!(format!("{:?}", Value::variable(Span::DUMMY, "w")), "Variable($w)");
    assert_eq!(format!("{:?}", Value::null(Span::DUMMY)), "Null");
}

#[test]
fn display_is_css() {
    assert_eq!(Value::number(Span::DUMMY, 10.0, "px").to_string(), "10px");
    assert_eq!(Value::quoted(Span::DUMMY, "'a'").to_string(), "'a'");
    assert_eq!(Value::null(Span::DUMMY).to_string(), "");
}

#[test]
fn values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
}
