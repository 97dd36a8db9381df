#![allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]

use super::*;
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct Echo;

impl NativeFunction for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn call(&self, args: &[Value], span: Span) -> Value {
        Value::comma_list(span, args.to_vec())
    }
}

fn num(value: f64) -> Value {
    Value::unitless(Span::DUMMY, value)
}

#[test]
fn inner_scope_shadows_outer() {
    let mut scope = Scope::new();
    scope.define("x", num(1.0));
    scope.push();
    scope.define("x", num(2.0));
    assert_eq!(scope.lookup_variable("x"), Some(num(2.0)));
    scope.pop();
    assert_eq!(scope.lookup_variable("x"), Some(num(1.0)));
}

#[test]
fn global_frame_survives_pop() {
    let mut scope = Scope::default();
    scope.pop();
    scope.pop();
    assert_eq!(scope.depth(), 1);
    scope.define("kept", num(3.0));
    assert_eq!(scope.lookup_variable("kept"), Some(num(3.0)));
}

#[test]
fn define_global_from_nested_scope() {
    let mut scope = Scope::new();
    scope.push();
    scope.define_global("g", num(4.0));
    scope.pop();
    assert_eq!(scope.lookup_variable("g"), Some(num(4.0)));
}

#[test]
fn missing_variable_is_none() {
    assert_eq!(Scope::new().lookup_variable("nope"), None);
}

#[test]
fn registered_function_receives_argument_values() {
    let mut scope = Scope::new();
    scope.define_function(Arc::new(Echo));
    let args = vec![Argument::positional(num(1.0)), Argument::keyword("b", num(2.0))];
    let result = scope.call_function("echo", &args, Span::DUMMY).unwrap().unwrap();
    assert_eq!(result.to_css(), "1, 2");
}

#[test]
fn unknown_function_is_none() {
    assert!(Scope::new().call_function("echo", &[], Span::DUMMY).is_none());
}
