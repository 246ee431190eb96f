// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end behavior: programs run through `Interpreter::run`.

use std::rc::Rc;

use garnet_eval::{buffer_handler, Interpreter, InterpreterBuilder, SharedPrintHandler, Value};
use pretty_assertions::assert_eq;

fn interpreter() -> (Interpreter, SharedPrintHandler) {
    let handler = buffer_handler();
    let interp = InterpreterBuilder::new()
        .print_handler(handler.clone())
        .build();
    (interp, handler)
}

#[test]
fn symbol_identity() {
    let (mut interp, _) = interpreter();
    let a = interp.symbol("name");
    let b = interp.run(":name").unwrap();
    let c = interp.run("'name'.to_sym").unwrap();
    let other = interp.run(":other").unwrap();

    let (Value::Symbol(a), Value::Symbol(b), Value::Symbol(c), Value::Symbol(other)) =
        (a, b, c, other)
    else {
        panic!("expected symbols");
    };
    assert!(Rc::ptr_eq(&a, &b));
    assert!(Rc::ptr_eq(&a, &c));
    assert!(!Rc::ptr_eq(&a, &other));
}

#[test]
fn scopes_are_disjoint() {
    let (mut interp, handler) = interpreter();
    interp.run("x = 1; $x = 2; puts x, $x").unwrap();
    assert_eq!(handler.get_output(), "1\n2\n");
}

#[test]
fn undefined_names() {
    let (mut interp, _) = interpreter();
    assert!(matches!(interp.run("$undefined"), Ok(Value::Nil)));
    let err = interp.run("undefined").unwrap_err();
    assert_eq!(err.to_s(), "NameError");
}

#[test]
fn call_stack_balances_across_runs() {
    let (mut interp, _) = interpreter();
    let programs = [
        "puts 'ok'",
        "raise 'boom'",
        "Array.new.push(1).first(2)",
        "begin\n  raise 'Boom'\nrescue Boom\n  :fine\nend",
        "nil.upcase",
        "if",
    ];
    for program in programs {
        let _ = interp.run(program);
        assert_eq!(interp.call_depth(), 0, "after {program:?}");
    }
}

#[test]
fn rescue_by_message() {
    let (mut interp, handler) = interpreter();
    let source = "\
begin
  puts 'before'
  raise('Boom')
  puts 'unreachable'
rescue Boom
  puts 'rescued'
  :handled
end";
    let value = interp.run(source).unwrap();
    assert_eq!(value.inspect(), ":handled");
    assert_eq!(handler.get_output(), "before\nrescued\n");

    let err = interp
        .run("begin\n  raise('Boom')\nrescue Other\n  1\nend")
        .unwrap_err();
    assert_eq!(err.to_s(), "Boom");
}

#[test]
fn narrow_truthiness() {
    let (mut interp, handler) = interpreter();
    interp
        .run("if 0\n  puts 'zero is true'\nend\nif nil\n  puts 'never'\nelse\n  puts 'nil is false'\nend")
        .unwrap();
    assert_eq!(handler.get_output(), "zero is true\nnil is false\n");
}

#[test]
fn open_classes_through_kernel() {
    let (mut interp, _) = interpreter();
    interp.run("def shout\nend").unwrap();

    // Visible from every object that inherits Object.
    assert!(matches!(interp.run("shout()"), Ok(Value::Nil)));
    let obj = interp.run("Object.new").unwrap();
    let method = obj.find_method("shout", interp.classes());
    assert!(method.is_some());

    // But private when called with an explicit receiver.
    let err = interp.run("main.shout").unwrap_err();
    assert_eq!(err.to_s(), "NoMethodError");
}

#[test]
fn errors_are_values() {
    let (mut interp, _) = interpreter();
    let err = interp.run("raise 'Boom'").unwrap_err();
    interp.set("err", Value::error(err));

    assert_eq!(interp.run("err.class").unwrap().to_s(), "RuntimeError");
    assert_eq!(interp.run("err.to_s").unwrap().to_s(), "Boom");
    let again = interp.run("raise err").unwrap_err();
    assert_eq!(again.to_s(), "Boom");
}

#[test]
fn backtrace_renders_innermost_first() {
    let (mut interp, _) = interpreter();
    let err = interp.run("raise 'Boom'").unwrap_err();
    assert_eq!(
        err.backtrace_string(),
        "stack backtrace:\n  0: raise\n  1: main\n"
    );
}

#[test]
fn deep_nesting_does_not_overflow() {
    let (mut interp, _) = interpreter();
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert!(matches!(interp.run(&source), Ok(Value::Integer(1))));
}

#[test]
#[should_panic(expected = "ClassDecl")]
fn class_declarations_are_not_evaluated() {
    let (mut interp, _) = interpreter();
    let _ = interp.run("class Widget < Object\nend");
}
