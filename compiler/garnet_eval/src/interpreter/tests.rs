use super::*;
use crate::errors::EvalErrorKind;
use crate::print_handler::buffer_handler;
use pretty_assertions::assert_eq;

fn interpreter() -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build()
}

fn error_kind(result: EvalResult) -> Option<EvalErrorKind> {
    result.err().map(|err| err.kind)
}

// Construction

#[test]
fn builder_defaults() {
    let interp = Interpreter::new("-");
    assert_eq!(interp.current_file(), "-");
    assert_eq!(interp.call_depth(), 0);
    assert!(interp.load_path().is_empty());
    assert!(matches!(interp.global("PROGRAM_NAME"), Some(Value::Str(s)) if &*s == "-"));
}

#[test]
fn builder_configures_unit_load_path_and_argv() {
    let interp = InterpreterBuilder::new()
        .file("script.rb")
        .load_path(["/a", "/b"])
        .argv(["one", "two"])
        .build();

    assert_eq!(interp.current_file(), "script.rb");
    assert_eq!(interp.load_path(), vec!["/a".to_string(), "/b".to_string()]);
    let argv = interp.must_get("ARGV").map(|v| v.inspect());
    assert_eq!(argv.as_deref(), Some(r#"["one", "two"]"#));
    assert!(matches!(interp.global("0"), Some(Value::Str(s)) if &*s == "script.rb"));
}

#[test]
fn load_path_aliases_share_one_array() {
    let mut interp = InterpreterBuilder::new().load_path(["/lib"]).build();
    let result = interp.run("$:.push('/more'); $LOAD_PATH.length");
    assert!(matches!(result, Ok(Value::Integer(2))));
    assert_eq!(interp.load_path(), vec!["/lib".to_string(), "/more".to_string()]);
    assert!(matches!(
        interp.run(r#"$".equal?($LOADED_FEATURES)"#),
        Ok(Value::True)
    ));
}

// Literals and names

#[test]
fn literals_evaluate_directly() {
    let mut interp = interpreter();
    assert!(matches!(interp.run("42"), Ok(Value::Integer(42))));
    assert!(matches!(interp.run("1.5"), Ok(Value::Float(x)) if x == 1.5));
    assert!(matches!(interp.run("true"), Ok(Value::True)));
    assert!(matches!(interp.run("'hi'"), Ok(Value::Str(s)) if &*s == "hi"));
    assert!(matches!(interp.run(r#""a\tb""#), Ok(Value::Str(s)) if &*s == "a\tb"));
}

#[test]
fn interpolated_strings_are_verbatim() {
    let mut interp = interpreter();
    let result = interp.run(r##""#{x}""##);
    assert!(matches!(result, Ok(Value::Str(s)) if &*s == "#{x}"));
}

#[test]
fn empty_program_is_nil() {
    assert!(matches!(interpreter().run(""), Ok(Value::Nil)));
    assert!(matches!(interpreter().run("\n;\n"), Ok(Value::Nil)));
}

#[test]
fn sequence_yields_last_value() {
    assert!(matches!(interpreter().run("1; 2\n3"), Ok(Value::Integer(3))));
}

#[test]
fn symbols_are_interned() {
    let mut interp = interpreter();
    let (Ok(Value::Symbol(a)), Ok(Value::Symbol(b)), Ok(Value::Symbol(c))) =
        (interp.run(":foo"), interp.run(":foo"), interp.run(":bar"))
    else {
        panic!("expected symbols");
    };
    assert!(Rc::ptr_eq(&a, &b));
    assert!(!Rc::ptr_eq(&a, &c));
    assert!(interp.symbols().contains(&"foo".to_string()));
}

#[test]
fn bare_names_and_globals_are_disjoint() {
    let mut interp = interpreter();
    assert!(interp.run("x = 1; $x = 2").is_ok());
    assert!(matches!(interp.run("x"), Ok(Value::Integer(1))));
    assert!(matches!(interp.run("$x"), Ok(Value::Integer(2))));
    assert!(interp.globals().contains(&"x".to_string()));
}

#[test]
fn undefined_global_is_nil() {
    assert!(matches!(interpreter().run("$nope"), Ok(Value::Nil)));
}

#[test]
fn undefined_name_is_a_name_error() {
    let err = interpreter().run("nope").err();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("NameError: undefined local variable or method `nope' for main:Object".to_string())
    );
}

#[test]
fn nil_and_self_are_fixed_names() {
    let mut interp = interpreter();
    assert!(matches!(interp.run("nil"), Ok(Value::Nil)));
    let main = interp.must_get("main").unwrap_or(Value::Nil);
    assert!(matches!(interp.run("self"), Ok(value) if value.same(&main)));
}

#[test]
fn file_constant_is_current_unit() {
    let mut interp = InterpreterBuilder::new().file("top.rb").build();
    assert!(matches!(interp.run("__FILE__"), Ok(Value::Str(s)) if &*s == "top.rb"));
}

#[test]
fn assignment_yields_assigned_value() {
    let mut interp = interpreter();
    assert!(matches!(interp.run("a = b = 5"), Ok(Value::Integer(5))));
    assert!(matches!(interp.must_get("a"), Some(Value::Integer(5))));
    assert!(matches!(interp.must_get("b"), Some(Value::Integer(5))));
}

#[test]
fn get_reports_undefined() {
    let interp = interpreter();
    assert!(interp.get("Kernel").is_ok());
    let err = interp.get("missing").err();
    assert_eq!(err.map(|e| e.to_string()), Some("'missing' is undefined".to_string()));
}

// Calls

#[test]
fn any_call_on_nil_is_a_no_method_error() {
    let mut interp = interpreter();
    for (source, method) in [
        ("$undefined.to_s", "to_s"),
        ("puts('x').to_s", "to_s"),
        ("nil.inspect", "inspect"),
        ("nil.upcase", "upcase"),
    ] {
        let err = interp.run(source).err();
        assert_eq!(
            err.map(|e| e.to_string()),
            Some(format!("NoMethodError: undefined method `{method}' for nil:NilClass")),
            "{source}"
        );
        assert_eq!(interp.call_depth(), 0);
    }
}

#[test]
fn arguments_are_not_evaluated_for_nil_receivers() {
    let handler = buffer_handler();
    let mut interp = InterpreterBuilder::new().print_handler(handler.clone()).build();
    assert!(interp.run("$missing.push(puts('side effect'))").is_err());
    assert_eq!(handler.get_output(), "");
}

#[test]
fn name_error_uses_the_receivers_string_form() {
    let err = interpreter().run("'abc'.nope").err();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("NameError: undefined local variable or method `nope' for abc:String".to_string())
    );
}

#[test]
fn call_miss_is_a_name_error() {
    let kind = error_kind(interpreter().run("1.upcase"));
    assert!(matches!(kind, Some(EvalErrorKind::Name { name, .. }) if name == "upcase"));
}

#[test]
fn arguments_evaluate_against_the_original_context() {
    let mut interp = interpreter();
    let result = interp.run("x = 'outer'; a = Array.new; a.push(x, self); a.last");
    let main = interp.must_get("main").unwrap_or(Value::Nil);
    assert!(matches!(result, Ok(value) if value.same(&main)));
}

#[test]
fn call_frames_appear_in_backtraces() {
    let err = interpreter().run("raise('Boom')").err();
    let backtrace = err.map(|e| e.backtrace_string()).unwrap_or_default();
    assert_eq!(backtrace, "stack backtrace:\n  0: raise\n  1: main\n");
}

#[test]
fn call_depth_is_balanced() {
    let mut interp = interpreter();
    assert!(interp.run("Array.new.push(1).length").is_ok());
    assert_eq!(interp.call_depth(), 0);
    assert!(interp.run("Array.new.first(1, 2)").is_err());
    assert_eq!(interp.call_depth(), 0);
    assert!(interp.run("raise 'x'").is_err());
    assert_eq!(interp.call_depth(), 0);
}

// Method declarations

#[test]
fn def_installs_private_noop_on_kernel() {
    let handler = buffer_handler();
    let mut interp = InterpreterBuilder::new().print_handler(handler.clone()).build();
    let result = interp.run("def greet(name)\n  puts name\nend");
    assert!(matches!(result, Ok(Value::Method(m)) if m.name == "greet" && m.visibility == Visibility::Private));

    // The body never runs, so nothing is printed and the call yields nil.
    assert!(matches!(interp.run("greet('x')"), Ok(Value::Nil)));
    assert!(matches!(interp.run("greet()"), Ok(Value::Nil)));
    assert_eq!(handler.get_output(), "");
}

#[test]
fn private_method_with_explicit_receiver_fails() {
    let mut interp = interpreter();
    assert!(interp.run("def helper\nend").is_ok());
    let err = interp.run("main.helper").err();
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("NoMethodError: private method `helper' called for main:Object".to_string())
    );
}

// Conditionals

#[test]
fn truthiness_is_decided_by_condition_shape() {
    let mut interp = interpreter();
    assert!(matches!(interp.run("if true then 1 else 2 end"), Ok(Value::Integer(1))));
    assert!(matches!(interp.run("if false then 1 else 2 end"), Ok(Value::Integer(2))));
    assert!(matches!(interp.run("if nil then 1 else 2 end"), Ok(Value::Integer(2))));
    assert!(matches!(interp.run("if 0 then 1 else 2 end"), Ok(Value::Integer(1))));
    // The condition is not evaluated, so an undefined name is not an error.
    assert!(matches!(interp.run("if undefined_thing then 1 end"), Ok(Value::Integer(1))));
    assert!(matches!(interp.run("if false then 1 end"), Ok(Value::Nil)));
}

#[test]
fn elsif_chains_through_else() {
    let mut interp = interpreter();
    let source = "if false\n  1\nelsif nil\n  2\nelsif true\n  3\nelse\n  4\nend";
    assert!(matches!(interp.run(source), Ok(Value::Integer(3))));
}

// Begin / rescue

#[test]
fn rescue_matches_string_form() {
    let mut interp = interpreter();
    let source = "begin\n  raise('Boom')\nrescue Boom\n  :caught\nend";
    assert!(matches!(interp.run(source), Ok(Value::Symbol(s)) if s.name == "caught"));
}

#[test]
fn rescue_matches_builtin_class_names() {
    let mut interp = interpreter();
    let source = "begin\n  undefined_name\nrescue NameError\n  1\nend";
    assert!(matches!(interp.run(source), Ok(Value::Integer(1))));
}

#[test]
fn non_matching_rescue_propagates_original() {
    let mut interp = interpreter();
    let source = "begin\n  raise('Boom')\nrescue Other\n  1\nend";
    assert_eq!(interp.run(source).err().map(|e| e.to_s()), Some("Boom".to_string()));
}

#[test]
fn failing_rescue_body_tries_next_clause() {
    let mut interp = interpreter();
    let source = "begin\n  raise('Boom')\nrescue Boom\n  raise('Boom')\nrescue Boom\n  2\nend";
    assert!(matches!(interp.run(source), Ok(Value::Integer(2))));

    let source = "begin\n  raise('Boom')\nrescue Boom\n  raise('Second')\nend";
    assert_eq!(interp.run(source).err().map(|e| e.to_s()), Some("Second".to_string()));
}

#[test]
fn successful_begin_skips_rescue() {
    let mut interp = interpreter();
    let source = "begin\n  1\nrescue Boom\n  2\nend";
    assert!(matches!(interp.run(source), Ok(Value::Integer(1))));
}

#[test]
fn bare_rescue_matches_standard_error_text() {
    let mut interp = interpreter();
    let source = "begin\n  raise('StandardError')\nrescue\n  :ok\nend";
    assert!(matches!(interp.run(source), Ok(Value::Symbol(s)) if s.name == "ok"));
}

// Parse errors

#[test]
fn parse_errors_carry_unit_name() {
    let mut interp = InterpreterBuilder::new().file("broken.rb").build();
    let kind = error_kind(interp.run("if"));
    assert!(matches!(kind, Some(EvalErrorKind::Parse { file, .. }) if file == "broken.rb"));
    assert_eq!(interp.call_depth(), 0);
}

// Unimplemented constructs

#[test]
#[should_panic(expected = "ClassDecl")]
fn class_declaration_panics() {
    let _ = interpreter().run("class Foo\nend");
}

#[test]
#[should_panic(expected = "Return")]
fn return_panics() {
    let _ = interpreter().run("return 1");
}

// Guards

#[test]
fn frame_guard_pops_on_drop() {
    let mut interp = interpreter();
    {
        let frame = interp.frame("outer");
        assert_eq!(frame.call_depth(), 1);
    }
    assert_eq!(interp.call_depth(), 0);
}

#[test]
fn frame_guard_pops_on_panic() {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    let mut interp = interpreter();
    let result = catch_unwind(AssertUnwindSafe(|| {
        let frame = interp.frame("doomed");
        assert_eq!(frame.call_depth(), 1);
        panic!("test panic");
    }));

    assert!(result.is_err());
    assert_eq!(interp.call_depth(), 0);
}

#[test]
fn unit_guard_restores_file() {
    let mut interp = InterpreterBuilder::new().file("outer.rb").build();
    {
        let unit = interp.enter_unit("inner.rb");
        assert_eq!(unit.current_file(), "inner.rb");
    }
    assert_eq!(interp.current_file(), "outer.rb");
}

#[test]
fn is_truthy_shapes() {
    assert!(is_truthy(&Node::Boolean(true)));
    assert!(!is_truthy(&Node::Boolean(false)));
    assert!(!is_truthy(&Node::bare("nil")));
    assert!(is_truthy(&Node::bare("x")));
    assert!(is_truthy(&Node::ConstantInt(0)));
    assert!(is_truthy(&Node::CallExpression(CallExpression::implicit("nil?", vec![]))));
}
